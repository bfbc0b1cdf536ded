/**
 * Unparser
 *
 * Converts an AST back to a string representation.
 * This is used for testing the parser.
 */
use binding_parser::expression_parser::ast::*;

/// Unparses an AST back to a string representation
pub fn unparse(ast: &AST) -> String {
    let mut unparser = Unparser {
        expression: String::new(),
    };
    ast.visit(&mut unparser);
    unparser.expression
}

struct Unparser {
    expression: String,
}

impl Unparser {
    fn visit(&mut self, ast: &AST) {
        ast.visit(self);
    }

    fn visit_args(&mut self, args: &[AST]) {
        let mut is_first = true;
        for arg in args {
            if !is_first {
                self.expression.push_str(", ");
            }
            is_first = false;
            self.visit(arg);
        }
    }

    fn is_implicit_receiver(&self, ast: &AST) -> bool {
        matches!(ast, AST::ImplicitReceiver)
    }
}

impl AstVisitor for Unparser {
    type Result = ();

    fn visit_empty_expr(&mut self) {}

    fn visit_implicit_receiver(&mut self) {
        // renders as nothing
    }

    fn visit_literal_primitive(&mut self, ast: &LiteralPrimitive) {
        match &ast.value {
            LiteralValue::Null => self.expression.push_str("null"),
            LiteralValue::Boolean(value) => self.expression.push_str(&value.to_string()),
            LiteralValue::Number(value) => self.expression.push_str(&value.to_string()),
            LiteralValue::String(value) => {
                self.expression.push('"');
                self.expression.push_str(value);
                self.expression.push('"');
            }
        }
    }

    fn visit_access_member(&mut self, ast: &AccessMember) {
        if self.is_implicit_receiver(&ast.receiver) {
            self.expression.push_str(&ast.name);
        } else {
            self.visit(&ast.receiver);
            self.expression.push('.');
            self.expression.push_str(&ast.name);
        }
    }

    fn visit_safe_access_member(&mut self, ast: &SafeAccessMember) {
        self.visit(&ast.receiver);
        self.expression.push_str("?.");
        self.expression.push_str(&ast.name);
    }

    fn visit_method_call(&mut self, ast: &MethodCall) {
        if !self.is_implicit_receiver(&ast.receiver) {
            self.visit(&ast.receiver);
            self.expression.push('.');
        }
        self.expression.push_str(&ast.name);
        self.expression.push('(');
        self.visit_args(&ast.args);
        self.expression.push(')');
    }

    fn visit_safe_method_call(&mut self, ast: &SafeMethodCall) {
        self.visit(&ast.receiver);
        self.expression.push_str("?.");
        self.expression.push_str(&ast.name);
        self.expression.push('(');
        self.visit_args(&ast.args);
        self.expression.push(')');
    }

    fn visit_function_call(&mut self, ast: &FunctionCall) {
        self.visit(&ast.target);
        self.expression.push('(');
        self.visit_args(&ast.args);
        self.expression.push(')');
    }

    fn visit_keyed_access(&mut self, ast: &KeyedAccess) {
        self.visit(&ast.receiver);
        self.expression.push('[');
        self.visit(&ast.key);
        self.expression.push(']');
    }

    fn visit_binary(&mut self, ast: &Binary) {
        self.visit(&ast.left);
        self.expression.push(' ');
        self.expression.push_str(&ast.operation);
        self.expression.push(' ');
        self.visit(&ast.right);
    }

    fn visit_prefix_not(&mut self, ast: &PrefixNot) {
        self.expression.push('!');
        self.visit(&ast.expression);
    }

    fn visit_conditional(&mut self, ast: &Conditional) {
        self.visit(&ast.condition);
        self.expression.push_str(" ? ");
        self.visit(&ast.true_exp);
        self.expression.push_str(" : ");
        self.visit(&ast.false_exp);
    }

    fn visit_if(&mut self, ast: &If) {
        self.expression.push_str("if (");
        self.visit(&ast.condition);
        self.expression.push_str(") ");
        self.visit(&ast.true_exp);
        if let Some(false_exp) = &ast.false_exp {
            self.expression.push_str(" else ");
            self.visit(false_exp);
        }
    }

    fn visit_chain(&mut self, ast: &Chain) {
        let len = ast.expressions.len();
        for (i, expr) in ast.expressions.iter().enumerate() {
            self.visit(expr);
            if i == len - 1 {
                self.expression.push(';');
            } else {
                self.expression.push_str("; ");
            }
        }
    }

    fn visit_assignment(&mut self, ast: &Assignment) {
        self.visit(&ast.target);
        self.expression.push_str(" = ");
        self.visit(&ast.value);
    }

    fn visit_pipe(&mut self, ast: &BindingPipe) {
        self.expression.push('(');
        self.visit(&ast.exp);
        self.expression.push_str(" | ");
        self.expression.push_str(&ast.name);
        for arg in &ast.args {
            self.expression.push(':');
            self.visit(arg);
        }
        self.expression.push(')');
    }

    fn visit_literal_array(&mut self, ast: &LiteralArray) {
        self.expression.push('[');
        self.visit_args(&ast.expressions);
        self.expression.push(']');
    }

    fn visit_literal_map(&mut self, ast: &LiteralMap) {
        self.expression.push('{');
        let mut is_first = true;
        for (key, value) in ast.keys.iter().zip(ast.values.iter()) {
            if !is_first {
                self.expression.push_str(", ");
            }
            is_first = false;
            self.expression.push_str(key);
            self.expression.push_str(": ");
            self.visit(value);
        }
        self.expression.push('}');
    }

    fn visit_interpolation(&mut self, ast: &Interpolation) {
        for (i, string) in ast.strings.iter().enumerate() {
            self.expression.push_str(string);
            if i < ast.expressions.len() {
                self.expression.push_str("{{ ");
                self.visit(&ast.expressions[i]);
                self.expression.push_str(" }}");
            }
        }
    }
}
