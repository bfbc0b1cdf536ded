/**
 * Expression Parser
 *
 * Recursive descent parser over the lexer's token stream. Entry points on
 * `Parser` select the dialect: actions allow chains, assignments and `if`,
 * bindings allow pipes. All entry points fail with a `ParseError` on the
 * first problem; no partial AST is ever produced.
 */
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chars;
use crate::error::{ErrorPosition, ParseError, Result};
use crate::expression_parser::ast::{
    AccessMember, Assignment, AstVisitor, ASTWithSource, Binary, BindingPipe, Chain, Conditional,
    FunctionCall, If, Interpolation, KeyedAccess, LiteralArray, LiteralMap, LiteralPrimitive,
    LiteralValue, MethodCall, PrefixNot, SafeAccessMember, SafeMethodCall, TemplateBinding, AST,
};
use crate::expression_parser::lexer::{Lexer, Token, EOF};
use crate::reflection::{JsonReflector, Reflector};

static INTERPOLATION_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{(.*?)\}\}").unwrap()
});

/// Template expression parser.
///
/// Owns the lexer and the reflector used to bind member accesses eagerly.
pub struct Parser {
    lexer: Lexer,
    reflector: Arc<dyn Reflector>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser::with_reflector(lexer, Arc::new(JsonReflector))
    }

    pub fn with_reflector(lexer: Lexer, reflector: Arc<dyn Reflector>) -> Self {
        Parser { lexer, reflector }
    }

    /// Parses an event-handler expression. Chains, assignments and `if` are
    /// allowed; pipes are not.
    pub fn parse_action(&self, input: &str, location: &str) -> Result<ASTWithSource> {
        let tokens = self.tokenize(input, input, location)?;
        let ast =
            ParseAst::new(input, location, tokens, self.reflector.as_ref(), true).parse_chain()?;
        Ok(ASTWithSource::new(ast, input, location))
    }

    /// Parses a property-binding expression. Pipes are allowed; chains,
    /// assignments and `if` are not.
    pub fn parse_binding(&self, input: &str, location: &str) -> Result<ASTWithSource> {
        let tokens = self.tokenize(input, input, location)?;
        let ast =
            ParseAst::new(input, location, tokens, self.reflector.as_ref(), false).parse_chain()?;
        Ok(ASTWithSource::new(ast, input, location))
    }

    /// Parses a binding restricted to member access and constants, for host
    /// bindings that must stay trivially analyzable.
    pub fn parse_simple_binding(&self, input: &str, location: &str) -> Result<ASTWithSource> {
        let tokens = self.tokenize(input, input, location)?;
        let ast = ParseAst::new(input, location, tokens, self.reflector.as_ref(), false)
            .parse_simple_binding()?;
        Ok(ASTWithSource::new(ast, input, location))
    }

    /// Parses structural-directive micro-syntax into a flat binding list.
    pub fn parse_template_bindings(
        &self,
        input: &str,
        location: &str,
    ) -> Result<Vec<TemplateBinding>> {
        let tokens = self.tokenize(input, input, location)?;
        ParseAst::new(input, location, tokens, self.reflector.as_ref(), false)
            .parse_template_bindings()
    }

    /// Splits text on `{{...}}` markers and parses each enclosed expression
    /// in the binding dialect. Returns `None` when the text contains no
    /// interpolation at all.
    pub fn parse_interpolation(
        &self,
        input: &str,
        location: &str,
    ) -> Result<Option<ASTWithSource>> {
        let mut strings = Vec::new();
        let mut expressions = Vec::new();
        let mut last = 0;

        for caps in INTERPOLATION_REGEXP.captures_iter(input) {
            let Some(marker) = caps.get(0) else { continue };
            let part = caps.get(1).map_or("", |g| g.as_str());
            strings.push(input[last..marker.start()].to_string());
            let tokens = self.tokenize(part, input, location)?;
            let ast = ParseAst::new(input, location, tokens, self.reflector.as_ref(), false)
                .parse_chain()?;
            expressions.push(ast);
            last = marker.end();
        }

        if expressions.is_empty() {
            return Ok(None);
        }
        strings.push(input[last..].to_string());

        let ast = AST::Interpolation(Interpolation {
            strings,
            expressions,
        });
        Ok(Some(ASTWithSource::new(ast, input, location)))
    }

    /// Wraps a plain string as an already-parsed constant expression.
    pub fn wrap_literal_primitive(&self, input: &str, location: &str) -> ASTWithSource {
        let ast = AST::LiteralPrimitive(LiteralPrimitive {
            value: LiteralValue::String(input.to_string()),
        });
        ASTWithSource::new(ast, input, location)
    }

    // Lexing errors surface before any grammar work, so a malformed token
    // late in the input still wins over an earlier grammar problem.
    fn tokenize(&self, text: &str, input: &str, location: &str) -> Result<Vec<Token>> {
        let tokens = self.lexer.tokenize(text);
        if let Some(token) = tokens.iter().find(|t| t.is_error()) {
            return Err(ParseError::new(
                token.str_value.clone(),
                ErrorPosition::Column(token.index),
                input,
                location,
            ));
        }
        Ok(tokens)
    }
}

/// One parse run over a token stream.
struct ParseAst<'a> {
    input: &'a str,
    location: &'a str,
    tokens: Vec<Token>,
    reflector: &'a dyn Reflector,
    parse_action: bool,
    index: usize,
}

impl<'a> ParseAst<'a> {
    fn new(
        input: &'a str,
        location: &'a str,
        tokens: Vec<Token>,
        reflector: &'a dyn Reflector,
        parse_action: bool,
    ) -> Self {
        ParseAst {
            input,
            location,
            tokens,
            reflector,
            parse_action,
            index: 0,
        }
    }

    fn peek(&self, offset: usize) -> &Token {
        self.tokens.get(self.index + offset).unwrap_or(&EOF)
    }

    fn next(&self) -> &Token {
        self.peek(0)
    }

    /// Character offset of the upcoming token, or the input length once the
    /// token stream is exhausted.
    fn input_index(&self) -> usize {
        match self.tokens.get(self.index) {
            Some(token) => token.index,
            None => self.input.len(),
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn error<T>(&self, message: String) -> Result<T> {
        let position = match self.tokens.get(self.index) {
            Some(token) => ErrorPosition::Column(token.index),
            None => ErrorPosition::EndOfExpression,
        };
        Err(ParseError::new(message, position, self.input, self.location))
    }

    fn token_description(token: &Token) -> String {
        token.to_string().unwrap_or_default()
    }

    fn optional_character(&mut self, code: char) -> bool {
        if self.next().is_character(code) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_character(&mut self, code: char) -> Result<()> {
        if self.optional_character(code) {
            return Ok(());
        }
        self.error(format!("Missing expected {}", code))
    }

    fn optional_operator(&mut self, op: &str) -> bool {
        if self.next().is_operator(op) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_operator(&mut self, operator: &str) -> Result<()> {
        if self.optional_operator(operator) {
            return Ok(());
        }
        self.error(format!("Missing expected operator {}", operator))
    }

    // `var x` and `#x` declare variables interchangeably in micro-syntax.
    fn peek_keyword_var(&self) -> bool {
        self.next().is_keyword_var() || self.next().is_operator("#")
    }

    fn optional_keyword_var(&mut self) -> bool {
        if self.peek_keyword_var() {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_identifier_or_keyword(&mut self) -> Result<String> {
        let n = self.next();
        if !n.is_identifier() && !n.is_keyword() {
            return self.error(format!(
                "Unexpected token {}, expected identifier or keyword",
                Self::token_description(n)
            ));
        }
        let value = Self::token_description(n);
        self.advance();
        Ok(value)
    }

    fn expect_identifier_or_keyword_or_string(&mut self) -> Result<String> {
        let n = self.next();
        if !n.is_identifier() && !n.is_keyword() && !n.is_string() {
            return self.error(format!(
                "Unexpected token {}, expected identifier, keyword, or string",
                Self::token_description(n)
            ));
        }
        let value = Self::token_description(n);
        self.advance();
        Ok(value)
    }

    fn parse_chain(&mut self) -> Result<AST> {
        let mut exprs = Vec::new();
        while self.index < self.tokens.len() {
            let expr = self.parse_pipe()?;
            exprs.push(expr);

            if self.optional_character(chars::SEMICOLON) {
                if !self.parse_action {
                    return self.error("Binding expression cannot contain chained expression".to_string());
                }
                while self.optional_character(chars::SEMICOLON) {
                    // read all semicolons
                }
            } else if self.index < self.tokens.len() {
                return self.error(format!(
                    "Unexpected token '{}'",
                    Self::token_description(self.next())
                ));
            }
        }
        Ok(match exprs.len() {
            0 => AST::EmptyExpr,
            1 => exprs.remove(0),
            _ => AST::Chain(Chain { expressions: exprs }),
        })
    }

    fn parse_simple_binding(&mut self) -> Result<AST> {
        let ast = self.parse_chain()?;
        if !is_simple_expression(&ast) {
            return self.error(
                "Simple binding expression can only contain field access and constants".to_string(),
            );
        }
        Ok(ast)
    }

    fn parse_pipe(&mut self) -> Result<AST> {
        let mut result = self.parse_expression()?;
        if self.optional_operator("|") {
            if self.parse_action {
                return self.error("Cannot have a pipe in an action expression".to_string());
            }

            loop {
                let name = self.expect_identifier_or_keyword()?;
                let mut args = Vec::new();
                while self.optional_character(chars::COLON) {
                    args.push(self.parse_pipe()?);
                }
                result = AST::BindingPipe(BindingPipe {
                    exp: Box::new(result),
                    name,
                    args,
                });
                if !self.optional_operator("|") {
                    break;
                }
            }
        }
        Ok(result)
    }

    fn parse_expression(&mut self) -> Result<AST> {
        let start = self.input_index();
        let mut result = self.parse_conditional()?;

        while self.next().is_operator("=") {
            if !result.is_assignable() {
                let end = self.input_index();
                let expression = &self.input[start..end];
                return self.error(format!("Expression {} is not assignable", expression));
            }

            if !self.parse_action {
                return self.error("Binding expression cannot contain assignments".to_string());
            }

            self.expect_operator("=")?;
            result = AST::Assignment(Assignment {
                target: Box::new(result),
                value: Box::new(self.parse_conditional()?),
            });
        }

        Ok(result)
    }

    fn parse_conditional(&mut self) -> Result<AST> {
        let start = self.input_index();
        let result = self.parse_logical_or()?;

        if self.optional_operator("?") {
            let yes = self.parse_pipe()?;
            if !self.optional_character(chars::COLON) {
                let end = self.input_index();
                let expression = &self.input[start..end];
                return self.error(format!(
                    "Conditional expression {} requires all 3 expressions",
                    expression
                ));
            }
            let no = self.parse_pipe()?;
            Ok(AST::Conditional(Conditional {
                condition: Box::new(result),
                true_exp: Box::new(yes),
                false_exp: Box::new(no),
            }))
        } else {
            Ok(result)
        }
    }

    fn parse_logical_or(&mut self) -> Result<AST> {
        let mut result = self.parse_logical_and()?;
        while self.optional_operator("||") {
            result = binary("||", result, self.parse_logical_and()?);
        }
        Ok(result)
    }

    fn parse_logical_and(&mut self) -> Result<AST> {
        let mut result = self.parse_equality()?;
        while self.optional_operator("&&") {
            result = binary("&&", result, self.parse_equality()?);
        }
        Ok(result)
    }

    fn parse_equality(&mut self) -> Result<AST> {
        let mut result = self.parse_relational()?;
        loop {
            if self.optional_operator("==") {
                result = binary("==", result, self.parse_relational()?);
            } else if self.optional_operator("===") {
                result = binary("===", result, self.parse_relational()?);
            } else if self.optional_operator("!=") {
                result = binary("!=", result, self.parse_relational()?);
            } else if self.optional_operator("!==") {
                result = binary("!==", result, self.parse_relational()?);
            } else {
                return Ok(result);
            }
        }
    }

    fn parse_relational(&mut self) -> Result<AST> {
        let mut result = self.parse_additive()?;
        loop {
            if self.optional_operator("<") {
                result = binary("<", result, self.parse_additive()?);
            } else if self.optional_operator(">") {
                result = binary(">", result, self.parse_additive()?);
            } else if self.optional_operator("<=") {
                result = binary("<=", result, self.parse_additive()?);
            } else if self.optional_operator(">=") {
                result = binary(">=", result, self.parse_additive()?);
            } else {
                return Ok(result);
            }
        }
    }

    fn parse_additive(&mut self) -> Result<AST> {
        let mut result = self.parse_multiplicative()?;
        loop {
            if self.optional_operator("+") {
                result = binary("+", result, self.parse_multiplicative()?);
            } else if self.optional_operator("-") {
                result = binary("-", result, self.parse_multiplicative()?);
            } else {
                return Ok(result);
            }
        }
    }

    fn parse_multiplicative(&mut self) -> Result<AST> {
        let mut result = self.parse_prefix()?;
        loop {
            if self.optional_operator("*") {
                result = binary("*", result, self.parse_prefix()?);
            } else if self.optional_operator("%") {
                result = binary("%", result, self.parse_prefix()?);
            } else if self.optional_operator("/") {
                result = binary("/", result, self.parse_prefix()?);
            } else {
                return Ok(result);
            }
        }
    }

    fn parse_prefix(&mut self) -> Result<AST> {
        if self.optional_operator("+") {
            self.parse_prefix()
        } else if self.optional_operator("-") {
            // Unary minus is subtraction from zero.
            let operand = self.parse_prefix()?;
            Ok(binary(
                "-",
                AST::LiteralPrimitive(LiteralPrimitive {
                    value: LiteralValue::Number(0.0),
                }),
                operand,
            ))
        } else if self.optional_operator("!") {
            let expression = self.parse_prefix()?;
            Ok(AST::PrefixNot(PrefixNot {
                expression: Box::new(expression),
            }))
        } else {
            self.parse_call_chain()
        }
    }

    fn parse_call_chain(&mut self) -> Result<AST> {
        let mut result = self.parse_primary()?;
        loop {
            if self.optional_character(chars::PERIOD) {
                result = self.parse_access_member_or_method_call(result, false)?;
            } else if self.optional_operator("?.") {
                result = self.parse_access_member_or_method_call(result, true)?;
            } else if self.optional_character(chars::LBRACKET) {
                let key = self.parse_pipe()?;
                self.expect_character(chars::RBRACKET)?;
                result = AST::KeyedAccess(KeyedAccess {
                    receiver: Box::new(result),
                    key: Box::new(key),
                });
            } else if self.optional_character(chars::LPAREN) {
                let args = self.parse_call_arguments()?;
                self.expect_character(chars::RPAREN)?;
                result = AST::FunctionCall(FunctionCall {
                    target: Box::new(result),
                    args,
                });
            } else {
                return Ok(result);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<AST> {
        if self.optional_character(chars::LPAREN) {
            let result = self.parse_pipe()?;
            self.expect_character(chars::RPAREN)?;
            Ok(result)
        } else if self.next().is_keyword_null() || self.next().is_keyword_undefined() {
            self.advance();
            Ok(literal(LiteralValue::Null))
        } else if self.next().is_keyword_true() {
            self.advance();
            Ok(literal(LiteralValue::Boolean(true)))
        } else if self.next().is_keyword_false() {
            self.advance();
            Ok(literal(LiteralValue::Boolean(false)))
        } else if self.parse_action && self.next().is_keyword_if() {
            self.advance();
            self.expect_character(chars::LPAREN)?;
            let condition = self.parse_expression()?;
            self.expect_character(chars::RPAREN)?;
            let true_exp = self.parse_expression_or_block()?;
            let false_exp = if self.next().is_keyword_else() {
                self.advance();
                Some(Box::new(self.parse_expression_or_block()?))
            } else {
                None
            };
            Ok(AST::If(If {
                condition: Box::new(condition),
                true_exp: Box::new(true_exp),
                false_exp,
            }))
        } else if self.optional_character(chars::LBRACKET) {
            let expressions = self.parse_expression_list(chars::RBRACKET)?;
            self.expect_character(chars::RBRACKET)?;
            Ok(AST::LiteralArray(LiteralArray { expressions }))
        } else if self.next().is_character(chars::LBRACE) {
            self.parse_literal_map()
        } else if self.next().is_identifier() {
            self.parse_access_member_or_method_call(AST::ImplicitReceiver, false)
        } else if self.next().is_number() {
            let value = self.next().to_number();
            self.advance();
            Ok(literal(LiteralValue::Number(value)))
        } else if self.next().is_string() {
            let value = Self::token_description(self.next());
            self.advance();
            Ok(literal(LiteralValue::String(value)))
        } else if self.index >= self.tokens.len() {
            self.error(format!("Unexpected end of expression: {}", self.input))
        } else {
            self.error(format!(
                "Unexpected token {}",
                Self::token_description(self.next())
            ))
        }
    }

    fn parse_expression_list(&mut self, terminator: char) -> Result<Vec<AST>> {
        let mut result = Vec::new();
        if !self.next().is_character(terminator) {
            loop {
                result.push(self.parse_pipe()?);
                if !self.optional_character(chars::COMMA) {
                    break;
                }
            }
        }
        Ok(result)
    }

    fn parse_literal_map(&mut self) -> Result<AST> {
        let mut keys = Vec::new();
        let mut values = Vec::new();
        self.expect_character(chars::LBRACE)?;
        if !self.optional_character(chars::RBRACE) {
            loop {
                keys.push(self.expect_identifier_or_keyword_or_string()?);
                self.expect_character(chars::COLON)?;
                values.push(self.parse_pipe()?);
                if !self.optional_character(chars::COMMA) {
                    break;
                }
            }
            self.expect_character(chars::RBRACE)?;
        }
        Ok(AST::LiteralMap(LiteralMap { keys, values }))
    }

    fn parse_access_member_or_method_call(&mut self, receiver: AST, is_safe: bool) -> Result<AST> {
        let id = self.expect_identifier_or_keyword()?;

        if self.optional_character(chars::LPAREN) {
            let args = self.parse_call_arguments()?;
            self.expect_character(chars::RPAREN)?;
            let invoker = self.reflector.method(&id);
            let receiver = Box::new(receiver);
            return Ok(if is_safe {
                AST::SafeMethodCall(SafeMethodCall {
                    receiver,
                    name: id,
                    invoker,
                    args,
                })
            } else {
                AST::MethodCall(MethodCall {
                    receiver,
                    name: id,
                    invoker,
                    args,
                })
            });
        }

        let getter = self.reflector.getter(&id);
        let setter = self.reflector.setter(&id);
        let receiver = Box::new(receiver);
        Ok(if is_safe {
            AST::SafeAccessMember(SafeAccessMember {
                receiver,
                name: id,
                getter,
                setter,
            })
        } else {
            AST::AccessMember(AccessMember {
                receiver,
                name: id,
                getter,
                setter,
            })
        })
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<AST>> {
        if self.next().is_character(chars::RPAREN) {
            return Ok(Vec::new());
        }
        let mut positionals = Vec::new();
        loop {
            positionals.push(self.parse_pipe()?);
            if !self.optional_character(chars::COMMA) {
                break;
            }
        }
        Ok(positionals)
    }

    fn parse_expression_or_block(&mut self) -> Result<AST> {
        if self.optional_character(chars::LBRACE) {
            let block = self.parse_block_content()?;
            self.expect_character(chars::RBRACE)?;
            return Ok(block);
        }

        self.parse_expression()
    }

    fn parse_block_content(&mut self) -> Result<AST> {
        let mut exprs = Vec::new();
        while self.index < self.tokens.len() && !self.next().is_character(chars::RBRACE) {
            let expr = self.parse_expression()?;
            exprs.push(expr);

            while self.optional_character(chars::SEMICOLON) {
                // read all semicolons
            }
        }
        Ok(match exprs.len() {
            0 => AST::EmptyExpr,
            1 => exprs.remove(0),
            _ => AST::Chain(Chain { expressions: exprs }),
        })
    }

    /// An identifier, keyword or string, optionally continued with `-` into
    /// a dash-joined key (e.g. `ng-for`).
    fn expect_template_binding_key(&mut self) -> Result<String> {
        let mut result = String::new();
        loop {
            result.push_str(&self.expect_identifier_or_keyword_or_string()?);
            if !self.optional_operator("-") {
                break;
            }
            result.push('-');
        }
        Ok(result)
    }

    fn parse_template_bindings(&mut self) -> Result<Vec<TemplateBinding>> {
        let mut bindings = Vec::new();
        let mut prefix: Option<String> = None;
        while self.index < self.tokens.len() {
            let key_is_var = self.optional_keyword_var();
            let mut key = self.expect_template_binding_key()?;
            if !key_is_var {
                match &prefix {
                    None => prefix = Some(key.clone()),
                    Some(p) => key = format!("{}-{}", p, key),
                }
            }
            self.optional_character(chars::COLON);
            let mut name = None;
            let mut expression = None;
            if key_is_var {
                name = Some(if self.optional_operator("=") {
                    self.expect_template_binding_key()?
                } else {
                    "$implicit".to_string()
                });
            } else if self.index < self.tokens.len() && !self.peek_keyword_var() {
                let start = self.input_index();
                let ast = self.parse_pipe()?;
                let source = &self.input[start..self.input_index()];
                expression = Some(ASTWithSource::new(ast, source, self.location));
            }
            // A bare key directly followed by a variable declaration only
            // establishes the prefix; it is not itself a binding.
            if key_is_var || expression.is_some() || !self.peek_keyword_var() {
                bindings.push(TemplateBinding::new(key, key_is_var, name, expression));
            }
            if !self.optional_character(chars::SEMICOLON) {
                self.optional_character(chars::COMMA);
            }
        }
        Ok(bindings)
    }
}

fn literal(value: LiteralValue) -> AST {
    AST::LiteralPrimitive(LiteralPrimitive { value })
}

fn binary(operation: &str, left: AST, right: AST) -> AST {
    AST::Binary(Binary {
        operation: operation.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// True when the expression contains only member access and constants.
/// Receivers of member reads are not inspected.
pub fn is_simple_expression(ast: &AST) -> bool {
    let mut checker = SimpleExpressionChecker { simple: true };
    ast.visit(&mut checker);
    checker.simple
}

struct SimpleExpressionChecker {
    simple: bool,
}

impl SimpleExpressionChecker {
    fn visit_all(&mut self, asts: &[AST]) {
        for ast in asts {
            ast.visit(self);
        }
    }
}

impl AstVisitor for SimpleExpressionChecker {
    type Result = ();

    fn visit_empty_expr(&mut self) {}

    fn visit_implicit_receiver(&mut self) {}

    fn visit_literal_primitive(&mut self, _ast: &LiteralPrimitive) {}

    fn visit_access_member(&mut self, _ast: &AccessMember) {}

    fn visit_safe_access_member(&mut self, _ast: &SafeAccessMember) {
        self.simple = false;
    }

    fn visit_method_call(&mut self, _ast: &MethodCall) {
        self.simple = false;
    }

    fn visit_safe_method_call(&mut self, _ast: &SafeMethodCall) {
        self.simple = false;
    }

    fn visit_function_call(&mut self, _ast: &FunctionCall) {
        self.simple = false;
    }

    fn visit_keyed_access(&mut self, _ast: &KeyedAccess) {
        self.simple = false;
    }

    fn visit_binary(&mut self, _ast: &Binary) {
        self.simple = false;
    }

    fn visit_prefix_not(&mut self, _ast: &PrefixNot) {
        self.simple = false;
    }

    fn visit_conditional(&mut self, _ast: &Conditional) {
        self.simple = false;
    }

    fn visit_if(&mut self, _ast: &If) {
        self.simple = false;
    }

    fn visit_chain(&mut self, _ast: &Chain) {
        self.simple = false;
    }

    fn visit_assignment(&mut self, _ast: &Assignment) {
        self.simple = false;
    }

    fn visit_pipe(&mut self, _ast: &BindingPipe) {
        self.simple = false;
    }

    fn visit_literal_array(&mut self, ast: &LiteralArray) {
        self.visit_all(&ast.expressions);
    }

    fn visit_literal_map(&mut self, ast: &LiteralMap) {
        self.visit_all(&ast.values);
    }

    fn visit_interpolation(&mut self, _ast: &Interpolation) {
        self.simple = false;
    }
}
