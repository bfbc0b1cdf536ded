/**
 * Expression AST
 *
 * Defines the closed set of AST node types produced by the expression
 * grammar, plus the visitor used for traversals. Nodes are built bottom-up
 * in a single parse pass and never mutated afterwards.
 */
use serde::{Deserialize, Serialize};

use crate::reflection::{GetterFn, MethodFn, SetterFn};

/// Main AST enum containing all node types.
///
/// The set is closed on purpose: every traversal is an exhaustive match, so
/// adding a node kind forces each of them to handle it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AST {
    /// No-op placeholder produced for empty input.
    EmptyExpr,
    /// The implicit base object for unqualified identifiers. Stateless;
    /// any two occurrences are interchangeable.
    ImplicitReceiver,
    LiteralPrimitive(LiteralPrimitive),
    AccessMember(AccessMember),
    SafeAccessMember(SafeAccessMember),
    MethodCall(MethodCall),
    SafeMethodCall(SafeMethodCall),
    FunctionCall(FunctionCall),
    KeyedAccess(KeyedAccess),
    Binary(Binary),
    PrefixNot(PrefixNot),
    Conditional(Conditional),
    If(If),
    Chain(Chain),
    Assignment(Assignment),
    BindingPipe(BindingPipe),
    LiteralArray(LiteralArray),
    LiteralMap(LiteralMap),
    Interpolation(Interpolation),
}

/// Constant value carried by a `LiteralPrimitive` node. Both `null` and
/// `undefined` in source map to `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// Literal constant (null, boolean, number, or string)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralPrimitive {
    pub value: LiteralValue,
}

/// Property read (e.g., `obj.name`), with accessors resolved eagerly at
/// parse time through the reflector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessMember {
    pub receiver: Box<AST>,
    pub name: String,
    #[serde(skip)]
    pub getter: Option<GetterFn>,
    #[serde(skip)]
    pub setter: Option<SetterFn>,
}

/// Safe property read (e.g., `obj?.name`); evaluates to null instead of
/// failing when the receiver is null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeAccessMember {
    pub receiver: Box<AST>,
    pub name: String,
    #[serde(skip)]
    pub getter: Option<GetterFn>,
    #[serde(skip)]
    pub setter: Option<SetterFn>,
}

/// Method call (e.g., `obj.run(a, b)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub receiver: Box<AST>,
    pub name: String,
    #[serde(skip)]
    pub invoker: Option<MethodFn>,
    pub args: Vec<AST>,
}

/// Safe method call (e.g., `obj?.run(a, b)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeMethodCall {
    pub receiver: Box<AST>,
    pub name: String,
    #[serde(skip)]
    pub invoker: Option<MethodFn>,
    pub args: Vec<AST>,
}

/// Call of an expression-valued callee (e.g., `fn()(a)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub target: Box<AST>,
    pub args: Vec<AST>,
}

/// Indexed access (e.g., `a[b]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyedAccess {
    pub receiver: Box<AST>,
    pub key: Box<AST>,
}

/// Binary operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binary {
    pub operation: String,
    pub left: Box<AST>,
    pub right: Box<AST>,
}

/// Logical negation (e.g., `!expr`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixNot {
    pub expression: Box<AST>,
}

/// Ternary conditional (e.g., `cond ? a : b`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: Box<AST>,
    pub true_exp: Box<AST>,
    pub false_exp: Box<AST>,
}

/// Statement-level conditional; only valid in action expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct If {
    pub condition: Box<AST>,
    pub true_exp: Box<AST>,
    pub false_exp: Option<Box<AST>>,
}

/// `;`-separated sequence of expressions; only valid in action expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    pub expressions: Vec<AST>,
}

/// Assignment (e.g., `a.b = c`); the target must be an assignable node
/// kind, which the parser enforces. Only valid in action expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Box<AST>,
    pub value: Box<AST>,
}

/// Named transform applied to an input expression (e.g., `value | pipe:arg`);
/// only valid in binding expressions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingPipe {
    pub exp: Box<AST>,
    pub name: String,
    pub args: Vec<AST>,
}

/// Array literal (e.g., `[1, 2, 3]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralArray {
    pub expressions: Vec<AST>,
}

/// Map literal (e.g., `{a: 1, b: 2}`). Keys and values are parallel
/// sequences preserving declared order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralMap {
    pub keys: Vec<String>,
    pub values: Vec<AST>,
}

/// Alternating literal text and embedded expressions from `{{ }}` syntax;
/// `strings.len() == expressions.len() + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpolation {
    pub strings: Vec<String>,
    pub expressions: Vec<AST>,
}

impl AST {
    /// Only member and keyed access can be the target of an assignment.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            AST::AccessMember(_) | AST::SafeAccessMember(_) | AST::KeyedAccess(_)
        )
    }

    pub fn visit<V: AstVisitor>(&self, visitor: &mut V) -> V::Result {
        match self {
            AST::EmptyExpr => visitor.visit_empty_expr(),
            AST::ImplicitReceiver => visitor.visit_implicit_receiver(),
            AST::LiteralPrimitive(ast) => visitor.visit_literal_primitive(ast),
            AST::AccessMember(ast) => visitor.visit_access_member(ast),
            AST::SafeAccessMember(ast) => visitor.visit_safe_access_member(ast),
            AST::MethodCall(ast) => visitor.visit_method_call(ast),
            AST::SafeMethodCall(ast) => visitor.visit_safe_method_call(ast),
            AST::FunctionCall(ast) => visitor.visit_function_call(ast),
            AST::KeyedAccess(ast) => visitor.visit_keyed_access(ast),
            AST::Binary(ast) => visitor.visit_binary(ast),
            AST::PrefixNot(ast) => visitor.visit_prefix_not(ast),
            AST::Conditional(ast) => visitor.visit_conditional(ast),
            AST::If(ast) => visitor.visit_if(ast),
            AST::Chain(ast) => visitor.visit_chain(ast),
            AST::Assignment(ast) => visitor.visit_assignment(ast),
            AST::BindingPipe(ast) => visitor.visit_pipe(ast),
            AST::LiteralArray(ast) => visitor.visit_literal_array(ast),
            AST::LiteralMap(ast) => visitor.visit_literal_map(ast),
            AST::Interpolation(ast) => visitor.visit_interpolation(ast),
        }
    }
}

/// Visitor over the AST variant set; `AST::visit` dispatches exhaustively.
pub trait AstVisitor {
    type Result;

    fn visit_empty_expr(&mut self) -> Self::Result;
    fn visit_implicit_receiver(&mut self) -> Self::Result;
    fn visit_literal_primitive(&mut self, ast: &LiteralPrimitive) -> Self::Result;
    fn visit_access_member(&mut self, ast: &AccessMember) -> Self::Result;
    fn visit_safe_access_member(&mut self, ast: &SafeAccessMember) -> Self::Result;
    fn visit_method_call(&mut self, ast: &MethodCall) -> Self::Result;
    fn visit_safe_method_call(&mut self, ast: &SafeMethodCall) -> Self::Result;
    fn visit_function_call(&mut self, ast: &FunctionCall) -> Self::Result;
    fn visit_keyed_access(&mut self, ast: &KeyedAccess) -> Self::Result;
    fn visit_binary(&mut self, ast: &Binary) -> Self::Result;
    fn visit_prefix_not(&mut self, ast: &PrefixNot) -> Self::Result;
    fn visit_conditional(&mut self, ast: &Conditional) -> Self::Result;
    fn visit_if(&mut self, ast: &If) -> Self::Result;
    fn visit_chain(&mut self, ast: &Chain) -> Self::Result;
    fn visit_assignment(&mut self, ast: &Assignment) -> Self::Result;
    fn visit_pipe(&mut self, ast: &BindingPipe) -> Self::Result;
    fn visit_literal_array(&mut self, ast: &LiteralArray) -> Self::Result;
    fn visit_literal_map(&mut self, ast: &LiteralMap) -> Self::Result;
    fn visit_interpolation(&mut self, ast: &Interpolation) -> Self::Result;
}

/// A parse result: the root AST node together with the original source text
/// and the caller-supplied location tag used for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ASTWithSource {
    pub ast: AST,
    pub source: String,
    pub location: String,
}

impl ASTWithSource {
    pub fn new(ast: AST, source: &str, location: &str) -> Self {
        ASTWithSource {
            ast,
            source: source.to_string(),
            location: location.to_string(),
        }
    }
}

/// One entry of structural-directive micro-syntax.
///
/// Either a variable declaration (`key_is_var`, with `name` bound to an
/// alias or the implicit-context identifier) or a key/expression binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateBinding {
    pub key: String,
    pub key_is_var: bool,
    pub name: Option<String>,
    pub expression: Option<ASTWithSource>,
}

impl TemplateBinding {
    pub fn new(
        key: String,
        key_is_var: bool,
        name: Option<String>,
        expression: Option<ASTWithSource>,
    ) -> Self {
        TemplateBinding {
            key,
            key_is_var,
            name,
            expression,
        }
    }
}
