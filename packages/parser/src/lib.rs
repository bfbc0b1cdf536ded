#![deny(clippy::all)]

/**
 * Template Binding Expression Parser
 *
 * Parses the expression micro-language embedded in templates: actions,
 * bindings, interpolated text and structural-directive micro-syntax.
 */
pub mod chars;
pub mod error;
pub mod expression_parser;
pub mod reflection;

// Re-exports
pub use error::{ErrorPosition, ParseError};
pub use expression_parser::{ASTWithSource, Lexer, Parser, TemplateBinding, AST};
pub use reflection::{GetterFn, JsonReflector, MethodFn, Reflector, SetterFn};
