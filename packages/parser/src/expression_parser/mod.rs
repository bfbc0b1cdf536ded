/**
 * Expression Parser Module
 *
 * The expression micro-language used in templates: lexer, recursive descent
 * parser and the AST it produces.
 */
pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::*;
pub use lexer::Lexer;
pub use parser::{is_simple_expression, Parser};
