//! The single error kind raised by every parser entry point.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Where within the source text a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPosition {
    /// 0-based character offset of the offending token; reported 1-based.
    Column(usize),
    /// The cursor ran past the last token.
    EndOfExpression,
}

impl fmt::Display for ErrorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPosition::Column(offset) => write!(f, "at column {} in", offset + 1),
            ErrorPosition::EndOfExpression => write!(f, "at the end of the expression"),
        }
    }
}

/// A parse failure, carrying the raw message, the position of the offending
/// token, the full original source text, and the caller's location tag.
///
/// Parsing aborts on the first error; no partial AST is ever returned.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Parser Error: {message} {position} [{input}] in {location}")]
pub struct ParseError {
    pub message: String,
    pub position: ErrorPosition,
    pub input: String,
    pub location: String,
}

impl ParseError {
    pub fn new(message: String, position: ErrorPosition, input: &str, location: &str) -> Self {
        ParseError {
            message,
            position,
            input: input.to_string(),
            location: location.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
