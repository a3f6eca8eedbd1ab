//! Error types for the playlist compiler.

use std::fmt;

/// A fatal error that stops compilation before a result is produced.
///
/// Semantic rule violations are not fatal; they are collected as
/// [`SemanticError`]s instead.
#[derive(Debug, Clone)]
pub struct CompileError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    /// A token the grammar guaranteed to be well-formed failed coercion.
    InternalError,
}

impl CompileError {
    pub fn lex(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            kind: ErrorKind::LexError,
        }
    }

    pub fn parse(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            kind: ErrorKind::ParseError,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: 0,
            col: 0,
            kind: ErrorKind::InternalError,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {:?}: {}",
            self.line, self.col, self.kind, self.message
        )
    }
}

impl std::error::Error for CompileError {}

/// A recorded semantic rule violation.
///
/// Accumulated by the transformer rather than thrown; any non-empty
/// list of these forces the compilation result to `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub message: String,
}

impl SemanticError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SemanticError {}
