use std::io;

use thiserror::Error;

use crate::frontend::Source;

/// A token that matches no production. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error while processing {token}")]
pub struct SyntaxError {
    /// Token type name, e.g. `PLUS` or `EOF`.
    pub token: &'static str,
    /// Byte offset of the offending token in the source text.
    pub offset: usize,
    /// Source text of the offending token (empty at end of input).
    pub slice: String,
}

impl SyntaxError {
    pub fn render(&self, source: &Source) -> String {
        source.render(self.offset, &self.to_string())
    }
}

/// Faults raised while executing a parsed program. All of them end the run
/// of the current file.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} is not defined")]
    UndefinedVariable(String),

    #[error("integer division by zero")]
    DivisionByZero,

    #[error("integer modulo by zero")]
    ModuloByZero,

    #[error("negative shift count {0}")]
    NegativeShift(i64),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum Bx0Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Bx0Error {
    /// User-facing report: syntax errors carry a source excerpt, runtime
    /// errors are a single line.
    pub fn render(&self, source: &Source) -> String {
        match self {
            Bx0Error::Syntax(err) => err.render(source),
            Bx0Error::Runtime(err) => format!("Error: {}", err),
        }
    }
}
