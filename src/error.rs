use miette::Diagnostic;
use thiserror::Error;

pub type TypeResult<T> = Result<T, TypeError>;

// The complete formatted diagnostic is the message; callers distinguish
// failures by text, not by variant.
#[derive(Clone, Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(typebound::mismatch))]
pub struct TypeError {
    message: String,
}

impl TypeError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
