use thiserror::Error;

/// Recoverable calculator errors. Every variant renders as `Error` on the
/// display and resets the accumulator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function} is undefined for {input}")]
    DomainError { function: &'static str, input: f64 },

    #[error("not a number: {text:?}")]
    ParseError { text: String },
}

impl CalcError {
    pub fn domain(function: &'static str, input: f64) -> Self {
        CalcError::DomainError { function, input }
    }

    pub fn parse(text: impl Into<String>) -> Self {
        CalcError::ParseError { text: text.into() }
    }
}
