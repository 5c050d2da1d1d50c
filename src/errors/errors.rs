use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => "LexicalError",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedColon { .. } => "ExpectedColon",
            ErrorImpl::ExpectedEndOfExpression { .. } => "ExpectedEndOfExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => ErrorTip::None,
            ErrorImpl::ExpectedExpression { token } => {
                ErrorTip::Suggestion(format!("`{}` cannot begin an expression", token))
            }
            ErrorImpl::ExpectedColon { .. } => ErrorTip::Suggestion(String::from(
                "A conditional needs both branches: `condition ? then : else`",
            )),
            ErrorImpl::ExpectedEndOfExpression { token } => {
                ErrorTip::Suggestion(format!("Trailing input starts at `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("{message}")]
    LexicalError { message: String },
    #[error("expect an expression, found {token:?}")]
    ExpectedExpression { token: String },
    #[error("expect `:` after true condition, found {token:?}")]
    ExpectedColon { token: String },
    #[error("expect end of expression, found {token:?}")]
    ExpectedEndOfExpression { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
