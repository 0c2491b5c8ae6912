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
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnbalancedParenthesis { .. } => "UnbalancedParenthesis",
            ErrorImpl::UnterminatedStatement { .. } => "UnterminatedStatement",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, an identifier or `(`",
                token
            )),
            ErrorImpl::UnbalancedParenthesis { token } => ErrorTip::Suggestion(format!(
                "Expected `)` before `{}`, did you close every parenthesis?",
                token
            )),
            ErrorImpl::UnterminatedStatement { token } => ErrorTip::Suggestion(format!(
                "Expected `;` before `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::TrailingTokens { token } => ErrorTip::Suggestion(format!(
                "Leftover token after the program: `{}`",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl std::fmt::Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unbalanced parenthesis at: {token:?}")]
    UnbalancedParenthesis { token: String },
    #[error("statement not terminated by `;` at: {token:?}")]
    UnterminatedStatement { token: String },
    #[error("trailing tokens after program: {token:?}")]
    TrailingTokens { token: String },
}
