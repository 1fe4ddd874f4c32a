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
            ErrorImpl::UndefinedType { .. } => "UndefinedType",
            ErrorImpl::DuplicateType { .. } => "DuplicateType",
            ErrorImpl::SymbolAlreadyDefined { .. } => "SymbolAlreadyDefined",
            ErrorImpl::MissingEntryPoint => "MissingEntryPoint",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UndefinedType { type_ } => ErrorTip::Suggestion(format!(
                "Type `{}` is not defined, is it declared before this point?",
                type_
            )),
            ErrorImpl::DuplicateType { type_ } => {
                ErrorTip::Suggestion(format!("Type `{}` is already defined", type_))
            }
            ErrorImpl::SymbolAlreadyDefined { symbol } => ErrorTip::Suggestion(format!(
                "`{}` is already defined in this scope",
                symbol
            )),
            ErrorImpl::MissingEntryPoint => ErrorTip::Suggestion(String::from(
                "Global initializers need a `main` function to run in",
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
    #[error("undefined type: {type_:?}")]
    UndefinedType { type_: String },
    #[error("type {type_:?} already defined")]
    DuplicateType { type_: String },
    #[error("symbol {symbol:?} already defined in this scope")]
    SymbolAlreadyDefined { symbol: String },
    #[error("no `main` function to receive global initializers")]
    MissingEntryPoint,
}
