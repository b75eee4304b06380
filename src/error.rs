use crate::domain::record::Status;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TradeFinanceError {
    #[error("Incorrect number of arguments for '{action}'. Expecting {expected}, {usage}")]
    ArgumentCount {
        action: String,
        expected: String,
        usage: &'static str,
    },
    #[error(
        "Unknown action '{0}', check the first argument, must be one of 'delete', 'query', 'inspect', 'ship', 'present', 'arrival' or 'payment'"
    )]
    UnknownAction(String),
    #[error("Unknown function call '{0}', must be one of 'init' or 'invoke'")]
    UnknownFunction(String),
    #[error("Failed retrieving transaction on reference number {0}")]
    NotFound(String),
    #[error(
        "Error status of transaction {reference}: '{action}' requires status '{expected}', current status is '{actual}'"
    )]
    InvalidStateTransition {
        reference: String,
        action: &'static str,
        expected: Status,
        actual: Status,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Structured classification of a [`TradeFinanceError`], so callers never have
/// to match on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ArgumentCount,
    UnknownAction,
    UnknownFunction,
    NotFound,
    InvalidStateTransition,
    Serialization,
    Storage,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ArgumentCount => "argument_count",
            ErrorKind::UnknownAction => "unknown_action",
            ErrorKind::UnknownFunction => "unknown_function",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidStateTransition => "invalid_state_transition",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TradeFinanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TradeFinanceError::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            TradeFinanceError::UnknownAction(_) => ErrorKind::UnknownAction,
            TradeFinanceError::UnknownFunction(_) => ErrorKind::UnknownFunction,
            TradeFinanceError::NotFound(_) => ErrorKind::NotFound,
            TradeFinanceError::InvalidStateTransition { .. } => ErrorKind::InvalidStateTransition,
            TradeFinanceError::Serialization(_) => ErrorKind::Serialization,
            TradeFinanceError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Wraps any backend failure as a storage error.
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TradeFinanceError::Storage(std::io::Error::other(err))
    }
}

pub type Result<T> = std::result::Result<T, TradeFinanceError>;
