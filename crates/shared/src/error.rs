use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NoSelection,
    NotFound,
    Capacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no item is selected for editing")]
    NoCurrentItem,
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("no item ids left to assign")]
    IdsExhausted,
}

impl TrackerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::Validation,
            Self::NoCurrentItem => ErrorCode::NoSelection,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::IdsExhausted => ErrorCode::Capacity,
        }
    }
}

/// Display form of an error, handed to presentation surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorNotice {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&TrackerError> for ErrorNotice {
    fn from(value: &TrackerError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
