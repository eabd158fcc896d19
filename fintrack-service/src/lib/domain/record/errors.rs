use thiserror::Error;

use crate::user::errors::EmailError;
use crate::user::errors::UserError;

/// Error for RecordKind parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordKindError {
    #[error("Unknown record kind: {0}")]
    Unknown(String),
}

/// Error for monetary amount validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("The value must be greater than zero.")]
    NotPositive,
}

/// Error for record date validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("The date must be provided.")]
    Missing,
}

/// Top-level error for all record operations
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid value: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Invalid date: {0}")]
    MissingDate(#[from] DateError),

    #[error("No fields to update")]
    EmptyUpdate,

    // Gate errors
    #[error("No registered user with email: {0}")]
    OwnerNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for RecordError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DatabaseError(msg) => RecordError::DatabaseError(msg),
            other => RecordError::Unknown(other.to_string()),
        }
    }
}
