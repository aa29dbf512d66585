//! Request payloads accepted by the JSON endpoints.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::table::TableAccessError;
use crate::domain::types::TypeConstraintError;

pub mod form_options;
pub mod reports;
pub mod tables;
pub mod user_mappings;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {0}, expected YYYY-MM-DD")]
    InvalidDate(&'static str),

    #[error("invalid date range: {0}")]
    InvalidRange(TypeConstraintError),

    #[error("invalid role, expected sdr or closer")]
    InvalidRole,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid option field")]
    InvalidField,

    #[error("invalid option value")]
    InvalidValue,

    #[error("invalid option label")]
    InvalidLabel,

    #[error(transparent)]
    Table(#[from] TableAccessError),
}

/// Treats missing and blank strings alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
