//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BayanchorError`] via `#[from]`.

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum BayanchorError {
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage failure")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A record violated one of its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("invalid tracking number: {0:?}")]
    InvalidTrackingNumber(String),

    #[error("package weight must be a finite, non-negative number")]
    InvalidWeight,

    #[error("package dimensions must be finite, non-negative numbers with a unit")]
    InvalidDimensions,

    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("`{0}` must be a finite number")]
    InvalidAmount(&'static str),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("tracking number in path ({path}) does not match body ({body})")]
    TrackingNumberMismatch { path: String, body: String },
}

/// A lookup did not find anything.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
