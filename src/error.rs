//! Service error taxonomy and its HTTP mapping
//!
//! Client faults (`InvalidFormat`, `InvalidValue`, `OutOfRange`) carry the
//! offending field and what was expected of it; they surface verbatim as 400
//! bodies. Internal faults (`Binding`, `Database`, `Io`) are logged with
//! their detail and surface as generic 500 bodies so no SQL text or driver
//! detail reaches a caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a request and its envelope
#[derive(Debug, Error)]
pub enum Error {
    /// Startup-time configuration fault
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// A filter or path value did not match its required format
    #[error("Invalid value for `{field}`: expected {expected}")]
    InvalidFormat {
        /// Name of the offending query or path parameter
        field: String,
        /// Description of the expected shape
        expected: String,
    },

    /// A filter value was well-formed but outside its whitelist
    #[error("Invalid value for `{field}`: must be one of {allowed}")]
    InvalidValue {
        /// Name of the offending query parameter
        field: String,
        /// The accepted values, comma-separated
        allowed: String,
    },

    /// A pagination parameter was an integer outside its accepted range
    #[error("`{param}` must be {expected}")]
    OutOfRange {
        /// Name of the offending query parameter
        param: String,
        /// Description of the accepted range
        expected: String,
    },

    /// A lookup or filtered list matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Placeholders and bind parameters disagree; an author fault in a
    /// resource's query tables, never a client fault
    #[error("Bind mismatch: {0}")]
    Binding(String),

    /// The dataset failed during count or windowed execution
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Listener or filesystem fault
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidFormat { .. } | Self::InvalidValue { .. } | Self::OutOfRange { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Binding(_) | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::InvalidValue { .. } => "INVALID_VALUE",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Binding(_) => "INTERNAL_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// JSON body attached to every error status
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message shown to the caller
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    /// HTTP status, repeated in the body
    pub status: u16,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            Error::Binding(detail) => {
                tracing::error!(%detail, "bind mismatch");
                "Internal server error".to_string()
            }
            Error::Database(e) => {
                tracing::error!(error = %e, "database fault");
                "Database operation failed".to_string()
            }
            Error::Io(e) => {
                tracing::error!(error = %e, "i/o fault");
                "I/O operation failed".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

// Boxed so the enum stays small; figment's error type is large.
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
