//! # App Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command handler                                                        │
//! │  Result<(), AppError>                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Menu service error? ── ClientError::Status(404) ──► NOT_FOUND          │
//! │         │               ClientError::Http / 5xx ──► NETWORK_ERROR       │
//! │         ▼                                                               │
//! │  Bad input? ─────────── ValidationError ──────────► VALIDATION_ERROR    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rule broken? ───────── ItemNotLoaded ────────────► BUSINESS_LOGIC      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  main prints "error [CODE]: message" and exits non-zero                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cancellation never reaches this type.

use serde::Serialize;
use std::fmt;

use savor_client::ClientError;
use savor_core::{CoreError, ValidationError};
use savor_session::SessionError;

use crate::config::ConfigError;

/// Error shown to the user when a command fails.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item or record not found (404)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Menu service unreachable or failing
    NetworkError,

    /// Operation not allowed in the current state
    BusinessLogic,

    /// Unexpected failure
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts menu service errors to app errors.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::Status { status: 404, .. } => {
                AppError::not_found("The requested item was not found")
            }
            ClientError::Http { .. } | ClientError::Status { .. } => {
                tracing::warn!(error = %err, "menu service failure");
                AppError::new(ErrorCode::NetworkError, err.to_string())
            }
            ClientError::Decode { .. } => {
                tracing::error!(error = %err, "unexpected menu service response");
                AppError::new(
                    ErrorCode::NetworkError,
                    "The menu service sent an unexpected response",
                )
            }
            ClientError::InvalidBaseUrl { .. } | ClientError::InvalidConfig(_) => {
                AppError::validation(err.to_string())
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotLoaded => AppError::new(
                ErrorCode::BusinessLogic,
                "The item details are still loading",
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Remote(e) => e.into(),
            SessionError::Core(e) => e.into(),
            SessionError::NoItemSelected => {
                AppError::new(ErrorCode::BusinessLogic, "No item is selected")
            }
            SessionError::FavoriteStatusPending => AppError::new(
                ErrorCode::BusinessLogic,
                "The favorite status is still loading",
            ),
            SessionError::TaskFailed(e) => {
                tracing::error!("session task failed: {}", e);
                AppError::internal("An internal error occurred")
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for command handlers.
pub type AppResult<T> = Result<T, AppError>;
