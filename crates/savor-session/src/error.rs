//! # Session Errors
//!
//! What the screen boundary sees. Cancellation is not here: it is reported
//! as [`crate::Outcome::Cancelled`].

use savor_client::ClientError;
use savor_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The menu service call failed.
    #[error(transparent)]
    Remote(#[from] ClientError),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No item has been opened in this session.
    #[error("No item is selected")]
    NoItemSelected,

    /// The favorite status lookup for the open item has not finished.
    #[error("Favorite status is still loading")]
    FavoriteStatusPending,

    /// The operation's task panicked.
    #[error("Session task failed: {0}")]
    TaskFailed(String),
}

impl SessionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::Remote(e) if e.is_not_found())
    }
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_passthrough() {
        let err: SessionError = ClientError::Status {
            endpoint: "GET foods/7".to_string(),
            status: 404,
            body: String::new(),
        }
        .into();
        assert!(err.is_not_found());
        assert!(!SessionError::NoItemSelected.is_not_found());
    }

    #[test]
    fn test_core_error_message() {
        let err: SessionError = CoreError::ItemNotLoaded.into();
        assert_eq!(err.to_string(), "Item details are not loaded yet");
    }
}
