//! Menu service client error types.

/// Errors from menu service calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The menu service returned a non-2xx status.
    #[error("menu service {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Base URL could not be parsed or joined.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Client settings rejected before any request.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Transport failures and 5xx responses may succeed when repeated.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Http { source, .. } => source.is_timeout() || source.is_connect(),
            ClientError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ClientError {
        ClientError::Status {
            endpoint: "GET foods/1".to_string(),
            status: code,
            body: String::new(),
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(status(404).is_not_found());
        assert!(!status(404).is_retryable());
        assert!(status(503).is_retryable());
        assert!(!status(400).is_retryable());
    }

    #[test]
    fn test_config_errors_not_retryable() {
        let err = ClientError::InvalidConfig("timeout must be positive".to_string());
        assert!(!err.is_retryable());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "invalid client configuration: timeout must be positive"
        );
    }
}
