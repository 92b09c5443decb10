//! Menu service client configuration.
//!
//! The shell builds this from its layered settings; tests point it at a
//! local mock server.

use std::time::Duration;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default menu service address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333/";

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the menu service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; relative endpoint paths are joined onto it.
    pub base_url: Url,
    /// Transport timeout for a single request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parses and validates a base URL.
    ///
    /// Only `http` and `https` are accepted. A trailing slash is added when
    /// missing so that `foods/1` joins under the base path instead of
    /// replacing its last segment.
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        if timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url: url,
            timeout,
        })
    }

    /// Resolves an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_added() {
        let config = ClientConfig::new("https://menu.example.com/api", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            config.endpoint("foods/1").unwrap().as_str(),
            "https://menu.example.com/api/foods/1"
        );
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = ClientConfig::new("ftp://menu.example.com/", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
        assert!(ClientConfig::new("not a url", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ClientConfig::new(DEFAULT_BASE_URL, Duration::ZERO).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }
}
