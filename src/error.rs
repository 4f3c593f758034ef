//! Error types and handling for the `DengueWatch` service

use thiserror::Error;

/// Main error type for the `DengueWatch` application
#[derive(Error, Debug)]
pub enum DengueWatchError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Web server errors
    #[error("Server error: {message}")]
    Server { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DengueWatchError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DengueWatchError::Config { .. } => {
                "Configuration error. Please check your config file and weather API key.".to_string()
            }
            DengueWatchError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            DengueWatchError::Server { .. } => {
                "The dashboard service failed to start. Please check the server port.".to_string()
            }
            DengueWatchError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

/// Single failure value of the advisory engine.
///
/// Network errors, non-success HTTP statuses, and malformed payloads all
/// collapse into this one kind; callers never see partial data alongside it,
/// only a message describing what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("weather data unavailable: {message}")]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(source: reqwest::Error) -> Self {
        Self::new(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = DengueWatchError::config("missing API key");
        assert!(matches!(config_err, DengueWatchError::Config { .. }));

        let validation_err = DengueWatchError::validation("empty location");
        assert!(matches!(validation_err, DengueWatchError::Validation { .. }));

        let server_err = DengueWatchError::server("port in use");
        assert!(matches!(server_err, DengueWatchError::Server { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = DengueWatchError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = DengueWatchError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let watch_err: DengueWatchError = io_err.into();
        assert!(matches!(watch_err, DengueWatchError::Io { .. }));
    }

    #[test]
    fn test_fetch_failure_is_opaque() {
        let timeout = FetchFailure::new("connection timed out");
        let status = FetchFailure::new("provider returned 503 Service Unavailable");
        // Same type for every failure mode, only the message differs
        assert_ne!(timeout, status);
        assert!(timeout.to_string().contains("weather data unavailable"));
    }
}
