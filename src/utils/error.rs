//! Error handling.

use thiserror::Error;

/// Every failure the application can surface.
///
/// The error is `Clone` because a single settled fetch is handed to every
/// caller that joined it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request failed after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: Box<Error> },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Task error: {0}")]
    Task(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Http {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_reports_the_last_attempt() {
        let err = Error::RetriesExhausted {
            attempts: 4,
            last: Box::new(Error::Http {
                status: 503,
                message: "unavailable".into(),
            }),
        };

        assert_eq!(
            err.to_string(),
            "Request failed after 4 attempts: HTTP error 503: unavailable"
        );
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
