//! The fetch error taxonomy.

use thiserror::Error;

use crate::traits::HttpError;

/// Fixed, user-facing message shown when the ticker listing cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data, please try again later.";

/// Result alias for data source operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Any failure between issuing the listing request and obtaining parsed records.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request never produced a response (connect, timeout, I/O)
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into a ticker listing
    #[error("malformed ticker listing: {0}")]
    Decode(String),

    /// Any other failure reported by a data source
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Short code used in log records.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "E_FETCH_TRANSPORT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode(_) => "E_FETCH_DECODE",
            FetchError::Other(_) => "E_FETCH_OTHER",
        }
    }

    /// The message a user is allowed to see. Identical for every cause.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_constant_for_every_cause() {
        let errors = vec![
            FetchError::Transport(HttpError::Timeout("30s".to_string())),
            FetchError::Status {
                status: 503,
                body: "upstream down".to_string(),
            },
            FetchError::Decode("expected value".to_string()),
            FetchError::Other("boom".to_string()),
        ];

        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
            assert!(!err.user_message().contains("upstream"));
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FetchError::Transport(HttpError::Cancelled).error_code(),
            "E_FETCH_TRANSPORT"
        );
        assert_eq!(
            FetchError::Status {
                status: 404,
                body: String::new()
            }
            .error_code(),
            "E_FETCH_STATUS"
        );
        assert_eq!(FetchError::Decode(String::new()).error_code(), "E_FETCH_DECODE");
        assert_eq!(FetchError::Other(String::new()).error_code(), "E_FETCH_OTHER");
    }

    #[test]
    fn test_display_keeps_detail_for_logs() {
        let err = FetchError::Status {
            status: 500,
            body: "Internal Error".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 500: Internal Error");

        let err: FetchError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.to_string(), "transport error: Connection failed: refused");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
