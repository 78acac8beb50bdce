//! Error type and HTTP/reqwest error mapping for the dashboard client.

use std::time::Duration;

use thiserror::Error;

/// Errors from the dashboard service client.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, as far as it could be read.
        body: String,
    },

    /// The request did not complete at the transport level.
    #[error("network error: {0}")]
    Network(Box<reqwest::Error>),

    /// The request timed out.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body was not what the service contract promises.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Whether retrying this request might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Status { status, .. } => *status == 429 || *status >= 500,
            ClientError::Network(_) | ClientError::Timeout(_) => true,
            ClientError::InvalidResponse(_) => false,
        }
    }
}

/// Map a [`reqwest::Error`] to a [`ClientError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        // Generic 30-second duration; we don't track the configured timeout here
        ClientError::Timeout(Duration::from_secs(30))
    } else {
        ClientError::Network(Box::new(err))
    }
}

/// Pass a success response through, or turn a non-success status into
/// [`ClientError::Status`] with the body attached.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let err = ClientError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn rate_limit_is_transient() {
        let err = ClientError::Status {
            status: 429,
            body: String::new(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn client_errors_are_not_transient() {
        let err = ClientError::Status {
            status: 404,
            body: "not found".into(),
        };
        assert!(!err.is_transient());
        assert!(!ClientError::InvalidResponse("bad json".into()).is_transient());
    }

    #[test]
    fn status_display_includes_code_and_body() {
        let err = ClientError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }
}
