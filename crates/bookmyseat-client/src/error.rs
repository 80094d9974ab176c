use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy shared by every outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local exception; the request never reached the server
    Network,
    NotFound,
    ServerError,
    /// Status 0: no response at all
    NoResponse,
    Other,
    /// Form-level rejection, never sent over the network
    ClientValidation,
    Cancelled,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("no response from {url}")]
    NoResponse { url: String },

    #[error("{message}")]
    NotFound { url: String, message: String },

    #[error("{message}")]
    ServerError { url: String, message: String },

    #[error("{message}")]
    Status { status: u16, url: String, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Error for a response that arrived with a non-success status
    pub fn from_status(status: u16, url: &str) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("");
        let message = format!("Http failure response for {}: {} {}", url, status, reason)
            .trim_end()
            .to_string();
        let url = url.to_string();

        match status {
            0 => ApiError::NoResponse { url },
            404 => ApiError::NotFound { url, message },
            500 => ApiError::ServerError { url, message },
            _ => ApiError::Status { status, url, message },
        }
    }

    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            ApiError::NoResponse { url: url.to_string() }
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => ErrorKind::Network,
            ApiError::NoResponse { .. } => ErrorKind::NoResponse,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::ServerError { .. } => ErrorKind::ServerError,
            ApiError::Status { .. } => ErrorKind::Other,
            ApiError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// HTTP status where one applies; 0 when nothing came back
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NoResponse { .. } => Some(0),
            ApiError::NotFound { .. } => Some(404),
            ApiError::ServerError { .. } => Some(500),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Message shown to the user by the central error handler
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(message) | ApiError::Decode(message) => format!("Error: {}", message),
            ApiError::NotFound { .. } => "Resource not found".to_string(),
            ApiError::ServerError { .. } => "Server error. Please try again later.".to_string(),
            ApiError::NoResponse { .. } => "Unable to connect to server".to_string(),
            ApiError::Status { status, message, .. } => format!("Error {}: {}", status, message),
            ApiError::Cancelled => "Request cancelled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_status() {
        assert_eq!(ApiError::from_status(404, "http://x/movies/42").kind(), ErrorKind::NotFound);
        assert_eq!(ApiError::from_status(500, "http://x").kind(), ErrorKind::ServerError);
        assert_eq!(ApiError::from_status(0, "http://x").kind(), ErrorKind::NoResponse);
        assert_eq!(ApiError::from_status(503, "http://x").kind(), ErrorKind::Other);
        assert_eq!(ApiError::Network("dns".to_string()).kind(), ErrorKind::Network);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(ApiError::from_status(404, "http://x").user_message(), "Resource not found");
        assert_eq!(
            ApiError::from_status(500, "http://x").user_message(),
            "Server error. Please try again later."
        );
        assert_eq!(ApiError::from_status(0, "http://x").user_message(), "Unable to connect to server");
        assert_eq!(
            ApiError::from_status(403, "http://x/reviews").user_message(),
            "Error 403: Http failure response for http://x/reviews: 403 Forbidden"
        );
        assert_eq!(ApiError::Network("boom".to_string()).user_message(), "Error: boom");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::from_status(0, "u").status(), Some(0));
        assert_eq!(ApiError::from_status(418, "u").status(), Some(418));
        assert_eq!(ApiError::Cancelled.status(), None);
    }
}
