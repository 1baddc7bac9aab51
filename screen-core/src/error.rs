use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during the fetch-and-parse sequence.
///
/// A single attempt is made; none of these are retried. The controller
/// converts each of them into one diagnostic log line and otherwise leaves
/// the display untouched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: connectivity, DNS, timeout, body read.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered, but with a non-success status code.
    #[error("server returned status {code}: {body}")]
    HttpStatus { code: StatusCode, body: String },

    /// Success status, but the body was empty or did not parse.
    #[error("empty or unparseable response body: {0}")]
    EmptyResponse(String),

    /// Catch-all for anything else raised during the fetch.
    #[error("unexpected failure: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Stable category label, used to tag the diagnostic log for filtering.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::EmptyResponse(_) => "empty_response",
            FetchError::Unknown(_) => "unknown",
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::Unknown(err.to_string())
        } else {
            FetchError::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_are_stable() {
        let status = FetchError::HttpStatus {
            code: StatusCode::NOT_FOUND,
            body: "not found".to_string(),
        };
        assert_eq!(status.kind(), "http_status");
        assert_eq!(
            FetchError::EmptyResponse("x".to_string()).kind(),
            "empty_response"
        );
        assert_eq!(FetchError::Unknown("x".to_string()).kind(), "unknown");
    }

    #[test]
    fn http_status_display_carries_the_code() {
        let err = FetchError::HttpStatus {
            code: StatusCode::NOT_FOUND,
            body: "city not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("city not found"));
    }
}
