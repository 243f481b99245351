//! Error types shared by the session, API, and grading layers.
//!
//! ERROR HANDLING
//! ==============
//! Each concern gets its own enum so views can match on what went wrong
//! without parsing strings. Display text is what the UI shows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to decode a persisted session credential.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("credential has no payload segment")]
    MissingPayload,
    #[error("credential payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("credential claims are not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a remote API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Short text for inline error rows.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status(401 | 403) => "You are not allowed to view this.".to_owned(),
            Self::Status(404) => "Nothing found.".to_owned(),
            other => other.to_string(),
        }
    }
}

/// Failure to fetch a student's submission file.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("pairing {0} is not in the loaded pairing list")]
    UnknownPairing(i64),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DownloadError {
    /// Blocking notice shown for every download failure.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        crate::util::notice::NO_SUBMISSION_NOTICE
    }
}
