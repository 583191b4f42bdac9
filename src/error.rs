use reqwest::StatusCode;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when talking to Companies House.
///
/// The library performs no recovery of its own: every variant propagates
/// directly to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration value is missing or empty. Raised at client
    /// construction, before any request is issued.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network-level failure (timeout, DNS, connection reset). Not retried.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status. Carries the status code
    /// and the raw response body.
    #[error("Companies House returned {status}: {}", truncate_body(.body))]
    Api { status: StatusCode, body: String },

    /// The API answered 2xx but the body was not valid JSON.
    #[error("failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of an [`Error::Api`], if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back up to a char boundary so multibyte bodies cannot panic.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
