use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl SolveError {
    /// Text stored on the synthesized failure result. A string `detail` sent
    /// by the backend wins over the transport message.
    pub fn message(&self) -> String {
        match self {
            SolveError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            SolveError::Network(e) if e.is_connect() => {
                "Backend unreachable. Is the solver service running?"
            }
            SolveError::Network(_) => "Network error. Check your connection.",
            SolveError::Status { status, .. } if *status >= 500 => {
                "Backend error. Check the solver service logs."
            }
            SolveError::Status { .. } => "Request rejected by the backend.",
            SolveError::Decode(_) => "Backend returned an unexpected response.",
        }
    }
}

/// Pulls a string `detail` out of an error body such as `{"detail": "..."}`.
/// Validation errors carry a list there instead and are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

pub type SolveOutcome<T> = Result<T, SolveError>;
