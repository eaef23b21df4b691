use thiserror::Error;

/// Failure of a single call to the analysis server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached.
    #[error("could not reach the analysis server: {0}")]
    Transport(#[source] reqwest::Error),

    /// The exchange did not finish within the request timeout.
    #[error("request to the analysis server timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The server answered with something other than `200 OK`.
    #[error("received status code {status}: {body}")]
    Protocol { status: u16, body: String },

    /// The body of a `200 OK` response did not have the expected shape.
    #[error("could not decode the analysis server response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The caller asked to stop while the request was in flight.
    #[error("request to the analysis server was cancelled")]
    Cancelled,
}

impl ApiError {
    /// Classify a failed exchange as a timeout or another transport failure.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout(e) } else { Self::Transport(e) }
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
