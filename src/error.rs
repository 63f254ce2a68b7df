use thiserror::Error;

/// Failure talking to the availability feed. Fatal for the current request
/// only; the HTTP layer renders it as a generic 500 without the detail.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("availability upstream responded {0}")]
    Status(String),
    #[error("availability upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
