use thiserror::Error;

/// Everything that can go wrong between a validated request and a decoded
/// response. Validation failures never reach this type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL was never configured. Raised at client construction,
    /// before any network attempt.
    #[error("Compare API base URL is not configured")]
    MissingBaseUrl,

    /// The server answered with a non-success status. `message` is already
    /// extracted from the body (structured `detail` preferred).
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never completed at the transport level.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A success body that does not decode into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
