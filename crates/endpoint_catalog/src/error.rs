use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while obtaining or decoding the endpoints configuration.
pub enum CatalogError {
    /// The body was not a valid endpoints document.
    #[error("endpoints config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The transport failed or the server answered with an error status.
    #[error("endpoints config fetch failed: {0}")]
    Fetch(String),
    /// The current target has no way to reach the server.
    #[error("endpoints config unavailable: {0}")]
    Unsupported(&'static str),
}
