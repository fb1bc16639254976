use reqwest::StatusCode;

/// Failure of a single endpoint fetch. Every variant is contained at the
/// update-loop boundary: logged, rendered as a short message in the affected
/// result slot, and never propagated to the other endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("field `{0}` missing from response")]
    MissingField(String),
}
