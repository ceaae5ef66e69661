//! Error type for calls against the users API.

/// Failure of an authentication or registration request.
///
/// Every variant is shown to the user as the same static message; the variant
/// only matters for console diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}
