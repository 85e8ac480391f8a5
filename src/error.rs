//! Error types for manifest retrieval.

use thiserror::Error;

/// Why a manifest could not be obtained.
///
/// Orchestration treats every variant the same way (idle presentation), the
/// split exists for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed manifest: {0}")]
    Decode(#[from] serde_json::Error),
}
