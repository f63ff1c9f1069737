use thiserror::Error;

/// Error taxonomy for the SDK.
///
/// Validation errors are raised synchronously before any network call.
/// Collaborator errors (cache service, gateway) propagate unchanged — the
/// algorithmic core never retries; retries live in the HTTP clients.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed pair, non-positive amount, invalid address format.
    #[error("validation: {0}")]
    Validation(String),

    /// A request to the cache service or gateway failed.
    #[error("collaborator request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The cache service or gateway returned a body the SDK cannot parse.
    #[error("collaborator returned malformed data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Missing or inconsistent remote state (e.g. unknown contract,
    /// rate limiting after retries are exhausted).
    #[error("collaborator: {0}")]
    Collaborator(#[from] anyhow::Error),

    /// Numeric contract violated by remote data, e.g. a resting order
    /// priced at zero that would force a division by zero.
    #[error("computation: {0}")]
    Computation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
