//! Error type shared by extraction, strategies, and dispatch.

/// Error type for pi digit extraction.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// A request parameter is outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No strategy is registered under the requested name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A worker thread failed; the whole request fails with it.
    #[error("worker failure: {0}")]
    Worker(String),
}
