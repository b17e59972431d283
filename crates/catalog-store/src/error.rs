use thiserror::Error;

/// Failure reported by the remote data source.
///
/// The engine treats every variant uniformly: the previous collection is
/// retained and the failure surfaces as a retryable status message. Nothing
/// propagates past the store boundary as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("endpoint returned status {status}")]
    Endpoint { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed payload: {0}")]
    Payload(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
