use thiserror::Error;

/// Errors that may occur during a single request/response exchange.
///
/// These never escape [`crate::query`]; a phase-one failure is folded into
/// the returned status as `online = false` plus an error message, and a
/// phase-two failure is logged and absorbed.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out waiting for a reply")]
    Timeout,
    #[error("could not resolve address: {0}")]
    Resolve(String),
}
