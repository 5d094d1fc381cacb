//! Error types for sitelist

use thiserror::Error;

/// Main error type for sitelist operations
#[derive(Debug, Error)]
pub enum SiteListError {
    /// Shared process pool / web view errors
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),
    /// List loading errors
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Errors raised while providing web views
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// The shared process pool could not be constructed
    #[error("process pool unavailable: {0}")]
    PoolUnavailable(String),
    /// Pool construction was attempted off the host UI thread
    #[error("process pool must be constructed on the host UI thread")]
    WrongThread,
    /// A web view was asked to load an address that does not parse
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// List loading errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// A page failed to load (simulated)
    #[error("page starting at index {0} failed to load")]
    PageLoad(usize),
    /// No item with the given id exists in the list
    #[error("no item with id {0}")]
    UnknownItem(String),
}

/// Convenience Result type for sitelist operations
pub type Result<T> = std::result::Result<T, SiteListError>;
