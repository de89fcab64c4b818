//! Error types for blobmap
//!
//! Provides a unified error type for all operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias using MapError
pub type Result<T> = std::result::Result<T, MapError>;

/// Unified error type for blobmap operations
#[derive(Debug, Error)]
pub enum MapError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Memory Errors
    // -------------------------------------------------------------------------
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("key not found")]
    NotFound,
}
