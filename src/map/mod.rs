//! Map Module
//!
//! The bucketed hash map engine.
//!
//! ## Responsibilities
//! - Hash keys to bucket slots
//! - Resolve collisions with per-bucket linear chains
//! - Double the bucket count when load factor is exceeded, or when a full
//!   chain would actually be spread by a larger array
//! - Own every stored key and value exclusively (copy-in / copy-out)
//!
//! ## Data Structure Choice
//! A flat bucket array with small growable chains:
//! - Chains stay short because the load-factor ceiling is low
//! - Resize is speculative: the old array survives any migration failure
//! - Simple and correct first; the additive hash is a known weak spot

mod hash;
mod entry;
mod bucket;
mod table;

pub use table::BlobMap;

/// Result of a successful set on a map or bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The key was not present; a new entry was appended
    Inserted,

    /// The key was present; its entry was replaced
    Overwritten,
}
