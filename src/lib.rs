//! # blobmap
//!
//! A string-keyed map for opaque binary blobs with:
//! - Bucketed collision chains resolved by linear scan
//! - Automatic whole-map growth (bucket count doubles) driven by bucket
//!   fullness or a configurable load-factor threshold
//! - Copy-in/copy-out ownership: the map never aliases caller memory
//! - Allocation failures surfaced as errors, never panics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BlobMap                               │
//! │          (bucket array, item count, resize policy)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ bucket_index(key, bucket_count)
//!          ┌────────────┼────────────┐
//!          ▼            ▼            ▼
//!   ┌───────────┐ ┌───────────┐ ┌───────────┐
//!   │  Bucket   │ │  Bucket   │ │  Bucket   │   ... one per slot
//!   │ (entries) │ │ (entries) │ │ (entries) │
//!   └─────┬─────┘ └───────────┘ └───────────┘
//!         │ linear scan, full-length key equality
//!         ▼
//!   ┌───────────┐
//!   │   Entry   │  owned key text + owned value bytes
//!   └───────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod map;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MapError, Result};
pub use config::Config;
pub use map::{BlobMap, SetOutcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of blobmap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
