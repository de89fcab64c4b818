//! Configuration for blobmap
//!
//! Centralized configuration with sensible defaults.

use crate::error::{MapError, Result};

/// Default number of buckets in a fresh map
pub const DEFAULT_BUCKETS: usize = 8;

/// Default starting capacity of each bucket
pub const DEFAULT_BUCKET_CAPACITY: usize = 8;

/// Default load-factor ceiling before the map doubles its bucket count.
///
/// Deliberately aggressive: growth triggers almost immediately, trading
/// memory and migration copies for short collision chains.
pub const MAX_LOAD_FACTOR: f64 = 0.1;

/// Main configuration for a BlobMap instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Sizing Configuration
    // -------------------------------------------------------------------------
    /// Number of buckets allocated by a fresh map
    pub initial_buckets: usize,

    /// Starting entry capacity of each bucket
    pub initial_bucket_capacity: usize,

    // -------------------------------------------------------------------------
    // Growth Configuration
    // -------------------------------------------------------------------------
    /// Load factor (item count / bucket count) above which the map resizes
    pub max_load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_buckets: DEFAULT_BUCKETS,
            initial_bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            max_load_factor: MAX_LOAD_FACTOR,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that every field can actually drive a map.
    ///
    /// Zero buckets would leave no valid hash slot, a zero bucket capacity
    /// would make every empty chain "full", and a non-positive or non-finite
    /// load factor would either fire the growth trigger on every insert or
    /// never fire it at all.
    pub fn validate(&self) -> Result<()> {
        if self.initial_buckets == 0 {
            return Err(MapError::InvalidArgument(
                "initial_buckets must be at least 1".to_string(),
            ));
        }
        if self.initial_bucket_capacity == 0 {
            return Err(MapError::InvalidArgument(
                "initial_bucket_capacity must be at least 1".to_string(),
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(MapError::InvalidArgument(
                "max_load_factor must be positive and finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of buckets a fresh map starts with
    pub fn initial_buckets(mut self, count: usize) -> Self {
        self.config.initial_buckets = count;
        self
    }

    /// Set the starting entry capacity of each bucket
    pub fn initial_bucket_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_bucket_capacity = capacity;
        self
    }

    /// Set the load-factor ceiling that triggers a resize
    pub fn max_load_factor(mut self, factor: f64) -> Self {
        self.config.max_load_factor = factor;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
