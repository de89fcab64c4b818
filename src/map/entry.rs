//! Stored entries
//!
//! An entry is an owned (key, value) pair. Both buffers are independent
//! copies of the caller's data, made fallibly at construction time, so the
//! map never aliases caller memory and allocation pressure surfaces as an
//! error instead of a partially-built entry.

use crate::error::Result;

/// An owned key/value pair stored inside a bucket
#[derive(Debug)]
pub(crate) struct Entry {
    /// Owned copy of the key text
    key: String,

    /// Owned copy of the value bytes
    value: Vec<u8>,
}

impl Entry {
    /// Copy `key` and `value` into a new entry.
    ///
    /// Both reservations are fallible; if either fails no entry exists and
    /// nothing is left half-initialized.
    pub(crate) fn new(key: &str, value: &[u8]) -> Result<Self> {
        let mut owned_key = String::new();
        owned_key.try_reserve_exact(key.len())?;
        owned_key.push_str(key);

        let mut owned_value = Vec::new();
        owned_value.try_reserve_exact(value.len())?;
        owned_value.extend_from_slice(value);

        Ok(Self {
            key: owned_key,
            value: owned_value,
        })
    }

    /// The entry's key
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// The entry's value bytes
    pub(crate) fn value(&self) -> &[u8] {
        &self.value
    }

    /// Length of the value in bytes
    pub(crate) fn size(&self) -> usize {
        self.value.len()
    }
}
