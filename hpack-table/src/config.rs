//! Dynamic table configuration.
//!
//! Holds the negotiated table size and how much storage to reserve for it.

use serde::{Deserialize, Serialize};

use crate::header_field::ENTRY_OVERHEAD;

/// Default `SETTINGS_HEADER_TABLE_SIZE` for HTTP/2 (RFC 9113 Section 6.5.2).
pub const DEFAULT_MAX_TABLE_SIZE: usize = 4096;

/// Largest `max_table_size` accepted by [`TableConfig::validate`] (16 MiB).
pub const MAX_TABLE_SIZE_LIMIT: usize = 1 << 24;

/// Most entries a table reserves storage for up front, whatever the
/// configured size.
pub const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// Dynamic table configuration.
///
/// The table itself never enforces a byte budget; the codec decides how many
/// entries to evict. The configured maximum only sizes storage up front.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Maximum dynamic table size in bytes, as negotiated with the peer
    /// (default: 4096).
    pub max_table_size: usize,

    /// Reserve storage for a full table on construction (default: true).
    ///
    /// When disabled, storage grows on demand.
    pub preallocate: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_table_size: DEFAULT_MAX_TABLE_SIZE,
            preallocate: true,
        }
    }
}

impl TableConfig {
    /// Upper bound on the number of live entries a table of this size can
    /// hold: every entry costs at least the fixed overhead.
    pub fn max_entries(&self) -> usize {
        self.max_table_size / ENTRY_OVERHEAD as usize
    }

    /// Validate the configuration.
    ///
    /// Returns `Ok(())` if valid, or a list of error messages if invalid.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_table_size > MAX_TABLE_SIZE_LIMIT {
            errors.push(format!(
                "max_table_size ({}) exceeds the limit ({})",
                self.max_table_size, MAX_TABLE_SIZE_LIMIT
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
