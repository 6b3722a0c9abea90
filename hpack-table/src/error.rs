//! Error types for header field table operations.
//!
//! Every variant describes a broken invariant in the caller's bookkeeping.
//! Once a table is desynchronized from the peer's copy there is no way to
//! recover it, so the unchecked table operations panic with the `Display`
//! text of these errors. The `try_*` forms return them instead and leave the
//! table untouched.

use thiserror::Error;

/// Result type for header field table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Invariant violations detected by a header field table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// More entries were requested for eviction than the table holds.
    #[error("evict_oldest({requested}) on table with {len} entries")]
    EvictTooMany { requested: usize, len: usize },

    /// A unique id at or below the eviction count was converted to an index.
    ///
    /// The entry it named is gone; using it would reference the wrong slot.
    #[error("id ({id}) <= evict_count ({evict_count})")]
    StaleId { id: u64, evict_count: u64 },

    /// A unique id above the insert count was converted to an index.
    #[error("id ({id}) > insert_count ({insert_count})")]
    UnknownId { id: u64, insert_count: u64 },

    /// The eviction counter would wrap.
    #[error("evict_count overflow: {evict_count} + {requested}")]
    EvictCountOverflow { evict_count: u64, requested: usize },

    /// Eviction was attempted against the static table.
    #[error("evict_oldest({0}) on the static table")]
    StaticEviction(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::EvictTooMany { requested: 3, len: 2 }.to_string(),
            "evict_oldest(3) on table with 2 entries"
        );
        assert_eq!(
            Error::StaleId { id: 4, evict_count: 7 }.to_string(),
            "id (4) <= evict_count (7)"
        );
        assert_eq!(
            Error::StaticEviction(1).to_string(),
            "evict_oldest(1) on the static table"
        );
    }
}
