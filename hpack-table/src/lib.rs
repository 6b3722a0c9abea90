//! HPACK header field tables for HTTP/2 header compression (RFC 7541).
//!
//! This crate provides the indexed tables an HPACK encoder and decoder use to
//! refer to header fields by number instead of sending them literally.
//!
//! # Features
//!
//! - **Static table**: the RFC 7541 Appendix A entries plus deployment-wide
//!   tracing headers, built once and shared by reference.
//! - **Dynamic table**: per-connection insertion and oldest-first eviction
//!   with O(1) lookups by name or by name and value.
//! - **Stable ids**: entries keep an internal id across evictions, so stale
//!   references are detected instead of silently resolving to the wrong slot.
//!
//! Wire encoding and the decision of how much to evict belong to the codec;
//! the tables only expose [`HeaderField::size`] for its accounting.
//!
//! # Example
//!
//! ```rust
//! use hpack_table::{static_table, HeaderField, HeaderFieldTable, Match};
//!
//! let mut dynamic = HeaderFieldTable::new_dynamic();
//! dynamic.add_entry(HeaderField::new("x-request-id", "42"));
//!
//! let method = HeaderField::new(":method", "GET");
//! assert_eq!(static_table().search(&method), Some(Match::Exact(2)));
//!
//! let id = HeaderField::new("x-request-id", "43");
//! assert_eq!(dynamic.search(&id), Some(Match::Name(1)));
//! ```

pub mod config;
pub mod error;
pub mod header_field;
pub mod index_space;
pub mod static_table;
pub mod table;

// Re-export main types
pub use config::TableConfig;
pub use error::{Error, Result};
pub use header_field::{HeaderField, ENTRY_OVERHEAD};
pub use static_table::{static_table, STATIC_TABLE_LEN};
pub use table::{HeaderFieldTable, Match, TableKind};
