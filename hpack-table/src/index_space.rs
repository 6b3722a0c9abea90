//! The combined HPACK index address space.
//!
//! Indices `1..=STATIC_TABLE_LEN` name static table entries and higher
//! indices name dynamic table entries, newest first (RFC 7541 Section 2.3.3).

use crate::header_field::HeaderField;
use crate::static_table::{static_table, STATIC_TABLE_LEN};
use crate::table::{HeaderFieldTable, Match};

/// Searches the static table, then `dynamic`, returning an index in the
/// combined address space.
///
/// An exact static match wins outright. Otherwise an exact dynamic match is
/// preferred, then a static name match, then a dynamic name match.
pub fn search(dynamic: &HeaderFieldTable, field: &HeaderField) -> Option<Match> {
    let in_static = static_table().search(field);
    if let Some(Match::Exact(_)) = in_static {
        return in_static;
    }

    match (in_static, dynamic.search(field)) {
        (_, Some(found @ Match::Exact(_))) | (None, Some(found)) => {
            Some(found.offset(STATIC_TABLE_LEN as u64))
        }
        (in_static, _) => in_static,
    }
}

/// Returns the entry at an index in the combined address space.
pub fn get(dynamic: &HeaderFieldTable, index: u64) -> Option<&HeaderField> {
    let static_len = STATIC_TABLE_LEN as u64;
    if index <= static_len {
        static_table().get(index)
    } else {
        dynamic.get(index - static_len)
    }
}
