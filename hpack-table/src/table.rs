//! Header field table shared by the static and dynamic tables.
//!
//! Entries are stored oldest first: new entries are appended at the back and
//! eviction drops a prefix from the front. Each entry gets a unique id when
//! it is inserted. Ids start at 1, grow by one per insertion and stay stable
//! across evictions, so the id of `entries[k]` is always
//! `k + evict_count + 1`. Zero is never a valid id.
//!
//! Two maps point from a name, and from a name-value pair, to the id of the
//! newest entry carrying that key. Inserting always overwrites them because
//! the new entry is by definition the newest. Evicting an entry clears a map
//! slot only if the slot still holds that entry's id; otherwise a newer entry
//! owns the key and the slot is left alone.
//!
//! HPACK numbers the dynamic table from the newest entry (index 1) back to the
//! oldest, while the static table is numbered in insertion order. The
//! orientation is the only behavioral difference between the two kinds.
//!
//! Mutation takes `&mut self`; a table is owned by the single
//! connection-direction context that drives it. Callers sharing one across
//! threads must provide their own lock.

use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use tracing::trace;

use crate::config::{TableConfig, MAX_PREALLOCATED_ENTRIES};
use crate::error::{Error, Result};
use crate::header_field::HeaderField;

/// Which index orientation a table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Fixed table, indexed in insertion order. Never evicts.
    Static,
    /// Per-connection table, newest entry at index 1.
    Dynamic,
}

/// Result of a successful [`HeaderFieldTable::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Name and value both match the entry at this index.
    Exact(u64),
    /// Only the name matches the entry at this index.
    Name(u64),
}

impl Match {
    /// The 1-based HPACK index of the matched entry.
    pub fn index(self) -> u64 {
        match self {
            Match::Exact(index) | Match::Name(index) => index,
        }
    }

    /// Returns true if both name and value matched.
    pub fn is_exact(self) -> bool {
        matches!(self, Match::Exact(_))
    }

    pub(crate) fn offset(self, by: u64) -> Self {
        match self {
            Match::Exact(index) => Match::Exact(index + by),
            Match::Name(index) => Match::Name(index + by),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct NameValue {
    name: Bytes,
    value: Bytes,
}

impl NameValue {
    fn of(field: &HeaderField) -> Self {
        Self {
            name: field.name().clone(),
            value: field.value().clone(),
        }
    }
}

/// An indexed list of header fields.
#[derive(Debug)]
pub struct HeaderFieldTable {
    entries: VecDeque<HeaderField>,
    evict_count: u64,
    by_name: HashMap<Bytes, u64>,
    by_name_value: HashMap<NameValue, u64>,
    kind: TableKind,
}

impl HeaderFieldTable {
    /// Creates an empty dynamic table.
    pub fn new_dynamic() -> Self {
        Self::empty(TableKind::Dynamic, 0)
    }

    /// Creates an empty dynamic table sized for the configured maximum.
    ///
    /// Reserved storage is capped at [`MAX_PREALLOCATED_ENTRIES`]; a larger
    /// table grows on demand.
    pub fn with_config(config: &TableConfig) -> Self {
        let capacity = if config.preallocate {
            config.max_entries().min(MAX_PREALLOCATED_ENTRIES)
        } else {
            0
        };
        Self::empty(TableKind::Dynamic, capacity)
    }

    /// Builds a static table from `fields` in order. Index `k + 1` names
    /// `fields[k]` for the lifetime of the table.
    pub(crate) fn new_static<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = HeaderField>,
    {
        let fields = fields.into_iter();
        let mut table = Self::empty(TableKind::Static, fields.size_hint().0);
        for field in fields {
            table.add_entry(field);
        }
        table
    }

    fn empty(kind: TableKind, capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            evict_count: 0,
            by_name: HashMap::with_capacity(capacity),
            by_name_value: HashMap::with_capacity(capacity),
            kind,
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Number of entries currently in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries ever evicted. Always 0 for the static table.
    pub fn evict_count(&self) -> u64 {
        self.evict_count
    }

    /// Number of entries ever inserted; also the id of the newest entry.
    pub fn insert_count(&self) -> u64 {
        self.entries.len() as u64 + self.evict_count
    }

    /// Appends `field` as the newest entry and returns its unique id.
    ///
    /// A sensitive field is reachable by name only; its value never enters
    /// the name-value map, so no later search can reference it exactly.
    pub fn add_entry(&mut self, field: HeaderField) -> u64 {
        let id = self.insert_count() + 1;
        self.by_name.insert(field.name().clone(), id);
        if !field.is_sensitive() {
            self.by_name_value.insert(NameValue::of(&field), id);
        }
        self.entries.push_back(field);
        id
    }

    /// Evicts the `n` oldest entries.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of entries, if the eviction counter
    /// would overflow, or if this is the static table. Each means the caller's
    /// view of the table no longer matches the peer's.
    pub fn evict_oldest(&mut self, n: usize) {
        if let Err(err) = self.try_evict_oldest(n) {
            panic!("{err}");
        }
    }

    /// Checked form of [`evict_oldest`](Self::evict_oldest). On error the
    /// table is left unchanged.
    pub fn try_evict_oldest(&mut self, n: usize) -> Result<()> {
        if self.kind == TableKind::Static {
            return Err(Error::StaticEviction(n));
        }
        if n > self.len() {
            return Err(Error::EvictTooMany {
                requested: n,
                len: self.len(),
            });
        }
        let evict_count = self
            .evict_count
            .checked_add(n as u64)
            .ok_or(Error::EvictCountOverflow {
                evict_count: self.evict_count,
                requested: n,
            })?;

        for (k, field) in self.entries.iter().take(n).enumerate() {
            let id = self.evict_count + k as u64 + 1;
            if self.by_name.get(field.name()) == Some(&id) {
                self.by_name.remove(field.name());
            }
            let pair = NameValue::of(field);
            if self.by_name_value.get(&pair) == Some(&id) {
                self.by_name_value.remove(&pair);
            }
        }
        self.entries.drain(..n);
        self.evict_count = evict_count;

        trace!(
            evicted = n,
            evict_count = self.evict_count,
            len = self.entries.len(),
            "evicted oldest header fields"
        );
        Ok(())
    }

    /// Finds `field` in the table.
    ///
    /// Returns [`Match::Exact`] if an entry has the same name and value,
    /// otherwise [`Match::Name`] if an entry has the same name, otherwise
    /// `None`. The newest matching entry wins. Sensitive fields never produce
    /// an exact match so they are not re-sent by index reference.
    pub fn search(&self, field: &HeaderField) -> Option<Match> {
        if !field.is_sensitive() {
            if let Some(&id) = self.by_name_value.get(&NameValue::of(field)) {
                return Some(Match::Exact(self.id_to_index(id)));
            }
        }
        self.by_name
            .get(field.name())
            .map(|&id| Match::Name(self.id_to_index(id)))
    }

    /// Converts a unique id to a 1-based HPACK index.
    ///
    /// # Panics
    ///
    /// Panics if `id` names an evicted entry or was never assigned.
    pub fn id_to_index(&self, id: u64) -> u64 {
        match self.try_id_to_index(id) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked form of [`id_to_index`](Self::id_to_index).
    pub fn try_id_to_index(&self, id: u64) -> Result<u64> {
        if id <= self.evict_count {
            return Err(Error::StaleId {
                id,
                evict_count: self.evict_count,
            });
        }
        if id > self.insert_count() {
            return Err(Error::UnknownId {
                id,
                insert_count: self.insert_count(),
            });
        }
        // Position of the entry in `entries`.
        let k = id - self.evict_count - 1;
        Ok(match self.kind {
            TableKind::Static => k + 1,
            TableKind::Dynamic => self.entries.len() as u64 - k,
        })
    }

    /// Returns the entry at a 1-based HPACK index, or `None` if the index is
    /// 0 or past the end of the table.
    pub fn get(&self, index: u64) -> Option<&HeaderField> {
        let len = self.entries.len() as u64;
        if index == 0 || index > len {
            return None;
        }
        let k = match self.kind {
            TableKind::Static => index - 1,
            TableKind::Dynamic => len - index,
        };
        self.entries.get(k as usize)
    }

    /// Iterates entries in index order, starting at index 1.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> + '_ {
        (1..=self.entries.len() as u64).filter_map(move |index| self.get(index))
    }
}

impl Default for HeaderFieldTable {
    fn default() -> Self {
        Self::new_dynamic()
    }
}
