//! Thread-safe prefix-tree index.
//!
//! [`LexiconIndex`] owns a [`Trie`] behind a `parking_lot::RwLock`. Each insert
//! holds the write lock for exactly one key, so concurrent readers either see
//! the tree before the insert or after it, never a half-linked path. Readers
//! share the lock and run in parallel. Results are returned as owned
//! [`IndexEntry`] values; no reference into the tree escapes the lock.

use parking_lot::RwLock;

use crate::lexicon::entry::{EntryId, EntryKind, IndexEntry};
use crate::lexicon::trie::Trie;
use crate::vocabulary::VocabularyRecord;

/// Statistics about a single index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub kind: EntryKind,
    /// Number of distinct keys.
    pub entries: usize,
    /// Number of trie nodes below the root.
    pub nodes: usize,
}

/// A synchronized prefix tree for one vocabulary (words or phrases).
#[derive(Debug)]
pub struct LexiconIndex {
    kind: EntryKind,
    trie: RwLock<Trie>,
}

impl LexiconIndex {
    pub fn new(kind: EntryKind) -> Self {
        LexiconIndex {
            kind,
            trie: RwLock::new(Trie::new()),
        }
    }

    /// The vocabulary this index serves.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Insert or overwrite the entry for `key`.
    ///
    /// Returns `true` if `key` was not indexed before. Empty keys are ignored.
    pub fn insert(&self, key: &str, id: EntryId, canonical_text: &str) -> bool {
        self.trie.write().insert(key, id, canonical_text)
    }

    /// Insert a batch of records under a single write lock.
    ///
    /// Returns the number of newly added keys.
    pub fn bulk_load<I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = VocabularyRecord>,
    {
        let mut trie = self.trie.write();
        records
            .into_iter()
            .filter(|record| trie.insert(&record.text, record.id, &record.text))
            .count()
    }

    pub fn contains_exact(&self, key: &str) -> bool {
        self.trie.read().contains(key)
    }

    /// Case-folded exact lookup.
    pub fn get_exact(&self, key: &str) -> Option<IndexEntry> {
        self.trie.read().get(key).cloned()
    }

    /// Case-sensitive exact lookup: the entry must have been inserted with
    /// canonical text equal to `text`.
    pub fn get_case_sensitive(&self, text: &str) -> Option<IndexEntry> {
        self.trie
            .read()
            .get(text)
            .filter(|entry| entry.canonical_text == text)
            .cloned()
    }

    pub fn search_by_prefix(&self, prefix: &str) -> Vec<IndexEntry> {
        self.trie.read().search_by_prefix(prefix)
    }

    /// Linear scan over every entry; see [`Trie::search_by_substring`].
    pub fn search_by_substring(&self, substring: &str) -> Vec<IndexEntry> {
        self.trie.read().search_by_substring(substring)
    }

    pub fn entries(&self) -> Vec<IndexEntry> {
        self.trie.read().entries()
    }

    pub fn len(&self) -> usize {
        self.trie.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.read().is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let trie = self.trie.read();
        IndexStats {
            kind: self.kind,
            entries: trie.len(),
            nodes: trie.node_count(),
        }
    }
}
