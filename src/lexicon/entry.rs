//! Index entry types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier assigned by the persistence collaborator.
///
/// The core never generates ids; it only stores and returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        EntryId(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which vocabulary an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Word,
    Phrase,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Word => f.write_str("word"),
            EntryKind::Phrase => f.write_str("phrase"),
        }
    }
}

/// The payload stored at a terminal trie node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Case-folded lookup key.
    pub key: String,
    /// Text as originally inserted, for display.
    pub canonical_text: String,
    /// Identifier of the backing record.
    pub id: EntryId,
}

impl IndexEntry {
    pub fn new<S: Into<String>>(key: &str, canonical_text: S, id: EntryId) -> Self {
        IndexEntry {
            key: fold_case(key),
            canonical_text: canonical_text.into(),
            id,
        }
    }
}

/// Case-fold text for use as an index key.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_folds_key_and_keeps_canonical() {
        let entry = IndexEntry::new("Take Place", "Take Place", EntryId(7));
        assert_eq!(entry.key, "take place");
        assert_eq!(entry.canonical_text, "Take Place");
        assert_eq!(entry.id.get(), 7);
    }

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::Word.to_string(), "word");
        assert_eq!(EntryKind::Phrase.to_string(), "phrase");
        assert_eq!(EntryKind::default(), EntryKind::Word);
    }
}
