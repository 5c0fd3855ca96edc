//! Collaborator interfaces.
//!
//! The core never talks to a database, an AI backend or any other external
//! system directly. Instead it is handed implementations of these traits:
//!
//! - [`VocabularySource`]: bulk listing used once to seed the indices
//! - [`VocabularySink`]: persists a newly learned word or phrase and assigns its id
//! - [`MetadataSource`]: mutable per-entry metadata joined into search hits
//!
//! [`memory::MemoryVocabulary`] implements all three in memory, and
//! [`seed`] loads it from CSV seed files.

pub mod memory;
pub mod seed;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::entry::{EntryId, EntryKind};

/// A persisted vocabulary item as seen by the index: its text and id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub id: EntryId,
    pub text: String,
}

impl VocabularyRecord {
    pub fn new<S: Into<String>>(id: EntryId, text: S) -> Self {
        VocabularyRecord {
            id,
            text: text.into(),
        }
    }
}

/// Mutable metadata attached to a persisted entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Free-form learner note.
    pub note: Option<String>,
    /// Word-book flag; `None` if the entry was never added to the word book.
    pub bookmarked: Option<bool>,
}

/// Bulk listing of the backing vocabulary.
pub trait VocabularySource: Send + Sync {
    fn list_all_words(&self) -> Result<Vec<VocabularyRecord>>;

    fn list_all_phrases(&self) -> Result<Vec<VocabularyRecord>>;
}

/// Persistence sink for newly learned entries.
pub trait VocabularySink: Send + Sync {
    /// Persist `text` as a new entry of `kind` and return its assigned id.
    fn save(&self, kind: EntryKind, text: &str) -> Result<EntryId>;
}

/// Metadata join used by the search facade.
pub trait MetadataSource: Send + Sync {
    /// Fetch metadata for the record backing an index hit.
    ///
    /// `Ok(None)` means the record no longer exists.
    fn get_metadata(&self, kind: EntryKind, id: EntryId) -> Result<Option<EntryMetadata>>;
}
