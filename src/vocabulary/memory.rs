//! In-memory vocabulary store.
//!
//! `MemoryVocabulary` keeps word and phrase records, the learner's word book
//! and per-word notes in memory. It assigns ids sequentially per kind starting
//! at 1 and implements every collaborator trait the core consumes, which makes
//! it the default backing store for tests, demos and small deployments.

use std::collections::BTreeMap;

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};
use crate::lexicon::entry::{EntryId, EntryKind};
use crate::vocabulary::{
    EntryMetadata, MetadataSource, VocabularyRecord, VocabularySink, VocabularySource,
};

/// Pronunciation stored when none is known.
pub const UNKNOWN_PRONUNCIATION: &str = "/";

/// A persisted word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: EntryId,
    pub word: String,
    pub lemma: String,
    pub pronunciation: String,
    pub derivation: Vec<String>,
    /// Memory tip shown to the learner.
    pub tip: String,
    pub note: Option<String>,
}

impl WordRecord {
    /// A bare record for `word`; the id is assigned on insert.
    pub fn new<S: Into<String>>(word: S) -> Self {
        let word = word.into();
        WordRecord {
            id: EntryId(0),
            lemma: word.clone(),
            word,
            pronunciation: UNKNOWN_PRONUNCIATION.to_string(),
            derivation: Vec::new(),
            tip: String::new(),
            note: None,
        }
    }
}

/// A persisted phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRecord {
    pub id: EntryId,
    pub phrase: String,
    /// Number of tokens in the phrase.
    pub len: usize,
    /// Position of the head token within the phrase.
    pub main_idx: usize,
    pub pronunciation: String,
    pub derivation: Vec<String>,
    pub tip: String,
}

impl PhraseRecord {
    /// A bare record for `phrase` with its head at position 0.
    pub fn new<S: Into<String>>(phrase: S) -> Self {
        let phrase = phrase.into();
        PhraseRecord {
            id: EntryId(0),
            len: phrase.split_whitespace().count(),
            main_idx: 0,
            phrase,
            pronunciation: UNKNOWN_PRONUNCIATION.to_string(),
            derivation: Vec::new(),
            tip: String::new(),
        }
    }
}

/// A word-book entry returned by [`MemoryVocabulary::bookmarked_words`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkedWord {
    pub word: WordRecord,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Bookmark {
    marked: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    words: BTreeMap<EntryId, WordRecord>,
    phrases: BTreeMap<EntryId, PhraseRecord>,
    bookmarks: AHashMap<EntryId, Bookmark>,
    last_word_id: u64,
    last_phrase_id: u64,
}

/// Thread-safe in-memory store for words, phrases and word-book state.
#[derive(Debug, Default)]
pub struct MemoryVocabulary {
    tables: RwLock<Tables>,
}

impl MemoryVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a word, assigning a fresh id. Returns the stored record.
    pub fn insert_word(&self, mut record: WordRecord) -> WordRecord {
        let mut tables = self.tables.write();
        tables.last_word_id += 1;
        record.id = EntryId(tables.last_word_id);
        tables.words.insert(record.id, record.clone());
        record
    }

    /// Persist a phrase, assigning a fresh id. Returns the stored record.
    pub fn insert_phrase(&self, mut record: PhraseRecord) -> PhraseRecord {
        let mut tables = self.tables.write();
        tables.last_phrase_id += 1;
        record.id = EntryId(tables.last_phrase_id);
        tables.phrases.insert(record.id, record.clone());
        record
    }

    pub fn word(&self, id: EntryId) -> Option<WordRecord> {
        self.tables.read().words.get(&id).cloned()
    }

    pub fn phrase(&self, id: EntryId) -> Option<PhraseRecord> {
        self.tables.read().phrases.get(&id).cloned()
    }

    /// Find a word by its text: exact match first, then lowercase.
    pub fn find_word(&self, text: &str) -> Option<WordRecord> {
        let tables = self.tables.read();
        let lowered = text.to_lowercase();
        tables
            .words
            .values()
            .find(|w| w.word == text)
            .or_else(|| tables.words.values().find(|w| w.word == lowered))
            .cloned()
    }

    pub fn word_count(&self) -> usize {
        self.tables.read().words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.tables.read().phrases.len()
    }

    /// Flip the word-book flag of a word and return the new state.
    ///
    /// A word never bookmarked before becomes bookmarked.
    pub fn toggle_bookmark(&self, word_id: EntryId) -> Result<bool> {
        let mut tables = self.tables.write();
        if !tables.words.contains_key(&word_id) {
            return Err(LexisError::not_found(format!("word {word_id}")));
        }

        let now = Utc::now();
        let bookmark = tables.bookmarks.entry(word_id).or_insert_with(|| Bookmark {
            marked: false,
            created_at: now,
            updated_at: now,
        });
        bookmark.marked = !bookmark.marked;
        bookmark.updated_at = now;
        Ok(bookmark.marked)
    }

    /// Replace the note attached to a word.
    pub fn update_note(&self, word_id: EntryId, note: Option<String>) -> Result<()> {
        let mut tables = self.tables.write();
        let word = tables
            .words
            .get_mut(&word_id)
            .ok_or_else(|| LexisError::not_found(format!("word {word_id}")))?;
        word.note = note;
        Ok(())
    }

    /// Words currently in the word book, ordered by id.
    pub fn bookmarked_words(&self) -> Vec<BookmarkedWord> {
        let tables = self.tables.read();
        tables
            .words
            .values()
            .filter_map(|word| {
                let bookmark = tables.bookmarks.get(&word.id)?;
                bookmark.marked.then(|| BookmarkedWord {
                    word: word.clone(),
                    added_at: bookmark.created_at,
                    updated_at: bookmark.updated_at,
                })
            })
            .collect()
    }
}

impl VocabularySource for MemoryVocabulary {
    fn list_all_words(&self) -> Result<Vec<VocabularyRecord>> {
        let tables = self.tables.read();
        Ok(tables
            .words
            .values()
            .map(|w| VocabularyRecord::new(w.id, w.word.clone()))
            .collect())
    }

    fn list_all_phrases(&self) -> Result<Vec<VocabularyRecord>> {
        let tables = self.tables.read();
        Ok(tables
            .phrases
            .values()
            .map(|p| VocabularyRecord::new(p.id, p.phrase.clone()))
            .collect())
    }
}

impl VocabularySink for MemoryVocabulary {
    fn save(&self, kind: EntryKind, text: &str) -> Result<EntryId> {
        let id = match kind {
            EntryKind::Word => self.insert_word(WordRecord::new(text)).id,
            EntryKind::Phrase => self.insert_phrase(PhraseRecord::new(text)).id,
        };
        Ok(id)
    }
}

impl MetadataSource for MemoryVocabulary {
    fn get_metadata(&self, kind: EntryKind, id: EntryId) -> Result<Option<EntryMetadata>> {
        let tables = self.tables.read();
        let metadata = match kind {
            EntryKind::Word => tables.words.get(&id).map(|word| EntryMetadata {
                note: word.note.clone(),
                bookmarked: tables.bookmarks.get(&id).map(|b| b.marked),
            }),
            EntryKind::Phrase => tables.phrases.get(&id).map(|_| EntryMetadata::default()),
        };
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_per_kind() {
        let vocab = MemoryVocabulary::new();
        let a = vocab.insert_word(WordRecord::new("apple"));
        let b = vocab.insert_word(WordRecord::new("banana"));
        let p = vocab.insert_phrase(PhraseRecord::new("take place"));

        assert_eq!(a.id, EntryId(1));
        assert_eq!(b.id, EntryId(2));
        assert_eq!(p.id, EntryId(1));
        assert_eq!(p.len, 2);
        assert_eq!(vocab.word_count(), 2);
        assert_eq!(vocab.phrase_count(), 1);
    }

    #[test]
    fn test_find_word_falls_back_to_lowercase() {
        let vocab = MemoryVocabulary::new();
        vocab.insert_word(WordRecord::new("meeting"));
        assert!(vocab.find_word("meeting").is_some());
        assert!(vocab.find_word("Meeting").is_some());
        assert!(vocab.find_word("meet").is_none());
    }

    #[test]
    fn test_toggle_bookmark() {
        let vocab = MemoryVocabulary::new();
        let word = vocab.insert_word(WordRecord::new("apple"));

        assert!(vocab.toggle_bookmark(word.id).unwrap());
        assert_eq!(vocab.bookmarked_words().len(), 1);
        assert!(!vocab.toggle_bookmark(word.id).unwrap());
        assert!(vocab.bookmarked_words().is_empty());
    }

    #[test]
    fn test_toggle_bookmark_unknown_word() {
        let vocab = MemoryVocabulary::new();
        let err = vocab.toggle_bookmark(EntryId(42)).unwrap_err();
        assert!(matches!(err, LexisError::NotFound(_)));
    }

    #[test]
    fn test_update_note_and_metadata() {
        let vocab = MemoryVocabulary::new();
        let word = vocab.insert_word(WordRecord::new("apple"));

        let metadata = vocab.get_metadata(EntryKind::Word, word.id).unwrap().unwrap();
        assert_eq!(metadata, EntryMetadata::default());

        vocab
            .update_note(word.id, Some("fruit".to_string()))
            .unwrap();
        vocab.toggle_bookmark(word.id).unwrap();

        let metadata = vocab.get_metadata(EntryKind::Word, word.id).unwrap().unwrap();
        assert_eq!(metadata.note.as_deref(), Some("fruit"));
        assert_eq!(metadata.bookmarked, Some(true));

        assert!(
            vocab
                .get_metadata(EntryKind::Word, EntryId(99))
                .unwrap()
                .is_none()
        );
        assert!(vocab.update_note(EntryId(99), None).is_err());
    }

    #[test]
    fn test_sink_and_source() {
        let vocab = MemoryVocabulary::new();
        let word_id = vocab.save(EntryKind::Word, "serendipity").unwrap();
        let phrase_id = vocab.save(EntryKind::Phrase, "by chance").unwrap();

        let words = vocab.list_all_words().unwrap();
        assert_eq!(words, vec![VocabularyRecord::new(word_id, "serendipity")]);
        let phrases = vocab.list_all_phrases().unwrap();
        assert_eq!(phrases, vec![VocabularyRecord::new(phrase_id, "by chance")]);

        let stored = vocab.word(word_id).unwrap();
        assert_eq!(stored.pronunciation, UNKNOWN_PRONUNCIATION);
        let stored = vocab.phrase(phrase_id).unwrap();
        assert_eq!(stored.phrase, "by chance");
        assert_eq!(stored.len, 2);
        assert!(vocab.phrase(EntryId(7)).is_none());
        assert!(
            vocab
                .get_metadata(EntryKind::Phrase, phrase_id)
                .unwrap()
                .is_some()
        );
    }
}
