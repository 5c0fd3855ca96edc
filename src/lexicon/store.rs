//! The lexicon: owner of the word and phrase indices.
//!
//! A `Lexicon` is seeded once from a [`VocabularySource`] and then grows one
//! entry at a time as the application learns new words and phrases. Opening
//! a lexicon performs the whole bulk load before returning, so every
//! `Lexicon` value a caller holds is ready to serve lookups.
//!
//! # Lock ordering
//!
//! The two indices have independent locks. Code that consults both always
//! goes phrase index first, then word index, and never holds both at once.

use log::{debug, info, warn};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::normalize_whitespace;
use crate::error::Result;
use crate::lexicon::entry::{EntryId, EntryKind, IndexEntry};
use crate::lexicon::index::{IndexStats, LexiconIndex};
use crate::resolve::{MatchResult, Resolver};
use crate::vocabulary::{VocabularySink, VocabularySource};

/// Counts reported by [`Lexicon::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    pub words: usize,
    pub phrases: usize,
}

/// Word and phrase indices for one process.
#[derive(Debug)]
pub struct Lexicon {
    words: LexiconIndex,
    phrases: LexiconIndex,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            words: LexiconIndex::new(EntryKind::Word),
            phrases: LexiconIndex::new(EntryKind::Phrase),
        }
    }

    /// Create a lexicon seeded with every word and phrase from `source`.
    pub fn open(source: &dyn VocabularySource) -> Result<Self> {
        let lexicon = Self::new();
        lexicon.load(source)?;
        Ok(lexicon)
    }

    /// Bulk-load every word and phrase from `source`.
    pub fn load(&self, source: &dyn VocabularySource) -> Result<LoadStats> {
        info!("Loading vocabulary into lexicon");

        let words = source.list_all_words()?;
        let word_count = words.len();
        let added_words = self.words.bulk_load(words);
        info!("Loaded {added_words} words into word index ({word_count} records)");

        let phrases = source.list_all_phrases()?;
        let phrase_count = phrases.len();
        let added_phrases = self.phrases.bulk_load(phrases);
        info!("Loaded {added_phrases} phrases into phrase index ({phrase_count} records)");

        Ok(LoadStats {
            words: added_words,
            phrases: added_phrases,
        })
    }

    /// Insert or overwrite an entry in the index for `kind`.
    ///
    /// This is the only way entries enter the lexicon after loading. Returns
    /// `true` if the key is new. An empty key is ignored.
    pub fn insert(&self, kind: EntryKind, key: &str, id: EntryId, canonical_text: &str) -> bool {
        self.index(kind).insert(key, id, canonical_text)
    }

    /// Persist `text` through `sink` and index the result.
    ///
    /// Whitespace runs are collapsed first, so a learned phrase is keyed the
    /// same way the resolver joins tokens. Returns `Ok(None)` without
    /// touching the sink when `text` is blank.
    pub fn learn(
        &self,
        kind: EntryKind,
        text: &str,
        sink: &dyn VocabularySink,
    ) -> Result<Option<IndexEntry>> {
        let text = normalize_whitespace(text);
        if text.is_empty() {
            warn!("Ignoring request to learn a blank {kind}");
            return Ok(None);
        }

        let id = sink.save(kind, &text)?;
        self.insert(kind, &text, id, &text);
        debug!("Learned {kind} '{text}' as {id}");
        Ok(self.index(kind).get_exact(&text))
    }

    /// Resolve the token at `index`; see [`Resolver::resolve`].
    pub fn resolve(&self, tokens: &[Token], index: usize) -> Result<MatchResult> {
        self.resolver().resolve(tokens, index)
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.phrases, &self.words)
    }

    pub fn index(&self, kind: EntryKind) -> &LexiconIndex {
        match kind {
            EntryKind::Word => &self.words,
            EntryKind::Phrase => &self.phrases,
        }
    }

    pub fn words(&self) -> &LexiconIndex {
        &self.words
    }

    pub fn phrases(&self) -> &LexiconIndex {
        &self.phrases
    }

    pub fn stats(&self) -> (IndexStats, IndexStats) {
        (self.words.stats(), self.phrases.stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::LexisError;
    use crate::vocabulary::VocabularyRecord;

    struct FixedSource;

    impl VocabularySource for FixedSource {
        fn list_all_words(&self) -> Result<Vec<VocabularyRecord>> {
            Ok(vec![
                VocabularyRecord::new(EntryId(1), "take"),
                VocabularyRecord::new(EntryId(2), "place"),
                VocabularyRecord::new(EntryId(3), "Take"),
            ])
        }

        fn list_all_phrases(&self) -> Result<Vec<VocabularyRecord>> {
            Ok(vec![VocabularyRecord::new(EntryId(1), "take place")])
        }
    }

    struct BrokenSource;

    impl VocabularySource for BrokenSource {
        fn list_all_words(&self) -> Result<Vec<VocabularyRecord>> {
            Err(LexisError::collaborator("database unavailable"))
        }

        fn list_all_phrases(&self) -> Result<Vec<VocabularyRecord>> {
            Ok(Vec::new())
        }
    }

    struct CountingSink(parking_lot::Mutex<u64>);

    impl VocabularySink for CountingSink {
        fn save(&self, _kind: EntryKind, _text: &str) -> Result<EntryId> {
            let mut next = self.0.lock();
            *next += 1;
            Ok(EntryId(100 + *next))
        }
    }

    #[test]
    fn test_open_loads_both_indices() {
        let lexicon = Lexicon::new();
        let stats = lexicon.load(&FixedSource).unwrap();
        assert_eq!(stats, LoadStats { words: 2, phrases: 1 });

        assert!(lexicon.words().contains_exact("take"));
        assert_eq!(lexicon.words().get_exact("take").unwrap().id, EntryId(3));
        assert!(lexicon.phrases().contains_exact("Take Place"));
        assert!(!lexicon.words().contains_exact("take place"));
    }

    #[test]
    fn test_open_propagates_source_errors() {
        let err = Lexicon::open(&BrokenSource).unwrap_err();
        assert!(matches!(err, LexisError::Collaborator(_)));
    }

    #[test]
    fn test_insert_routes_by_kind() {
        let lexicon = Lexicon::new();
        assert!(lexicon.insert(EntryKind::Phrase, "get up", EntryId(5), "get up"));
        assert!(lexicon.phrases().contains_exact("get up"));
        assert!(lexicon.words().is_empty());
        assert!(!lexicon.insert(EntryKind::Word, "", EntryId(6), ""));
    }

    #[test]
    fn test_learn_saves_then_indexes() {
        let lexicon = Lexicon::new();
        let sink = CountingSink(parking_lot::Mutex::new(0));

        let entry = lexicon
            .learn(EntryKind::Word, " Serendipity ", &sink)
            .unwrap()
            .unwrap();
        assert_eq!(entry.id, EntryId(101));
        assert_eq!(entry.canonical_text, "Serendipity");
        assert!(lexicon.words().contains_exact("serendipity"));

        assert!(lexicon.learn(EntryKind::Word, "  ", &sink).unwrap().is_none());
        assert_eq!(*sink.0.lock(), 1);
    }

    #[test]
    fn test_learned_phrase_is_reachable_by_resolution() {
        let lexicon = Lexicon::new();
        let sink = CountingSink(parking_lot::Mutex::new(0));

        let entry = lexicon
            .learn(EntryKind::Phrase, " take \t place\n", &sink)
            .unwrap()
            .unwrap();
        assert_eq!(entry.key, "take place");
        assert_eq!(entry.canonical_text, "take place");

        let tokens = crate::analysis::tokenize("take place");
        assert!(lexicon.resolve(&tokens, 0).unwrap().is_phrase());
    }
}
