//! N-gram resolution of token positions.
//!
//! Given a token sequence and a position, the resolver decides whether that
//! position belongs to a known phrase or is a standalone word. Longer phrases
//! shadow their constituent words, and the 3-gram window is centred on the
//! queried token because a phrase is anchored on a head token that need not
//! be its first one.
//!
//! Policy, first hit wins:
//!
//! 1. 3-gram `[i-1, i+1]` in the phrase index
//! 2. 2-gram `[i, i+1]` in the phrase index
//! 3. 2-gram `[i-1, i]` in the phrase index
//! 4. `tokens[i]` in the word index
//! 5. [`MatchResult::Unknown`]
//!
//! Resolution is read-only: it never inserts into an index and never reaches
//! out to an external source. What to do with an `Unknown` result is up to
//! the caller (see [`Lexicon::learn`](crate::lexicon::Lexicon::learn)).

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::join_tokens;
use crate::error::{LexisError, Result};
use crate::lexicon::entry::{IndexEntry, fold_case};
use crate::lexicon::index::LexiconIndex;

/// Inclusive token index range consumed by a phrase match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    pub fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi);
        Span { lo, hi }
    }

    /// Number of tokens covered.
    pub fn width(&self) -> usize {
        self.hi - self.lo + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.lo..=self.hi).contains(&index)
    }
}

/// Outcome of resolving one token position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchResult {
    /// The position is part of an indexed phrase.
    Phrase { entry: IndexEntry, span: Span },
    /// The token is an indexed word.
    Word { entry: IndexEntry },
    /// Neither a phrase nor a known word.
    Unknown { raw_text: String },
}

impl MatchResult {
    /// The matched entry, if any.
    pub fn entry(&self) -> Option<&IndexEntry> {
        match self {
            MatchResult::Phrase { entry, .. } | MatchResult::Word { entry } => Some(entry),
            MatchResult::Unknown { .. } => None,
        }
    }

    /// Text to display for this match.
    pub fn text(&self) -> &str {
        match self {
            MatchResult::Phrase { entry, .. } | MatchResult::Word { entry } => {
                &entry.canonical_text
            }
            MatchResult::Unknown { raw_text } => raw_text,
        }
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, MatchResult::Phrase { .. })
    }

    pub fn is_word(&self) -> bool {
        matches!(self, MatchResult::Word { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MatchResult::Unknown { .. })
    }
}

/// Longest-match resolver over a phrase index and a word index.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    phrases: &'a LexiconIndex,
    words: &'a LexiconIndex,
}

impl<'a> Resolver<'a> {
    pub fn new(phrases: &'a LexiconIndex, words: &'a LexiconIndex) -> Self {
        Resolver { phrases, words }
    }

    /// Resolve the token at `index`.
    ///
    /// Fails with [`LexisError::IndexOutOfRange`] if `index >= tokens.len()`.
    pub fn resolve(&self, tokens: &[Token], index: usize) -> Result<MatchResult> {
        if index >= tokens.len() {
            return Err(LexisError::index_out_of_range(index, tokens.len()));
        }

        if let Some(result) = self.match_phrase(tokens, index) {
            debug!("Resolved token {index} to phrase '{}'", result.text());
            return Ok(result);
        }

        let token = &tokens[index];
        let result = match self.words.get_exact(&token.text) {
            Some(entry) => MatchResult::Word { entry },
            None => MatchResult::Unknown {
                raw_text: token.text.clone(),
            },
        };
        debug!("Resolved token {index} ('{token}') to {result:?}");
        Ok(result)
    }

    /// Resolve every distinct word token against the word index.
    ///
    /// Only purely alphabetic tokens are considered, so punctuation, numbers
    /// and mixed tokens such as `v2` are skipped. Words are deduplicated
    /// case-insensitively, keeping the first occurrence. Phrases are not
    /// consulted.
    pub fn distinct_words(&self, tokens: &[Token]) -> Vec<MatchResult> {
        let mut seen = AHashSet::new();
        tokens
            .iter()
            .filter(|token| token.is_word() && token.text.chars().all(char::is_alphabetic))
            .filter(|token| seen.insert(fold_case(&token.text)))
            .map(|token| match self.words.get_exact(&token.text) {
                Some(entry) => MatchResult::Word { entry },
                None => MatchResult::Unknown {
                    raw_text: token.text.clone(),
                },
            })
            .collect()
    }

    fn match_phrase(&self, tokens: &[Token], index: usize) -> Option<MatchResult> {
        let has_left = index > 0;
        let has_right = index + 1 < tokens.len();

        let mut candidates = Vec::with_capacity(2);
        if has_left && has_right {
            candidates.push(Span::new(index - 1, index + 1));
        }
        if has_right {
            candidates.push(Span::new(index, index + 1));
        } else if has_left {
            candidates.push(Span::new(index - 1, index));
        }

        candidates.into_iter().find_map(|span| {
            let key = join_tokens(&tokens[span.lo..=span.hi]);
            self.phrases
                .get_exact(&key)
                .map(|entry| MatchResult::Phrase { entry, span })
        })
    }
}
