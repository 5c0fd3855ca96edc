//! # Lexis
//!
//! A phrase-aware lexical lookup engine for language-learning tools.
//!
//! ## Features
//!
//! - Deterministic word/punctuation tokenizer
//! - Case-insensitive prefix-tree indices for words and phrases
//! - Longest-match n-gram resolution (phrases shadow words)
//! - Prefix, substring and exact keyword search with metadata enrichment
//! - Pluggable vocabulary source, sink and metadata collaborators
//!
//! ## Example
//!
//! ```
//! use lexis::analysis::tokenize;
//! use lexis::lexicon::{EntryKind, Lexicon};
//! use lexis::resolve::MatchResult;
//! use lexis::vocabulary::memory::{MemoryVocabulary, PhraseRecord, WordRecord};
//!
//! let vocabulary = MemoryVocabulary::new();
//! vocabulary.insert_word(WordRecord::new("take"));
//! vocabulary.insert_phrase(PhraseRecord::new("take place"));
//!
//! let lexicon = Lexicon::open(&vocabulary).unwrap();
//! let tokens = tokenize("The meeting will take place today.");
//!
//! match lexicon.resolve(&tokens, 3).unwrap() {
//!     MatchResult::Phrase { entry, span } => {
//!         assert_eq!(entry.canonical_text, "take place");
//!         assert_eq!((span.lo, span.hi), (3, 4));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! // Unknown words can be learned through the vocabulary sink.
//! assert!(lexicon.resolve(&tokens, 1).unwrap().is_unknown());
//! lexicon.learn(EntryKind::Word, "meeting", &vocabulary).unwrap();
//! assert!(lexicon.resolve(&tokens, 1).unwrap().is_word());
//! ```

pub mod analysis;
pub mod config;
mod error;
pub mod lexicon;
pub mod resolve;
pub mod search;
pub mod vocabulary;

// Re-exports for the public API
pub use analysis::{Token, TokenKind, tokenize};
pub use config::{LexisConfig, ModePolicy, SearchConfig};
pub use error::{LexisError, Result};
pub use lexicon::{EntryId, EntryKind, IndexEntry, Lexicon, LexiconIndex};
pub use resolve::{MatchResult, Resolver, Span};
pub use search::{SearchFacade, SearchHit, SearchMode, SearchRequest};
pub use vocabulary::{EntryMetadata, MetadataSource, VocabularySink, VocabularySource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
