//! Keyword search facade.
//!
//! [`SearchFacade`] dispatches a keyword to the matching index operation for
//! the requested [`SearchMode`] and then joins every raw hit with metadata
//! from a [`MetadataSource`]. Hits whose backing record has disappeared are
//! dropped; errors from the metadata source are returned to the caller.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexis::config::SearchConfig;
//! use lexis::lexicon::Lexicon;
//! use lexis::search::SearchFacade;
//! use lexis::vocabulary::memory::{MemoryVocabulary, WordRecord};
//!
//! let vocabulary = Arc::new(MemoryVocabulary::new());
//! vocabulary.insert_word(WordRecord::new("apple"));
//! vocabulary.insert_word(WordRecord::new("apply"));
//!
//! let lexicon = Arc::new(Lexicon::open(vocabulary.as_ref()).unwrap());
//! let facade = SearchFacade::new(lexicon, vocabulary, SearchConfig::default());
//!
//! let hits = facade.search("APP", "prefix").unwrap();
//! assert_eq!(hits.len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{ModePolicy, SearchConfig};
use crate::error::{LexisError, Result};
use crate::lexicon::entry::{EntryKind, IndexEntry, fold_case};
use crate::lexicon::store::Lexicon;
use crate::vocabulary::MetadataSource;

/// How a keyword is matched against index entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Keys starting with the keyword.
    #[default]
    Prefix,
    /// Canonical texts containing the keyword anywhere. Linear scan.
    Substring,
    /// A single entry equal to the keyword.
    Exact,
}

impl SearchMode {
    /// Parse `mode`, applying `policy` when it is not recognized.
    pub fn parse_with_policy(mode: &str, policy: ModePolicy) -> Result<Self> {
        match (mode.parse::<SearchMode>(), policy) {
            (Ok(mode), _) => Ok(mode),
            (Err(_), ModePolicy::Fallback) => {
                warn!("Unrecognized search mode '{mode}', falling back to prefix");
                Ok(SearchMode::Prefix)
            }
            (Err(err), ModePolicy::Strict) => Err(err),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Prefix => "prefix",
            SearchMode::Substring => "substring",
            SearchMode::Exact => "exact",
        }
    }
}

impl FromStr for SearchMode {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(SearchMode::Prefix),
            "substring" => Ok(SearchMode::Substring),
            "exact" => Ok(SearchMode::Exact),
            other => Err(LexisError::invalid_argument(format!(
                "unknown search mode '{other}' (expected prefix, substring or exact)"
            ))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
    pub mode: SearchMode,
    /// Which index to search.
    pub target: EntryKind,
    /// Overrides the configured `max_results` when set. Must be at least 1.
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new<S: Into<String>>(keyword: S) -> Self {
        SearchRequest {
            keyword: keyword.into(),
            mode: SearchMode::default(),
            target: EntryKind::Word,
            limit: None,
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_target(mut self, target: EntryKind) -> Self {
        self.target = target;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An index hit joined with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub kind: EntryKind,
    pub entry: IndexEntry,
    pub note: Option<String>,
    /// `None` if the entry was never added to the word book.
    pub bookmarked: Option<bool>,
}

/// Keyword search over a [`Lexicon`] with metadata enrichment.
pub struct SearchFacade {
    lexicon: Arc<Lexicon>,
    metadata: Arc<dyn MetadataSource>,
    config: SearchConfig,
}

impl fmt::Debug for SearchFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchFacade")
            .field("lexicon", &self.lexicon)
            .field("config", &self.config)
            .finish()
    }
}

impl SearchFacade {
    pub fn new(
        lexicon: Arc<Lexicon>,
        metadata: Arc<dyn MetadataSource>,
        config: SearchConfig,
    ) -> Self {
        SearchFacade {
            lexicon,
            metadata,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Search the default index with a mode given by name.
    ///
    /// A blank keyword yields no hits. Unrecognized modes are handled
    /// according to the configured [`ModePolicy`].
    pub fn search(&self, keyword: &str, mode: &str) -> Result<Vec<SearchHit>> {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mode = SearchMode::parse_with_policy(mode, self.config.mode_policy)?;
        let request = SearchRequest::new(keyword)
            .with_mode(mode)
            .with_target(self.config.default_target);
        self.search_request(&request)
    }

    /// Execute a typed search request.
    ///
    /// A `limit` of zero is rejected, matching the `max_results` check in
    /// [`LexisConfig::validate`](crate::config::LexisConfig::validate).
    pub fn search_request(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        if request.limit == Some(0) {
            return Err(LexisError::invalid_argument("search limit must be at least 1"));
        }
        let entries = self.lookup(request.target, &request.keyword, request.mode);
        debug!(
            "{} search for '{}' in {} index matched {} entries",
            request.mode,
            request.keyword,
            request.target,
            entries.len()
        );

        let mut hits = self.enrich(request.target, entries)?;
        if let Some(limit) = request.limit.or(self.config.max_results) {
            hits.truncate(limit);
        }
        Ok(hits)
    }

    /// Raw index lookup without enrichment.
    pub fn lookup(&self, target: EntryKind, keyword: &str, mode: SearchMode) -> Vec<IndexEntry> {
        if keyword.trim().is_empty() {
            return Vec::new();
        }

        let index = self.lexicon.index(target);
        match mode {
            SearchMode::Prefix => index.search_by_prefix(&fold_case(keyword)),
            SearchMode::Substring => index.search_by_substring(&fold_case(keyword)),
            SearchMode::Exact => index
                .get_case_sensitive(keyword)
                .or_else(|| index.get_exact(&fold_case(keyword)))
                .into_iter()
                .collect(),
        }
    }

    /// Join raw entries with metadata, dropping entries without a backing record.
    fn enrich(&self, kind: EntryKind, entries: Vec<IndexEntry>) -> Result<Vec<SearchHit>> {
        let mut hits = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.metadata.get_metadata(kind, entry.id)? {
                Some(metadata) => hits.push(SearchHit {
                    kind,
                    entry,
                    note: metadata.note,
                    bookmarked: metadata.bookmarked,
                }),
                None => debug!("Dropping {kind} hit {} without a backing record", entry.id),
            }
        }
        Ok(hits)
    }
}
