//! Word and phrase indices.
//!
//! # Module Structure
//!
//! - `entry`: Index payload types (`IndexEntry`, `EntryId`, `EntryKind`)
//! - `trie`: Unsynchronized prefix tree
//! - `index`: `LexiconIndex`, the prefix tree behind a read/write lock
//! - `store`: `Lexicon`, owner of both indices and the single mutation entry point

pub mod entry;
pub mod index;
pub mod store;
pub mod trie;

// Re-exports
pub use entry::{EntryId, EntryKind, IndexEntry, fold_case};
pub use index::{IndexStats, LexiconIndex};
pub use store::{Lexicon, LoadStats};
pub use trie::Trie;
