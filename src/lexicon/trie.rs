//! Prefix tree keyed by case-folded characters.
//!
//! Each node exclusively owns its children, so the tree has no shared or
//! back references. Children live in a `BTreeMap`, which makes every
//! traversal visit siblings in ascending character order: prefix and
//! substring results come out sorted by key and are reproducible across runs.
//!
//! `Trie` itself is not synchronized. Shared access goes through
//! [`LexiconIndex`](super::index::LexiconIndex).

use std::collections::BTreeMap;

use crate::lexicon::entry::{EntryId, IndexEntry, fold_case};

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Present iff this node terminates an inserted key.
    entry: Option<IndexEntry>,
}

impl TrieNode {
    fn is_terminal(&self) -> bool {
        self.entry.is_some()
    }
}

/// A prefix tree mapping case-folded keys to [`IndexEntry`] payloads.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
    nodes: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` with its payload.
    ///
    /// Re-inserting an existing key overwrites the payload. An empty key is a
    /// no-op. Returns `true` if the key was not present before.
    pub fn insert(&mut self, key: &str, id: EntryId, canonical_text: &str) -> bool {
        let folded = fold_case(key);
        if folded.is_empty() {
            return false;
        }

        let mut created = 0;
        let mut current = &mut self.root;
        for c in folded.chars() {
            current = current.children.entry(c).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }
        self.nodes += created;

        let added = !current.is_terminal();
        current.entry = Some(IndexEntry {
            key: folded,
            canonical_text: canonical_text.to_string(),
            id,
        });
        if added {
            self.len += 1;
        }
        added
    }

    /// Look up the entry stored under the case-folded `key`.
    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        let folded = fold_case(key);
        if folded.is_empty() {
            return None;
        }
        self.descend(&folded).and_then(|node| node.entry.as_ref())
    }

    /// Whether `key` (case-folded) was inserted.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Collect every entry whose key starts with `prefix` (case-folded).
    ///
    /// An empty prefix matches nothing.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<IndexEntry> {
        let folded = fold_case(prefix);
        let mut results = Vec::new();
        if folded.is_empty() {
            return results;
        }
        if let Some(node) = self.descend(&folded) {
            collect(node, &mut results, |_| true);
        }
        results
    }

    /// Collect every entry whose canonical text contains `substring`,
    /// ignoring case.
    ///
    /// This walks the whole tree; cost is linear in the number of nodes.
    /// An empty substring matches nothing.
    pub fn search_by_substring(&self, substring: &str) -> Vec<IndexEntry> {
        let needle = fold_case(substring);
        let mut results = Vec::new();
        if needle.is_empty() {
            return results;
        }
        collect(&self.root, &mut results, |entry| {
            fold_case(&entry.canonical_text).contains(&needle)
        });
        results
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Vec<IndexEntry> {
        let mut results = Vec::with_capacity(self.len);
        collect(&self.root, &mut results, |_| true);
        results
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn descend(&self, folded: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in folded.chars() {
            current = current.children.get(&c)?;
        }
        Some(current)
    }
}

/// Depth-first, pre-order collection of terminal payloads accepted by `filter`.
///
/// Uses an explicit stack so long phrase keys cannot exhaust the call stack.
fn collect<F>(start: &TrieNode, results: &mut Vec<IndexEntry>, filter: F)
where
    F: Fn(&IndexEntry) -> bool,
{
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if let Some(entry) = &node.entry {
            if filter(entry) {
                results.push(entry.clone());
            }
        }
        // Reverse so the smallest child is popped first.
        stack.extend(node.children.values().rev());
    }
}
