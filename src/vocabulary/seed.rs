//! CSV seed import.
//!
//! Seed files carry a header row followed by one record per line:
//!
//! ```text
//! words.csv:   word,lemma,pronunciation,derivation,tip
//! phrases.csv: phrase,len,main_idx,pronunciation,derivation,tip
//! ```
//!
//! Word derivations are comma separated and phrase derivations semicolon
//! separated, so both fields are usually quoted. Rows with too few fields are
//! skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};

use crate::error::{LexisError, Result};
use crate::vocabulary::memory::{MemoryVocabulary, PhraseRecord, WordRecord};

const WORD_FIELDS: usize = 5;
const PHRASE_FIELDS: usize = 6;

/// Parse word records from CSV.
pub fn read_words<R: Read>(reader: R) -> Result<Vec<WordRecord>> {
    let mut words = Vec::new();
    for (line, record) in records(reader) {
        let record = record?;
        if record.len() < WORD_FIELDS {
            warn!(
                "Skipping word row at line {line}: expected {WORD_FIELDS} fields, found {}",
                record.len()
            );
            continue;
        }
        let mut word = WordRecord::new(&record[0]);
        word.lemma = record[1].to_string();
        word.pronunciation = record[2].to_string();
        word.derivation = split_list(&record[3], ',');
        word.tip = record[4].to_string();
        words.push(word);
    }
    Ok(words)
}

/// Parse phrase records from CSV.
pub fn read_phrases<R: Read>(reader: R) -> Result<Vec<PhraseRecord>> {
    let mut phrases = Vec::new();
    for (line, record) in records(reader) {
        let record = record?;
        if record.len() < PHRASE_FIELDS {
            warn!(
                "Skipping phrase row at line {line}: expected {PHRASE_FIELDS} fields, found {}",
                record.len()
            );
            continue;
        }
        let mut phrase = PhraseRecord::new(&record[0]);
        phrase.len = parse_number(&record[1], "len", line)?;
        phrase.main_idx = parse_number(&record[2], "main_idx", line)?;
        phrase.pronunciation = record[3].to_string();
        phrase.derivation = split_list(&record[4], ';');
        phrase.tip = record[5].to_string();
        phrases.push(phrase);
    }
    Ok(phrases)
}

impl MemoryVocabulary {
    /// Load word and phrase seed files into this store.
    ///
    /// Returns the number of words and phrases inserted.
    pub fn seed_from_csv<W, P>(&self, words_path: W, phrases_path: P) -> Result<(usize, usize)>
    where
        W: AsRef<Path>,
        P: AsRef<Path>,
    {
        let words = read_words(File::open(words_path.as_ref())?)?;
        let phrases = read_phrases(File::open(phrases_path.as_ref())?)?;
        let counts = (words.len(), phrases.len());

        for word in words {
            self.insert_word(word);
        }
        for phrase in phrases {
            self.insert_phrase(phrase);
        }

        info!(
            "Seeded {} words from {} and {} phrases from {}",
            counts.0,
            words_path.as_ref().display(),
            counts.1,
            phrases_path.as_ref().display()
        );
        Ok(counts)
    }
}

/// Iterate data rows paired with their 1-based source line.
fn records<R: Read>(reader: R) -> impl Iterator<Item = (u64, csv::Result<StringRecord>)> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|record| {
            let position = match &record {
                Ok(r) => r.position(),
                Err(e) => e.position(),
            };
            (position.map_or(0, |p| p.line()), record)
        })
}

fn parse_number(field: &str, name: &str, line: u64) -> Result<usize> {
    field.parse().map_err(|_| {
        LexisError::invalid_argument(format!(
            "line {line}: field '{name}' must be a non-negative integer, got '{field}'"
        ))
    })
}

fn split_list(field: &str, separator: char) -> Vec<String> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
