//! Deterministic word/punctuation tokenizer.
//!
//! The tokenizer first collapses every whitespace run (newlines included) into
//! a single space and trims the ends. It then scans left to right, emitting
//! either a maximal run of word characters (Unicode alphanumerics and `_`) or
//! exactly one punctuation mark from [`PUNCTUATION`]. Anything else is skipped.

use lazy_static::lazy_static;
use regex::Regex;

use super::token::{Token, TokenKind};

/// Punctuation marks that are emitted as standalone tokens.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '-',
];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref TOKEN: Regex = Regex::new(r#"[\p{Alphabetic}\p{N}_]+|[.,!?;:'"()\[\]{}\-]"#).unwrap();
}

/// Collapse whitespace runs into single spaces and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Split text into an ordered sequence of word and punctuation tokens.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<Token> {
    let normalized = normalize_whitespace(text);
    TOKEN
        .find_iter(&normalized)
        .map(|m| {
            let text = m.as_str();
            Token::new(text, classify(text))
        })
        .collect()
}

/// Rejoin token texts with single spaces.
///
/// This is the form used for n-gram lookup keys, and feeding the output back
/// into [`tokenize`] reproduces the same sequence.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn classify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if PUNCTUATION.contains(&c) => TokenKind::Punctuation,
        _ => TokenKind::Word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_tokenize_sentence() {
        let tokens = tokenize("I go to the meeting tomorrow.");
        assert_eq!(
            texts(&tokens),
            vec!["I", "go", "to", "the", "meeting", "tomorrow", "."]
        );
        assert_eq!(tokens[6].kind, TokenKind::Punctuation);
        assert!(tokens[..6].iter().all(Token::is_word));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize("  take\n\n place \t today  ");
        assert_eq!(texts(&tokens), vec!["take", "place", "today"]);
    }

    #[test]
    fn test_tokenize_punctuation_set() {
        let tokens = tokenize(r#"(a) [b] {c} "d" 'e' f-g; h: i! j? k,"#);
        assert_eq!(
            texts(&tokens),
            vec![
                "(", "a", ")", "[", "b", "]", "{", "c", "}", "\"", "d", "\"", "'", "e", "'", "f",
                "-", "g", ";", "h", ":", "i", "!", "j", "?", "k", ","
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_other_symbols() {
        let tokens = tokenize("cost: $5 @ 10% & more");
        assert_eq!(texts(&tokens), vec!["cost", ":", "5", "10", "more"]);
    }

    #[test]
    fn test_tokenize_word_characters() {
        let tokens = tokenize("snake_case v2 café");
        assert_eq!(texts(&tokens), vec!["snake_case", "v2", "café"]);
        assert!(tokens.iter().all(Token::is_word));
    }

    #[test]
    fn test_tokenize_contraction() {
        let tokens = tokenize("don't");
        assert_eq!(texts(&tokens), vec!["don", "'", "t"]);
    }

    #[test]
    fn test_tokenize_splits_on_connector_punctuation() {
        assert_eq!(texts(&tokenize("a\u{203F}b")), vec!["a", "b"]);
        assert_eq!(texts(&tokenize("x\u{FF3F}y")), vec!["x", "y"]);
        assert_eq!(texts(&tokenize("a_b")), vec!["a_b"]);
    }

    #[test]
    fn test_tokenize_rejoined_is_stable() {
        let inputs = [
            "I go to the meeting tomorrow.",
            "Well...  (maybe) - \"yes\"!",
            "look forward to it",
        ];
        for input in inputs {
            let first = tokenize(input);
            let second = tokenize(&join_tokens(&first));
            assert_eq!(first, second, "input: {input}");
        }
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace(" a \n b\t\tc "), "a b c");
        assert_eq!(normalize_whitespace(""), "");
    }
}
