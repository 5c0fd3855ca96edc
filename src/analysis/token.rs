//! Token representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A maximal run of word characters.
    Word,
    /// A single punctuation mark.
    Punctuation,
}

/// A minimal lexical unit produced by the tokenizer.
///
/// A token's position is its index in the sequence returned by
/// [`tokenize`](super::tokenizer::tokenize).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The token text exactly as it appeared in the source.
    pub text: String,
    /// Whether this is a word or a punctuation mark.
    pub kind: TokenKind,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            kind,
        }
    }

    pub fn word<S: Into<String>>(text: S) -> Self {
        Self::new(text, TokenKind::Word)
    }

    pub fn punctuation<S: Into<String>>(text: S) -> Self {
        Self::new(text, TokenKind::Punctuation)
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
