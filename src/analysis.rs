//! Text analysis for Lexis.
//!
//! This module turns free-form text into the ordered token sequence consumed
//! by the resolver:
//!
//! ```text
//! Text → normalize whitespace → scan → Vec<Token>
//! ```
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::tokenize;
//!
//! let tokens = tokenize("I go to the meeting tomorrow.");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["I", "go", "to", "the", "meeting", "tomorrow", "."]);
//! ```
//!
//! # Modules
//!
//! - [`token`]: Token representation
//! - [`tokenizer`]: The deterministic word/punctuation tokenizer

pub mod token;
pub mod tokenizer;

// Re-exports
pub use token::{Token, TokenKind};
pub use tokenizer::{join_tokens, normalize_whitespace, tokenize};
