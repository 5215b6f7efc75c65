//! Token types and utilities for text analysis.
//!
//! This module defines the value type that flows through the analysis
//! pipeline. A [`Token`] is an immutable snapshot: filters build a new token
//! for every emission instead of mutating a shared buffer.
//!
//! # Positions
//!
//! Tokens do not carry absolute positions. Each token records how far it
//! moves from the previous one through `position_increment`, and how many
//! positions it covers through `position_length`:
//!
//! ```text
//! Input: "please divide this"   ("divide" removed upstream)
//!
//!   "please" (pos_inc=1)
//!   "this"   (pos_inc=2)   ← one skipped position
//! ```
//!
//! # Examples
//!
//! ```
//! use prefix_shingle::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 6, 11).with_position_increment(2);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.position_increment, 2);
//! assert_eq!(token.token_type, TokenType::Word);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `position_increment` - Position relative to previous token (default: 1)
/// - `position_length` - Number of positions this token spans (default: 1)
/// - `token_type` - `word` for natural tokens and unigrams, `shingle` for n-grams
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 0: Same position as previous token
    /// - 1: Next position
    /// - >1: Skip positions (e.g., for removed stop words)
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    ///
    /// A shingle built from three words spans three positions.
    pub position_length: usize,

    /// Classification of the token.
    pub token_type: TokenType,
}

/// Token type tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// A natural token, or a unigram emitted by a shingle filter
    #[default]
    Word,
    /// An n-gram of two or more words
    Shingle,
}

impl TokenType {
    /// The tag as it appears in analyzer output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Word => "word",
            TokenType::Shingle => "shingle",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Create a new word token with zero offsets and a position increment of 1.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_offsets(text, 0, 0)
    }

    /// Create a new word token with byte offsets.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
            position_length: 1,
            token_type: TokenType::Word,
        }
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Whether this token was produced as a multi-word shingle.
    pub fn is_shingle(&self) -> bool {
        self.token_type == TokenType::Shingle
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
