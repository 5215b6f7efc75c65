//! # prefix-shingle
//!
//! A prefixed shingle token filter for full-text analysis pipelines.
//!
//! The first token of every stream becomes a constant prefix that is joined
//! to each n-gram ("shingle") of the tokens that follow it, producing terms
//! such as `user42 red shoes` that scope phrase-like matching to the prefix.
//!
//! ## Features
//!
//! - Configurable shingle sizes, unigram output and separators
//! - Filler words for positions removed upstream
//! - Exact offsets and position increments for highlighting and phrase queries
//! - Pull-based streams that can be reset and reused

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenType};
    pub use crate::analysis::token_filter::{
        Filter, PrefixedShingleFilter, PrefixedShingleStream, ShingleConfig,
    };
    pub use crate::analysis::token_source::{TokenSource, TokenizerSource, VecTokenSource};
    pub use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
    pub use crate::error::{Result, ShingleError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
