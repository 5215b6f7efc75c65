//! Prefixed shingle filter.
//!
//! The first token of a stream is held aside as a prefix. Every following
//! token starts a family of n-grams ("shingles") and each n-gram is emitted
//! as a single token whose text is the prefix joined to the n-gram words:
//!
//! ```text
//! input:   prefix please divide this       (max_shingle_size = 2)
//!
//! output:  "prefix please"          word     pos_inc=1
//!          "prefix please divide"   shingle  pos_inc=0
//!          "prefix divide"          word     pos_inc=1
//!          "prefix divide this"     shingle  pos_inc=0
//!          "prefix this"            word     pos_inc=1
//! ```
//!
//! Positions removed upstream (`pos_inc > 1`) are filled with `_` so that
//! every shingle keeps its nominal word count.
//!
//! [`PrefixedShingleFilter`] plugs into the [`Filter`] pipeline;
//! [`PrefixedShingleStream`] is the pull-based form over any
//! [`TokenSource`](crate::analysis::token_source::TokenSource).
//!
//! # Examples
//!
//! ```
//! use prefix_shingle::analysis::token::Token;
//! use prefix_shingle::analysis::token_filter::Filter;
//! use prefix_shingle::analysis::token_filter::prefixed_shingle::PrefixedShingleFilter;
//!
//! let filter = PrefixedShingleFilter::new();
//! let tokens = vec![Token::new("prefix"), Token::new("please"), Token::new("divide")];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 3);
//! assert_eq!(result[0].text, "prefix please");
//! assert_eq!(result[1].text, "prefix please divide");
//! assert_eq!(result[2].text, "prefix divide");
//! ```

mod formatter;
mod policy;
mod window;

pub mod config;
pub mod stream;

pub use config::{
    DEFAULT_MAX_SHINGLE_SIZE, DEFAULT_MIN_SHINGLE_SIZE, DEFAULT_TOKEN_SEPARATOR, FILLER_TOKEN,
    ShingleConfig,
};
pub use stream::PrefixedShingleStream;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_source::{TokenSource, VecTokenSource};
use crate::error::Result;

/// A filter that emits a fixed prefix joined to shingles of the remaining tokens.
///
/// The filter itself only holds a validated configuration, so one instance
/// can be shared and applied to many streams.
#[derive(Clone, Debug, Default)]
pub struct PrefixedShingleFilter {
    config: ShingleConfig,
}

impl PrefixedShingleFilter {
    /// Create a filter with the default configuration (bigrams plus unigrams).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter from a configuration, validating it.
    pub fn with_config(config: ShingleConfig) -> Result<Self> {
        config.validate()?;
        Ok(PrefixedShingleFilter { config })
    }

    /// Create a filter emitting shingles of 2 up to `max_shingle_size` words.
    pub fn with_max_size(max_shingle_size: usize) -> Result<Self> {
        Self::with_config(ShingleConfig::with_max_size(max_shingle_size))
    }

    /// Create a filter emitting shingles of `min_shingle_size` up to `max_shingle_size` words.
    pub fn with_sizes(min_shingle_size: usize, max_shingle_size: usize) -> Result<Self> {
        Self::with_config(ShingleConfig::with_sizes(min_shingle_size, max_shingle_size))
    }

    /// The filter configuration.
    pub fn config(&self) -> &ShingleConfig {
        &self.config
    }

    /// Open a pull-based stream over `source`.
    pub fn stream<S: TokenSource>(&self, source: S) -> Result<PrefixedShingleStream<S>> {
        PrefixedShingleStream::new(source, self.config.clone())
    }
}

impl Filter for PrefixedShingleFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stream = self.stream(VecTokenSource::new(tokens.collect()))?;
        let shingles = stream.collect::<Result<Vec<Token>>>()?;
        Ok(Box::new(shingles.into_iter()))
    }

    fn name(&self) -> &'static str {
        "prefixed_shingle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_filter_trait() {
        let filter = PrefixedShingleFilter::with_max_size(3).unwrap();
        let tokens = vec![
            Token::with_offsets("prefix", 0, 6),
            Token::with_offsets("a", 7, 8),
            Token::with_offsets("b", 9, 10),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "prefix a");
        assert_eq!(result[0].token_type, TokenType::Word);
        assert_eq!(result[1].text, "prefix a b");
        assert_eq!((result[1].start_offset, result[1].end_offset), (7, 10));
        assert_eq!(result[1].token_type, TokenType::Shingle);
        assert_eq!(result[2].text, "prefix b");
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(PrefixedShingleFilter::with_max_size(1).is_err());
        assert!(PrefixedShingleFilter::with_sizes(3, 2).is_err());
        assert!(PrefixedShingleFilter::with_sizes(2, 5).is_ok());
    }

    #[test]
    fn test_empty_stream() {
        let filter = PrefixedShingleFilter::new();
        let result: Vec<Token> = filter.filter(Box::new(std::iter::empty())).unwrap().collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(PrefixedShingleFilter::new().name(), "prefixed_shingle");
    }
}
