//! Analyzer combining a tokenizer with the prefixed shingle filter.
//!
//! One analyzer owns one shingle stream and rebinds it to each new text, so
//! repeated calls reuse the same filter instance.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use prefix_shingle::analysis::analyzer::ShingleAnalyzer;
//! use prefix_shingle::analysis::token_filter::ShingleConfig;
//! use prefix_shingle::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let mut analyzer =
//!     ShingleAnalyzer::new(Arc::new(WhitespaceTokenizer::new()), ShingleConfig::default()).unwrap();
//!
//! let tokens = analyzer.analyze("user42 red shoes").unwrap();
//! assert_eq!(tokens[1].text, "user42 red shoes");
//! assert_eq!(analyzer.prefix(), Some("user42"));
//!
//! let tokens = analyzer.analyze("user7 blue").unwrap();
//! assert_eq!(tokens[0].text, "user7 blue");
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::token::Token;
use crate::analysis::token_filter::prefixed_shingle::{PrefixedShingleStream, ShingleConfig};
use crate::analysis::token_source::TokenizerSource;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Tokenizer followed by a prefixed shingle filter.
pub struct ShingleAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    stream: PrefixedShingleStream<TokenizerSource>,
}

impl ShingleAnalyzer {
    /// Create an analyzer. Fails if `config` is invalid.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, config: ShingleConfig) -> Result<Self> {
        let source = TokenizerSource::new(Arc::clone(&tokenizer), "");
        let stream = PrefixedShingleStream::new(source, config)?;
        Ok(ShingleAnalyzer { tokenizer, stream })
    }

    /// Analyze `text` into prefixed shingles.
    pub fn analyze(&mut self, text: &str) -> Result<Vec<Token>> {
        self.stream
            .reset_with(TokenizerSource::new(Arc::clone(&self.tokenizer), text));

        let mut tokens = Vec::new();
        while let Some(token) = self.stream.next_token()? {
            tokens.push(token);
        }
        debug!(
            "{} analyzed {} byte(s) into {} token(s)",
            self.name(),
            text.len(),
            tokens.len()
        );
        Ok(tokens)
    }

    /// Text of the prefix captured by the last call to [`analyze`](Self::analyze).
    pub fn prefix(&self) -> Option<&str> {
        self.stream.prefix().map(|token| token.text.as_str())
    }

    /// The shingle configuration.
    pub fn config(&self) -> &ShingleConfig {
        self.stream.config()
    }

    /// Name of this analyzer, derived from its tokenizer.
    pub fn name(&self) -> String {
        format!("prefixed_shingle_{}", self.tokenizer.name())
    }
}
