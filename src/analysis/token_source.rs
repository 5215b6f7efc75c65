//! Pull-based token sources.
//!
//! A [`TokenSource`] is the upstream end of a filter: every pull yields a
//! token, signals end-of-stream with `Ok(None)`, or fails. Sources can be
//! reset to replay their tokens from the start.
//!
//! # Examples
//!
//! ```
//! use prefix_shingle::analysis::token::Token;
//! use prefix_shingle::analysis::token_source::{TokenSource, VecTokenSource};
//!
//! let mut source = VecTokenSource::new(vec![Token::new("a"), Token::new("b")]);
//! assert_eq!(source.next_token().unwrap().unwrap().text, "a");
//! assert_eq!(source.next_token().unwrap().unwrap().text, "b");
//! assert!(source.next_token().unwrap().is_none());
//!
//! source.reset().unwrap();
//! assert_eq!(source.next_token().unwrap().unwrap().text, "a");
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A lazy, finite, forward-only sequence of tokens.
pub trait TokenSource {
    /// Pull the next token, or `None` once the source is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Rewind the source so the next pull starts from the first token again.
    fn reset(&mut self) -> Result<()>;
}

/// A replayable source over an in-memory list of tokens.
#[derive(Clone, Debug, Default)]
pub struct VecTokenSource {
    tokens: Vec<Token>,
    cursor: usize,
}

impl VecTokenSource {
    /// Create a source that yields the given tokens in order.
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenSource { tokens, cursor: 0 }
    }

    /// Replace the tokens and rewind.
    pub fn replace(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.cursor = 0;
    }

    /// Number of tokens not yet pulled.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }
}

impl From<Vec<Token>> for VecTokenSource {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl TokenSource for VecTokenSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}

/// A source that runs a tokenizer over a piece of text.
///
/// The tokenizer is invoked on the first pull and its stream is consumed one
/// token per pull; tokenizer errors surface from that first pull. `reset`
/// tokenizes the text again. [`TokenizerSource::set_text`] rebinds the
/// source to new input.
pub struct TokenizerSource {
    tokenizer: Arc<dyn Tokenizer>,
    text: String,
    stream: Option<TokenStream>,
}

impl TokenizerSource {
    /// Create a source over `text`.
    pub fn new<S: Into<String>>(tokenizer: Arc<dyn Tokenizer>, text: S) -> Self {
        TokenizerSource {
            tokenizer,
            text: text.into(),
            stream: None,
        }
    }

    /// Replace the input text. The next pull tokenizes it from the start.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.stream = None;
    }

    /// The text currently bound to this source.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name of the underlying tokenizer.
    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }
}

impl TokenSource for TokenizerSource {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.stream.is_none() {
            self.stream = Some(self.tokenizer.tokenize(&self.text)?);
        }
        Ok(self.stream.as_mut().and_then(|stream| stream.next()))
    }

    fn reset(&mut self) -> Result<()> {
        self.stream = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::analysis::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_vec_source_replace() {
        let mut source = VecTokenSource::new(vec![Token::new("a")]);
        assert_eq!(source.remaining(), 1);
        source.next_token().unwrap();
        assert_eq!(source.remaining(), 0);

        source.replace(vec![Token::new("x"), Token::new("y")]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_token().unwrap().unwrap().text, "x");
    }

    #[test]
    fn test_vec_source_empty() {
        let mut source = VecTokenSource::default();
        assert!(source.next_token().unwrap().is_none());
        assert!(source.next_token().unwrap().is_none());
    }

    #[test]
    fn test_tokenizer_source_reset_and_rebind() {
        let mut source = TokenizerSource::new(Arc::new(WhitespaceTokenizer::new()), "one two");
        assert_eq!(source.tokenizer_name(), "whitespace");

        assert_eq!(source.next_token().unwrap().unwrap().text, "one");
        assert_eq!(source.next_token().unwrap().unwrap().text, "two");
        assert!(source.next_token().unwrap().is_none());

        source.reset().unwrap();
        assert_eq!(source.next_token().unwrap().unwrap().text, "one");

        source.set_text("three");
        assert_eq!(source.text(), "three");
        assert_eq!(source.next_token().unwrap().unwrap().text, "three");
        assert!(source.next_token().unwrap().is_none());
    }

    /// Counts how many tokens were taken from the streams it hands out.
    struct CountingTokenizer {
        pulled: Arc<AtomicUsize>,
    }

    impl Tokenizer for CountingTokenizer {
        fn tokenize(&self, text: &str) -> Result<TokenStream> {
            let pulled = Arc::clone(&self.pulled);
            let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize(text)?.collect();
            Ok(Box::new(tokens.into_iter().inspect(move |_| {
                pulled.fetch_add(1, Ordering::SeqCst);
            })))
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_tokenizer_source_pulls_one_token_at_a_time() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let tokenizer = Arc::new(CountingTokenizer {
            pulled: Arc::clone(&pulled),
        });
        let mut source = TokenizerSource::new(tokenizer, "a b c d");
        assert_eq!(pulled.load(Ordering::SeqCst), 0);

        assert_eq!(source.next_token().unwrap().unwrap().text, "a");
        assert_eq!(pulled.load(Ordering::SeqCst), 1);
        assert_eq!(source.next_token().unwrap().unwrap().text, "b");
        assert_eq!(pulled.load(Ordering::SeqCst), 2);

        source.reset().unwrap();
        assert_eq!(source.next_token().unwrap().unwrap().text, "a");
        assert_eq!(pulled.load(Ordering::SeqCst), 3);
    }
}
