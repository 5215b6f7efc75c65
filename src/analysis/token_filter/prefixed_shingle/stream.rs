//! Pull-based prefixed shingle stream.

use log::{debug, trace};

use super::config::ShingleConfig;
use super::formatter::TermFormatter;
use super::policy::GramSizes;
use super::window::ShingleWindow;
use crate::analysis::token::{Token, TokenType};
use crate::analysis::token_source::TokenSource;
use crate::error::{Result, ShingleError};

/// Everything that changes while a stream is consumed. Rebuilt on reset.
#[derive(Debug)]
struct StreamState {
    prefix: Option<Token>,
    window: ShingleWindow,
    sizes: GramSizes,
    /// Increment owed to the next emitted token.
    pending_increment: usize,
    shingle_emitted: bool,
    started: bool,
    finished: bool,
    emitted: usize,
}

impl StreamState {
    fn new(config: &ShingleConfig) -> Self {
        StreamState {
            prefix: None,
            window: ShingleWindow::new(config.max_shingle_size),
            sizes: GramSizes::new(
                config.min_shingle_size,
                config.max_shingle_size,
                config.output_unigrams,
            ),
            pending_increment: 0,
            shingle_emitted: false,
            started: false,
            finished: false,
            emitted: 0,
        }
    }
}

/// Emits the first token of its source joined to every shingle of the rest.
///
/// Given `prefix please divide this` and the default configuration the
/// stream yields `prefix please`, `prefix please divide`, `prefix divide`,
/// `prefix divide this`, `prefix this`.
///
/// # Examples
///
/// ```
/// use prefix_shingle::analysis::token::Token;
/// use prefix_shingle::analysis::token_filter::prefixed_shingle::{
///     PrefixedShingleStream, ShingleConfig,
/// };
/// use prefix_shingle::analysis::token_source::VecTokenSource;
///
/// let source = VecTokenSource::new(vec![
///     Token::with_offsets("user42", 0, 6),
///     Token::with_offsets("red", 7, 10),
///     Token::with_offsets("shoes", 11, 16),
/// ]);
/// let stream = PrefixedShingleStream::new(source, ShingleConfig::default()).unwrap();
/// let texts: Vec<String> = stream.map(|t| t.unwrap().text).collect();
///
/// assert_eq!(texts, vec!["user42 red", "user42 red shoes", "user42 shoes"]);
/// ```
pub struct PrefixedShingleStream<S> {
    source: S,
    config: ShingleConfig,
    formatter: TermFormatter,
    state: StreamState,
}

impl<S: TokenSource> PrefixedShingleStream<S> {
    /// Create a stream over `source`. Fails if `config` is invalid.
    pub fn new(source: S, config: ShingleConfig) -> Result<Self> {
        config.validate()?;
        Ok(PrefixedShingleStream {
            source,
            formatter: TermFormatter::new(config.separator()),
            state: StreamState::new(&config),
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ShingleConfig {
        &self.config
    }

    /// The captured prefix, once the first token has been pulled.
    pub fn prefix(&self) -> Option<&Token> {
        self.state.prefix.as_ref()
    }

    /// Set the minimum shingle size.
    pub fn set_min_shingle_size(&mut self, size: usize) -> Result<()> {
        self.reconfigure(|config| config.min_shingle_size = size)
    }

    /// Set the maximum shingle size.
    pub fn set_max_shingle_size(&mut self, size: usize) -> Result<()> {
        self.reconfigure(|config| config.max_shingle_size = size)
    }

    /// Set whether unigrams are emitted.
    pub fn set_output_unigrams(&mut self, output_unigrams: bool) -> Result<()> {
        self.reconfigure(|config| config.output_unigrams = output_unigrams)
    }

    /// Set whether unigrams are emitted when no shingle can be produced.
    pub fn set_output_unigrams_if_no_shingles(&mut self, enabled: bool) -> Result<()> {
        self.reconfigure(|config| config.output_unigrams_if_no_shingles = enabled)
    }

    /// Set the token separator. `None` concatenates.
    pub fn set_token_separator(&mut self, separator: Option<&str>) -> Result<()> {
        self.reconfigure(|config| config.token_separator = separator.map(str::to_string))
    }

    /// Configuration may only change before the first pull of a reset cycle.
    /// The change is validated as a whole and discarded if invalid.
    fn reconfigure<F: FnOnce(&mut ShingleConfig)>(&mut self, update: F) -> Result<()> {
        if self.state.started {
            return Err(ShingleError::invalid_operation(
                "shingle configuration cannot change after the stream has been pulled; reset it first",
            ));
        }

        let mut config = self.config.clone();
        update(&mut config);
        config.validate()?;

        self.formatter = TermFormatter::new(config.separator());
        self.state = StreamState::new(&config);
        self.config = config;
        Ok(())
    }

    /// Rewind the source and discard all state.
    pub fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.clear();
        Ok(())
    }

    /// Rebind to a new source and discard all state. Returns the old source.
    pub fn reset_with(&mut self, source: S) -> S {
        let previous = std::mem::replace(&mut self.source, source);
        self.clear();
        previous
    }

    fn clear(&mut self) {
        debug!("resetting prefixed shingle stream");
        self.state = StreamState::new(&self.config);
    }

    /// Produce the next token, `Ok(None)` at end of stream.
    ///
    /// Errors from the source are returned unchanged.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.state.started = true;
        if self.state.finished {
            return Ok(None);
        }

        if self.state.prefix.is_none() {
            let Some(prefix) = self.source.next_token()? else {
                debug!("empty input, no prefix captured");
                self.state.finished = true;
                return Ok(None);
            };
            debug!("captured prefix {:?}", prefix.text);
            self.state.prefix = Some(prefix);
            self.next_anchor()?;
        }

        loop {
            if self.state.window.is_empty() {
                debug!(
                    "prefixed shingle stream exhausted after {} token(s)",
                    self.state.emitted
                );
                self.state.finished = true;
                return Ok(None);
            }

            match self.state.sizes.next_size() {
                Some(size) if size <= self.state.window.len() => {
                    if !self.state.window.is_all_filler(size) {
                        return Ok(Some(self.emit(size)));
                    }
                }
                // sizes only grow, so nothing else fits at this anchor
                _ => self.next_anchor()?,
            }
        }
    }

    fn next_anchor(&mut self) -> Result<()> {
        let state = &mut self.state;
        state.window.advance(&mut self.source)?;

        if self.config.output_unigrams_if_no_shingles
            && !state.shingle_emitted
            && !state.sizes.unigrams_enabled()
            && !state.window.is_empty()
            && state.window.len() < self.config.min_shingle_size
        {
            debug!("too few tokens for any shingle, falling back to unigrams");
            state.sizes.enable_unigrams();
        }

        if let Some(anchor) = state.window.anchor() {
            state.pending_increment += anchor.credit;
        }
        state.sizes.rewind();
        Ok(())
    }

    fn emit(&mut self, size: usize) -> Token {
        let state = &mut self.state;
        let prefix = state.prefix.as_ref().map_or("", |prefix| prefix.text.as_str());
        let term = self.formatter.format(prefix, state.window.gram(size));

        let token_type = if size == 1 {
            TokenType::Word
        } else {
            state.shingle_emitted = true;
            TokenType::Shingle
        };
        let increment = std::mem::take(&mut state.pending_increment);
        state.emitted += 1;

        trace!(
            "emit {:?} [{}..{}] pos_inc={increment} {token_type}",
            term.text, term.start_offset, term.end_offset
        );
        Token::with_offsets(term.text, term.start_offset, term.end_offset)
            .with_position_increment(increment)
            .with_position_length(size)
            .with_token_type(token_type)
    }
}

impl<S: TokenSource> TokenSource for PrefixedShingleStream<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        PrefixedShingleStream::next_token(self)
    }

    fn reset(&mut self) -> Result<()> {
        PrefixedShingleStream::reset(self)
    }
}

impl<S: TokenSource> Iterator for PrefixedShingleStream<S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_source::VecTokenSource;

    fn source(words: &[&str]) -> VecTokenSource {
        let mut offset = 0;
        let tokens = words
            .iter()
            .map(|word| {
                let token = Token::with_offsets(*word, offset, offset + word.len());
                offset += word.len() + 1;
                token
            })
            .collect();
        VecTokenSource::new(tokens)
    }

    fn texts(stream: PrefixedShingleStream<VecTokenSource>) -> Vec<String> {
        stream.map(|token| token.unwrap().text).collect()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = PrefixedShingleStream::new(source(&["p"]), ShingleConfig::with_sizes(3, 2));
        assert!(matches!(result, Err(ShingleError::Config(_))));
    }

    #[test]
    fn test_prefix_is_captured_not_emitted() {
        let mut stream =
            PrefixedShingleStream::new(source(&["p", "a"]), ShingleConfig::default()).unwrap();
        assert!(stream.prefix().is_none());

        let first = stream.next_token().unwrap().unwrap();
        assert_eq!(first.text, "p a");
        assert_eq!(stream.prefix().map(|t| t.text.as_str()), Some("p"));
        assert!(stream.next_token().unwrap().is_none());
        assert!(stream.next_token().unwrap().is_none());
    }

    #[test]
    fn test_prefix_only_yields_nothing() {
        let stream = PrefixedShingleStream::new(source(&["p"]), ShingleConfig::default()).unwrap();
        assert!(texts(stream).is_empty());
    }

    #[test]
    fn test_setters_before_first_pull() {
        let mut stream =
            PrefixedShingleStream::new(source(&["p", "a", "b", "c"]), ShingleConfig::default())
                .unwrap();
        stream.set_max_shingle_size(3).unwrap();
        stream.set_output_unigrams(false).unwrap();
        stream.set_token_separator(Some("+")).unwrap();

        assert_eq!(texts(stream), vec!["p+a+b", "p+a+b+c", "p+b+c"]);
    }

    #[test]
    fn test_invalid_setter_keeps_previous_config() {
        let mut stream =
            PrefixedShingleStream::new(source(&["p", "a", "b"]), ShingleConfig::default())
                .unwrap();
        assert!(stream.set_min_shingle_size(3).is_err());
        assert_eq!(stream.config().min_shingle_size, 2);
        assert_eq!(texts(stream), vec!["p a", "p a b", "p b"]);
    }

    #[test]
    fn test_setters_rejected_mid_stream() {
        let mut stream =
            PrefixedShingleStream::new(source(&["p", "a", "b"]), ShingleConfig::default())
                .unwrap();
        stream.next_token().unwrap();

        let err = stream.set_output_unigrams(false).unwrap_err();
        assert!(matches!(err, ShingleError::InvalidOperation(_)));

        stream.reset().unwrap();
        stream.set_output_unigrams(false).unwrap();
        assert_eq!(texts(stream), vec!["p a b"]);
    }

    #[test]
    fn test_position_length_matches_gram_size() {
        let stream = PrefixedShingleStream::new(
            source(&["p", "a", "b", "c"]),
            ShingleConfig::with_max_size(3),
        )
        .unwrap();
        let lengths: Vec<usize> = stream.map(|t| t.unwrap().position_length).collect();
        assert_eq!(lengths, vec![1, 2, 3, 1, 2, 1]);
    }

    #[test]
    fn test_reset_with_new_source() {
        let mut stream =
            PrefixedShingleStream::new(source(&["p", "a"]), ShingleConfig::default()).unwrap();
        assert_eq!(stream.next_token().unwrap().unwrap().text, "p a");

        let old = stream.reset_with(source(&["q", "x", "y"]));
        assert_eq!(old.remaining(), 0);
        assert_eq!(texts(stream), vec!["q x", "q x y", "q y"]);
    }
}
