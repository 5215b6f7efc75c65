//! Sliding window of content words.
//!
//! The window holds at most `max_shingle_size` words. Positions skipped by
//! an upstream filter are materialized as filler words so that an n-gram
//! always holds as many words as its size:
//!
//! ```text
//! input:   please  divide(pos_inc=3)      max_shingle_size = 3
//! window:  please  _  _  divide
//! credit:    1     1  1    1
//! ```
//!
//! At most `max_shingle_size - 1` fillers are inserted for one gap; the rest
//! of the gap is credited to the real word that follows it.

use std::collections::VecDeque;

use log::trace;

use super::config::FILLER_TOKEN;
use crate::analysis::token::Token;
use crate::analysis::token_source::TokenSource;
use crate::error::Result;

/// A content word held in the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WindowWord {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Position increment credited when this word becomes the anchor.
    pub credit: usize,
    pub is_filler: bool,
}

impl WindowWord {
    pub fn real(token: Token, credit: usize) -> Self {
        WindowWord {
            text: token.text,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            credit,
            is_filler: false,
        }
    }

    pub fn filler() -> Self {
        WindowWord {
            text: FILLER_TOKEN.to_string(),
            start_offset: 0,
            end_offset: 0,
            credit: 1,
            is_filler: true,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ShingleWindow {
    capacity: usize,
    words: VecDeque<WindowWord>,
    /// Real token waiting behind the fillers of its gap, with its credit.
    held: Option<(Token, usize)>,
    fillers_pending: usize,
    exhausted: bool,
}

impl ShingleWindow {
    /// `capacity` is the maximum shingle size and is at least 2.
    pub fn new(capacity: usize) -> Self {
        ShingleWindow {
            capacity,
            words: VecDeque::new(),
            held: None,
            fillers_pending: 0,
            exhausted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The oldest word, i.e. the current anchor.
    pub fn anchor(&self) -> Option<&WindowWord> {
        self.words.front()
    }

    /// The first `size` words starting at the anchor.
    pub fn gram(&self, size: usize) -> impl Iterator<Item = &WindowWord> {
        self.words.iter().take(size)
    }

    /// True when the first `size` words are all fillers.
    pub fn is_all_filler(&self, size: usize) -> bool {
        self.gram(size).all(|word| word.is_filler)
    }

    /// Drop the anchor and refill from `source` until the window is full or
    /// the source is exhausted.
    pub fn advance<S: TokenSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        self.words.pop_front();
        while self.words.len() < self.capacity {
            match self.pull(source)? {
                Some(word) => self.words.push_back(word),
                None => break,
            }
        }
        Ok(())
    }

    fn pull<S: TokenSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<WindowWord>> {
        if self.fillers_pending > 0 {
            self.fillers_pending -= 1;
            return Ok(Some(WindowWord::filler()));
        }
        if let Some((token, credit)) = self.held.take() {
            return Ok(Some(WindowWord::real(token, credit)));
        }
        if self.exhausted {
            return Ok(None);
        }

        let Some(token) = source.next_token()? else {
            self.exhausted = true;
            return Ok(None);
        };

        let gap = token.position_increment;
        if gap <= 1 {
            return Ok(Some(WindowWord::real(token, 1)));
        }

        // Each shingle keeps at least one real word.
        let fillers = (gap - 1).min(self.capacity - 1);
        trace!(
            "gap of {gap} before {:?}: {fillers} filler(s), {} position(s) credited",
            token.text,
            gap - fillers
        );
        self.fillers_pending = fillers - 1;
        self.held = Some((token, gap - fillers));
        Ok(Some(WindowWord::filler()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_source::VecTokenSource;

    fn texts(window: &ShingleWindow) -> Vec<&str> {
        window.gram(window.len()).map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_fill_and_slide() {
        let mut source = VecTokenSource::new(vec![
            Token::new("a"),
            Token::new("b"),
            Token::new("c"),
        ]);
        let mut window = ShingleWindow::new(2);

        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["a", "b"]);
        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["b", "c"]);
        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["c"]);
        window.advance(&mut source).unwrap();
        assert!(window.is_empty());
    }

    #[test]
    fn test_gap_smaller_than_window() {
        let mut source = VecTokenSource::new(vec![
            Token::new("a"),
            Token::new("b").with_position_increment(2),
        ]);
        let mut window = ShingleWindow::new(3);

        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["a", "_", "b"]);
        let credits: Vec<usize> = window.gram(3).map(|w| w.credit).collect();
        assert_eq!(credits, vec![1, 1, 1]);
    }

    #[test]
    fn test_gap_larger_than_window() {
        let mut source = VecTokenSource::new(vec![
            Token::new("a"),
            Token::new("b").with_position_increment(8),
        ]);
        let mut window = ShingleWindow::new(3);

        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["a", "_", "_"]);
        assert!(!window.is_all_filler(3));
        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["_", "_", "b"]);
        assert!(window.is_all_filler(2));
        assert_eq!(window.gram(3).last().map(|w| w.credit), Some(6));
    }

    #[test]
    fn test_zero_increment_is_adjacent() {
        let mut source = VecTokenSource::new(vec![
            Token::new("a"),
            Token::new("b").with_position_increment(0),
        ]);
        let mut window = ShingleWindow::new(2);

        window.advance(&mut source).unwrap();
        assert_eq!(texts(&window), vec!["a", "b"]);
        assert_eq!(window.gram(2).last().map(|w| w.credit), Some(1));
    }
}
