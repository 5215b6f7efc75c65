//! Term text and offset assembly.

use super::window::WindowWord;

/// Text and offsets of an emitted term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormattedTerm {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// Joins the prefix and the words of an n-gram with a separator.
#[derive(Debug, Clone)]
pub(crate) struct TermFormatter {
    separator: String,
}

impl TermFormatter {
    pub fn new<S: Into<String>>(separator: S) -> Self {
        TermFormatter {
            separator: separator.into(),
        }
    }

    /// `prefix ++ sep ++ w1 ++ sep ++ w2 ...`, spanning the first to the last
    /// real word. Fillers contribute text only.
    pub fn format<'a, I>(&self, prefix: &str, words: I) -> FormattedTerm
    where
        I: IntoIterator<Item = &'a WindowWord>,
    {
        let mut text = String::from(prefix);
        let mut span: Option<(usize, usize)> = None;

        for word in words {
            text.push_str(&self.separator);
            text.push_str(&word.text);
            if !word.is_filler {
                span = Some(match span {
                    Some((start, _)) => (start, word.end_offset),
                    None => (word.start_offset, word.end_offset),
                });
            }
        }

        let (start_offset, end_offset) = span.unwrap_or_default();
        FormattedTerm {
            text,
            start_offset,
            end_offset,
        }
    }
}
