//! Which n-gram sizes to emit at each anchor.

/// Cursor over the sizes to try at the current anchor: 1 (when unigrams are
/// enabled), then `min..=max` in increasing order.
#[derive(Debug, Clone)]
pub(crate) struct GramSizes {
    min: usize,
    max: usize,
    unigrams: bool,
    next: Option<usize>,
}

impl GramSizes {
    pub fn new(min: usize, max: usize, unigrams: bool) -> Self {
        GramSizes {
            min,
            max,
            unigrams,
            next: None,
        }
    }

    /// Turn on unigrams for the remaining anchors.
    pub fn enable_unigrams(&mut self) {
        self.unigrams = true;
    }

    pub fn unigrams_enabled(&self) -> bool {
        self.unigrams
    }

    /// Start over at a new anchor.
    pub fn rewind(&mut self) {
        self.next = Some(if self.unigrams { 1 } else { self.min });
    }

    /// Next size to try at this anchor, or `None` once all were tried.
    pub fn next_size(&mut self) -> Option<usize> {
        let size = self.next?;
        self.next = match size {
            1 => Some(self.min),
            s if s >= self.max => None,
            s => Some(s + 1),
        };
        Some(size)
    }
}
