//! Carousel position over the featured cards.

use crate::models::Card;

/// Index into the featured list that wraps at both ends.
///
/// The length is passed on every move because the featured list is
/// recomputed from state and can shrink between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowcaseCursor {
    index: usize,
}

impl ShowcaseCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self, len: usize) -> usize {
        self.index = if len == 0 { 0 } else { (self.index % len + 1) % len };
        self.index
    }

    pub fn prev(&mut self, len: usize) -> usize {
        self.index = if len == 0 {
            0
        } else {
            (self.index % len + len - 1) % len
        };
        self.index
    }

    /// The card under the cursor, clamping a stale index back into range.
    pub fn current<'c>(&self, featured: &[&'c Card]) -> Option<&'c Card> {
        if featured.is_empty() {
            return None;
        }
        featured.get(self.index % featured.len()).copied()
    }
}
