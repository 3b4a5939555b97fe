//! Stack of pending closing markers

use std::collections::VecDeque;

/// Last-in-first-out stack of closing markers.
///
/// The most recently opened tag's marker sits at the front. Only the front
/// end is ever pushed or popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseStack<M> {
    entries: VecDeque<M>,
}

impl<M> CloseStack<M> {
    pub fn new() -> Self {
        CloseStack {
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, marker: M) {
        self.entries.push_front(marker);
    }

    pub fn pop(&mut self) -> Option<M> {
        self.entries.pop_front()
    }

    pub fn peek(&self) -> Option<&M> {
        self.entries.front()
    }

    /// Number of tags opened but not yet closed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop every entry, innermost first
    pub fn drain(&mut self) -> impl Iterator<Item = M> + '_ {
        self.entries.drain(..)
    }

    /// Iterate pending markers, innermost first
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.entries.iter()
    }
}

impl<M> Default for CloseStack<M> {
    fn default() -> Self {
        Self::new()
    }
}
