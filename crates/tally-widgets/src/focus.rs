//! Focus tracking across a fixed row of controls.

/// Tracks which of `N` focusable slots currently has keyboard focus.
///
/// Slot indices are positional, so callers usually keep a parallel array of
/// the things being focused (for example the buttons of a control row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusGroup<const N: usize> {
    focused: usize,
}

impl<const N: usize> FocusGroup<N> {
    /// Focus starts on the first slot.
    pub fn new() -> Self {
        Self { focused: 0 }
    }

    /// Index of the focused slot.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Move focus to the next slot, wrapping around after the last.
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % N;
    }

    /// Move focus to the previous slot, wrapping around before the first.
    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + N - 1) % N;
    }

    /// Focus the given slot, clamped to the valid range.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(N - 1);
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == index
    }

    /// Pick the element of `slots` that has focus.
    pub fn pick<'a, T>(&self, slots: &'a [T; N]) -> &'a T {
        &slots[self.focused]
    }
}

impl<const N: usize> Default for FocusGroup<N> {
    fn default() -> Self {
        Self::new()
    }
}
