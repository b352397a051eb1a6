//! Focus System - Tab/Shift+Tab cycling over the page links
//!
//! The focusable set is passed in on every move (links are laid out again on
//! resize), in document order. Moving wraps at both ends; with nothing
//! focused, next starts at the first link and previous at the last.
//!
//! # Example
//!
//! ```ignore
//! let ring = FocusRing::new();
//! ring.focus_next(&links);
//! if let Some(link) = ring.focused() { /* open it */ }
//! ```

use spark_signals::{Signal, signal};

/// Currently focused link. Clones share the same signal.
#[derive(Clone)]
pub struct FocusRing<K: Clone + PartialEq + 'static> {
    focused: Signal<Option<K>>,
}

impl<K: Clone + PartialEq + 'static> Default for FocusRing<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq + 'static> FocusRing<K> {
    pub fn new() -> Self {
        Self {
            focused: signal(None),
        }
    }

    pub fn focused(&self) -> Option<K> {
        self.focused.get()
    }

    pub fn is_focused(&self, key: &K) -> bool {
        self.focused.get().as_ref() == Some(key)
    }

    /// Focus `key` directly. Returns true if focus changed.
    pub fn focus(&self, key: K) -> bool {
        if self.is_focused(&key) {
            return false;
        }
        self.focused.set(Some(key));
        true
    }

    pub fn blur(&self) {
        if self.focused.get().is_some() {
            self.focused.set(None);
        }
    }

    /// Move focus to next focusable
    pub fn focus_next(&self, focusables: &[K]) -> bool {
        self.step(focusables, 1)
    }

    /// Move focus to previous focusable
    pub fn focus_previous(&self, focusables: &[K]) -> bool {
        self.step(focusables, -1)
    }

    fn step(&self, focusables: &[K], direction: i32) -> bool {
        if focusables.is_empty() {
            return false;
        }

        let current = self.focused.get();
        let current_pos = current
            .as_ref()
            .and_then(|key| focusables.iter().position(|k| k == key));

        let next = match current_pos {
            None if direction > 0 => 0,
            None => focusables.len() - 1,
            Some(pos) => {
                let len = focusables.len() as i32;
                (((pos as i32 + direction) % len + len) % len) as usize
            }
        };

        self.focus(focusables[next].clone())
    }
}
