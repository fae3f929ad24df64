use std::collections::VecDeque;

/// Maximum number of patterns displayed side by side.
pub const MAX_SELECTED: usize = 3;

/// Ordered set of currently displayed pattern ids, capped at
/// [`MAX_SELECTED`].
///
/// Selecting beyond the cap evicts the oldest selection (FIFO) instead of
/// rejecting the action; that is a usability policy, not an error condition.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    items: VecDeque<String>,
}

impl SelectionSet {
    /// Add `pattern_id`, returning the evicted oldest id when the cap is
    /// exceeded. Selecting an already-selected id is a no-op.
    pub fn select(&mut self, pattern_id: &str) -> Option<String> {
        if self.contains(pattern_id) {
            return None;
        }
        self.items.push_back(pattern_id.to_string());
        if self.items.len() > MAX_SELECTED {
            self.items.pop_front()
        } else {
            None
        }
    }

    /// Remove `pattern_id` if present; returns whether it was selected.
    pub fn deselect(&mut self, pattern_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|id| id != pattern_id);
        self.items.len() != before
    }

    /// Whether `pattern_id` is currently selected.
    pub fn contains(&self, pattern_id: &str) -> bool {
        self.items.iter().any(|id| id == pattern_id)
    }

    /// Selected ids in selection order (oldest first).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of selected patterns.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
