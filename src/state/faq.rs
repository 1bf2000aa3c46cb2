//! FAQ accordion state

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One question and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Accordion with at most one open item
#[derive(Debug, Clone, Default)]
pub struct FaqState {
    pub items: Vec<FaqItem>,
    pub open: Option<usize>,
    pub selected: usize,
}

impl FaqState {
    /// The first item starts open
    pub fn new(items: Vec<FaqItem>) -> Self {
        let open = (!items.is_empty()).then_some(0);
        Self {
            items,
            open,
            selected: 0,
        }
    }

    /// Close every other item; open `index` unless it was already open
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, open = self.open.is_some(), "faq item toggled");
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(count: usize) -> FaqState {
        FaqState::new(
            (0..count)
                .map(|i| FaqItem {
                    question: format!("Question {i}?"),
                    answer: format!("Answer {i}."),
                })
                .collect(),
        )
    }

    #[test]
    fn test_first_item_open_by_default() {
        let state = faq(3);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
    }

    #[test]
    fn test_empty_accordion_has_nothing_open() {
        let state = faq(0);
        assert_eq!(state.open, None);
    }

    #[test]
    fn test_opening_one_closes_others() {
        let mut state = faq(3);
        state.toggle(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
        let open = (0..state.items.len()).filter(|i| state.is_open(*i)).count();
        assert_eq!(open, 1);
    }

    #[test]
    fn test_toggling_open_item_closes_it() {
        let mut state = faq(3);
        state.toggle(0);
        assert_eq!(state.open, None);
        state.toggle(0);
        assert_eq!(state.open, Some(0));
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut state = faq(2);
        state.toggle(5);
        assert_eq!(state.open, Some(0));
    }

    #[test]
    fn test_selection_moves_and_toggles() {
        let mut state = faq(3);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        state.toggle_selected();
        assert!(state.is_open(2));
        state.select_prev();
        assert_eq!(state.selected, 1);
    }
}
