use std::mem;

use crate::state::{Screen, SearchForm, Settings};

#[derive(Debug, Clone)]
pub enum Action {
    ShowScreen(Screen),
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),
    SelectRow(usize),
    ClearSelection,
    UpdateSearchForm(SearchForm),
    ToggleFavorite(String),
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::NextSlide);
        queue.request(Action::ClearSelection);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::NextSlide));
        assert!(matches!(drained[1], Action::ClearSelection));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
