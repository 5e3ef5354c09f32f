use eframe::egui::{InputState, Key};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Screen,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(key: Key, command: bool, action: Action) -> Self {
        Self {
            trigger: Trigger { key, command },
            action,
        }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(key, true, action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(key, false, action)
    }
}

static GLOBAL_SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::Num1, Action::ShowScreen(Screen::Destinations)),
    Shortcut::command(Key::Num2, Action::ShowScreen(Screen::Slideshow)),
];

static DESTINATION_SHORTCUTS: [Shortcut; 1] =
    [Shortcut::plain(Key::Escape, Action::ClearSelection)];

static SLIDESHOW_SHORTCUTS: [Shortcut; 5] = [
    Shortcut::plain(Key::ArrowLeft, Action::PreviousSlide),
    Shortcut::plain(Key::ArrowRight, Action::NextSlide),
    Shortcut::plain(Key::PageUp, Action::PreviousSlide),
    Shortcut::plain(Key::PageDown, Action::NextSlide),
    Shortcut::plain(Key::Home, Action::GoToSlide(0)),
];

fn triggered_action(
    screen: Screen,
    is_triggered: impl Fn(Trigger) -> bool,
) -> Option<&'static Action> {
    let screen_shortcuts: &'static [Shortcut] = match screen {
        Screen::Destinations => &DESTINATION_SHORTCUTS,
        Screen::Slideshow => &SLIDESHOW_SHORTCUTS,
    };
    GLOBAL_SHORTCUTS
        .iter()
        .chain(screen_shortcuts)
        .find(|shortcut| is_triggered(shortcut.trigger))
        .map(|shortcut| &shortcut.action)
}

pub fn handle_input(i: &InputState, screen: Screen, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    let action = triggered_action(screen, |trigger| {
        i.key_pressed(trigger.key) && i.modifiers.command == trigger.command
    });
    if let Some(action) = action {
        action_queue.request(action.clone());
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::Key;

    use super::{Trigger, triggered_action};
    use crate::{action::Action, state::Screen};

    fn press(screen: Screen, key: Key, command: bool) -> Option<&'static Action> {
        triggered_action(screen, |trigger| trigger == Trigger { key, command })
    }

    #[test]
    fn arrows_navigate_only_the_slideshow() {
        assert!(matches!(
            press(Screen::Slideshow, Key::ArrowRight, false),
            Some(Action::NextSlide)
        ));
        assert!(matches!(
            press(Screen::Slideshow, Key::PageUp, false),
            Some(Action::PreviousSlide)
        ));
        assert!(press(Screen::Destinations, Key::ArrowRight, false).is_none());
    }

    #[test]
    fn home_returns_to_first_slide() {
        assert!(matches!(
            press(Screen::Slideshow, Key::Home, false),
            Some(Action::GoToSlide(0))
        ));
    }

    #[test]
    fn escape_clears_list_selection() {
        assert!(matches!(
            press(Screen::Destinations, Key::Escape, false),
            Some(Action::ClearSelection)
        ));
        assert!(press(Screen::Slideshow, Key::Escape, false).is_none());
    }

    #[test]
    fn command_digits_switch_screens_everywhere() {
        for screen in Screen::ALL {
            assert!(matches!(
                press(screen, Key::Num2, true),
                Some(Action::ShowScreen(Screen::Slideshow))
            ));
            assert!(press(screen, Key::Num2, false).is_none());
        }
    }
}
