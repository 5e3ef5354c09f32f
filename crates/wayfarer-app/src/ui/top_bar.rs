use eframe::egui::Ui;

use crate::{
    action::{Action, ActionRequestQueue},
    state::Screen,
};

#[derive(Debug, Clone, Copy)]
pub struct TopBarViewModel {
    screen: Screen,
}

impl TopBarViewModel {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

pub fn show(ui: &mut Ui, vm: &TopBarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let mut screen = vm.screen;
        for candidate in Screen::ALL {
            ui.selectable_value(&mut screen, candidate, candidate.title());
        }
        if screen != vm.screen {
            action_queue.request(Action::ShowScreen(screen));
        }
    });
}
