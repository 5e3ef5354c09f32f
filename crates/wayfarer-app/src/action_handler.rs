use crate::{
    action::{Action, ActionRequestQueue},
    session::Session,
    state::{AppState, AppStateAccess, Settings, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
    session: &'a mut Session,
}

pub fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    session: &mut Session,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, session, action);
    }
}

pub fn handle(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    session: &mut Session,
    action: Action,
) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
        session,
    };

    match action {
        Action::ShowScreen(screen) => {
            if ctx.app_state.as_ref().screen != screen {
                log::debug!("showing {screen:?}");
                ctx.app_state.as_mut().screen = screen;
            }
        }
        Action::NextSlide => ctx.session.slideshow_mut().next(),
        Action::PreviousSlide => ctx.session.slideshow_mut().previous(),
        Action::GoToSlide(index) => {
            if !ctx.session.slideshow_mut().go_to(index) {
                log::debug!("ignored slide index {index} out of range");
            }
        }
        Action::SelectRow(row) => {
            if row < ctx.session.list().len() {
                ctx.ui_state.selected_row = Some(row);
            }
        }
        Action::ClearSelection => ctx.ui_state.selected_row = None,
        Action::UpdateSearchForm(form) => ctx.ui_state.set_search_form(form),
        Action::ToggleFavorite(destination) => ctx.toggle_favorite(&destination),
        Action::UpdateSettings(settings) => ctx.update_settings(settings),
    }
}

impl ActionContext<'_> {
    fn toggle_favorite(&mut self, destination: &str) {
        let saved = self.app_state.as_mut().favorites.toggle(destination);
        if saved {
            log::info!("saved {destination} to favorites");
        } else {
            log::info!("removed {destination} from favorites");
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        if self.session.apply_policy(settings.missing_images) {
            // Rows may have been added or removed.
            self.ui_state.selected_row = None;
        }
        self.app_state.as_mut().settings = settings;
    }
}
