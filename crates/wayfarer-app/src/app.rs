//! Wayfarer desktop application.
//!
//! # Design Notes
//! - Two screens share one window: the top destination list and the wellness
//!   resort slideshow. A trip search panel stays docked beside both.
//! - Images are decoded and scaled once per session, and uploaded as textures
//!   the first time they are drawn.
//! - Screen choice, settings and saved trips survive restarts; list selection,
//!   slide position and search text do not.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};
use wayfarer_core::{
    RecordSource,
    catalog::{self, Destinations, Resorts},
};
use wayfarer_gallery::DirResolver;

use crate::{
    LaunchOptions,
    action::ActionRequestQueue,
    action_handler,
    catalog_file::{self, JsonCatalog},
    persistence::storage,
    session::Session,
    state::{AppState, Screen, UiState},
    ui::{self, textures::TextureCache},
    view_model_builder,
};

#[derive(Debug)]
pub struct WayfarerApp {
    app_state: AppState,
    ui_state: UiState,
    session: Session,
    textures: TextureCache,
}

impl WayfarerApp {
    pub fn new(cc: &CreationContext<'_>, options: &LaunchOptions) -> Self {
        let mut app_state = cc.storage.and_then(storage::load_state).unwrap_or_default();
        if let Some(screen) = options.screen {
            app_state.screen = screen.into();
        }

        let session = open_session(options, &app_state);
        Self {
            app_state,
            ui_state: UiState::new(),
            session,
            textures: TextureCache::default(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

fn open_session(options: &LaunchOptions, app_state: &AppState) -> Session {
    let destinations_file = options.destinations.as_ref().map(JsonCatalog::new);
    let resorts_file = options.resorts.as_ref().map(JsonCatalog::new);
    let destinations = catalog_file::load_or_builtin(
        destinations_file.as_ref().map(|f| f as &dyn RecordSource),
        &Destinations,
    );
    let resorts = catalog_file::load_or_builtin(
        resorts_file.as_ref().map(|f| f as &dyn RecordSource),
        &Resorts,
    );

    log::info!("resolving images against {}", options.asset_root.display());
    Session::new(
        destinations,
        resorts,
        catalog::trips(),
        Box::new(DirResolver::new(&options.asset_root)),
        app_state.settings.missing_images,
    )
}

impl App for WayfarerApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                ui::input::handle_input(i, self.app_state.screen, &mut action_queue);
            });
            action_handler::handle_all(
                &mut self.app_state,
                &mut self.ui_state,
                &mut self.session,
                &mut action_queue,
            );
        }

        self.textures.sync(self.session.generation());

        let top_bar_vm = view_model_builder::build_top_bar_vm(&self.app_state);
        TopBottomPanel::top("screens").show(ctx, |ui| {
            ui::top_bar::show(ui, &top_bar_vm, &mut action_queue);
        });

        let search_vm = view_model_builder::build_search_panel_vm(
            &self.app_state,
            &self.ui_state,
            &self.session,
        );
        SidePanel::right("trip_search")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui::search_panel::show(ui, &search_vm, &mut action_queue);
            });

        CentralPanel::default().show(ctx, |ui| match self.app_state.screen {
            Screen::Destinations => {
                let vm =
                    view_model_builder::build_destination_list_vm(&self.session, &self.ui_state);
                ui::destination_list::show(ui, &vm, &mut self.textures, &mut action_queue);
            }
            Screen::Slideshow => {
                let vm = view_model_builder::build_slideshow_vm(&self.app_state, &self.session);
                ui::slideshow::show(ui, &vm, &mut self.textures, &mut action_queue);
            }
        });

        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut self.session,
            &mut action_queue,
        );

        self.apply_persistence(frame);
    }
}
