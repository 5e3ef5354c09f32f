use eframe::egui::{CollapsingHeader, Grid, RichText, ScrollArea, TextEdit, Ui};
use wayfarer_core::Trip;
use wayfarer_gallery::MissingImagePolicy;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{SearchForm, Settings},
};

#[derive(Debug, Clone)]
pub struct TripResultViewModel<'a> {
    trip: &'a Trip,
    favorite: bool,
}

impl<'a> TripResultViewModel<'a> {
    pub fn new(trip: &'a Trip, favorite: bool) -> Self {
        Self { trip, favorite }
    }

    pub fn trip(&self) -> &'a Trip {
        self.trip
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }
}

#[derive(Debug, Clone)]
pub struct SavedTripViewModel<'a> {
    destination: &'a str,
    trip: Option<&'a Trip>,
}

impl<'a> SavedTripViewModel<'a> {
    pub fn new(destination: &'a str, trip: Option<&'a Trip>) -> Self {
        Self { destination, trip }
    }

    pub fn destination(&self) -> &'a str {
        self.destination
    }

    /// The trip's summary line, or just the name if the trip is no longer offered.
    pub fn label(&self) -> String {
        self.trip.map_or_else(|| self.destination.to_owned(), Trip::summary)
    }
}

#[derive(Debug, Clone)]
pub struct SearchPanelViewModel<'a> {
    form: &'a SearchForm,
    results: Result<Vec<TripResultViewModel<'a>>, String>,
    favorites: Vec<SavedTripViewModel<'a>>,
    settings: &'a Settings,
}

impl<'a> SearchPanelViewModel<'a> {
    pub fn new(
        form: &'a SearchForm,
        results: Result<Vec<TripResultViewModel<'a>>, String>,
        favorites: Vec<SavedTripViewModel<'a>>,
        settings: &'a Settings,
    ) -> Self {
        Self {
            form,
            results,
            favorites,
            settings,
        }
    }

    pub fn favorites(&self) -> &[SavedTripViewModel<'a>] {
        &self.favorites
    }

    pub fn results(&self) -> Result<&[TripResultViewModel<'a>], &str> {
        self.results.as_deref().map_err(String::as_str)
    }
}

pub fn show(ui: &mut Ui, vm: &SearchPanelViewModel, action_queue: &mut ActionRequestQueue) {
    ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Trip Search");
        show_form(ui, vm.form, action_queue);

        ui.add_space(4.0);
        match vm.results() {
            Ok([]) => {
                ui.label("No matching trips found.");
            }
            Ok(results) => {
                for result in results {
                    show_result(ui, result, action_queue);
                }
            }
            Err(message) => {
                ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
            }
        }

        ui.separator();
        ui.heading("Saved Trips");
        if vm.favorites.is_empty() {
            ui.weak("No saved trips yet.");
        }
        for saved in &vm.favorites {
            ui.horizontal(|ui| {
                if ui.small_button("\u{2715}").on_hover_text("Remove").clicked() {
                    let destination = saved.destination().to_owned();
                    action_queue.request(Action::ToggleFavorite(destination));
                }
                ui.label(saved.label());
            });
        }

        ui.separator();
        show_settings(ui, vm.settings, action_queue);
    });
}

fn show_form(ui: &mut Ui, form: &SearchForm, action_queue: &mut ActionRequestQueue) {
    let mut form = form.clone();
    let mut changed = false;
    Grid::new("trip_search_form")
        .num_columns(2)
        .show(ui, |ui| {
            let SearchForm {
                name,
                keyword,
                budget,
            } = &mut form;

            ui.label("Destination");
            changed |= ui
                .add(TextEdit::singleline(name).hint_text("e.g. Paris"))
                .changed();
            ui.end_row();

            ui.label("Keyword");
            changed |= ui
                .add(TextEdit::singleline(keyword).hint_text("e.g. beach"))
                .changed();
            ui.end_row();

            ui.label("Max budget ($)");
            changed |= ui
                .add(TextEdit::singleline(budget).hint_text("no limit"))
                .changed();
            ui.end_row();
        });
    if changed {
        action_queue.request(Action::UpdateSearchForm(form));
    }
}

fn show_result(
    ui: &mut Ui,
    result: &TripResultViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    ui.horizontal(|ui| {
        let (icon, hover) = if result.favorite {
            ("\u{2605}", "Remove from saved trips")
        } else {
            ("\u{2606}", "Save trip")
        };
        if ui.small_button(icon).on_hover_text(hover).clicked() {
            action_queue.request(Action::ToggleFavorite(
                result.trip.destination().to_owned(),
            ));
        }
        ui.label(result.trip.summary());
    });
}

fn show_settings(ui: &mut Ui, settings: &Settings, action_queue: &mut ActionRequestQueue) {
    let mut settings = settings.clone();
    let mut changed = false;
    let Settings {
        missing_images,
        show_slide_position,
    } = &mut settings;
    CollapsingHeader::new("Settings")
        .default_open(false)
        .show(ui, |ui| {
            ui.label("Entries without an image");
            ui.indent("missing_images", |ui| {
                changed |= ui
                    .radio_value(missing_images, MissingImagePolicy::Omit, "Hide them")
                    .changed();
                changed |= ui
                    .radio_value(
                        missing_images,
                        MissingImagePolicy::Placeholder,
                        "Show a placeholder",
                    )
                    .changed();
            });
            changed |= ui
                .checkbox(show_slide_position, "Show slide position")
                .changed();
        });
    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
}
