use crate::{
    session::Session,
    state::{AppState, UiState},
    ui::{
        destination_list::{DestinationListViewModel, DestinationRowViewModel},
        search_panel::{SavedTripViewModel, SearchPanelViewModel, TripResultViewModel},
        slideshow::SlideshowViewModel,
        top_bar::TopBarViewModel,
    },
    version,
};

#[must_use]
pub fn build_top_bar_vm(app_state: &AppState) -> TopBarViewModel {
    TopBarViewModel::new(app_state.screen)
}

#[must_use]
pub fn build_destination_list_vm<'a>(
    session: &'a Session,
    ui_state: &UiState,
) -> DestinationListViewModel<'a> {
    let rows = session
        .list()
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            DestinationRowViewModel::new(unit, ui_state.selected_row == Some(index))
        })
        .collect();
    DestinationListViewModel::new(rows, version::build_version())
}

#[must_use]
pub fn build_slideshow_vm<'a>(
    app_state: &AppState,
    session: &'a Session,
) -> SlideshowViewModel<'a> {
    let slide = session.slideshow().view();
    let position_label = slide
        .filter(|_| app_state.settings.show_slide_position)
        .map(|slide| slide.position_label());
    SlideshowViewModel::new(slide, position_label)
}

#[must_use]
pub fn build_search_panel_vm<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
    session: &'a Session,
) -> SearchPanelViewModel<'a> {
    let favorites = &app_state.favorites;
    let results = ui_state
        .search()
        .map(|query| {
            query
                .filter(session.trips())
                .into_iter()
                .map(|trip| {
                    TripResultViewModel::new(trip, favorites.contains(trip.destination()))
                })
                .collect()
        })
        .map_err(|err| capitalize(&err.to_string()));
    SearchPanelViewModel::new(
        ui_state.search_form(),
        results,
        favorites
            .iter()
            .map(|destination| {
                let trip = session
                    .trips()
                    .iter()
                    .find(|trip| trip.destination() == destination);
                SavedTripViewModel::new(destination, trip)
            })
            .collect(),
        &app_state.settings,
    )
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use wayfarer_gallery::MissingImagePolicy;

    use super::{build_search_panel_vm, build_slideshow_vm, capitalize};
    use crate::{
        state::{AppState, SearchForm, UiState},
        testing,
    };

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize("please enter"), "Please enter");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn position_label_follows_setting() {
        let session = testing::session(&[], &[], MissingImagePolicy::Omit);
        let mut app_state = AppState::new();
        let vm = build_slideshow_vm(&app_state, &session);
        assert_eq!(vm.position_label(), Some("1 / 5"));

        app_state.settings.show_slide_position = false;
        let vm = build_slideshow_vm(&app_state, &session);
        assert_eq!(vm.position_label(), None);
    }

    #[test]
    fn search_results_mark_favorites() {
        let session = testing::session(&[], &[], MissingImagePolicy::Omit);
        let mut app_state = AppState::new();
        app_state.favorites.add("Paris");
        let mut ui_state = UiState::new();
        ui_state.set_search_form(SearchForm {
            keyword: "romantic".to_owned(),
            ..SearchForm::default()
        });

        let vm = build_search_panel_vm(&app_state, &ui_state, &session);
        let results = vm.results().unwrap();
        let marked: Vec<_> = results
            .iter()
            .map(|r| (r.trip().destination(), r.is_favorite()))
            .collect();
        assert_eq!(marked, [("Amalfi Coast", false), ("Paris", true)]);
    }

    #[test]
    fn saved_trips_show_their_summary() {
        let session = testing::session(&[], &[], MissingImagePolicy::Omit);
        let mut app_state = AppState::new();
        app_state.favorites.add("Tokyo");
        app_state.favorites.add("Atlantis");
        let ui_state = UiState::new();

        let vm = build_search_panel_vm(&app_state, &ui_state, &session);
        let labels: Vec<_> = vm.favorites().iter().map(|saved| saved.label()).collect();
        assert_eq!(
            labels,
            [
                "Tokyo (Japan) - $2200 | Keywords: city, tech, culture",
                "Atlantis",
            ]
        );
        assert_eq!(vm.favorites()[1].destination(), "Atlantis");
    }

    #[test]
    fn invalid_budget_becomes_message() {
        let session = testing::session(&[], &[], MissingImagePolicy::Omit);
        let app_state = AppState::new();
        let mut ui_state = UiState::new();
        ui_state.set_search_form(SearchForm {
            budget: "cheap".to_owned(),
            ..SearchForm::default()
        });

        let vm = build_search_panel_vm(&app_state, &ui_state, &session);
        let message = vm.results().unwrap_err();
        assert!(message.starts_with("Please enter a valid number"));
    }
}
