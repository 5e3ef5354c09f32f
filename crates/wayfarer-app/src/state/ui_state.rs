use wayfarer_core::{BudgetParseError, TripQuery, parse_budget};

/// Text entered in the trip search fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name: String,
    pub keyword: String,
    pub budget: String,
}

impl SearchForm {
    pub fn query(&self) -> Result<TripQuery, BudgetParseError> {
        let max_budget = parse_budget(&self.budget)?;
        Ok(TripQuery::new()
            .name(&self.name)
            .keyword(&self.keyword)
            .with_max_budget(max_budget))
    }
}

// UiState holds ephemeral UI state (not persisted).
#[derive(Debug)]
pub struct UiState {
    pub selected_row: Option<usize>,
    search_form: SearchForm,
    search: Result<TripQuery, BudgetParseError>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_row: None,
            search_form: SearchForm::default(),
            search: Ok(TripQuery::new()),
        }
    }
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search_form(&self) -> &SearchForm {
        &self.search_form
    }

    /// The query built from the form, or why it could not be built.
    #[must_use]
    pub fn search(&self) -> Result<&TripQuery, &BudgetParseError> {
        self.search.as_ref()
    }

    pub fn set_search_form(&mut self, form: SearchForm) {
        self.search = form.query();
        if let Err(err) = &self.search {
            log::debug!("rejected search: {err}");
        }
        self.search_form = form;
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_core::catalog;

    use super::{SearchForm, UiState};

    fn form(name: &str, keyword: &str, budget: &str) -> SearchForm {
        SearchForm {
            name: name.to_owned(),
            keyword: keyword.to_owned(),
            budget: budget.to_owned(),
        }
    }

    #[test]
    fn empty_form_matches_every_trip() {
        let ui_state = UiState::new();
        let trips = catalog::trips();
        assert_eq!(ui_state.search().unwrap().filter(&trips).len(), 5);
    }

    #[test]
    fn form_fields_become_query_criteria() {
        let mut ui_state = UiState::new();
        ui_state.set_search_form(form("", "ROMANTIC", " 2000 "));

        let trips = catalog::trips();
        let names: Vec<_> = ui_state
            .search()
            .unwrap()
            .filter(&trips)
            .iter()
            .map(|trip| trip.destination())
            .collect();
        assert_eq!(names, ["Amalfi Coast", "Paris"]);
    }

    #[test]
    fn invalid_budget_is_reported_and_form_kept() {
        let mut ui_state = UiState::new();
        ui_state.set_search_form(form("Paris", "", "lots"));

        let err = ui_state.search().unwrap_err();
        assert_eq!(err.input(), "lots");
        assert_eq!(ui_state.search_form().name, "Paris");
    }
}
