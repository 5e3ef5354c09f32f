use wayfarer_core::Favorites;

use crate::state::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Screen {
    #[default]
    Destinations,
    Slideshow,
}

impl Screen {
    pub const ALL: [Self; 2] = [Self::Destinations, Self::Slideshow];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Destinations => "Top 5 Destination List",
            Self::Slideshow => "Top 5 Detox and Wellness Destinations",
        }
    }
}

// AppState holds persisted state (screen + settings + favorites). It is serialized for resume.
#[derive(Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    pub settings: Settings,
    pub favorites: Favorites,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_parts(screen: Screen, settings: Settings, favorites: Favorites) -> Self {
        Self {
            screen,
            settings,
            favorites,
            dirty: false,
        }
    }

    pub fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[derive(Debug)]
pub struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}
