use wayfarer_core::Favorites;
use wayfarer_gallery::MissingImagePolicy;

use crate::state::{AppState, Screen, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub(super) enum ScreenDto {
    #[default]
    Destinations,
    Slideshow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub(super) enum MissingImagePolicyDto {
    #[default]
    Omit,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(super) struct SettingsDto {
    missing_images: MissingImagePolicyDto,
    show_slide_position: bool,
}

impl Default for SettingsDto {
    fn default() -> Self {
        Settings::default().into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(super) struct AppStateDto {
    screen: ScreenDto,
    settings: SettingsDto,
    favorites: Vec<String>,
}

impl From<Screen> for ScreenDto {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Destinations => Self::Destinations,
            Screen::Slideshow => Self::Slideshow,
        }
    }
}

impl From<ScreenDto> for Screen {
    fn from(dto: ScreenDto) -> Self {
        match dto {
            ScreenDto::Destinations => Self::Destinations,
            ScreenDto::Slideshow => Self::Slideshow,
        }
    }
}

impl From<MissingImagePolicy> for MissingImagePolicyDto {
    fn from(policy: MissingImagePolicy) -> Self {
        match policy {
            MissingImagePolicy::Omit => Self::Omit,
            MissingImagePolicy::Placeholder => Self::Placeholder,
        }
    }
}

impl From<MissingImagePolicyDto> for MissingImagePolicy {
    fn from(dto: MissingImagePolicyDto) -> Self {
        match dto {
            MissingImagePolicyDto::Omit => Self::Omit,
            MissingImagePolicyDto::Placeholder => Self::Placeholder,
        }
    }
}

impl From<Settings> for SettingsDto {
    fn from(settings: Settings) -> Self {
        Self {
            missing_images: settings.missing_images.into(),
            show_slide_position: settings.show_slide_position,
        }
    }
}

impl From<SettingsDto> for Settings {
    fn from(dto: SettingsDto) -> Self {
        Self {
            missing_images: dto.missing_images.into(),
            show_slide_position: dto.show_slide_position,
        }
    }
}

impl From<&AppState> for AppStateDto {
    fn from(app_state: &AppState) -> Self {
        Self {
            screen: app_state.screen.into(),
            settings: app_state.settings.clone().into(),
            favorites: app_state.favorites.iter().map(str::to_owned).collect(),
        }
    }
}

impl From<AppStateDto> for AppState {
    fn from(dto: AppStateDto) -> Self {
        AppState::from_parts(
            dto.screen.into(),
            dto.settings.into(),
            dto.favorites.iter().collect::<Favorites>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use wayfarer_gallery::MissingImagePolicy;

    use super::AppStateDto;
    use crate::state::{AppState, Screen};

    #[test]
    fn missing_fields_take_defaults() {
        let dto: AppStateDto = serde_json::from_str(r#"{"favorites": ["Paris"]}"#).unwrap();
        let app_state = AppState::from(dto);

        assert_eq!(app_state.screen, Screen::Destinations);
        assert_eq!(app_state.settings.missing_images, MissingImagePolicy::Omit);
        assert!(app_state.settings.show_slide_position);
        assert!(app_state.favorites.contains("Paris"));
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn duplicate_favorites_collapse() {
        let dto: AppStateDto =
            serde_json::from_str(r#"{"favorites": ["Tokyo", "Tokyo", "Paris"]}"#).unwrap();
        let app_state = AppState::from(dto);
        assert_eq!(app_state.favorites.len(), 2);
    }
}
