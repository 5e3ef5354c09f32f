use eframe::Storage;

use super::dto::AppStateDto;
use crate::state::AppState;

const APP_STATE_KEY: &str = "wayfarer.app_state";

#[must_use]
pub fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let dto = eframe::get_value::<AppStateDto>(storage, APP_STATE_KEY)?;
    log::info!("restored saved state");
    Some(dto.into())
}

pub fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    eframe::set_value(storage, APP_STATE_KEY, &AppStateDto::from(app_state));
    log::debug!("saved state");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use eframe::Storage;
    use wayfarer_gallery::MissingImagePolicy;

    use super::{load_state, save_state};
    use crate::state::{AppState, Screen, Settings};

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn empty_storage_has_no_state() {
        assert!(load_state(&MemoryStorage::default()).is_none());
    }

    #[test]
    fn saved_state_is_restored() {
        let mut app_state = AppState::new();
        {
            let mut access = app_state.access();
            let state = access.as_mut();
            state.screen = Screen::Slideshow;
            state.settings = Settings {
                missing_images: MissingImagePolicy::Placeholder,
                show_slide_position: false,
            };
            state.favorites.add("Santorini");
            state.favorites.add("Amalfi Coast");
        }

        let mut storage = MemoryStorage::default();
        save_state(&mut storage, &app_state);
        let restored = load_state(&storage).unwrap();

        assert_eq!(restored.screen, Screen::Slideshow);
        assert_eq!(restored.settings, app_state.settings);
        assert_eq!(
            restored.favorites.iter().collect::<Vec<_>>(),
            ["Santorini", "Amalfi Coast"]
        );
        assert!(!restored.is_dirty());
    }
}
