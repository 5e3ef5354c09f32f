pub use self::{app_state::*, settings::*, ui_state::*};

mod app_state;
mod settings;
mod ui_state;
