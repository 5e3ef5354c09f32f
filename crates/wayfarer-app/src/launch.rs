//! Command-line launch options.

use std::path::PathBuf;

use crate::state::Screen;

/// Desktop travel catalog: top destinations, a wellness resort slideshow, and trip search.
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about)]
pub struct LaunchOptions {
    /// Screen to open; defaults to the one open when the app last closed.
    #[arg(long, value_enum)]
    pub screen: Option<ScreenArg>,

    /// Directory that image references such as `/resources/Tokyo.jpg` are resolved against.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub asset_root: PathBuf,

    /// JSON file replacing the built-in destination list.
    #[arg(long, value_name = "FILE")]
    pub destinations: Option<PathBuf>,

    /// JSON file replacing the built-in resort list.
    #[arg(long, value_name = "FILE")]
    pub resorts: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScreenArg {
    Destinations,
    Slideshow,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Destinations => Screen::Destinations,
            ScreenArg::Slideshow => Screen::Slideshow,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser as _;

    use super::{LaunchOptions, ScreenArg};

    #[test]
    fn defaults_resolve_assets_from_working_directory() {
        let options = LaunchOptions::try_parse_from(["wayfarer"]).unwrap();
        assert_eq!(options.screen, None);
        assert_eq!(options.asset_root, Path::new("."));
        assert!(options.destinations.is_none());
        assert!(options.resorts.is_none());
    }

    #[test]
    fn parses_screen_and_catalog_files() {
        let options = LaunchOptions::try_parse_from([
            "wayfarer",
            "--screen",
            "slideshow",
            "--asset-root",
            "/opt/wayfarer",
            "--resorts",
            "spas.json",
        ])
        .unwrap();
        assert_eq!(options.screen, Some(ScreenArg::Slideshow));
        assert_eq!(options.asset_root, Path::new("/opt/wayfarer"));
        assert_eq!(options.resorts.as_deref(), Some(Path::new("spas.json")));
    }

    #[test]
    fn rejects_unknown_screen() {
        assert!(LaunchOptions::try_parse_from(["wayfarer", "--screen", "map"]).is_err());
    }
}
