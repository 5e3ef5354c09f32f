//! Wayfarer desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Wayfarer application.

use clap::Parser as _;
use wayfarer_app::{LaunchOptions, WayfarerApp};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.wayfarer";

    let options = LaunchOptions::parse();

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Wayfarer, version={}",
        wayfarer_app::version::build_version()
    );

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((1200.0, 760.0))
            .with_min_inner_size((640.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Wayfarer",
        native_options,
        Box::new(move |cc| Ok(Box::new(WayfarerApp::new(cc, &options)))),
    )
}
