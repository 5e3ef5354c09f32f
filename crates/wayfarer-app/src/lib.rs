//! Shared library module for the Wayfarer app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod app;
pub mod catalog_file;
pub mod launch;
pub mod persistence;
pub mod session;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;

#[cfg(test)]
mod testing;

pub use self::{app::WayfarerApp, launch::LaunchOptions};
