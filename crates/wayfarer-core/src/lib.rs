//! Core data model for the Wayfarer travel catalog.
//!
//! This crate owns the Record Store: the immutable catalog entries shown by the
//! destination list and the resort slideshow, the provider seam they are loaded
//! through, and the trip search used by the search panel.
//!
//! # Overview
//!
//! 1. **Records** - [`record`]: the single `(title, description, image reference)`
//!    shape shared by destinations and resorts.
//! 2. **Sources** - [`source`]: the [`RecordSource`] provider trait. The built-in
//!    literal lists live in [`catalog`].
//! 3. **Trip search** - [`search`]: cost/keyword facts per destination, queries
//!    over them, and the saved [`Favorites`] list.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{RecordSource, catalog::Resorts};
//!
//! let resorts = Resorts.records().unwrap();
//! assert_eq!(resorts.len(), 5);
//! assert_eq!(resorts[0].title(), "Blue Dreams Resort & Spa, Turkey");
//! ```

pub use self::{
    record::Record,
    search::{BudgetParseError, Favorites, Trip, TripQuery, parse_budget},
    source::{RecordSource, SourceError, StaticSource},
};

pub mod catalog;
pub mod record;
pub mod search;
pub mod source;
