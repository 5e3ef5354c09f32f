//! Presentation logic for Wayfarer catalogs.
//!
//! This crate turns [`Record`]s into display-ready units and drives the two
//! ways they are shown: all at once in a list, or one at a time in a cyclic
//! slideshow. It is independent of any GUI toolkit; the desktop app renders
//! the units it produces.
//!
//! # Overview
//!
//! - [`resolver`]: the [`ResourceResolver`] seam that turns an image reference
//!   into bytes, with directory and in-memory implementations.
//! - [`adapter`]: the [`DisplayAdapter`], which composes display text and a
//!   decoded image scaled to a configurable [`ImageSize`].
//! - [`presenter`]: the [`ListPresenter`] and the shared [`MissingImagePolicy`].
//! - [`navigator`]: the wrapping [`SlideNavigator`].
//! - [`slideshow`]: the [`Slideshow`], which pairs each slide's text and image
//!   behind one index.
//!
//! [`Record`]: wayfarer_core::Record
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{RecordSource, catalog::Resorts};
//! use wayfarer_gallery::{DisplayAdapter, ImageSize, MemoryResolver, MissingImagePolicy, Slideshow};
//!
//! let records = Resorts.records().unwrap();
//! let adapter = DisplayAdapter::new(MemoryResolver::new(), ImageSize::SLIDE);
//! let mut slideshow = Slideshow::build(&records, &adapter, MissingImagePolicy::Placeholder);
//!
//! slideshow.previous();
//! let view = slideshow.view().unwrap();
//! assert_eq!(view.index(), 4);
//! assert_eq!(view.text().title(), "Vale Resort, Golf, & Spa, UK");
//! assert!(view.image().is_none());
//! ```

pub use self::{
    adapter::{
        DisplayAdapter, DisplayText, ImageHandle, ImageResolutionError, ImageSize, RenderableUnit,
    },
    navigator::SlideNavigator,
    presenter::{ListPresenter, MissingImagePolicy},
    resolver::{DirResolver, MemoryResolver, ResourceResolver},
    slideshow::{SlideView, Slideshow},
};

pub mod adapter;
pub mod navigator;
pub mod presenter;
pub mod resolver;
pub mod slideshow;

#[cfg(test)]
mod testing;
