//! Slide-at-a-time presentation.
//!
//! The image pane and the description pane of a slideshow both read from the
//! same [`RenderableUnit`], selected by a single index. There is no second
//! cursor that could drift.

use wayfarer_core::Record;

use crate::{
    DisplayAdapter, DisplayText, ImageHandle, MissingImagePolicy, RenderableUnit,
    ResourceResolver, SlideNavigator,
};

/// A cyclic slideshow over adapted records.
#[derive(Debug, Clone)]
pub struct Slideshow {
    navigator: SlideNavigator<RenderableUnit>,
    // Position of each slide's record in the input, parallel to the slides.
    sources: Vec<usize>,
}

impl Slideshow {
    /// Adapts every record once and positions the slideshow on the first slide.
    #[must_use]
    pub fn build<R>(
        records: &[Record],
        adapter: &DisplayAdapter<R>,
        policy: MissingImagePolicy,
    ) -> Self
    where
        R: ResourceResolver,
    {
        let (sources, slides): (Vec<_>, Vec<_>) = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| Some((index, policy.adapt(adapter, record)?)))
            .unzip();
        log::info!("built slideshow with {} of {} records", slides.len(), records.len());
        Self {
            navigator: SlideNavigator::new(slides),
            sources,
        }
    }

    /// Creates a slideshow over already adapted units.
    #[must_use]
    pub fn from_units(units: Vec<RenderableUnit>) -> Self {
        Self {
            sources: (0..units.len()).collect(),
            navigator: SlideNavigator::new(units),
        }
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.navigator.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.navigator.is_empty()
    }

    /// Returns the current slide index, or `None` if empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigator.current_index()
    }

    /// Advances to the next slide, wrapping around.
    pub fn next(&mut self) {
        self.navigator.next();
    }

    /// Steps back to the previous slide, wrapping around.
    pub fn previous(&mut self) {
        self.navigator.previous();
    }

    /// Jumps to the slide at `index`, if it exists.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.navigator.go_to(index)
    }

    /// Returns the input position of the current slide's record.
    #[must_use]
    pub fn current_source(&self) -> Option<usize> {
        self.sources.get(self.navigator.current_index()?).copied()
    }

    /// Jumps to the slide built from the record at input position `source`.
    ///
    /// Returns `false` and stays put if that record has no slide.
    pub fn go_to_source(&mut self, source: usize) -> bool {
        match self.sources.iter().position(|&s| s == source) {
            Some(index) => self.navigator.go_to(index),
            None => false,
        }
    }

    /// Returns what both panes display for the current slide.
    #[must_use]
    pub fn view(&self) -> Option<SlideView<'_>> {
        let index = self.navigator.current_index()?;
        let unit = self.navigator.current()?;
        Some(SlideView {
            index,
            len: self.navigator.len(),
            unit,
        })
    }
}

/// The current slide: one index, its text and its image.
#[derive(Debug, Clone, Copy)]
pub struct SlideView<'a> {
    index: usize,
    len: usize,
    unit: &'a RenderableUnit,
}

impl<'a> SlideView<'a> {
    /// Returns the index shared by the image and description panes.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of slides in the slideshow.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Returns the one-based position label, such as `3 / 5`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    /// Returns the description pane's text.
    #[must_use]
    pub fn text(&self) -> &'a DisplayText {
        self.unit.text()
    }

    /// Returns the image pane's image, if the slide has one.
    #[must_use]
    pub fn image(&self) -> Option<&'a ImageHandle> {
        self.unit.image()
    }

    /// Returns the text shown in place of a missing image.
    #[must_use]
    pub fn fallback(&self) -> Option<String> {
        self.unit.fallback()
    }

    /// Returns the underlying unit.
    #[must_use]
    pub fn unit(&self) -> &'a RenderableUnit {
        self.unit
    }
}
