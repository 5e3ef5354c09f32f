//! List presentation and the shared missing-image policy.

use wayfarer_core::Record;

use crate::{DisplayAdapter, RenderableUnit, ResourceResolver};

/// What to do with a record whose image does not resolve.
///
/// One policy governs both the list and the slideshow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MissingImagePolicy {
    /// Leave the record out of the presented sequence.
    #[default]
    Omit,
    /// Keep the record and show fallback text instead of the image.
    Placeholder,
}

impl MissingImagePolicy {
    /// Adapts one record and applies the policy to a failure.
    ///
    /// Returns `None` when the record is to be left out.
    #[must_use]
    pub fn adapt<R>(self, adapter: &DisplayAdapter<R>, record: &Record) -> Option<RenderableUnit>
    where
        R: ResourceResolver,
    {
        match adapter.adapt(record) {
            Ok(unit) => Some(unit),
            Err(_) if self.is_omit() => None,
            Err(_) => Some(RenderableUnit::placeholder(record)),
        }
    }

    /// Adapts every record in order, applying the policy.
    #[must_use]
    pub fn adapt_all<R>(
        self,
        adapter: &DisplayAdapter<R>,
        records: &[Record],
    ) -> Vec<RenderableUnit>
    where
        R: ResourceResolver,
    {
        records
            .iter()
            .filter_map(|record| self.adapt(adapter, record))
            .collect()
    }
}

/// Presents every record at once, in input order.
///
/// The rendering surface shows one row per unit and keeps at most one row
/// selected; that selection is not part of the presenter.
#[derive(Debug, Clone)]
pub struct ListPresenter<R> {
    adapter: DisplayAdapter<R>,
    policy: MissingImagePolicy,
}

impl<R> ListPresenter<R>
where
    R: ResourceResolver,
{
    /// Creates a presenter.
    #[must_use]
    pub fn new(adapter: DisplayAdapter<R>, policy: MissingImagePolicy) -> Self {
        Self { adapter, policy }
    }

    /// Returns the policy applied to missing images.
    #[must_use]
    pub fn policy(&self) -> MissingImagePolicy {
        self.policy
    }

    /// Maps every record through the adapter.
    #[must_use]
    pub fn present(&self, records: &[Record]) -> Vec<RenderableUnit> {
        let units = self.policy.adapt_all(&self.adapter, records);
        log::info!(
            "presented {} of {} records ({:?} missing images)",
            units.len(),
            records.len(),
            self.policy
        );
        units
    }
}
