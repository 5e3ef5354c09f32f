//! The catalog data and its adapted presentation for one run of the app.

use std::fmt;

use wayfarer_core::{Record, Trip};
use wayfarer_gallery::{
    DisplayAdapter, ImageSize, ListPresenter, MissingImagePolicy, RenderableUnit,
    ResourceResolver, Slideshow,
};

/// Everything the screens display, derived once from the records.
///
/// Images are decoded and scaled when the session is built, and again only
/// when the missing-image policy changes.
pub struct Session {
    destinations: Vec<Record>,
    resorts: Vec<Record>,
    trips: Vec<Trip>,
    resolver: Box<dyn ResourceResolver>,
    policy: MissingImagePolicy,
    list: Vec<RenderableUnit>,
    slideshow: Slideshow,
    generation: u64,
}

// `dyn ResourceResolver` is not `Debug`.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("destinations", &self.destinations.len())
            .field("resorts", &self.resorts.len())
            .field("trips", &self.trips.len())
            .field("policy", &self.policy)
            .field("list", &self.list.len())
            .field("slideshow", &self.slideshow.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub fn new(
        destinations: Vec<Record>,
        resorts: Vec<Record>,
        trips: Vec<Trip>,
        resolver: Box<dyn ResourceResolver>,
        policy: MissingImagePolicy,
    ) -> Self {
        let list = present_list(&destinations, resolver.as_ref(), policy);
        let slideshow = build_slideshow(&resorts, resolver.as_ref(), policy);
        Self {
            destinations,
            resorts,
            trips,
            resolver,
            policy,
            list,
            slideshow,
            generation: 0,
        }
    }

    #[must_use]
    pub fn policy(&self) -> MissingImagePolicy {
        self.policy
    }

    /// Bumped every time the presented units are rebuilt.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn list(&self) -> &[RenderableUnit] {
        &self.list
    }

    #[must_use]
    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn slideshow_mut(&mut self) -> &mut Slideshow {
        &mut self.slideshow
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Rebuilds the list and the slideshow under `policy`.
    ///
    /// The slideshow stays on the same resort if it is still shown, and
    /// returns to the first slide otherwise. Returns `false` if the policy
    /// was already in effect.
    pub fn apply_policy(&mut self, policy: MissingImagePolicy) -> bool {
        if policy == self.policy {
            return false;
        }

        let current_source = self.slideshow.current_source();

        self.policy = policy;
        self.list = present_list(&self.destinations, self.resolver.as_ref(), policy);
        self.slideshow = build_slideshow(&self.resorts, self.resolver.as_ref(), policy);
        self.generation += 1;

        if let Some(source) = current_source {
            self.slideshow.go_to_source(source);
        }

        log::info!("applied missing image policy {policy:?}");
        true
    }
}

fn present_list(
    records: &[Record],
    resolver: &dyn ResourceResolver,
    policy: MissingImagePolicy,
) -> Vec<RenderableUnit> {
    ListPresenter::new(DisplayAdapter::new(resolver, ImageSize::LIST_ROW), policy).present(records)
}

fn build_slideshow(
    records: &[Record],
    resolver: &dyn ResourceResolver,
    policy: MissingImagePolicy,
) -> Slideshow {
    Slideshow::build(records, &DisplayAdapter::new(resolver, ImageSize::SLIDE), policy)
}
