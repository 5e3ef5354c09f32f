//! Trip search and saved favorites.
//!
//! A [`Trip`] carries the searchable facts of a destination: country, cost and
//! keywords. A [`TripQuery`] combines up to three optional criteria, all of
//! which must match. Criteria compare case-insensitively.

use std::{
    fmt::{self, Display},
    num::{IntErrorKind, ParseIntError},
};

/// Searchable facts about a destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trip {
    destination: String,
    country: String,
    cost: u32,
    keywords: Vec<String>,
}

impl Trip {
    /// Creates a new trip.
    #[must_use]
    pub fn new<K>(
        destination: impl Into<String>,
        country: impl Into<String>,
        cost: u32,
        keywords: K,
    ) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            destination: destination.into(),
            country: country.into(),
            cost,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the destination name. Favorites are keyed by this name.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the country of the destination.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the trip cost in US dollars.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns the keywords describing the trip.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns a one-line summary of the trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer_core::Trip;
    ///
    /// let trip = Trip::new("Paris", "France", 1600, ["romantic", "city", "art"]);
    /// assert_eq!(
    ///     trip.summary(),
    ///     "Paris (France) - $1600 | Keywords: romantic, city, art"
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }

    fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| k.to_lowercase() == keyword)
    }
}

impl Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - ${} | Keywords: {}",
            self.destination,
            self.country,
            self.cost,
            self.keywords.join(", ")
        )
    }
}

/// A combination of optional trip search criteria.
///
/// Blank criteria are ignored, so the default query matches every trip.
///
/// # Examples
///
/// ```
/// use wayfarer_core::{TripQuery, catalog};
///
/// let trips = catalog::trips();
/// let query = TripQuery::new().keyword("City").max_budget(1600);
/// let names: Vec<_> = query.filter(&trips).iter().map(|t| t.destination()).collect();
/// assert_eq!(names, ["Paris", "New York City"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TripQuery {
    name: Option<String>,
    keyword: Option<String>,
    max_budget: Option<i64>,
}

impl TripQuery {
    /// Creates a query that matches every trip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to destinations whose name contains `name`.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = normalize(name);
        self
    }

    /// Restricts results to trips tagged with `keyword`.
    #[must_use]
    pub fn keyword(mut self, keyword: &str) -> Self {
        self.keyword = normalize(keyword);
        self
    }

    /// Restricts results to trips costing at most `budget`.
    ///
    /// A negative budget matches nothing.
    #[must_use]
    pub fn max_budget(mut self, budget: i64) -> Self {
        self.max_budget = Some(budget);
        self
    }

    /// Sets or clears the budget limit.
    #[must_use]
    pub fn with_max_budget(mut self, budget: Option<i64>) -> Self {
        self.max_budget = budget;
        self
    }

    /// Returns `true` if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.keyword.is_none() && self.max_budget.is_none()
    }

    /// Returns `true` if `trip` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, trip: &Trip) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|name| trip.destination.to_lowercase().contains(name));
        let keyword_ok = self
            .keyword
            .as_deref()
            .is_none_or(|keyword| trip.has_keyword(keyword));
        let budget_ok = self
            .max_budget
            .is_none_or(|budget| i64::from(trip.cost) <= budget);
        name_ok && keyword_ok && budget_ok
    }

    /// Returns the matching trips in input order.
    #[must_use]
    pub fn filter<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        trips.iter().filter(|trip| self.matches(trip)).collect()
    }
}

fn normalize(criterion: &str) -> Option<String> {
    let criterion = criterion.trim();
    (!criterion.is_empty()).then(|| criterion.to_lowercase())
}

/// Error returned by [`parse_budget`] for input that is not a whole number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("please enter a valid number: {input:?}")]
pub struct BudgetParseError {
    input: String,
    source: ParseIntError,
}

impl BudgetParseError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses a budget entered by the user.
///
/// Blank input means "no limit".
///
/// # Errors
///
/// Returns [`BudgetParseError`] if the trimmed input is not an integer.
/// Negative budgets are accepted and match no trip; integers too large to
/// represent saturate.
///
/// # Examples
///
/// ```
/// use wayfarer_core::parse_budget;
///
/// assert_eq!(parse_budget(" 1800 ").unwrap(), Some(1800));
/// assert_eq!(parse_budget("").unwrap(), None);
/// assert_eq!(parse_budget("-5").unwrap(), Some(-5));
/// assert!(parse_budget("cheap").is_err());
/// ```
pub fn parse_budget(input: &str) -> Result<Option<i64>, BudgetParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(budget) => Ok(Some(budget)),
        Err(source) => match source.kind() {
            IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            _ => Err(BudgetParseError {
                input: trimmed.to_owned(),
                source,
            }),
        },
    }
}

/// An ordered, duplicate-free list of saved destination names.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Favorites {
    destinations: Vec<String>,
}

impl Favorites {
    /// Creates an empty favorites list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a destination. Returns `false` if it was already saved.
    pub fn add(&mut self, destination: &str) -> bool {
        if self.contains(destination) {
            return false;
        }
        self.destinations.push(destination.to_owned());
        true
    }

    /// Removes a destination. Returns `false` if it was not saved.
    pub fn remove(&mut self, destination: &str) -> bool {
        if let Some(index) = self.destinations.iter().position(|d| d == destination) {
            self.destinations.remove(index);
            true
        } else {
            false
        }
    }

    /// Saves the destination if absent, removes it otherwise.
    ///
    /// Returns `true` if the destination is saved after the call.
    pub fn toggle(&mut self, destination: &str) -> bool {
        if self.remove(destination) {
            false
        } else {
            self.add(destination)
        }
    }

    /// Returns `true` if the destination is saved.
    #[must_use]
    pub fn contains(&self, destination: &str) -> bool {
        self.destinations.iter().any(|d| d == destination)
    }

    /// Returns the number of saved destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns `true` if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Iterates saved destinations in the order they were saved.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.destinations.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for Favorites
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut favorites = Self::new();
        for destination in iter {
            favorites.add(destination.as_ref());
        }
        favorites
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Favorites, Trip, TripQuery, parse_budget};
    use crate::catalog;

    fn names<'a>(trips: &[&'a Trip]) -> Vec<&'a str> {
        trips.iter().map(|t| t.destination()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let trips = catalog::trips();
        let query = TripQuery::new().name("  ").keyword("");
        assert!(query.is_empty());
        assert_eq!(query.filter(&trips).len(), trips.len());
    }

    #[test]
    fn name_is_case_insensitive_substring() {
        let trips = catalog::trips();
        let query = TripQuery::new().name("YORK");
        assert_eq!(names(&query.filter(&trips)), ["New York City"]);
    }

    #[test]
    fn keyword_must_match_whole_keyword() {
        let trips = catalog::trips();
        assert_eq!(
            names(&TripQuery::new().keyword("Romantic").filter(&trips)),
            ["Amalfi Coast", "Paris"]
        );
        assert!(TripQuery::new().keyword("roman").filter(&trips).is_empty());
    }

    #[test]
    fn budget_is_inclusive() {
        let trips = catalog::trips();
        assert_eq!(
            names(&TripQuery::new().max_budget(1600).filter(&trips)),
            ["Paris", "New York City"]
        );
        assert!(TripQuery::new().max_budget(1499).filter(&trips).is_empty());
    }

    #[test]
    fn combined_criteria_intersect() {
        let trips = catalog::trips();
        let query = TripQuery::new()
            .name("o")
            .keyword("city")
            .with_max_budget(Some(2200));
        assert_eq!(names(&query.filter(&trips)), ["Tokyo", "New York City"]);
    }

    #[test]
    fn parse_budget_rejects_garbage() {
        let err = parse_budget(" 12k ").unwrap_err();
        assert_eq!(err.input(), "12k");
        assert_eq!(parse_budget("1.5").unwrap_err().input(), "1.5");
        assert_eq!(parse_budget("   ").unwrap(), None);
    }

    #[test]
    fn negative_budget_matches_nothing() {
        let trips = catalog::trips();
        let budget = parse_budget("-5").unwrap();
        assert_eq!(budget, Some(-5));
        assert!(TripQuery::new().with_max_budget(budget).filter(&trips).is_empty());

        let free = [Trip::new("Backyard", "Home", 0, ["camping"])];
        assert!(TripQuery::new().max_budget(-1).filter(&free).is_empty());
        assert_eq!(TripQuery::new().max_budget(0).filter(&free).len(), 1);
    }

    #[test]
    fn oversized_budget_saturates() {
        let trips = catalog::trips();
        let budget = parse_budget("99999999999999999999999").unwrap();
        assert_eq!(budget, Some(i64::MAX));
        assert_eq!(TripQuery::new().with_max_budget(budget).filter(&trips).len(), 5);
        assert_eq!(parse_budget("4294967296").unwrap(), Some(4_294_967_296));
    }

    #[test]
    fn favorites_reject_duplicates() {
        let mut favorites = Favorites::new();
        assert!(favorites.add("Tokyo"));
        assert!(favorites.add("Paris"));
        assert!(!favorites.add("Tokyo"));

        assert_eq!(favorites.iter().collect::<Vec<_>>(), ["Tokyo", "Paris"]);
    }

    #[test]
    fn favorites_toggle_and_remove() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("Santorini"));
        assert!(favorites.contains("Santorini"));
        assert!(!favorites.toggle("Santorini"));
        assert!(favorites.is_empty());
        assert!(!favorites.remove("Santorini"));
    }

    #[test]
    fn favorites_from_iter_drops_duplicates() {
        let favorites: Favorites = ["Paris", "Tokyo", "Paris"].into_iter().collect();
        assert_eq!(favorites.len(), 2);
    }

    proptest! {
        #[test]
        fn filter_is_an_ordered_subsequence(
            name in "[a-zA-Z ]{0,4}",
            keyword in proptest::sample::select(vec!["", "city", "beach", "romantic", "art"]),
            budget in proptest::option::of(-100i64..3000),
        ) {
            let trips = catalog::trips();
            let query = TripQuery::new().name(&name).keyword(keyword).with_max_budget(budget);
            let result = query.filter(&trips);

            let mut remaining = trips.iter();
            for found in &result {
                prop_assert!(remaining.any(|t| std::ptr::eq(t, *found)));
            }
            prop_assert_eq!(
                result.len(),
                trips.iter().filter(|t| query.matches(t)).count()
            );
        }
    }
}
