//! Catalog record representation.

use std::fmt::{self, Display};

/// One catalog entry: a travel destination or a wellness resort.
///
/// A record is immutable once constructed. Both flows of the application use
/// this same shape; the image reference is resolved later by whatever resolver
/// the presentation layer is configured with.
///
/// # Examples
///
/// ```
/// use wayfarer_core::Record;
///
/// let record = Record::new(
///     "Tokyo, Japan",
///     "A metropolis of neon nightlife and futuristic tech.",
///     "/resources/Tokyo.jpg",
/// );
/// assert_eq!(record.title(), "Tokyo, Japan");
/// assert_eq!(record.image_ref(), "/resources/Tokyo.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    title: String,
    description: String,
    image_ref: String,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Returns the display name of the entry.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the short blurb shown next to the title.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the path-like reference of the entry's image.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
