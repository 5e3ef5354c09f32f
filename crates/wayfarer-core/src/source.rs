//! Record providers.
//!
//! The Record Store is a seam: anything that can yield an ordered list of
//! [`Record`]s can feed the list or the slideshow. The built-in catalogs in
//! [`crate::catalog`] are one implementation; the desktop app adds a JSON file
//! source on top of this trait.

use crate::Record;

/// Errors reported by a [`RecordSource`] that reads from outside the process.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SourceError {
    /// The backing data could not be read.
    #[display("failed to read record source `{origin}`: {message}")]
    Unreadable {
        /// Where the source tried to read from.
        origin: String,
        /// Description of the underlying failure.
        message: String,
    },
    /// The backing data was read but is not a valid record list.
    #[display("malformed record source `{origin}`: {message}")]
    Malformed {
        /// Where the source read from.
        origin: String,
        /// Description of what was wrong with the data.
        message: String,
    },
}

/// A provider of an ordered sequence of records.
///
/// Implementations must return records in a stable order; the list and the
/// slideshow both preserve it.
pub trait RecordSource {
    /// Returns the records in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backing data cannot be read or parsed.
    fn records(&self) -> Result<Vec<Record>, SourceError>;
}

impl RecordSource for Vec<Record> {
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.clone())
    }
}

impl RecordSource for [Record] {
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.to_vec())
    }
}

impl<S> RecordSource for &S
where
    S: RecordSource + ?Sized,
{
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        (**self).records()
    }
}

/// A source backed by a fixed table of `(title, description, image_ref)` literals.
///
/// # Examples
///
/// ```
/// use wayfarer_core::{RecordSource, StaticSource};
///
/// static ENTRIES: &[(&str, &str, &str)] = &[("A", "first", "/a.jpg"), ("B", "second", "/b.jpg")];
///
/// let records = StaticSource::new(ENTRIES).records().unwrap();
/// assert_eq!(records[1].title(), "B");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    entries: &'static [(&'static str, &'static str, &'static str)],
}

impl StaticSource {
    /// Creates a source over the given literal table.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecordSource for StaticSource {
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self
            .entries
            .iter()
            .map(|&(title, description, image_ref)| Record::new(title, description, image_ref))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordSource, SourceError, StaticSource};
    use crate::Record;

    static ENTRIES: &[(&str, &str, &str)] = &[
        ("First", "one", "/resources/1.jpg"),
        ("Second", "two", "/resources/2.jpg"),
        ("Third", "three", "/resources/3.jpg"),
    ];

    #[test]
    fn static_source_preserves_order() {
        let records = StaticSource::new(ENTRIES).records().unwrap();
        let titles: Vec<_> = records.iter().map(Record::title).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn vec_source_returns_copy() {
        let records = vec![Record::new("Only", "entry", "/only.jpg")];
        assert_eq!(records.records().unwrap(), records);
    }

    #[test]
    fn borrowed_source_delegates() {
        let source = StaticSource::new(ENTRIES);
        let borrowed = &source;
        assert_eq!(borrowed.records().unwrap().len(), 3);
    }

    #[test]
    fn error_messages_name_origin() {
        let err = SourceError::Malformed {
            origin: "catalog.json".to_owned(),
            message: "expected array".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "malformed record source `catalog.json`: expected array"
        );
    }
}
