//! JSON catalog files.
//!
//! A catalog file is a JSON array of objects with `title`, `description` and
//! `image_ref` string fields, in presentation order.

use std::{fs, path::PathBuf};

use wayfarer_core::{Record, RecordSource, SourceError};

#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct RecordDto {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) image_ref: String,
}

impl From<RecordDto> for Record {
    fn from(dto: RecordDto) -> Self {
        Record::new(dto.title, dto.description, dto.image_ref)
    }
}

#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

impl RecordSource for JsonCatalog {
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|err| SourceError::Unreadable {
            origin: self.origin(),
            message: err.to_string(),
        })?;
        let dtos: Vec<RecordDto> =
            serde_json::from_str(&text).map_err(|err| SourceError::Malformed {
                origin: self.origin(),
                message: err.to_string(),
            })?;
        log::info!("loaded {} records from {}", dtos.len(), self.origin());
        Ok(dtos.into_iter().map(Record::from).collect())
    }
}

/// Reads `source`, falling back to `builtin` if it fails.
#[must_use]
pub fn load_or_builtin(
    source: Option<&dyn RecordSource>,
    builtin: &dyn RecordSource,
) -> Vec<Record> {
    if let Some(source) = source {
        match source.records() {
            Ok(records) => return records,
            Err(err) => log::error!("{err}; using the built-in catalog"),
        }
    }
    builtin.records().unwrap_or_else(|err| {
        log::error!("{err}");
        Vec::new()
    })
}
