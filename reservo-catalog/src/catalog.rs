use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::item::{CatalogEntry, ITEM_COLUMN, LOCATION_COLUMN};

/// Read-only list of reservable (item, location) pairs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a CSV file with at least `Item` and `Location` columns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_reader(file)?;
        tracing::info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse CSV from any reader. Extra columns are ignored.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in [ITEM_COLUMN, LOCATION_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn(column));
            }
        }

        let entries = rdr
            .deserialize::<CatalogEntry>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct item names in first-seen order, for the item selector.
    pub fn unique_items(&self) -> Vec<&str> {
        unique(self.entries.iter().map(|e| e.item.as_str()))
    }

    /// Distinct location names in first-seen order, for the location selector.
    pub fn unique_locations(&self) -> Vec<&str> {
        unique(self.entries.iter().map(|e| e.location.as_str()))
    }

    pub fn contains(&self, item: &str, location: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.item == item && e.location == location)
    }
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot open catalog {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Catalog is missing the {0:?} column")]
    MissingColumn(&'static str),

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),
}
