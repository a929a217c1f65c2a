use serde::{Deserialize, Serialize};

pub const ITEM_COLUMN: &str = "Item";
pub const LOCATION_COLUMN: &str = "Location";

/// One reservable item at one location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Location")]
    pub location: String,
}

impl CatalogEntry {
    pub fn new(item: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            location: location.into(),
        }
    }
}
