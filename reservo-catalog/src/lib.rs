pub mod catalog;
pub mod item;

pub use catalog::{Catalog, CatalogError};
pub use item::CatalogEntry;
