pub mod loader;
pub mod schema;

pub use loader::{catalog_from_entries, load_catalog, DataLoadError};
