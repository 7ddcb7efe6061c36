pub mod loader;
pub mod normalize;
pub mod sources;

pub use loader::{load_catalog, CatalogError};
pub use sources::{CatalogSource, FileCatalogSource, HttpCatalogSource};
