use crate::catalog::normalize::normalize_record;
use crate::catalog::sources::CatalogSource;
use crate::models::{Catalog, Property};
use crate::search::facets::generate_facets;
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

/// Why a catalog load failed. A failed load is terminal for that attempt
/// and never substitutes fabricated data; callers can tell it apart from
/// a successfully loaded empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("catalog document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog document is not a JSON array")]
    NotAnArray,
}

/// Fetch, normalize, and facet a catalog from the given source.
///
/// The document must be a JSON array; each element is normalized
/// independently and none are dropped. The returned `Catalog` carries
/// freshly generated facets and is immutable for the session, reloading
/// produces a new value.
pub async fn load_catalog<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog, CatalogError> {
    info!("Loading property catalog from {}", source.source_name());

    let document = source.fetch_document().await.map_err(|err| {
        warn!("Catalog unavailable: {err}");
        err
    })?;

    let items = document.as_array().ok_or(CatalogError::NotAnArray)?;

    let properties: Vec<Property> = items
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_record(index, raw))
        .collect();

    let facets = generate_facets(&properties);

    info!(
        "Catalog loaded: {} properties, {} neighborhoods, {} types",
        properties.len(),
        facets.neighborhoods.len(),
        facets.property_types.len()
    );

    Ok(Catalog {
        properties,
        facets,
        loaded_at: Utc::now(),
    })
}
