use crate::catalog::loader::CatalogError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Common trait for catalog document sources
/// This allows easy addition of new backends (HTTP, file, embedded fixtures)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog document.
    async fn fetch_document(&self) -> Result<Value, CatalogError>;

    /// Human-readable name of where the catalog comes from.
    fn source_name(&self) -> String;
}

/// HTTP-backed catalog source: a single GET of a JSON document.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_document(&self) -> Result<Value, CatalogError> {
        debug!("Fetching catalog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Catalog endpoint returned status: {}", response.status());
            return Err(CatalogError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of catalog JSON", body.len());

        Ok(serde_json::from_str(&body)?)
    }

    fn source_name(&self) -> String {
        self.url.clone()
    }
}

/// File-backed catalog source, mainly for local data files and tests.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_document(&self) -> Result<Value, CatalogError> {
        debug!("Reading catalog file {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
