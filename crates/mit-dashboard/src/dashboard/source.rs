use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::SourceLocation;

/// Failure while retrieving a raw CSV export.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no file source can serve {0}")]
    Unsupported(String),
    #[error("nothing published at {0}")]
    Missing(String),
}

/// Retrieves the raw text of a published CSV export.
#[async_trait]
pub trait CsvSource: Send + Sync {
    async fn fetch(&self, location: &SourceLocation) -> Result<String, FetchError>;
}

/// Reads exports over HTTP, falling back to the local filesystem for path locations.
#[derive(Clone)]
pub struct HttpCsvSource {
    client: reqwest::Client,
    files: FileCsvSource,
}

impl HttpCsvSource {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .unwrap_or_default();

        Self {
            client,
            files: FileCsvSource,
        }
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch(&self, location: &SourceLocation) -> Result<String, FetchError> {
        let url = match location {
            SourceLocation::Url(url) => url,
            SourceLocation::Path(_) => return self.files.fetch(location).await,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Http {
            url: url.clone(),
            source,
        })
    }
}

/// Reads exports saved to disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCsvSource;

#[async_trait]
impl CsvSource for FileCsvSource {
    async fn fetch(&self, location: &SourceLocation) -> Result<String, FetchError> {
        match location {
            SourceLocation::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Io {
                        path: path.display().to_string(),
                        source,
                    })
            }
            SourceLocation::Url(url) => Err(FetchError::Unsupported(url.clone())),
        }
    }
}

/// Exports held in memory, keyed by location. Used for offline runs and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCsvSource {
    exports: HashMap<SourceLocation, String>,
}

impl InMemoryCsvSource {
    pub fn with_export(mut self, location: SourceLocation, body: impl Into<String>) -> Self {
        self.exports.insert(location, body.into());
        self
    }
}

#[async_trait]
impl CsvSource for InMemoryCsvSource {
    async fn fetch(&self, location: &SourceLocation) -> Result<String, FetchError> {
        self.exports
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::Missing(location.to_string()))
    }
}
