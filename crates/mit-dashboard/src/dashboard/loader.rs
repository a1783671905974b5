use std::sync::Arc;

use tracing::{debug, warn};

use super::source::{CsvSource, FetchError};
use super::table::{parse_table, RawTable, TableSpec};
use crate::config::{SourceConfig, SourceLocation};

/// Source label reported when an upstream table could not be loaded.
pub const ERROR_LABEL: &str = "Error";

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// A freshly loaded table and the label of where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub table: RawTable,
    pub source: String,
}

impl LoadedTable {
    fn failed() -> Self {
        Self {
            table: RawTable::default(),
            source: ERROR_LABEL.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Fetches and parses both exports. Loading never fails: upstream problems are logged and
/// surface as an empty table labelled [`ERROR_LABEL`].
#[derive(Clone)]
pub struct TableLoader {
    source: Arc<dyn CsvSource>,
    config: SourceConfig,
}

impl TableLoader {
    pub fn new(source: Arc<dyn CsvSource>, config: SourceConfig) -> Self {
        Self { source, config }
    }

    pub async fn load_candidates(&self) -> LoadedTable {
        self.load("candidates", &self.config.candidates, &TableSpec::candidates())
            .await
    }

    pub async fn load_jobs(&self) -> LoadedTable {
        self.load("jobs", &self.config.jobs, &TableSpec::jobs()).await
    }

    async fn load(&self, kind: &str, location: &SourceLocation, spec: &TableSpec) -> LoadedTable {
        match self.fetch_table(location, spec).await {
            Ok(table) => {
                debug!(table = kind, rows = table.len(), "loaded upstream table");
                LoadedTable {
                    table,
                    source: self.config.label.clone(),
                }
            }
            Err(error) => {
                warn!(table = kind, %location, %error, "upstream table unavailable");
                LoadedTable::failed()
            }
        }
    }

    async fn fetch_table(
        &self,
        location: &SourceLocation,
        spec: &TableSpec,
    ) -> Result<RawTable, LoadError> {
        let body = self.source.fetch(location).await?;
        Ok(parse_table(body.as_bytes(), spec)?)
    }
}
