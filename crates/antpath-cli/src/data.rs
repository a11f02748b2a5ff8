//! JSON file providers
//!
//! Data file layout:
//!
//! ```json
//! {
//!   "points":  ["start", "1", "2", "finish"],
//!   "weights": [[0, 2, 5, 0], [0, 0, 3, 4], [0, 0, 0, 1], [0, 0, 0, 0]],
//!   "scores":  { "environmental": [], "abilities": [], "proficiencies": [] }
//! }
//! ```

use std::path::{Path, PathBuf};

use antpath_common::{
    AcoError, Result, ScoreTables, ScoreTablesData, WeightMatrix, WeightMatrixData,
};
use antpath_engine::{ScoreProvider, WeightMatrixProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-disk layout of a data file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(flatten)]
    pub matrix: WeightMatrixData,
    #[serde(default)]
    pub scores: ScoreTablesData,
}

/// Reads weights and scores from one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<DataFile> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AcoError::Storage(format!("{}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), bytes = raw.len(), "Data file read");
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl WeightMatrixProvider for JsonFileProvider {
    async fn load_weights(&self) -> Result<WeightMatrix> {
        WeightMatrix::try_from(self.read().await?.matrix)
    }
}

#[async_trait]
impl ScoreProvider for JsonFileProvider {
    async fn load_scores(&self) -> Result<ScoreTables> {
        ScoreTables::try_from(self.read().await?.scores)
    }
}
