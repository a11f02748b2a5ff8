//! Data providers
//!
//! The engine reads its weight matrix and score tables through these traits,
//! once, before a run starts.

use async_trait::async_trait;
use std::sync::Arc;

use antpath_common::{Result, ScoreTables, WeightMatrix};
use tracing::debug;

use crate::colony::ColonyRunner;
use crate::config::ColonyConfig;

/// Source of the weight matrix
#[async_trait]
pub trait WeightMatrixProvider: Send + Sync {
    async fn load_weights(&self) -> Result<WeightMatrix>;
}

/// Source of environmental, ability, and proficiency scores
#[async_trait]
pub trait ScoreProvider: Send + Sync {
    async fn load_scores(&self) -> Result<ScoreTables>;
}

/// Provider over data already held in memory
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    weights: Arc<WeightMatrix>,
    scores: Arc<ScoreTables>,
}

impl InMemoryProvider {
    pub fn new(weights: WeightMatrix, scores: ScoreTables) -> Self {
        Self {
            weights: Arc::new(weights),
            scores: Arc::new(scores),
        }
    }
}

#[async_trait]
impl WeightMatrixProvider for InMemoryProvider {
    async fn load_weights(&self) -> Result<WeightMatrix> {
        Ok(self.weights.as_ref().clone())
    }
}

#[async_trait]
impl ScoreProvider for InMemoryProvider {
    async fn load_scores(&self) -> Result<ScoreTables> {
        Ok(self.scores.as_ref().clone())
    }
}

/// Load everything a run needs and set up the colony
pub async fn load_runner(
    config: ColonyConfig,
    weights: &dyn WeightMatrixProvider,
    scores: &dyn ScoreProvider,
) -> Result<ColonyRunner> {
    let weights = weights.load_weights().await?;
    let scores = scores.load_scores().await?;
    debug!(points = weights.dimension(), "Colony inputs loaded");

    ColonyRunner::new(config, weights, scores)
}
