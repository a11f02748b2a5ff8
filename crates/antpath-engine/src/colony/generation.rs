//! Per-generation results

use std::collections::BTreeMap;

use antpath_common::{Path, PointId, Result, WeightMatrix};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::config::BestPathObjective;

/// One ant's finished walk
#[derive(Debug, Clone, PartialEq)]
pub struct AntTour {
    /// Position of the ant within its generation
    pub ant: usize,
    pub path: Path,
    pub length: f64,
}

impl AntTour {
    pub fn new(ant: usize, path: Path, weights: &WeightMatrix) -> Self {
        let length = weights.path_length(&path);
        Self { ant, path, length }
    }

    pub fn point_ids(&self, weights: &WeightMatrix) -> Result<Vec<PointId>> {
        self.path.to_ids(weights.index())
    }
}

/// Every tour built during one generation
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// 1-based generation number
    pub generation: usize,
    pub tours: Vec<AntTour>,
}

impl GenerationResult {
    pub fn new(generation: usize, tours: Vec<AntTour>) -> Self {
        Self { generation, tours }
    }

    /// Extremal tour under `objective`
    ///
    /// Ties go to the last ant, the same entry `by_length` keeps.
    pub fn best(&self, objective: BestPathObjective) -> Option<&AntTour> {
        let mut tours = self.tours.iter();
        let mut best = tours.next()?;
        for tour in tours {
            if !objective.is_better(best.length, tour.length) {
                best = tour;
            }
        }
        Some(best)
    }

    /// Paths keyed by length; a later ant replaces an earlier one of equal length
    pub fn by_length(&self) -> BTreeMap<OrderedFloat<f64>, &Path> {
        self.tours
            .iter()
            .map(|t| (OrderedFloat(t.length), &t.path))
            .collect()
    }

    pub fn summary(&self, objective: BestPathObjective) -> Option<GenerationSummary> {
        let best = self.best(objective)?;
        let lengths = self.tours.iter().map(|t| OrderedFloat(t.length));
        let min = lengths.clone().min()?.into_inner();
        let max = lengths.max()?.into_inner();
        let mean = self.tours.iter().map(|t| t.length).sum::<f64>() / self.tours.len() as f64;

        Some(GenerationSummary {
            generation: self.generation,
            best_ant: best.ant,
            best_length: best.length,
            min_length: min,
            max_length: max,
            mean_length: mean,
            distinct_lengths: self.by_length().len(),
        })
    }
}

/// Aggregate view of a generation, kept after its paths are discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generation: usize,
    pub best_ant: usize,
    pub best_length: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub mean_length: f64,
    pub distinct_lengths: usize,
}
