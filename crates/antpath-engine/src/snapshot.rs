//! Read-only view shared by every ant of a generation

use antpath_common::WeightMatrix;

use crate::pheromone::PheromoneMatrix;

/// Immutable borrow of the weights and trails for one construction phase
///
/// Holding a snapshot keeps the pheromone matrix borrowed, so no update can
/// run until every ant of the generation has finished.
#[derive(Debug, Clone, Copy)]
pub struct ColonySnapshot<'a> {
    pub weights: &'a WeightMatrix,
    pub pheromone: &'a PheromoneMatrix,
}

impl<'a> ColonySnapshot<'a> {
    pub fn new(weights: &'a WeightMatrix, pheromone: &'a PheromoneMatrix) -> Self {
        debug_assert_eq!(weights.dimension(), pheromone.dimension());
        Self { weights, pheromone }
    }
}
