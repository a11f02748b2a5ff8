//! # Antpath Common
//!
//! Shared types, errors, and constants for the Antpath ACO engine.
//!
//! ## Core Types
//!
//! - [`PointId`]/[`ActorId`]: identifiers of graph nodes and actors
//! - [`PointIndex`]: bidirectional point ↔ matrix-index mapping
//! - [`WeightMatrix`]: static edge costs, zero meaning "no edge"
//! - [`ScoreTables`]: environmental, ability, and proficiency scores
//! - [`Path`]: one ant's ordering from START to FINISH

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AcoError, LookupError, Result};
pub use types::{
    path::Path,
    point::{ActorId, PointId, PointIndex, FINISH_POINT, START_POINT},
    scores::{ActorAbility, ActorProficiency, EnvironmentalScore, ScoreTables, ScoreTablesData},
    weight_matrix::{WeightMatrix, WeightMatrixData},
};

/// Antpath version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest accepted score
pub const SCORE_MIN: f64 = 0.0;

/// Highest accepted score
pub const SCORE_MAX: f64 = 1.0;

/// Default desirability exponent (β)
pub const DEFAULT_BETA: f64 = 2.0;

/// Default pheromone exponent (α)
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Default evaporation/reinforcement rate (ρ)
pub const DEFAULT_RHO: f64 = 0.4;

/// Default number of generations
pub const DEFAULT_GENERATIONS: usize = 10;

/// Default number of ants per generation
pub const DEFAULT_POPULATION: usize = 10;
