//! # Antpath Engine
//!
//! Ant Colony Optimization over a weighted directed graph of points, from a
//! START sentinel to a FINISH sentinel.
//!
//! ## Equation Value
//!
//! ```text
//! v(i, j) = τ(i, j)^α · η(i, j)^β            (exponential rule)
//! v(i, j) = τ(i, j) · η(i, j)^β · π(a, j)     (actor-weighted rule)
//! η(i, j) = 1 / w(i, j)
//! ```
//!
//! Where:
//! - τ: pheromone trail
//! - η: desirability (inverse edge cost)
//! - π(a, j): proficiency of actor `a` on point `j`
//!
//! ## Generation Loop
//!
//! Ants build paths against a frozen snapshot; once every ant has finished,
//! all trails evaporate toward the connectivity baseline and the
//! generation's extremal path is reinforced with `1 / length`.

pub mod ant;
pub mod colony;
pub mod config;
pub mod pheromone;
pub mod provider;
pub mod selection;
pub mod snapshot;

pub use ant::{Ant, AntState, PathConstructor};
pub use colony::{AntTour, ColonyOutcome, ColonyRunner, GenerationResult, GenerationSummary};
pub use config::{
    BestPathObjective, ColonyConfig, IncumbentPolicy, RateConfig, SelectionMode, SelectionRule,
};
pub use pheromone::{PheromoneMatrix, RateSchedule};
pub use provider::{load_runner, InMemoryProvider, ScoreProvider, WeightMatrixProvider};
pub use selection::SelectionPolicy;
pub use snapshot::ColonySnapshot;
