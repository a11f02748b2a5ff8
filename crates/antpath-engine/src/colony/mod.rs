//! Generation loop and its results
pub mod generation;
pub mod runner;

pub use self::generation::{AntTour, GenerationResult, GenerationSummary};
pub use self::runner::{ColonyOutcome, ColonyRunner};
