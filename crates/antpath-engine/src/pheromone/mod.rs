//! Pheromone trails and their update rates
pub mod matrix;
pub mod rate;

pub use self::matrix::PheromoneMatrix;
pub use self::rate::RateSchedule;
