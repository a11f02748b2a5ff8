//! Desirability and next-point selection
pub mod desirability;
pub mod policy;

pub use self::desirability::eta;
pub use self::policy::SelectionPolicy;
