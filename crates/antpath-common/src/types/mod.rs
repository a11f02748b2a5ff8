//! Core data types for Antpath

pub mod path;
pub mod point;
pub mod scores;
pub mod weight_matrix;
