//! Rate schedules: ρ as a lookup by destination column

use antpath_common::{AcoError, ActorId, PointIndex, Result, ScoreTables};

use crate::config::{check_rate, RateConfig};

/// Per-edge evaporation or reinforcement rate
///
/// Rates depend only on the destination column, so a scalar and a
/// per-column vector share one code path through [`RateSchedule::rate`].
#[derive(Debug, Clone, PartialEq)]
pub enum RateSchedule {
    Uniform(f64),
    PerColumn(Vec<f64>),
}

impl RateSchedule {
    pub fn uniform(rate: f64) -> Result<Self> {
        check_rate("rate", rate)?;
        Ok(RateSchedule::Uniform(rate))
    }

    pub fn per_column(rates: Vec<f64>, dimension: usize) -> Result<Self> {
        if rates.len() != dimension {
            return Err(AcoError::config(format!(
                "per-column rates have {} entries for {} columns",
                rates.len(),
                dimension
            )));
        }
        for r in &rates {
            check_rate("rate", *r)?;
        }
        Ok(RateSchedule::PerColumn(rates))
    }

    /// `ρ(col) = (1 − env(col)) · (1 − ability(actor))`
    ///
    /// Points without an environmental score and actors without an ability
    /// score count as 0.
    pub fn from_scores(index: &PointIndex, scores: &ScoreTables, actor: &ActorId) -> Result<Self> {
        scores.require_actor(actor)?;
        let ability = scores.ability(actor).unwrap_or(0.0);

        let rates = index
            .ids()
            .iter()
            .map(|point| (1.0 - scores.environmental(point).unwrap_or(0.0)) * (1.0 - ability))
            .collect();

        Self::per_column(rates, index.len())
    }

    /// Resolve a configured rate against the loaded data
    pub fn resolve(config: &RateConfig, index: &PointIndex, scores: &ScoreTables) -> Result<Self> {
        match config {
            RateConfig::Uniform { rate } => Self::uniform(*rate),
            RateConfig::PerColumn { rates } => Self::per_column(rates.clone(), index.len()),
            RateConfig::FromScores { actor } => Self::from_scores(index, scores, actor),
        }
    }

    /// Rate for any edge ending in `column`
    #[inline]
    pub fn rate(&self, column: usize) -> f64 {
        match self {
            RateSchedule::Uniform(rate) => *rate,
            RateSchedule::PerColumn(rates) => rates[column],
        }
    }

    /// True if every column below `dimension` has a rate
    pub fn covers(&self, dimension: usize) -> bool {
        match self {
            RateSchedule::Uniform(_) => true,
            RateSchedule::PerColumn(rates) => rates.len() == dimension,
        }
    }
}
