//! Colony configuration
//!
//! Hyperparameters for a run, with the defaults of the reference behaviour:
//! greedy selection, longest-path "best", and a best path that is simply
//! overwritten each generation.

use antpath_common::{
    AcoError, ActorId, Result, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_GENERATIONS,
    DEFAULT_POPULATION, DEFAULT_RHO,
};
use serde::{Deserialize, Serialize};

/// How the equation value of an edge is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionRule {
    /// `τ · η^β · proficiency(actor, endpoint)`
    ActorWeighted { beta: f64, actor: ActorId },
    /// `τ^α · η^β`
    Exponential { alpha: f64, beta: f64 },
}

impl Default for SelectionRule {
    fn default() -> Self {
        SelectionRule::Exponential {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }
}

impl SelectionRule {
    pub fn beta(&self) -> f64 {
        match self {
            SelectionRule::ActorWeighted { beta, .. } | SelectionRule::Exponential { beta, .. } => {
                *beta
            }
        }
    }
}

/// How the next point is drawn from the normalized equation values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Deterministic argmax, ties going to the earliest declared point
    #[default]
    Greedy,
    /// Weighted draw proportional to the normalized values
    Roulette,
}

/// Which extremum of a generation counts as its best path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestPathObjective {
    /// Maximum edge-cost sum (reference behaviour)
    #[default]
    Longest,
    /// Minimum edge-cost sum
    Shortest,
}

impl BestPathObjective {
    /// True if `candidate` strictly beats `incumbent`
    #[inline]
    pub fn is_better(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            BestPathObjective::Longest => candidate > incumbent,
            BestPathObjective::Shortest => candidate < incumbent,
        }
    }
}

/// What happens to the recorded best path after each generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncumbentPolicy {
    /// Overwrite with the generation's best unconditionally
    #[default]
    LastGeneration,
    /// Replace only when the generation's best is strictly better
    BestOfRun,
}

/// Source of the per-edge evaporation or reinforcement rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateConfig {
    /// One rate for every edge
    Uniform { rate: f64 },
    /// One rate per destination column, in declared point order
    PerColumn { rates: Vec<f64> },
    /// `ρ(col) = (1 − env(col)) · (1 − ability(actor))`
    FromScores { actor: ActorId },
}

impl Default for RateConfig {
    fn default() -> Self {
        RateConfig::Uniform { rate: DEFAULT_RHO }
    }
}

/// Full configuration of a colony run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Number of generations
    pub generations: usize,
    /// Ants per generation
    pub population: usize,
    /// Equation value rule
    pub selection: SelectionRule,
    /// Greedy or roulette choice
    pub mode: SelectionMode,
    /// Evaporation rate, applied to every edge after each generation
    pub local_rate: RateConfig,
    /// Reinforcement rate, applied to best-path edges after each generation
    pub global_rate: RateConfig,
    /// Extremum picked as a generation's best
    pub objective: BestPathObjective,
    /// How the recorded best evolves across generations
    pub incumbent: IncumbentPolicy,
    /// Build ants on the rayon pool
    pub parallel: bool,
    /// Base seed for per-ant random streams
    pub seed: u64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            population: DEFAULT_POPULATION,
            selection: SelectionRule::default(),
            mode: SelectionMode::default(),
            local_rate: RateConfig::default(),
            global_rate: RateConfig::default(),
            objective: BestPathObjective::default(),
            incumbent: IncumbentPolicy::default(),
            parallel: false,
            seed: 0,
        }
    }
}

fn check_exponent(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AcoError::config(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn check_rate(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(AcoError::config(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl ColonyConfig {
    /// Check the hyperparameters that do not depend on the loaded data
    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(AcoError::config("generations must be greater than 0"));
        }
        if self.population == 0 {
            return Err(AcoError::config("population must be greater than 0"));
        }

        match &self.selection {
            SelectionRule::ActorWeighted { beta, .. } => check_exponent("beta", *beta)?,
            SelectionRule::Exponential { alpha, beta } => {
                check_exponent("alpha", *alpha)?;
                check_exponent("beta", *beta)?;
            }
        }

        for (name, rate) in [("local_rate", &self.local_rate), ("global_rate", &self.global_rate)] {
            match rate {
                RateConfig::Uniform { rate } => check_rate(name, *rate)?,
                RateConfig::PerColumn { rates } => {
                    for r in rates {
                        check_rate(name, *r)?;
                    }
                }
                RateConfig::FromScores { .. } => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ColonyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, SelectionMode::Greedy);
        assert_eq!(config.objective, BestPathObjective::Longest);
        assert_eq!(config.incumbent, IncumbentPolicy::LastGeneration);
        assert_eq!(config.selection.beta(), DEFAULT_BETA);
    }

    #[test]
    fn test_rejects_bad_hyperparameters() {
        let mut config = ColonyConfig {
            generations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.generations = 3;
        config.population = 0;
        assert!(config.validate().is_err());

        config.population = 3;
        config.selection = SelectionRule::Exponential {
            alpha: -1.0,
            beta: 2.0,
        };
        assert!(config.validate().is_err());

        config.selection = SelectionRule::default();
        config.local_rate = RateConfig::PerColumn {
            rates: vec![0.2, 1.2],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_objective_comparison() {
        assert!(BestPathObjective::Longest.is_better(6.0, 5.0));
        assert!(!BestPathObjective::Longest.is_better(5.0, 5.0));
        assert!(BestPathObjective::Shortest.is_better(4.0, 5.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ColonyConfig = serde_json::from_str(
            r#"{
                "generations": 4,
                "selection": { "kind": "actor_weighted", "beta": 1.5, "actor": "1" },
                "global_rate": { "kind": "from_scores", "actor": "1" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.generations, 4);
        assert_eq!(config.population, DEFAULT_POPULATION);
        assert!(matches!(config.selection, SelectionRule::ActorWeighted { .. }));
        assert_eq!(config.local_rate, RateConfig::Uniform { rate: DEFAULT_RHO });
        assert!(config.validate().is_ok());
    }
}
