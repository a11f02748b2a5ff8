//! Antpath runner configuration

use std::path::PathBuf;

use antpath_engine::{
    BestPathObjective, ColonyConfig, IncumbentPolicy, RateConfig, SelectionMode, SelectionRule,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Runner configuration: where the data lives plus the colony hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntpathConfig {
    /// JSON file with points, weights, and optional score tables
    pub data_path: PathBuf,
    /// Where to write the run report; stdout when unset
    pub output: Option<PathBuf>,
    /// Colony hyperparameters
    pub colony: ColonyConfig,
}

impl Default for AntpathConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("antpath.json"),
            output: None,
            colony: ColonyConfig::default(),
        }
    }
}

fn parse<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("invalid value for {}: {:?}", key, raw))
}

impl AntpathConfig {
    /// Load configuration from `.env` and `ANTPATH_*` environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source
    ///
    /// `ANTPATH_COLONY_FILE` (a JSON `ColonyConfig`) is applied first; the
    /// individual variables override it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup("ANTPATH_COLONY_FILE") {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading colony file {}", path))?;
            cfg.colony = serde_json::from_str(&raw)
                .with_context(|| format!("parsing colony file {}", path))?;
        }

        if let Some(path) = lookup("ANTPATH_DATA_PATH") {
            cfg.data_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ANTPATH_OUTPUT") {
            cfg.output = Some(PathBuf::from(path));
        }

        let colony = &mut cfg.colony;
        if let Some(val) = lookup("ANTPATH_GENERATIONS") {
            colony.generations = parse("ANTPATH_GENERATIONS", &val)?;
        }
        if let Some(val) = lookup("ANTPATH_POPULATION") {
            colony.population = parse("ANTPATH_POPULATION", &val)?;
        }
        if let Some(val) = lookup("ANTPATH_SEED") {
            colony.seed = parse("ANTPATH_SEED", &val)?;
        }
        if let Some(val) = lookup("ANTPATH_PARALLEL") {
            colony.parallel = parse("ANTPATH_PARALLEL", &val)?;
        }

        // Selection rule: an actor switches to the actor-weighted form
        let beta = match lookup("ANTPATH_BETA") {
            Some(val) => parse("ANTPATH_BETA", &val)?,
            None => colony.selection.beta(),
        };
        let alpha = match (lookup("ANTPATH_ALPHA"), &colony.selection) {
            (Some(val), _) => Some(parse("ANTPATH_ALPHA", &val)?),
            (None, SelectionRule::Exponential { alpha, .. }) => Some(*alpha),
            (None, SelectionRule::ActorWeighted { .. }) => None,
        };
        colony.selection = match (lookup("ANTPATH_ACTOR"), &colony.selection, alpha) {
            (Some(actor), _, _) => SelectionRule::ActorWeighted {
                beta,
                actor: actor.into(),
            },
            (None, SelectionRule::ActorWeighted { actor, .. }, None) => {
                SelectionRule::ActorWeighted {
                    beta,
                    actor: actor.clone(),
                }
            }
            (None, _, alpha) => SelectionRule::Exponential {
                alpha: alpha.unwrap_or(antpath_common::DEFAULT_ALPHA),
                beta,
            },
        };

        if let Some(val) = lookup("ANTPATH_LOCAL_RATE") {
            colony.local_rate = RateConfig::Uniform {
                rate: parse("ANTPATH_LOCAL_RATE", &val)?,
            };
        }
        if let Some(val) = lookup("ANTPATH_GLOBAL_RATE") {
            colony.global_rate = RateConfig::Uniform {
                rate: parse("ANTPATH_GLOBAL_RATE", &val)?,
            };
        }
        if let Some(actor) = lookup("ANTPATH_RATE_ACTOR") {
            colony.local_rate = RateConfig::FromScores {
                actor: actor.clone().into(),
            };
            colony.global_rate = RateConfig::FromScores {
                actor: actor.into(),
            };
        }

        if let Some(val) = lookup("ANTPATH_SELECTION_MODE") {
            colony.mode = match val.trim() {
                "greedy" => SelectionMode::Greedy,
                "roulette" => SelectionMode::Roulette,
                other => anyhow::bail!("invalid value for ANTPATH_SELECTION_MODE: {:?}", other),
            };
        }
        if let Some(val) = lookup("ANTPATH_OBJECTIVE") {
            colony.objective = match val.trim() {
                "longest" => BestPathObjective::Longest,
                "shortest" => BestPathObjective::Shortest,
                other => anyhow::bail!("invalid value for ANTPATH_OBJECTIVE: {:?}", other),
            };
        }
        if let Some(val) = lookup("ANTPATH_INCUMBENT") {
            colony.incumbent = match val.trim() {
                "last_generation" => IncumbentPolicy::LastGeneration,
                "best_of_run" => IncumbentPolicy::BestOfRun,
                other => anyhow::bail!("invalid value for ANTPATH_INCUMBENT: {:?}", other),
            };
        }

        cfg.colony.validate()?;
        Ok(cfg)
    }
}
