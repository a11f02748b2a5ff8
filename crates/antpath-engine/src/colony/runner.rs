//! ColonyRunner - the generation loop
//!
//! Per generation:
//!
//! 1. build `population` paths against a read-only snapshot
//! 2. measure each path
//! 3. pick the generation's extremal path
//! 4. evaporate every edge
//! 5. reinforce the picked path's edges
//! 6. record the picked path as the current best

use antpath_common::{AcoError, PointId, Result, ScoreTables, WeightMatrix};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::generation::{AntTour, GenerationResult, GenerationSummary};
use crate::ant::PathConstructor;
use crate::config::{ColonyConfig, IncumbentPolicy};
use crate::pheromone::{PheromoneMatrix, RateSchedule};
use crate::selection::SelectionPolicy;
use crate::snapshot::ColonySnapshot;

/// Final answer of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyOutcome {
    pub best_path: Vec<PointId>,
    pub best_length: f64,
    /// Cost of each hop of `best_path`; sums to `best_length`
    pub hop_costs: Vec<f64>,
    pub generations: Vec<GenerationSummary>,
}

/// Owns the pheromone matrix and drives generations over it
#[derive(Debug)]
pub struct ColonyRunner {
    config: ColonyConfig,
    weights: WeightMatrix,
    pheromone: PheromoneMatrix,
    policy: SelectionPolicy,
    local_rate: RateSchedule,
    global_rate: RateSchedule,
    generation: usize,
    best: Option<AntTour>,
    history: Vec<GenerationSummary>,
}

/// Seed of one ant's random stream, independent of scheduling order
fn ant_seed(seed: u64, generation: usize, ant: usize) -> u64 {
    seed ^ (generation as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (ant as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9)
}

impl ColonyRunner {
    /// Validate the configuration against the loaded data and set up trails
    pub fn new(config: ColonyConfig, weights: WeightMatrix, scores: ScoreTables) -> Result<Self> {
        config.validate()?;
        scores.check_points(weights.index())?;

        let index = weights.index();
        let policy = SelectionPolicy::new(config.selection.clone(), config.mode, index, &scores)?;
        let local_rate = RateSchedule::resolve(&config.local_rate, index, &scores)?;
        let global_rate = RateSchedule::resolve(&config.global_rate, index, &scores)?;
        let pheromone = PheromoneMatrix::new(&weights);

        debug!(
            points = weights.dimension(),
            generations = config.generations,
            population = config.population,
            "Colony initialized"
        );

        Ok(Self {
            config,
            weights,
            pheromone,
            policy,
            local_rate,
            global_rate,
            generation: 0,
            best: None,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Generations completed so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Recorded best tour, if any generation has completed
    pub fn best(&self) -> Option<&AntTour> {
        self.best.as_ref()
    }

    pub fn history(&self) -> &[GenerationSummary] {
        &self.history
    }

    /// Build and measure the next generation's paths without touching trails
    pub fn construct_generation(&self) -> Result<GenerationResult> {
        let generation = self.generation + 1;
        let snapshot = ColonySnapshot::new(&self.weights, &self.pheromone);
        let constructor = PathConstructor::new(&self.policy);
        let seed = self.config.seed;

        let build = |ant: usize| -> Result<AntTour> {
            let mut rng = StdRng::seed_from_u64(ant_seed(seed, generation, ant));
            let path = constructor.construct(snapshot, &mut rng)?;
            Ok(AntTour::new(ant, path, &self.weights))
        };

        let tours = if self.config.parallel {
            (0..self.config.population)
                .into_par_iter()
                .map(build)
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..self.config.population)
                .map(build)
                .collect::<Result<Vec<_>>>()?
        };

        Ok(GenerationResult::new(generation, tours))
    }

    /// Run one full generation, trail updates included
    pub fn step(&mut self) -> Result<GenerationSummary> {
        let objective = self.config.objective;
        let result = self.construct_generation()?;

        let summary = result
            .summary(objective)
            .ok_or_else(|| AcoError::Internal("generation produced no tours".to_string()))?;
        let best = result
            .best(objective)
            .cloned()
            .ok_or_else(|| AcoError::Internal("generation produced no tours".to_string()))?;

        self.pheromone.evaporate(&self.local_rate)?;
        self.pheromone
            .reinforce(&best.path, best.length, &self.global_rate)?;

        self.generation = result.generation;
        self.record(best);

        debug!(
            generation = summary.generation,
            best_length = summary.best_length,
            min_length = summary.min_length,
            max_length = summary.max_length,
            "Generation complete"
        );

        self.history.push(summary.clone());
        Ok(summary)
    }

    fn record(&mut self, candidate: AntTour) {
        let replace = match (self.config.incumbent, &self.best) {
            (IncumbentPolicy::LastGeneration, _) | (_, None) => true,
            (IncumbentPolicy::BestOfRun, Some(current)) => self
                .config
                .objective
                .is_better(candidate.length, current.length),
        };
        if replace {
            self.best = Some(candidate);
        }
    }

    /// Run every remaining configured generation
    #[instrument(
        skip(self),
        fields(generations = self.config.generations, population = self.config.population)
    )]
    pub fn run(&mut self) -> Result<ColonyOutcome> {
        while self.generation < self.config.generations {
            self.step()?;
        }

        let outcome = self.outcome()?;
        info!(
            best_length = outcome.best_length,
            points = outcome.best_path.len(),
            "Colony run complete"
        );
        Ok(outcome)
    }

    /// Current best as point ids, with the history so far
    pub fn outcome(&self) -> Result<ColonyOutcome> {
        let best = self
            .best
            .as_ref()
            .ok_or_else(|| AcoError::Internal("no generation has run".to_string()))?;

        Ok(ColonyOutcome {
            best_path: best.point_ids(&self.weights)?,
            best_length: best.length,
            hop_costs: self.weights.hop_costs(&best.path),
            generations: self.history.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BestPathObjective, RateConfig, SelectionMode};

    fn weights() -> WeightMatrix {
        WeightMatrix::from_rows(vec![
            ("start", vec![0.0, 2.0, 5.0, 0.0]),
            ("a", vec![0.0, 0.0, 3.0, 4.0]),
            ("b", vec![0.0, 9.0, 0.0, 1.0]),
            ("finish", vec![0.0, 0.0, 0.0, 0.0]),
        ])
        .unwrap()
    }

    fn config() -> ColonyConfig {
        ColonyConfig {
            generations: 3,
            population: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_completes_every_generation() {
        let mut runner = ColonyRunner::new(config(), weights(), ScoreTables::default()).unwrap();
        let outcome = runner.run().unwrap();

        assert_eq!(runner.generation(), 3);
        assert_eq!(outcome.generations.len(), 3);
        assert_eq!(outcome.best_path.first().unwrap().as_str(), "start");
        assert_eq!(outcome.best_path.last().unwrap().as_str(), "finish");
        assert_eq!(outcome.best_length, 6.0);
        assert_eq!(outcome.hop_costs, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_outcome_before_any_generation_fails() {
        let runner = ColonyRunner::new(config(), weights(), ScoreTables::default()).unwrap();
        assert!(runner.outcome().is_err());
    }

    #[test]
    fn test_construct_generation_leaves_trails_alone() {
        let runner = ColonyRunner::new(config(), weights(), ScoreTables::default()).unwrap();
        let before = runner.pheromone().clone();
        let result = runner.construct_generation().unwrap();

        assert_eq!(result.generation, 1);
        assert_eq!(result.tours.len(), 4);
        assert_eq!(runner.pheromone(), &before);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut seq_cfg = config();
        seq_cfg.mode = SelectionMode::Roulette;
        seq_cfg.seed = 99;
        let mut par_cfg = seq_cfg.clone();
        par_cfg.parallel = true;

        let mut seq = ColonyRunner::new(seq_cfg, weights(), ScoreTables::default()).unwrap();
        let mut par = ColonyRunner::new(par_cfg, weights(), ScoreTables::default()).unwrap();

        assert_eq!(seq.run().unwrap(), par.run().unwrap());
        assert_eq!(seq.pheromone(), par.pheromone());
    }

    #[test]
    fn test_best_of_run_never_regresses() {
        let mut cfg = config();
        cfg.generations = 8;
        cfg.mode = SelectionMode::Roulette;
        cfg.objective = BestPathObjective::Shortest;
        cfg.incumbent = IncumbentPolicy::BestOfRun;
        cfg.seed = 3;

        let mut runner = ColonyRunner::new(cfg, weights(), ScoreTables::default()).unwrap();
        let mut incumbent = f64::INFINITY;
        for _ in 0..8 {
            let summary = runner.step().unwrap();
            incumbent = incumbent.min(summary.best_length);
            assert_eq!(runner.best().unwrap().length, incumbent);
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut cfg = config();
        cfg.local_rate = RateConfig::PerColumn { rates: vec![0.1] };
        assert!(ColonyRunner::new(cfg, weights(), ScoreTables::default()).is_err());
    }

    #[test]
    fn test_direct_start_to_finish_graph_runs() {
        let w = WeightMatrix::from_rows(vec![
            ("start", vec![0.0, 3.0]),
            ("finish", vec![0.0, 0.0]),
        ])
        .unwrap();
        let mut runner = ColonyRunner::new(config(), w, ScoreTables::default()).unwrap();
        runner.step().unwrap();
        let outcome = runner.outcome().unwrap();

        assert_eq!(outcome.best_length, 3.0);
        let ids: Vec<&str> = outcome.best_path.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["start", "finish"]);
        // baseline 1 pulled toward 1/3
        assert!((runner.pheromone().get(0, 1) - (0.6 + 0.4 / 3.0)).abs() < 1e-12);
    }
}
