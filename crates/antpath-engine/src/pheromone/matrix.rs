//! PheromoneMatrix - learned per-edge trail intensity
//!
//! ## Update rules
//!
//! ```text
//! evaporate:  τ' = (1 − ρ_local) · τ + ρ_local · τ₀      (every edge)
//! reinforce:  τ' = (1 − ρ_global) · τ + ρ_global / L     (best-path edges)
//! ```
//!
//! Where τ₀ is the default matrix (edge connectivity) and L the best length.

use std::sync::Arc;

use antpath_common::{AcoError, Path, Result, WeightMatrix};
use tracing::trace;

use super::rate::RateSchedule;

/// Trail matrix plus its immutable baseline
///
/// Entries without a weight-matrix edge stay zero for the matrix's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    dimension: usize,
    current: Vec<f64>,
    baseline: Arc<[f64]>,
}

impl PheromoneMatrix {
    /// Connectivity indicator of the weight matrix: 1 where an edge exists
    pub fn new(weights: &WeightMatrix) -> Self {
        let baseline: Arc<[f64]> = weights
            .as_slice()
            .iter()
            .map(|w| if *w > 0.0 { 1.0 } else { 0.0 })
            .collect();

        Self {
            dimension: weights.dimension(),
            current: baseline.to_vec(),
            baseline,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Current trail on `from -> to`
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.current[from * self.dimension + to]
    }

    /// Baseline trail on `from -> to`
    #[inline]
    pub fn default_value(&self, from: usize, to: usize) -> f64 {
        self.baseline[from * self.dimension + to]
    }

    /// Row-major view of the current trails
    pub fn as_slice(&self) -> &[f64] {
        &self.current
    }

    /// Row-major view of the baseline
    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }

    fn check_rate(&self, rate: &RateSchedule) -> Result<()> {
        if rate.covers(self.dimension) {
            Ok(())
        } else {
            Err(AcoError::config(format!(
                "rate schedule does not cover {} columns",
                self.dimension
            )))
        }
    }

    /// Local update: pull every edge back toward its baseline
    pub fn evaporate(&mut self, rate: &RateSchedule) -> Result<()> {
        self.check_rate(rate)?;

        let n = self.dimension;
        for (cell, (tau, tau0)) in self.current.iter_mut().zip(self.baseline.iter()).enumerate() {
            if *tau0 == 0.0 {
                continue;
            }
            let rho = rate.rate(cell % n);
            *tau = (1.0 - rho) * *tau + rho * *tau0;
        }

        trace!(dimension = n, "Pheromone evaporated");
        Ok(())
    }

    /// Global update: move the best path's edges toward `1 / length`
    pub fn reinforce(&mut self, path: &Path, length: f64, rate: &RateSchedule) -> Result<()> {
        if !length.is_finite() || length <= 0.0 {
            return Err(AcoError::DegeneratePath { length });
        }
        if path.edges().next().is_none() {
            return Err(AcoError::DegeneratePath { length: 0.0 });
        }
        self.check_rate(rate)?;

        let deposit = 1.0 / length;
        let n = self.dimension;
        for (from, to) in path.edges() {
            let cell = from * n + to;
            if self.baseline[cell] == 0.0 {
                continue;
            }
            let rho = rate.rate(to);
            self.current[cell] = (1.0 - rho) * self.current[cell] + rho * deposit;
        }

        trace!(length, deposit, "Pheromone reinforced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> WeightMatrix {
        WeightMatrix::from_rows(vec![
            ("start", vec![0.0, 2.0, 5.0, 0.0]),
            ("a", vec![0.0, 0.0, 3.0, 4.0]),
            ("b", vec![0.0, 0.0, 0.0, 1.0]),
            ("finish", vec![0.0, 0.0, 0.0, 0.0]),
        ])
        .unwrap()
    }

    fn best_path() -> Path {
        Path::from_indices(vec![0, 1, 2, 3], 0, 3)
    }

    #[test]
    fn test_init_is_connectivity() {
        let m = PheromoneMatrix::new(&weights());
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.as_slice(), m.baseline());
    }

    #[test]
    fn test_evaporate_zero_is_identity() {
        let mut m = PheromoneMatrix::new(&weights());
        m.reinforce(&best_path(), 5.0, &RateSchedule::Uniform(0.5)).unwrap();
        let before = m.clone();

        m.evaporate(&RateSchedule::Uniform(0.0)).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_evaporate_one_restores_baseline() {
        let mut m = PheromoneMatrix::new(&weights());
        m.reinforce(&best_path(), 5.0, &RateSchedule::Uniform(0.7)).unwrap();
        assert_ne!(m.as_slice(), m.baseline());

        m.evaporate(&RateSchedule::Uniform(1.0)).unwrap();
        assert_eq!(m.as_slice(), m.baseline());
    }

    #[test]
    fn test_evaporate_per_column() {
        let mut m = PheromoneMatrix::new(&weights());
        m.reinforce(&best_path(), 2.0, &RateSchedule::Uniform(1.0)).unwrap();
        // start->a, a->b now hold 0.5; a->finish still 1.0
        m.evaporate(&RateSchedule::PerColumn(vec![0.0, 0.5, 0.0, 1.0]))
            .unwrap();

        assert!((m.get(0, 1) - 0.75).abs() < 1e-12);
        assert!((m.get(1, 2) - 0.5).abs() < 1e-12);
        assert_eq!(m.get(1, 3), 1.0);
    }

    #[test]
    fn test_reinforce_rate_one_is_exact() {
        let mut m = PheromoneMatrix::new(&weights());
        m.reinforce(&best_path(), 5.0, &RateSchedule::Uniform(1.0)).unwrap();

        for (from, to) in best_path().edges() {
            assert_eq!(m.get(from, to), 0.2);
        }
        assert_eq!(m.get(0, 2), 1.0);
        assert_eq!(m.get(1, 3), 1.0);
    }

    #[test]
    fn test_reinforce_rejects_degenerate_paths() {
        let mut m = PheromoneMatrix::new(&weights());
        let rate = RateSchedule::Uniform(0.4);

        assert!(matches!(
            m.reinforce(&best_path(), 0.0, &rate),
            Err(AcoError::DegeneratePath { .. })
        ));
        assert!(matches!(
            m.reinforce(&Path::new(0, 3), 5.0, &rate),
            Err(AcoError::DegeneratePath { .. })
        ));
    }

    #[test]
    fn test_absent_edges_never_gain_pheromone() {
        let mut m = PheromoneMatrix::new(&weights());
        // b -> a has no weight; a crafted path must not deposit on it
        let bogus = Path::from_indices(vec![0, 2, 1, 3], 0, 3);
        m.reinforce(&bogus, 1.0, &RateSchedule::Uniform(1.0)).unwrap();
        m.evaporate(&RateSchedule::Uniform(0.3)).unwrap();

        assert_eq!(m.get(2, 1), 0.0);
        assert_eq!(m.get(3, 0), 0.0);
    }

    #[test]
    fn test_rejects_short_rate_vector() {
        let mut m = PheromoneMatrix::new(&weights());
        assert!(m.evaporate(&RateSchedule::PerColumn(vec![0.1])).is_err());
    }
}
