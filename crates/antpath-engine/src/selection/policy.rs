//! Next-point selection
//!
//! ```text
//! actor weighted:  v(i, j) = τ(i, j) · η(i, j)^β · proficiency(actor, j)
//! exponential:     v(i, j) = τ(i, j)^α · η(i, j)^β
//! p(j)             = v(i, j) / Σ v(i, k)
//! ```
//!
//! Greedy mode takes the largest `p(j)`; roulette mode draws from it.

use antpath_common::{AcoError, PointIndex, Result, ScoreTables};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::desirability::eta;
use crate::config::{SelectionMode, SelectionRule};
use crate::snapshot::ColonySnapshot;

/// Picks each ant's next point
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    rule: SelectionRule,
    mode: SelectionMode,
    /// Proficiency of the rule's actor by matrix column
    proficiency: Option<Vec<f64>>,
}

impl SelectionPolicy {
    /// Bind a rule to the loaded score tables
    pub fn new(
        rule: SelectionRule,
        mode: SelectionMode,
        index: &PointIndex,
        scores: &ScoreTables,
    ) -> Result<Self> {
        let proficiency = match &rule {
            SelectionRule::ActorWeighted { actor, .. } => {
                scores.require_actor(actor)?;
                Some(scores.proficiency_row(actor, index))
            }
            SelectionRule::Exponential { .. } => None,
        };

        Ok(Self {
            rule,
            mode,
            proficiency,
        })
    }

    pub fn rule(&self) -> &SelectionRule {
        &self.rule
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Unvisited successors of `current`
    ///
    /// FINISH is dropped whenever any other point is still reachable.
    pub fn reachable(
        &self,
        snapshot: &ColonySnapshot<'_>,
        current: usize,
        visited: &[bool],
    ) -> Vec<usize> {
        let finish = snapshot.weights.index().finish();
        let mut points: Vec<usize> = snapshot
            .weights
            .successors(current)
            .filter(|p| !visited[*p])
            .collect();

        if points.iter().any(|p| *p != finish) {
            points.retain(|p| *p != finish);
        }
        points
    }

    /// Unnormalized attractiveness of `from -> to`
    pub fn equation_value(
        &self,
        snapshot: &ColonySnapshot<'_>,
        from: usize,
        to: usize,
    ) -> Result<f64> {
        let tau = snapshot.pheromone.get(from, to);
        let eta = eta(snapshot.weights, from, to)?;

        let value = match &self.rule {
            SelectionRule::ActorWeighted { beta, .. } => {
                let proficiency = self
                    .proficiency
                    .as_ref()
                    .map_or(0.0, |row| row[to]);
                tau * eta.powf(*beta) * proficiency
            }
            SelectionRule::Exponential { alpha, beta } => tau.powf(*alpha) * eta.powf(*beta),
        };
        Ok(value)
    }

    /// Choose the point after `current`
    pub fn select_next<R: Rng + ?Sized>(
        &self,
        snapshot: &ColonySnapshot<'_>,
        current: usize,
        visited: &[bool],
        rng: &mut R,
    ) -> Result<usize> {
        let candidates = self.reachable(snapshot, current, visited);
        if candidates.is_empty() {
            return Ok(snapshot.weights.index().finish());
        }

        let values = candidates
            .into_iter()
            .map(|to| Ok((to, self.equation_value(snapshot, current, to)?)))
            .collect::<Result<Vec<_>>>()?;

        let distribution = normalize(values).ok_or_else(|| AcoError::Selection {
            from: point_name(snapshot, current),
        })?;

        match self.mode {
            SelectionMode::Greedy => Ok(argmax(&distribution)),
            SelectionMode::Roulette => {
                let weights = WeightedIndex::new(distribution.iter().map(|(_, p)| *p))
                    .map_err(|e| AcoError::Internal(format!("roulette draw: {}", e)))?;
                Ok(distribution[weights.sample(rng)].0)
            }
        }
    }
}

fn point_name(snapshot: &ColonySnapshot<'_>, point: usize) -> String {
    snapshot
        .weights
        .index()
        .id_of(point)
        .map(|id| id.to_string())
        .unwrap_or_else(|_| format!("#{}", point))
}

/// Divide every value by the total; equal shares when the total is not positive
///
/// Returns `None` for an empty candidate set.
pub fn normalize(values: Vec<(usize, f64)>) -> Option<Vec<(usize, f64)>> {
    if values.is_empty() {
        return None;
    }

    let total: f64 = values.iter().map(|(_, v)| *v).sum();
    let shares = if total > 0.0 && total.is_finite() {
        values.into_iter().map(|(p, v)| (p, v / total)).collect()
    } else {
        let share = 1.0 / values.len() as f64;
        values.into_iter().map(|(p, _)| (p, share)).collect()
    };
    Some(shares)
}

/// Largest share; ties go to the earliest entry
fn argmax(distribution: &[(usize, f64)]) -> usize {
    let mut best = distribution[0];
    for entry in &distribution[1..] {
        if entry.1 > best.1 {
            best = *entry;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pheromone::PheromoneMatrix;
    use antpath_common::{ActorAbility, ActorProficiency, LookupError, WeightMatrix};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn weights() -> WeightMatrix {
        WeightMatrix::from_rows(vec![
            ("start", vec![0.0, 2.0, 5.0, 0.0]),
            ("a", vec![0.0, 0.0, 3.0, 4.0]),
            ("b", vec![0.0, 0.0, 0.0, 1.0]),
            ("finish", vec![0.0, 0.0, 0.0, 0.0]),
        ])
        .unwrap()
    }

    fn exponential() -> SelectionPolicy {
        SelectionPolicy::new(
            SelectionRule::default(),
            SelectionMode::Greedy,
            weights().index(),
            &ScoreTables::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_reachable_hides_finish_behind_real_points() {
        let w = weights();
        let p = PheromoneMatrix::new(&w);
        let snap = ColonySnapshot::new(&w, &p);
        let policy = exponential();

        let mut visited = vec![true, true, false, false];
        assert_eq!(policy.reachable(&snap, 1, &visited), vec![2]);

        visited[2] = true;
        assert_eq!(policy.reachable(&snap, 1, &visited), vec![3]);
        assert!(policy.reachable(&snap, 3, &visited).is_empty());
    }

    #[test]
    fn test_greedy_prefers_cheaper_edge() {
        let w = weights();
        let p = PheromoneMatrix::new(&w);
        let snap = ColonySnapshot::new(&w, &p);
        let mut rng = StdRng::seed_from_u64(7);

        let visited = vec![true, false, false, false];
        let next = exponential().select_next(&snap, 0, &visited, &mut rng).unwrap();
        assert_eq!(next, 1);
    }

    #[test]
    fn test_dead_end_returns_finish() {
        let w = weights();
        let p = PheromoneMatrix::new(&w);
        let snap = ColonySnapshot::new(&w, &p);
        let mut rng = StdRng::seed_from_u64(7);

        // b has no unvisited successor besides finish, finish visited too
        let visited = vec![true, true, true, true];
        let next = exponential().select_next(&snap, 2, &visited, &mut rng).unwrap();
        assert_eq!(next, 3);
    }

    #[test]
    fn test_actor_weighting_can_flip_the_choice() {
        let w = weights();
        let p = PheromoneMatrix::new(&w);
        let snap = ColonySnapshot::new(&w, &p);
        let mut rng = StdRng::seed_from_u64(7);

        let scores = ScoreTables::from_records(
            vec![],
            vec![ActorAbility {
                actor: "1".into(),
                score: 0.5,
            }],
            vec![
                ActorProficiency {
                    actor: "1".into(),
                    point: "a".into(),
                    score: 0.1,
                },
                ActorProficiency {
                    actor: "1".into(),
                    point: "b".into(),
                    score: 1.0,
                },
            ],
        )
        .unwrap();

        let policy = SelectionPolicy::new(
            SelectionRule::ActorWeighted {
                beta: 2.0,
                actor: "1".into(),
            },
            SelectionMode::Greedy,
            w.index(),
            &scores,
        )
        .unwrap();

        // a: 1 * 0.25 * 0.1 = 0.025, b: 1 * 0.04 * 1.0 = 0.04
        let visited = vec![true, false, false, false];
        assert_eq!(policy.select_next(&snap, 0, &visited, &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_unknown_actor_is_a_lookup_error() {
        let result = SelectionPolicy::new(
            SelectionRule::ActorWeighted {
                beta: 2.0,
                actor: "ghost".into(),
            },
            SelectionMode::Greedy,
            weights().index(),
            &ScoreTables::default(),
        );
        assert!(matches!(
            result,
            Err(AcoError::Lookup(LookupError::UnknownActor(_)))
        ));
    }

    #[test]
    fn test_normalize() {
        assert!(normalize(vec![]).is_none());

        let shares = normalize(vec![(1, 1.0), (2, 3.0)]).unwrap();
        assert_eq!(shares, vec![(1, 0.25), (2, 0.75)]);

        let even = normalize(vec![(1, 0.0), (2, 0.0)]).unwrap();
        assert_eq!(even, vec![(1, 0.5), (2, 0.5)]);
    }

    #[test]
    fn test_argmax_ties_go_to_first() {
        assert_eq!(argmax(&[(4, 0.5), (2, 0.5)]), 4);
        assert_eq!(argmax(&[(4, 0.2), (2, 0.8)]), 2);
    }

    #[test]
    fn test_roulette_only_draws_reachable_points() {
        let w = weights();
        let p = PheromoneMatrix::new(&w);
        let snap = ColonySnapshot::new(&w, &p);
        let policy = SelectionPolicy::new(
            SelectionRule::default(),
            SelectionMode::Roulette,
            w.index(),
            &ScoreTables::default(),
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let visited = vec![true, false, false, false];
        let mut seen = [0usize; 4];
        for _ in 0..500 {
            seen[policy.select_next(&snap, 0, &visited, &mut rng).unwrap()] += 1;
        }

        assert_eq!(seen[0], 0);
        assert_eq!(seen[3], 0);
        // a carries 0.25 / 0.29 of the mass
        assert!(seen[1] > seen[2]);
    }
}
