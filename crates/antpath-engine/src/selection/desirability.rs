//! Desirability: η = 1 / weight

use antpath_common::{AcoError, Result, WeightMatrix};

/// Heuristic attractiveness of `from -> to`
///
/// Only reachable edges may be asked for; a non-positive weight means the
/// reachability filter let something through.
pub fn eta(weights: &WeightMatrix, from: usize, to: usize) -> Result<f64> {
    let weight = weights.weight(from, to);
    if weight <= 0.0 {
        let index = weights.index();
        return Err(AcoError::InvalidEdge {
            from: index.id_of(from)?.to_string(),
            to: index.id_of(to)?.to_string(),
            weight,
        });
    }
    Ok(1.0 / weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eta_is_inverse_cost() {
        let m = WeightMatrix::from_rows(vec![
            ("start", vec![0.0, 4.0]),
            ("finish", vec![0.0, 0.0]),
        ])
        .unwrap();

        assert_eq!(eta(&m, 0, 1).unwrap(), 0.25);
        match eta(&m, 1, 0) {
            Err(AcoError::InvalidEdge { from, to, weight }) => {
                assert_eq!(from, "finish");
                assert_eq!(to, "start");
                assert_eq!(weight, 0.0);
            }
            other => panic!("expected InvalidEdge, got {:?}", other),
        }
    }
}
