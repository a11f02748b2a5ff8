//! WeightMatrix - static edge costs between points
//!
//! A zero entry means there is no traversable edge. The matrix is loaded once
//! and stays read-only for the whole run.

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::point::{PointId, PointIndex};
use crate::error::{AcoError, Result};

/// Square cost matrix keyed by point identifiers, START and FINISH included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightMatrixData", into = "WeightMatrixData")]
pub struct WeightMatrix {
    index: PointIndex,
    /// Row-major, `dimension * dimension` entries
    weights: Vec<f64>,
}

/// Serialized form: declared point order plus one row per point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightMatrixData {
    pub points: Vec<PointId>,
    pub weights: Vec<Vec<f64>>,
}

impl WeightMatrix {
    /// Build from the declared point order and one row per point
    pub fn new(points: Vec<PointId>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let index = PointIndex::new(points)?;
        let n = index.len();

        if rows.len() != n {
            return Err(AcoError::config(format!(
                "weight matrix has {} rows for {} points",
                rows.len(),
                n
            )));
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::config(format!(
                    "row '{}' has {} entries, expected {}",
                    index.ids()[i],
                    row.len(),
                    n
                )));
            }
            for (j, w) in row.into_iter().enumerate() {
                if !w.is_finite() || w < 0.0 {
                    return Err(AcoError::config(format!(
                        "weight {} -> {} must be finite and non-negative, got {}",
                        index.ids()[i],
                        index.ids()[j],
                        w
                    )));
                }
                weights.push(w);
            }
        }

        Ok(Self { index, weights })
    }

    /// Build from `(point, row)` pairs; the pair order is the declared key order
    pub fn from_rows<P: Into<PointId>>(rows: Vec<(P, Vec<f64>)>) -> Result<Self> {
        let (points, rows): (Vec<PointId>, Vec<Vec<f64>>) =
            rows.into_iter().map(|(p, r)| (p.into(), r)).unzip();
        Self::new(points, rows)
    }

    /// Number of rows (= columns)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.index.len()
    }

    pub fn index(&self) -> &PointIndex {
        &self.index
    }

    /// Cost of the edge `from -> to`; indices must come from this matrix
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.dimension() + to]
    }

    /// Cost of the edge between two named points
    pub fn weight_between(&self, from: &str, to: &str) -> Result<f64> {
        let i = self.index.index_of(from)?;
        let j = self.index.index_of(to)?;
        Ok(self.weight(i, j))
    }

    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to) > 0.0
    }

    /// Row `from` as a slice
    pub fn row(&self, from: usize) -> &[f64] {
        let n = self.dimension();
        &self.weights[from * n..(from + 1) * n]
    }

    /// Columns reachable from `from`, in declared order
    pub fn successors(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(j, _)| j)
    }

    /// Edge-cost sum of a path
    ///
    /// The hop into FINISH is counted; FINISH itself has no outgoing cost.
    pub fn path_length(&self, path: &Path) -> f64 {
        self.hop_costs(path).iter().sum()
    }

    /// Cost of every hop of a path, in walking order
    pub fn hop_costs(&self, path: &Path) -> Vec<f64> {
        let finish = self.index.finish();
        path.edges()
            .filter(|(from, _)| *from != finish)
            .map(|(from, to)| self.weight(from, to))
            .collect()
    }

    /// Row-major copy of all weights
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }
}

impl TryFrom<WeightMatrixData> for WeightMatrix {
    type Error = AcoError;

    fn try_from(data: WeightMatrixData) -> Result<Self> {
        Self::new(data.points, data.weights)
    }
}

impl From<WeightMatrix> for WeightMatrixData {
    fn from(matrix: WeightMatrix) -> Self {
        let n = matrix.dimension();
        let weights = matrix.weights.chunks(n.max(1)).map(<[f64]>::to_vec).collect();
        Self {
            points: matrix.index.ids().to_vec(),
            weights,
        }
    }
}
