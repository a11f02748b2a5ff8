//! Path - one ant's ordering of points from START to FINISH

use super::point::{PointId, PointIndex};
use crate::error::Result;

/// Ordered sequence of matrix indices
///
/// A finished path starts at START, ends at FINISH, and holds every other
/// point at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<usize>,
    start: usize,
    finish: usize,
}

impl Path {
    /// A path standing on START
    pub fn new(start: usize, finish: usize) -> Self {
        Self {
            points: vec![start],
            start,
            finish,
        }
    }

    /// Wrap an existing index sequence
    pub fn from_indices(points: Vec<usize>, start: usize, finish: usize) -> Self {
        Self {
            points,
            start,
            finish,
        }
    }

    /// Rebuild a path from stored point ids
    pub fn from_ids<S: AsRef<str>>(index: &PointIndex, ids: &[S]) -> Result<Self> {
        let points = ids
            .iter()
            .map(|id| index.index_of(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_indices(points, index.start(), index.finish()))
    }

    pub fn push(&mut self, point: usize) {
        self.points.push(point);
    }

    /// Point the walk currently stands on
    pub fn last(&self) -> Option<usize> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Number of entries, sentinels included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of non-sentinel points
    pub fn point_count(&self) -> usize {
        self.work_points().count()
    }

    /// Non-sentinel points in visiting order
    pub fn work_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .copied()
            .filter(move |p| *p != self.start && *p != self.finish)
    }

    /// Consecutive `(from, to)` pairs, stopping at FINISH
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let finish = self.finish;
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .take_while(move |(from, _)| *from != finish)
    }

    /// True if the path has reached FINISH
    pub fn is_finished(&self) -> bool {
        self.last() == Some(self.finish)
    }

    /// True if the path starts at START and ends at FINISH
    pub fn is_bounded(&self) -> bool {
        self.points.first() == Some(&self.start) && self.is_finished()
    }

    /// Translate to point ids
    pub fn to_ids(&self, index: &PointIndex) -> Result<Vec<PointId>> {
        self.points
            .iter()
            .map(|&p| index.id_of(p).cloned())
            .collect()
    }
}
