//! Point and actor identifiers, and the point ↔ matrix-index mapping
//!
//! Every path is bounded by two reserved sentinels: [`START_POINT`] at the
//! head and [`FINISH_POINT`] at the tail.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{AcoError, LookupError, Result};

/// Identifier of the START sentinel
pub const START_POINT: &str = "start";

/// Identifier of the FINISH sentinel
pub const FINISH_POINT: &str = "finish";

/// Identifier of a graph node (a KPI step, a scheduling task, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The START sentinel
    pub fn start() -> Self {
        Self(START_POINT.to_string())
    }

    /// The FINISH sentinel
    pub fn finish() -> Self {
        Self(FINISH_POINT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_start(&self) -> bool {
        self.0 == START_POINT
    }

    pub fn is_finish(&self) -> bool {
        self.0 == FINISH_POINT
    }

    /// True for START and FINISH
    pub fn is_sentinel(&self) -> bool {
        self.is_start() || self.is_finish()
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PointId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of an actor (the human or agent carrying out the points)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Bidirectional ordered mapping between point identifiers and matrix indices
///
/// Built once from the weight matrix's declared key order. Index `i` is the
/// `i`-th declared point, for rows and columns alike.
#[derive(Debug, Clone, PartialEq)]
pub struct PointIndex {
    ids: Vec<PointId>,
    by_id: HashMap<PointId, usize>,
    start: usize,
    finish: usize,
}

impl PointIndex {
    /// Build the mapping, rejecting duplicates and missing sentinels
    pub fn new(ids: Vec<PointId>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if by_id.insert(id.clone(), i).is_some() {
                return Err(AcoError::config(format!("duplicate point id: {}", id)));
            }
        }

        let start = *by_id
            .get(&PointId::start())
            .ok_or_else(|| AcoError::config(format!("missing '{}' point", START_POINT)))?;
        let finish = *by_id
            .get(&PointId::finish())
            .ok_or_else(|| AcoError::config(format!("missing '{}' point", FINISH_POINT)))?;

        Ok(Self {
            ids,
            by_id,
            start,
            finish,
        })
    }

    /// Number of points, sentinels included
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Matrix index of the START sentinel
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Matrix index of the FINISH sentinel
    #[inline]
    pub fn finish(&self) -> usize {
        self.finish
    }

    /// Matrix index for a point id
    pub fn index_of(&self, id: &str) -> Result<usize> {
        self.by_id
            .get(&PointId::new(id))
            .copied()
            .ok_or_else(|| LookupError::UnknownPoint(id.to_string()).into())
    }

    /// Point id for a matrix index
    pub fn id_of(&self, index: usize) -> Result<&PointId> {
        self.ids.get(index).ok_or_else(|| {
            LookupError::UnknownIndex {
                index,
                dimension: self.ids.len(),
            }
            .into()
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(&PointId::new(id))
    }

    /// Point ids in declared order
    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    /// Number of points that are neither START nor FINISH
    pub fn work_point_count(&self) -> usize {
        self.ids.len().saturating_sub(2)
    }
}
