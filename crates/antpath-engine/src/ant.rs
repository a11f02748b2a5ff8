//! Path construction for a single ant
//!
//! Each ant walks `AtPoint(START, {START})` → … → `Finished`, asking the
//! selection policy for one point per step and never revisiting a point.
//! Every step either visits a new point or lands on FINISH, so a walk ends
//! within as many steps as there are points.

use antpath_common::{Path, Result};
use rand::Rng;

use crate::selection::SelectionPolicy;
use crate::snapshot::ColonySnapshot;

/// Where an ant stands after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    AtPoint(usize),
    Finished,
}

/// One ant's in-progress walk
#[derive(Debug)]
pub struct Ant<'a> {
    policy: &'a SelectionPolicy,
    snapshot: ColonySnapshot<'a>,
    path: Path,
    visited: Vec<bool>,
}

impl<'a> Ant<'a> {
    /// Place an ant on START
    pub fn new(policy: &'a SelectionPolicy, snapshot: ColonySnapshot<'a>) -> Self {
        let index = snapshot.weights.index();
        let mut visited = vec![false; index.len()];
        visited[index.start()] = true;

        Self {
            policy,
            snapshot,
            path: Path::new(index.start(), index.finish()),
            visited,
        }
    }

    pub fn state(&self) -> AntState {
        match self.path.last() {
            Some(p) if !self.path.is_finished() => AntState::AtPoint(p),
            _ => AntState::Finished,
        }
    }

    /// Move to the next point
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AntState> {
        let current = match self.state() {
            AntState::AtPoint(p) => p,
            AntState::Finished => return Ok(AntState::Finished),
        };

        let next = self
            .policy
            .select_next(&self.snapshot, current, &self.visited, rng)?;
        self.visited[next] = true;
        self.path.push(next);

        Ok(self.state())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}

/// Drives ants from START to FINISH
#[derive(Debug, Clone, Copy)]
pub struct PathConstructor<'a> {
    policy: &'a SelectionPolicy,
}

impl<'a> PathConstructor<'a> {
    pub fn new(policy: &'a SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Build one complete path against a snapshot
    pub fn construct<R: Rng + ?Sized>(
        &self,
        snapshot: ColonySnapshot<'a>,
        rng: &mut R,
    ) -> Result<Path> {
        let mut ant = Ant::new(self.policy, snapshot);
        while let AntState::AtPoint(_) = ant.step(rng)? {}
        Ok(ant.into_path())
    }
}
