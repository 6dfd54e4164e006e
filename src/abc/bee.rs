//! Bees and their roles.

use serde::{Deserialize, Serialize};

/// Role of a bee in the hive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Owns a path and refines it with local moves.
    Employed,
    /// Refines the hive's global best path; owns nothing.
    Onlooker,
    /// Abandoned its path and will restart from a random one.
    Scout,
}

/// One candidate in the hive.
///
/// The path and distance of an onlooker are unused.
#[derive(Debug, Clone)]
pub struct Bee {
    role: Role,
    path: Vec<usize>,
    distance: f64,
    cycle: usize,
}

impl Bee {
    /// An employed bee owning `path`, scored at `distance`.
    pub fn employed(path: Vec<usize>, distance: f64) -> Self {
        Self {
            role: Role::Employed,
            path,
            distance,
            cycle: 0,
        }
    }

    /// An onlooker bee.
    pub fn onlooker() -> Self {
        Self {
            role: Role::Onlooker,
            path: Vec::new(),
            distance: f64::INFINITY,
            cycle: 0,
        }
    }

    /// Current role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Path owned by this bee.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Cached distance of [`path`](Self::path).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Consecutive steps without improvement.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Records the outcome of one employed step.
    ///
    /// An improving proposal replaces the path and resets the counter;
    /// otherwise the counter grows and the bee turns scout once it reaches
    /// `limit`. Returns `true` on improvement.
    pub(crate) fn offer(&mut self, path: Vec<usize>, distance: f64, limit: usize) -> bool {
        debug_assert_eq!(self.role, Role::Employed);
        let improved = distance < self.distance;
        if improved {
            self.path = path;
            self.distance = distance;
            self.cycle = 0;
        } else {
            self.cycle += 1;
        }
        if self.cycle >= limit {
            self.role = Role::Scout;
        }
        improved
    }

    /// Sends an employed bee scouting regardless of its counter.
    pub(crate) fn force_scout(&mut self) {
        if self.role == Role::Employed {
            self.role = Role::Scout;
        }
    }

    /// Replaces a scout's path and puts it back to work.
    pub(crate) fn restart(&mut self, path: Vec<usize>, distance: f64) {
        debug_assert_eq!(self.role, Role::Scout);
        self.path = path;
        self.distance = distance;
        self.cycle = 0;
        self.role = Role::Employed;
    }
}
