//! A module with the built-in Heuristics

use crate::search::{Signature, TargetSet};
use crate::{Cost, Error, Position};
use std::fmt::Debug;

/// Estimates the remaining cost of a partial Walk.
///
/// The search engine treats the estimate as a lower bound when ordering its frontier:
/// an estimate that never overestimates the true remaining cost (admissible) keeps the
/// search optimal, a larger one trades optimality for fewer expansions.
///
/// Estimates are computed from the traveler's position and the Targets still remaining
/// in the current [`Signature`]; the [`TargetSet`] of the request provides their
/// positions. An implementation must return a non-negative value, and 0 once
/// `remaining` is empty. If there is no proper way of estimating, simply return 0 -
/// the search degrades to Dijkstra over the expanded space, slower but always correct.
pub trait Heuristic: Debug {
    /// Estimates the cost still ahead of a Walk standing at `from` with the Targets in
    /// `remaining` left to visit.
    fn estimate(&self, from: Position, targets: &TargetSet, remaining: Signature) -> Cost;
}

/// No estimate at all.
///
/// Reduces the search to plain Dijkstra behavior over the expanded state space:
/// always optimal, expands the most states.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: Position, _targets: &TargetSet, _remaining: Signature) -> Cost {
        0.0
    }
}

/// The Euclidean distance to the nearest remaining Target.
///
/// Admissible and consistent for this formulation - whatever the Walk does next, it
/// has to reach some remaining Target, and it cannot do so cheaper than the straight
/// line to the nearest one. Optimal like [`Zero`], with fewer expansions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestRemaining;

impl Heuristic for NearestRemaining {
    fn estimate(&self, from: Position, targets: &TargetSet, remaining: Signature) -> Cost {
        targets
            .remaining_positions(remaining)
            .map(|pos| distance(from, pos))
            .min_by(Cost::total_cmp)
            .unwrap_or(0.0)
    }
}

/// The Euclidean distance to the farthest remaining Target.
///
/// Not admissible: with few Targets remaining the farthest one may be absorbed last
/// anyway, but nothing guarantees it, so the estimate can overestimate and the
/// returned Walk can be non-optimal. Kept as a deliberately aggressive strategy for
/// callers that prefer speed over guaranteed optimality.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarthestRemaining;

impl Heuristic for FarthestRemaining {
    fn estimate(&self, from: Position, targets: &TargetSet, remaining: Signature) -> Cost {
        targets
            .remaining_positions(remaining)
            .map(|pos| distance(from, pos))
            .max_by(Cost::total_cmp)
            .unwrap_or(0.0)
    }
}

fn distance(a: Position, b: Position) -> Cost {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Selects a Heuristic by its identifier: `"zero"`, `"nearest"` or `"farthest"`.
///
/// Meant for drivers that let their users pick the strategy. Unknown identifiers fail
/// with [`Error::UnknownHeuristic`], fatal to that single request.
pub fn heuristic_by_name(name: &str) -> Result<Box<dyn Heuristic>, Error> {
    match name {
        "zero" => Ok(Box::new(Zero)),
        "nearest" => Ok(Box::new(NearestRemaining)),
        "farthest" => Ok(Box::new(FarthestRemaining)),
        other => Err(Error::UnknownHeuristic(other.to_string())),
    }
}
