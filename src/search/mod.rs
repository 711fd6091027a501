//! The multi-target search engine.
//!
//! The engine plans over an expanded space of `(Node, Signature)` states: where the
//! traveler stands, and which Targets the Walk has yet to absorb. See
//! [`plan_walk`] for the entry point.

mod signature;
pub use self::signature::{Signature, TargetSet};

mod walk;
pub use self::walk::Walk;

mod planner;
pub use self::planner::{plan_walk, PlanResult};

use crate::{Cost, NodeID};
use std::cmp::Ordering;

/// A frontier entry: a Node keyed by the minimum f-score among its unvisited states
/// at push time. Ordered as a min-heap element.
#[derive(PartialEq)]
pub(crate) struct Element(pub NodeID, pub Cost);
impl Eq for Element {}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}
