//! Wait credits carried between planning requests.

use crate::node_id::NodeIDMap;
use crate::search::PlanResult;
use crate::{Cost, NodeID};

/// The caller-owned context that survives between planning requests.
///
/// A planning call never mutates the [`Graph`](crate::Graph); everything with a
/// longer lifetime than one request lives here. Currently that is the *wait credits*:
/// per-Node floats representing time a Node must be considered to have already
/// consumed. During a search they become cost floors - every reported arrival at or
/// beyond a credited Node is at least the credit.
///
/// The intended use is the rendezvous protocol: a traveler advances partway along a
/// planned Walk, and the Targets still ahead of them have effectively been "waiting"
/// for the elapsed time. [`advance_along`](Itinerary::advance_along) applies the whole
/// protocol in one call:
///
/// ```
/// use multi_target_pathfinding::prelude::*;
///
/// // A(0,0) - B(10,0) - C(20,0) - D(30,0)
/// let mut graph = Graph::new();
/// let a = graph.add_node("A", 0.0, 0.0);
/// let b = graph.add_node("B", 10.0, 0.0);
/// let c = graph.add_node("C", 20.0, 0.0);
/// let d = graph.add_node("D", 30.0, 0.0);
/// graph.link(a, b);
/// graph.link(b, c);
/// graph.link(c, d);
///
/// let mut itinerary = Itinerary::new();
/// let mut targets = vec![d];
///
/// let first = plan_walk(&graph, a, &targets, &NearestRemaining, &itinerary).unwrap();
/// assert_eq!(first.walk, vec![a, b, c, d]);
/// assert_eq!(first.walk.arrivals(), &[0.0, 10.0, 20.0, 30.0]);
///
/// // the traveler reaches B; D has now been waiting for 10
/// let source = itinerary.advance_along(&first, 1, &mut targets);
/// assert_eq!(source, b);
/// assert_eq!(itinerary.wait_credit(d), 10.0);
///
/// // re-planning reports elapsed time since the original departure
/// let second = plan_walk(&graph, source, &targets, &NearestRemaining, &itinerary).unwrap();
/// assert_eq!(second.walk, vec![b, c, d]);
/// assert_eq!(second.walk.arrivals(), &[0.0, 10.0, 30.0]);
/// assert_eq!(second.walk.cost(), 30.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Itinerary {
    credits: NodeIDMap<Cost>,
}

impl Itinerary {
    /// Creates an Itinerary without any credits.
    pub fn new() -> Itinerary {
        Itinerary::default()
    }

    /// Adds `amount` to the wait credit of `node`.
    pub fn credit_wait(&mut self, node: NodeID, amount: Cost) {
        *self.credits.entry(node).or_insert(0.0) += amount;
    }

    /// The accumulated wait credit of `node`, 0 if it has none.
    pub fn wait_credit(&self, node: NodeID) -> Cost {
        self.credits.get(&node).copied().unwrap_or(0.0)
    }

    /// Drops the wait credit of `node`.
    pub fn clear_wait(&mut self, node: NodeID) {
        self.credits.remove(&node);
    }

    /// Drops every wait credit.
    pub fn clear_all(&mut self) {
        self.credits.clear();
    }

    /// Advances the traveler to position `step` on a previously planned Walk and
    /// prepares the follow-up request.
    ///
    /// - Targets visited at or before `step` are removed from `targets` and their
    ///   credits are dropped - the traveler has handled them.
    /// - Every still-pending Target is credited with the arrival cost recorded at
    ///   `step`: it has been waiting since the original departure.
    /// - The Node at `step` is returned as the source of the next request.
    ///
    /// ## Panics
    /// Panics if `step` does not index a non-final Node of the Walk. Advancing to the
    /// final Node would leave nothing to re-plan.
    pub fn advance_along(
        &mut self,
        result: &PlanResult,
        step: usize,
        targets: &mut Vec<NodeID>,
    ) -> NodeID {
        let walk = &result.walk;
        assert!(
            step + 1 < walk.len(),
            "cannot advance to the final node of a walk"
        );

        let reached = &walk.nodes()[..=step];
        for &node in reached {
            if targets.contains(&node) {
                self.clear_wait(node);
            }
        }
        targets.retain(|target| !reached.contains(target));

        let elapsed = walk.arrivals()[step];
        for &target in targets.iter() {
            self.credit_wait(target, elapsed);
        }

        walk.nodes()[step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_id::NodeIDSet;
    use crate::search::Walk;

    fn planned() -> PlanResult {
        PlanResult {
            walk: Walk::new(vec![0, 1, 2, 3], vec![0.0, 10.0, 20.0, 30.0], 30.0),
            expansions: 0,
            expanded_nodes: NodeIDSet::default(),
        }
    }

    #[test]
    fn credits_accumulate_until_cleared() {
        let mut itinerary = Itinerary::new();
        assert_eq!(itinerary.wait_credit(7), 0.0);

        itinerary.credit_wait(7, 5.0);
        itinerary.credit_wait(7, 7.0);
        assert_eq!(itinerary.wait_credit(7), 12.0);

        itinerary.clear_wait(7);
        assert_eq!(itinerary.wait_credit(7), 0.0);
    }

    #[test]
    fn advance_splits_targets_and_credits_pending() {
        let mut itinerary = Itinerary::new();
        itinerary.credit_wait(1, 4.0);
        let mut targets = vec![1, 3];

        let source = itinerary.advance_along(&planned(), 1, &mut targets);

        assert_eq!(source, 1);
        assert_eq!(targets, vec![3]);
        // the visited target's credit is gone, the pending one waited for 10
        assert_eq!(itinerary.wait_credit(1), 0.0);
        assert_eq!(itinerary.wait_credit(3), 10.0);
    }

    #[test]
    #[should_panic(expected = "final node")]
    fn advance_to_the_end_is_rejected() {
        let mut itinerary = Itinerary::new();
        itinerary.advance_along(&planned(), 3, &mut vec![]);
    }
}
