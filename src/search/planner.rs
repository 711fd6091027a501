use super::{Element, Signature, TargetSet, Walk};
use crate::heuristics::Heuristic;
use crate::node_id::{NodeIDMap, NodeIDSet};
use crate::{Cost, Error, Graph, Itinerary, NodeID};

use hashbrown::HashMap;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One entry of the per-call state ledger: the best known way to stand on a Node with
/// a given set of Targets still remaining.
#[derive(Clone, Debug)]
struct SearchState {
    g_score: Cost,
    h_score: Cost,
    max_waiting: Cost,
    visited: bool,
    prev: Option<(NodeID, Signature)>,
}

impl SearchState {
    fn f_score(&self) -> Cost {
        (self.g_score + self.h_score).max(self.max_waiting)
    }

    /// The elapsed time of this state: cost so far, floored by the waiting constraint.
    fn arrival(&self) -> Cost {
        self.g_score.max(self.max_waiting)
    }
}

/// States of one Node, keyed by the Targets still remaining when reaching them.
/// A Node holds at most one state per distinct Signature.
type StateTable = HashMap<Signature, SearchState>;

/// The state ledger of one planning call. Allocated fresh per request and dropped
/// wholesale at return, so stale states can never leak into the next request.
type Ledger = NodeIDMap<StateTable>;

/// The minimum-f-score unvisited state of a Node, recomputed by scanning its table.
///
/// Ties are broken towards the lowest Signature so that planning is deterministic
/// regardless of hash iteration order.
fn min_unvisited(states: &StateTable) -> Option<(Signature, &SearchState)> {
    states
        .iter()
        .filter(|(_, state)| !state.visited)
        .min_by(|(a_sig, a), (b_sig, b)| {
            a.f_score()
                .total_cmp(&b.f_score())
                .then(a_sig.cmp(b_sig))
        })
        .map(|(&sig, state)| (sig, state))
}

/// The answer to a successful planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// The minimum-cost Walk, with arrival costs and total cost
    pub walk: Walk,
    /// How many states the search expanded before finishing
    pub expansions: usize,
    /// Every Node that had at least one state expanded
    pub expanded_nodes: NodeIDSet,
}

/// Finds a minimum-cost Walk starting at `source` that touches every Node in
/// `targets` at least once, in any order.
///
/// The search runs over `(Node, Signature)` states: crossing an Edge into a Node
/// removes that Node from the Signature if it was still a remaining Target. The first
/// finished state popped from the frontier is the answer; with an admissible,
/// consistent Heuristic ([`Zero`](crate::heuristics::Zero) or
/// [`NearestRemaining`](crate::heuristics::NearestRemaining)) it is optimal.
///
/// The source consumes itself: a Target equal to `source` is satisfied by standing
/// there, so `targets == [source]` yields a single-Node Walk of cost 0.
///
/// Wait credits in `itinerary` become cost floors: every reported arrival at or beyond
/// a credited Node is at least that credit, and `walk.cost()` may exceed the sum of
/// the traversed Edge weights accordingly. Without credits the cost equals that sum.
///
/// ## Errors
/// - [`Error::Unreachable`] when the frontier drains without finishing a Walk
/// - [`Error::TooManyTargets`] for more than 64 distinct Targets
///
/// ## Examples
/// ```
/// use multi_target_pathfinding::prelude::*;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A", 0.0, 0.0);
/// let b = graph.add_node("B", 10.0, 0.0);
/// let c = graph.add_node("C", 10.0, 10.0);
/// let d = graph.add_node("D", 0.0, 10.0);
/// graph.link(a, b);
/// graph.link(b, c);
/// graph.link(c, d);
/// graph.link(d, a);
///
/// let result = plan_walk(&graph, a, &[b, c, d], &Zero, &Itinerary::new()).unwrap();
///
/// assert_eq!(result.walk.cost(), 30.0);
/// assert_eq!(result.walk[0], a);
/// // every target is on the walk
/// for target in [b, c, d] {
///     assert!(result.walk.nodes().contains(&target));
/// }
/// ```
pub fn plan_walk<H: Heuristic + ?Sized>(
    graph: &Graph,
    source: NodeID,
    targets: &[NodeID],
    heuristic: &H,
    itinerary: &Itinerary,
) -> Result<PlanResult, Error> {
    let targets = TargetSet::new(graph, targets)?;
    // the Walk starts on the source, so the source absorbs itself up front
    let initial = targets.consume(targets.full_signature(), source);

    let mut ledger = Ledger::default();
    let mut frontier = BinaryHeap::new();
    let mut expansions = 0;
    let mut expanded_nodes = NodeIDSet::default();

    let start = SearchState {
        g_score: 0.0,
        h_score: heuristic.estimate(graph[source].pos(), &targets, initial),
        max_waiting: itinerary.wait_credit(source),
        visited: false,
        prev: None,
    };
    frontier.push(Element(source, start.f_score()));
    ledger.entry(source).or_default().insert(initial, start);

    while let Some(Element(current_id, key)) = frontier.pop() {
        let (sig, f_score, g_score, max_waiting) = {
            let states = match ledger.get(&current_id) {
                Some(states) => states,
                None => continue,
            };
            match min_unvisited(states) {
                Some((sig, state)) => (sig, state.f_score(), state.g_score, state.max_waiting),
                // every state of this Node was expanded since the element was pushed
                None => continue,
            }
        };

        // a Node is re-keyed by pushing a fresh element whenever its states change, so
        // an element whose key no longer matches the current minimum is stale
        if key.total_cmp(&f_score) != Ordering::Equal {
            continue;
        }

        if sig.is_empty() {
            // all Targets absorbed: the first finished state popped is the answer
            let (nodes, arrivals) = reconstruct(&ledger, current_id, sig);
            debug!(
                "planned walk from `{}` over {} targets: cost {:.3}, {} expansions",
                graph[source].name(),
                targets.len(),
                f_score,
                expansions
            );
            return Ok(PlanResult {
                walk: Walk::new(nodes, arrivals, f_score),
                expansions,
                expanded_nodes,
            });
        }

        if let Some(state) = ledger
            .get_mut(&current_id)
            .and_then(|states| states.get_mut(&sig))
        {
            state.visited = true;
        }
        expansions += 1;
        expanded_nodes.insert(current_id);
        trace!(
            "expanding `{}` with {} targets remaining, f-score {:.3}",
            graph[current_id].name(),
            sig.len(),
            f_score
        );

        for edge in graph[current_id].edges() {
            let to = edge.to();
            let succ = targets.consume(sig, to);
            let candidate = g_score + edge.weight();

            let states = ledger.entry(to).or_default();
            let improved = match states.get_mut(&succ) {
                // expanded states are final and never relaxed again
                Some(state) if state.visited => false,
                Some(state) => {
                    if candidate < state.g_score {
                        state.g_score = candidate;
                        state.max_waiting =
                            (candidate + itinerary.wait_credit(to)).max(max_waiting);
                        state.prev = Some((current_id, sig));
                        true
                    } else {
                        false
                    }
                }
                None => {
                    states.insert(
                        succ,
                        SearchState {
                            g_score: candidate,
                            h_score: heuristic.estimate(graph[to].pos(), &targets, succ),
                            max_waiting: (candidate + itinerary.wait_credit(to))
                                .max(max_waiting),
                            visited: false,
                            prev: Some((current_id, sig)),
                        },
                    );
                    true
                }
            };
            if improved {
                if let Some((_, best)) = min_unvisited(states) {
                    frontier.push(Element(to, best.f_score()));
                }
            }
        }

        // the Node may still back other partial plans with different Signatures
        if let Some(states) = ledger.get(&current_id) {
            if let Some((_, best)) = min_unvisited(states) {
                frontier.push(Element(current_id, best.f_score()));
            }
        }
    }

    Err(Error::Unreachable(graph[source].name().to_string()))
}

/// Follows the predecessor pointers from the finished state back to the root,
/// collecting the Node sequence and the arrival cost at each step.
fn reconstruct(ledger: &Ledger, end: NodeID, end_sig: Signature) -> (Vec<NodeID>, Vec<Cost>) {
    let mut nodes = Vec::new();
    let mut arrivals = Vec::new();

    let mut current = Some((end, end_sig));
    while let Some((id, sig)) = current {
        let state = &ledger[&id][&sig];
        nodes.push(id);
        arrivals.push(state.arrival());
        current = state.prev;
    }
    nodes.reverse();
    arrivals.reverse();
    (nodes, arrivals)
}
