#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to plan minimum-cost Walks that visit every Target on a weighted geometric Graph.
//!
//! ## Introduction
//! Finding the shortest Path between two Nodes of a Graph is a solved problem, but many
//! Scenarios ask for more: a courier has to pass by several pickup points, a patrol has to
//! touch every checkpoint, a player unit has to gather from multiple resource Nodes - in
//! any order, as cheaply as possible. Running a single-target search once per Target and
//! stitching the results together greedily produces Walks that can be arbitrarily far from
//! optimal.
//!
//! The idea behind this crate is to embed the visit-all-targets problem into an expanded
//! search space of `(Node, remaining Targets)` pairs. A state in that space remembers not
//! just where the traveler stands, but which Targets the Walk has already absorbed, encoded
//! as a canonical [`Signature`]. One best-first search over this space - Dijkstra when no
//! estimate is available, A* when a [`Heuristic`](heuristics::Heuristic) is plugged in -
//! yields the optimal Walk, at the price of a worst-case `|V| * 2^|T|` state count. States
//! are only materialized when a relaxation actually reaches them, so the practical cost is
//! governed by how much of that space the Heuristic manages to skip.
//!
//! On top of the search, the crate supports incremental re-planning: when a traveler has
//! advanced partway along a planned Walk, the remaining request can be re-planned from the
//! reached Node, carrying forward mandatory "already elapsed" waiting constraints at
//! rendezvous points (see [`Itinerary`]).
//!
//! ## Examples
//! Planning on a hand-built map:
//! ```
//! use multi_target_pathfinding::prelude::*;
//!
//! // A(0,0) --- B(10,0)
//! //   |          |
//! // D(0,10) -- C(10,10)
//! let mut graph = Graph::new();
//! let a = graph.add_node("A", 0.0, 0.0);
//! let b = graph.add_node("B", 10.0, 0.0);
//! let c = graph.add_node("C", 10.0, 10.0);
//! let d = graph.add_node("D", 0.0, 10.0);
//! graph.link(a, b);
//! graph.link(b, c);
//! graph.link(c, d);
//! graph.link(d, a);
//!
//! let itinerary = Itinerary::new();
//! let result = plan_walk(&graph, a, &[c], &NearestRemaining, &itinerary).unwrap();
//!
//! // two steps of length 10, via either B or D
//! assert_eq!(result.walk.cost(), 20.0);
//! assert_eq!(result.walk.len(), 3);
//! ```
//! Planning on a generated map:
//! ```
//! use multi_target_pathfinding::prelude::*;
//!
//! let mut rng = oorandom::Rand32::new(4);
//! let graph = generate_map(100, 25.0, 768.0, 768.0, &mut rng);
//!
//! let source = graph.node_id("1").unwrap();
//! // pick the source's first neighbor as the target
//! let target = graph[source].edges()[0].to();
//!
//! let result = plan_walk(&graph, source, &[target], &Zero, &Itinerary::new()).unwrap();
//! assert_eq!(result.walk[0], source);
//! ```
//! The Heuristic can also be selected by name, for drivers that expose the choice to
//! their users:
//! ```
//! use multi_target_pathfinding::heuristics::heuristic_by_name;
//!
//! let heuristic = heuristic_by_name("nearest").unwrap();
//! assert!(heuristic_by_name("manhattan").is_err());
//! ```
//!
//! ## Heuristic trade-offs
//! [`Zero`](heuristics::Zero) reduces the search to plain Dijkstra over the expanded
//! space and is always optimal. [`NearestRemaining`](heuristics::NearestRemaining) is
//! admissible and consistent for this formulation, so it is also optimal while expanding
//! at most as many states. [`FarthestRemaining`](heuristics::FarthestRemaining)
//! overestimates whenever few Targets remain and may return non-optimal Walks; it is kept
//! as a deliberately aggressive, user-selectable strategy.
//!
//! ## Re-planning
//! A planning call never mutates the [`Graph`]. All state that has to survive between
//! requests - the wait credits of rendezvous Nodes - lives in a caller-owned
//! [`Itinerary`], and the [`Itinerary::advance_along`] helper implements the full
//! advance-and-credit protocol. See the [`Itinerary`] docs for a worked example.

/// The type used to reference a Node in a [`Graph`]
///
/// IDs are handed out by [`Graph::add_node`] and are the identity of a Node: display
/// names do not have to be unique, IDs do.
pub type NodeID = usize;

/// The cost of traversing Edges, measured as accumulated Euclidean distance
pub type Cost = f64;

/// A position in the 2D plane
pub type Position = (f64, f64);

mod error;
pub use self::error::Error;

pub mod node_id;
pub use self::node_id::{NodeIDMap, NodeIDSet};

pub mod graph;
pub use self::graph::{generate_map, Edge, Graph, Node};

pub mod heuristics;

pub mod search;
pub use self::search::{plan_walk, PlanResult, Signature, TargetSet, Walk};

mod itinerary;
pub use self::itinerary::Itinerary;

/// Re-exports everything needed for planning Walks
pub mod prelude {
    pub use crate::graph::{generate_map, Edge, Graph, Node};
    pub use crate::heuristics::{
        heuristic_by_name, FarthestRemaining, Heuristic, NearestRemaining, Zero,
    };
    pub use crate::itinerary::Itinerary;
    pub use crate::search::{plan_walk, PlanResult, Signature, TargetSet, Walk};
    pub use crate::{Cost, Error, NodeID, Position};
}
