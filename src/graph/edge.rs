use super::Node;
use crate::{Cost, NodeID};

/// A directed arc between two Nodes.
///
/// The weight is the Euclidean distance between the endpoint positions, fixed at
/// construction. Undirected connectivity is expressed as a mirrored pair of directed
/// Edges, which is what [`Graph::link`](crate::Graph::link) inserts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    from: NodeID,
    to: NodeID,
    weight: Cost,
}

impl Edge {
    /// Creates the directed Edge `from -> to`, weighted with the distance between them.
    pub fn new(from: &Node, to: &Node) -> Edge {
        Edge {
            from: from.id(),
            to: to.id(),
            weight: from.distance_to(to),
        }
    }

    /// The Node this Edge starts at.
    pub fn from(&self) -> NodeID {
        self.from
    }

    /// The Node this Edge leads to.
    pub fn to(&self) -> NodeID {
        self.to
    }

    /// The traversal cost of this Edge.
    pub fn weight(&self) -> Cost {
        self.weight
    }
}
