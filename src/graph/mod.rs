//! The geometric graph model: positioned Nodes joined by weighted directed Edges.

mod node;
pub use self::node::Node;

mod edge;
pub use self::edge::Edge;

mod generate;
pub use self::generate::generate_map;

use crate::{Error, NodeID};
use hashbrown::HashMap;

/// A set of positioned Nodes and the Edges between them.
///
/// Nodes are stored in an arena and referenced by [`NodeID`]; the display name is a
/// separate attribute that does not have to be unique. When two Nodes share a name, the
/// name index points at the one added last.
///
/// Maps are either built by hand or generated randomly:
/// ```
/// use multi_target_pathfinding::{generate_map, Graph};
///
/// let mut graph = Graph::new();
/// let home = graph.add_node("home", 0.0, 0.0);
/// let work = graph.add_node("work", 3.0, 4.0);
/// graph.link(home, work);
///
/// assert_eq!(graph[home].edges()[0].weight(), 5.0);
///
/// let mut rng = oorandom::Rand32::new(7);
/// let generated = generate_map(50, 25.0, 768.0, 768.0, &mut rng);
/// assert!(generated.len() <= 50);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: slab::Slab<Node>,
    names: HashMap<String, NodeID>,
}

impl Graph {
    /// Creates a Graph without any Nodes, for manual construction.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// The number of Nodes in the Graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a Node at `(x, y)` and returns its ID.
    ///
    /// The name is indexed for [`node_id`](Graph::node_id) lookups; a repeated name
    /// replaces the index entry but never the Node.
    pub fn add_node(&mut self, name: impl Into<String>, x: f64, y: f64) -> NodeID {
        let name = name.into();
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(Node::new(id, name.clone(), (x, y)));
        self.names.insert(name, id);
        id
    }

    /// Looks up the ID of the Node named `name`.
    pub fn node_id(&self, name: &str) -> Option<NodeID> {
        self.names.get(name).copied()
    }

    /// Looks up the Node named `name`.
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.node_id(name).map(|id| &self.nodes[id])
    }

    /// An Iterator over all `(NodeID, &Node)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
        self.nodes.iter()
    }

    /// Attaches a directed Edge to the Node that owns it.
    ///
    /// Fails with [`Error::EdgeOriginMismatch`] if `edge` does not start at `owner` -
    /// that is always a bug in the calling code. Attaching an Edge to a pair of Nodes
    /// that is already connected is a no-op.
    ///
    /// ## Examples
    /// ```
    /// use multi_target_pathfinding::{Edge, Error, Graph};
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_node("A", 0.0, 0.0);
    /// let b = graph.add_node("B", 10.0, 0.0);
    ///
    /// let edge = Edge::new(&graph[a], &graph[b]);
    /// assert!(graph.add_edge(a, edge).is_ok());
    /// // an Edge starting at A cannot be owned by B
    /// assert!(matches!(
    ///     graph.add_edge(b, edge),
    ///     Err(Error::EdgeOriginMismatch { .. })
    /// ));
    /// ```
    pub fn add_edge(&mut self, owner: NodeID, edge: Edge) -> Result<(), Error> {
        let node = &mut self.nodes[owner];
        if edge.from() != node.id() {
            return Err(Error::EdgeOriginMismatch {
                node: node.name().to_string(),
            });
        }
        node.push_edge(edge);
        Ok(())
    }

    /// Connects `a` and `b` with a mirrored pair of directed Edges.
    ///
    /// Like [`add_edge`](Graph::add_edge), linking an already connected pair is a no-op.
    pub fn link(&mut self, a: NodeID, b: NodeID) {
        let ab = Edge::new(&self.nodes[a], &self.nodes[b]);
        let ba = Edge::new(&self.nodes[b], &self.nodes[a]);
        self.nodes[a].push_edge(ab);
        self.nodes[b].push_edge(ba);
    }
}

use std::ops::Index;
impl Index<NodeID> for Graph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
