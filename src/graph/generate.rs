use super::Graph;
use crate::NodeID;
use log::debug;
use oorandom::Rand32;

const MAX_RETRIES: usize = 500;
const EDGE_DISTANCE_MULTIPLIER: f64 = 1.5;

/// Generates a random geometric map.
///
/// Up to `node_count` Nodes are placed by rejection sampling: a uniform random position
/// within `width * height` is accepted only if it keeps a distance of at least
/// `min_separation` to every Node placed before it. Each Node gets 500 attempts; when
/// the budget runs out the map simply ends up with fewer Nodes than requested. That is
/// a documented outcome of dense requests, not an error.
///
/// After placement, every Node is linked bidirectionally to all Nodes within 1.5x the
/// distance to its nearest neighbor. The result is connected-to-nearest-neighbor by
/// construction, but there is no global connectivity guarantee - planning across
/// separate clusters reports
/// [`Error::Unreachable`](crate::Error::Unreachable).
///
/// Nodes are named `"1"`, `"2"`, ... in placement order.
///
/// The random source is threaded in explicitly, so the same seed always reproduces the
/// same map:
/// ```
/// use multi_target_pathfinding::generate_map;
///
/// let first = generate_map(50, 25.0, 768.0, 768.0, &mut oorandom::Rand32::new(4));
/// let second = generate_map(50, 25.0, 768.0, 768.0, &mut oorandom::Rand32::new(4));
///
/// assert_eq!(first.len(), second.len());
/// ```
pub fn generate_map(
    node_count: usize,
    min_separation: f64,
    width: f64,
    height: f64,
    rng: &mut Rand32,
) -> Graph {
    let mut graph = Graph::new();

    for i in 0..node_count {
        for _ in 0..MAX_RETRIES {
            let x = rng.rand_float() as f64 * width;
            let y = rng.rand_float() as f64 * height;
            let too_close = graph
                .nodes()
                .any(|(_, node)| node.distance_to_point(x, y) < min_separation);
            if !too_close {
                graph.add_node((i + 1).to_string(), x, y);
                break;
            }
        }
    }

    if graph.len() < 2 {
        return graph;
    }

    let ids: Vec<NodeID> = graph.nodes().map(|(id, _)| id).collect();
    for &id in &ids {
        let mut closest = f64::INFINITY;
        for &other in &ids {
            if other != id {
                closest = closest.min(graph[id].distance_to(&graph[other]));
            }
        }

        let max_weight = closest * EDGE_DISTANCE_MULTIPLIER;
        for &other in &ids {
            if other != id && graph[id].distance_to(&graph[other]) <= max_weight {
                graph.link(id, other);
            }
        }
    }

    debug!(
        "generated map with {} of {} requested nodes",
        graph.len(),
        node_count
    );
    graph
}
