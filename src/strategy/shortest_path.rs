//! Shortest paths over the location graph.
//!
//! Dijkstra with a binary-heap priority queue. All edges count 1 regardless
//! of transport. Decrease-key is handled by inserting again and skipping
//! stale entries on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::board::{Graph, NodeId};

/// Node in the queue, ordered by distance.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    node: NodeId,
    distance: u32,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for a min-heap
        other.distance.cmp(&self.distance)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hop distances from `source` to every reachable node.
///
/// ```
/// use rust_pursuit::board::{Graph, NodeId};
/// use rust_pursuit::core::Transport;
/// use rust_pursuit::strategy::distances_from;
///
/// let graph = Graph::builder()
///     .edge(1, 2, Transport::Taxi)
///     .edge(2, 3, Transport::Bus)
///     .build();
///
/// let distances = distances_from(&graph, NodeId::new(1));
/// assert_eq!(distances[&NodeId::new(3)], 2);
/// ```
#[must_use]
pub fn distances_from(graph: &Graph, source: NodeId) -> FxHashMap<NodeId, u32> {
    let mut distances = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    if !graph.contains(source) {
        return distances;
    }

    distances.insert(source, 0);
    queue.push(QueueEntry {
        node: source,
        distance: 0,
    });

    while let Some(entry) = queue.pop() {
        // Stale entry: a shorter path was already settled
        if entry.distance > *distances.get(&entry.node).unwrap_or(&u32::MAX) {
            continue;
        }

        for neighbour in graph.adjacent_nodes(entry.node) {
            let candidate = entry.distance + 1;
            let known = *distances.get(&neighbour).unwrap_or(&u32::MAX);

            if candidate < known {
                distances.insert(neighbour, candidate);
                queue.push(QueueEntry {
                    node: neighbour,
                    distance: candidate,
                });
            }
        }
    }

    distances
}

/// Hop distance between two nodes. `None` if unreachable.
#[must_use]
pub fn distance_between(graph: &Graph, from: NodeId, to: NodeId) -> Option<u32> {
    distances_from(graph, from).get(&to).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transport;

    fn node(id: u16) -> NodeId {
        NodeId::new(id)
    }

    /// A ring of five nodes plus a chord 1-3.
    fn ring() -> Graph {
        Graph::builder()
            .edge(1, 2, Transport::Taxi)
            .edge(2, 3, Transport::Taxi)
            .edge(3, 4, Transport::Taxi)
            .edge(4, 5, Transport::Taxi)
            .edge(5, 1, Transport::Taxi)
            .edge(1, 3, Transport::Bus)
            .build()
    }

    #[test]
    fn test_distances() {
        let distances = distances_from(&ring(), node(1));

        assert_eq!(distances[&node(1)], 0);
        assert_eq!(distances[&node(2)], 1);
        assert_eq!(distances[&node(3)], 1); // Via the chord, not the ring
        assert_eq!(distances[&node(4)], 2);
        assert_eq!(distances[&node(5)], 1);
    }

    #[test]
    fn test_unreachable() {
        let graph = Graph::builder()
            .edge(1, 2, Transport::Taxi)
            .node(9)
            .build();

        let distances = distances_from(&graph, node(1));
        assert!(!distances.contains_key(&node(9)));
        assert_eq!(distance_between(&graph, node(1), node(9)), None);
    }

    #[test]
    fn test_unknown_source() {
        let graph = Graph::builder().edge(1, 2, Transport::Taxi).build();

        assert!(distances_from(&graph, node(77)).is_empty());
    }

    #[test]
    fn test_distance_between() {
        assert_eq!(distance_between(&ring(), node(2), node(5)), Some(2));
        assert_eq!(distance_between(&ring(), node(4), node(4)), Some(0));
    }
}
