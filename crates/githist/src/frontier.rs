//! Frontier discovery: build a graph by exploring a successor relation
//! breadth-first from a set of starting nodes.

use crate::graph::{DirectedGraph, GraphBuilder, GraphError};
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Discover the graph reachable from `starts` under `successors`.
///
/// Maintains a FIFO queue seeded with the starting set and a seen-set that
/// guarantees each node is enqueued at most once. Every `node → successor`
/// pair reported by the relation becomes an edge, even when the successor was
/// already visited through another node, so converging edges are all
/// retained; duplicate successors collapse into a single edge.
///
/// The successor relation may perform I/O (lazy loading) and is therefore
/// fallible; its error aborts the exploration and is returned unchanged. The
/// relation must be finite: no cycle detection is performed, and an infinite
/// successor chain will not terminate. Commit parent relations satisfy this
/// by construction.
///
/// An empty starting set yields an empty graph. The result disallows
/// self-loops, so a relation that reports a node as its own successor is an
/// error.
///
/// # Examples
///
/// ```
/// use githist::{GraphError, frontier};
///
/// let graph = frontier::explore([0u32], |n| {
///     Ok::<_, GraphError>(if *n < 3 { vec![n + 1] } else { vec![] })
/// })
/// .unwrap();
///
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.has_edge(&0, &1));
/// ```
pub fn explore<N, S, F, E>(starts: S, mut successors: F) -> Result<DirectedGraph<N>, E>
where
    N: Eq + Hash + Clone,
    S: IntoIterator<Item = N>,
    F: FnMut(&N) -> Result<Vec<N>, E>,
    E: From<GraphError>,
{
    let mut seen: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<N> = VecDeque::new();
    for start in starts {
        if seen.insert(start.clone()) {
            queue.push_back(start);
        }
    }

    let mut graph = GraphBuilder::directed().build();
    while let Some(current) = queue.pop_front() {
        graph.add_node(current.clone());
        for successor in successors(&current)? {
            graph.put_edge(current.clone(), successor.clone())?;
            if seen.insert(successor.clone()) {
                queue.push_back(successor);
            }
        }
    }
    Ok(graph)
}
