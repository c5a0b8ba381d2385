//! Structure-preserving graph transforms: transposition and node relabeling.

use crate::graph::{DirectedGraph, GraphBuilder, GraphError};
use std::hash::Hash;

/// A copy of `graph` with every edge reversed.
///
/// Nodes and the self-loop allowance are preserved, so transposing twice
/// yields a graph equal to the original.
///
/// # Examples
///
/// ```
/// use githist::{GraphBuilder, transform};
///
/// let mut graph = GraphBuilder::directed().build();
/// graph.put_edge("parent", "child").unwrap();
///
/// let reversed = transform::transpose(&graph);
/// assert!(reversed.has_edge(&"child", &"parent"));
/// assert_eq!(transform::transpose(&reversed), graph);
/// ```
pub fn transpose<N: Eq + Hash + Clone>(graph: &DirectedGraph<N>) -> DirectedGraph<N> {
    // Both adjacency directions are already indexed; swapping them is the
    // whole transposition.
    DirectedGraph {
        allows_self_loops: graph.allows_self_loops,
        successors: graph.predecessors.clone(),
        predecessors: graph.successors.clone(),
    }
}

/// A snapshot of `graph` with every node passed through `mapping`.
///
/// The result's node set is the image of the mapping and each edge has both
/// endpoints mapped. A non-injective mapping merges the source nodes that
/// collide, unioning their incident edges — intentional collapsing, not an
/// error. The self-loop allowance is preserved; if a collapse would turn an
/// edge into a disallowed self-loop, that is reported as [`GraphError`].
///
/// # Examples
///
/// ```
/// use githist::{GraphBuilder, transform};
///
/// let mut graph = GraphBuilder::directed().build();
/// graph.put_edge(10, 21).unwrap();
/// graph.put_edge(11, 21).unwrap();
///
/// // Collapse by tens digit: 10 and 11 merge into one node.
/// let collapsed = transform::relabel(&graph, |n| n / 10).unwrap();
/// assert_eq!(collapsed.node_count(), 2);
/// assert!(collapsed.has_edge(&1, &2));
/// ```
pub fn relabel<N, M, F>(graph: &DirectedGraph<N>, mapping: F) -> Result<DirectedGraph<M>, GraphError>
where
    N: Eq + Hash + Clone,
    M: Eq + Hash + Clone,
    F: Fn(&N) -> M,
{
    let mut out = GraphBuilder::directed()
        .allows_self_loops(graph.allows_self_loops())
        .build();
    for node in graph.nodes() {
        out.add_node(mapping(node));
    }
    for (source, target) in graph.edges() {
        out.put_edge(mapping(source), mapping(target))?;
    }
    Ok(out)
}
