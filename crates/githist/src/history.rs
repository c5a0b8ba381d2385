//! The extracted history value: a commit graph plus creation times.

use crate::graph::{DirectedGraph, GraphError};
use crate::id::CommitId;
use crate::transform;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use thiserror::Error;

/// Error raised when a graph and its date map disagree about the commit set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("no creation time recorded for commit {0}")]
    MissingDate(CommitId),

    #[error("creation time recorded for commit {0}, which is not in the graph")]
    ExtraDate(CommitId),
}

/// An immutable view of a repository's commit history.
///
/// Holds a [`DirectedGraph`] of commit identifiers in parent→child
/// orientation and a creation time for every commit in the graph. Constructed
/// once, atomically, by [`GitHistory::create`]; no mutable or partial view is
/// ever exposed, so a `GitHistory` can be shared freely across threads once
/// built.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use githist::{CommitId, GitHistory, GraphBuilder};
/// use std::collections::HashMap;
///
/// let a = CommitId::from_bytes([0xaa; 20]);
/// let b = CommitId::from_bytes([0xbb; 20]);
/// let mut graph = GraphBuilder::directed().build();
/// graph.put_edge(a, b).unwrap();
///
/// let when = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
/// let dates = HashMap::from([(a, when), (b, when)]);
///
/// let history = GitHistory::create(graph, dates).unwrap();
/// assert_eq!(history.roots(), [a].into());
/// assert_eq!(history.date_of(&b), Some(when));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHistory {
    graph: DirectedGraph<CommitId>,
    dates: HashMap<CommitId, DateTime<Utc>>,
}

impl GitHistory {
    /// Assemble a history, validating that `dates` covers exactly the
    /// graph's node set — no gaps, no extras.
    pub fn create(
        graph: DirectedGraph<CommitId>,
        dates: HashMap<CommitId, DateTime<Utc>>,
    ) -> Result<Self, HistoryError> {
        for node in graph.nodes() {
            if !dates.contains_key(node) {
                return Err(HistoryError::MissingDate(*node));
            }
        }
        for id in dates.keys() {
            if !graph.contains(id) {
                return Err(HistoryError::ExtraDate(*id));
            }
        }
        Ok(Self { graph, dates })
    }

    /// The commit graph, oriented parent→child.
    pub fn graph(&self) -> &DirectedGraph<CommitId> {
        &self.graph
    }

    /// Creation time per commit, keyed by exactly the graph's node set.
    pub fn dates(&self) -> &HashMap<CommitId, DateTime<Utc>> {
        &self.dates
    }

    pub fn date_of(&self, id: &CommitId) -> Option<DateTime<Utc>> {
        self.dates.get(id).copied()
    }

    /// Commits with no parent among the explored set — derived from the
    /// graph on each call, never stored.
    pub fn roots(&self) -> HashSet<CommitId> {
        self.graph
            .nodes()
            .filter(|&node| self.graph.in_degree(node) == 0)
            .copied()
            .collect()
    }

    /// Commits with no child among the explored set (branch tips).
    pub fn leaves(&self) -> HashSet<CommitId> {
        self.graph
            .nodes()
            .filter(|&node| self.graph.out_degree(node) == 0)
            .copied()
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Build a [`GitHistory`] from a precomputed graph over richer node handles.
///
/// The graph must already be in parent→child orientation. Each node is
/// relabeled through `id_of` ([`transform::relabel`]) and its creation time
/// read through `date_of`, keyed by the resolved identifier. No parent
/// re-walk and no author/committer validation happens here: this adapter
/// trusts the upstream graph's structure and dates, which is why it bypasses
/// the validating constructor.
pub fn from_labeled_graph<N, I, D>(
    graph: &DirectedGraph<N>,
    id_of: I,
    date_of: D,
) -> Result<GitHistory, GraphError>
where
    N: Eq + Hash + Clone,
    I: Fn(&N) -> CommitId,
    D: Fn(&N) -> DateTime<Utc>,
{
    let relabeled = transform::relabel(graph, &id_of)?;
    let mut dates = HashMap::with_capacity(relabeled.node_count());
    for node in graph.nodes() {
        dates.insert(id_of(node), date_of(node));
    }
    Ok(GitHistory {
        graph: relabeled,
        dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn id(byte: u8) -> CommitId {
        CommitId::from_bytes([byte; 20])
    }

    fn when(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn test_create_empty() {
        let history = GitHistory::create(GraphBuilder::directed().build(), HashMap::new()).unwrap();
        assert!(history.is_empty());
        assert!(history.roots().is_empty());
        assert!(history.dates().is_empty());
    }

    #[test]
    fn test_create_rejects_missing_date() {
        let mut graph = GraphBuilder::directed().build();
        graph.put_edge(id(1), id(2)).unwrap();
        let dates = HashMap::from([(id(1), when(100))]);

        let err = GitHistory::create(graph, dates).unwrap_err();
        assert_eq!(err, HistoryError::MissingDate(id(2)));
    }

    #[test]
    fn test_create_rejects_extra_date() {
        let mut graph = GraphBuilder::directed().build();
        graph.add_node(id(1));
        let dates = HashMap::from([(id(1), when(100)), (id(9), when(200))]);

        let err = GitHistory::create(graph, dates).unwrap_err();
        assert_eq!(err, HistoryError::ExtraDate(id(9)));
    }

    #[test]
    fn test_roots_and_leaves() {
        // 1 → 2 → 4, 3 → 4 (merge at 4), with 3 parentless as well.
        let mut graph = GraphBuilder::directed().build();
        graph.put_edge(id(1), id(2)).unwrap();
        graph.put_edge(id(2), id(4)).unwrap();
        graph.put_edge(id(3), id(4)).unwrap();
        let dates = HashMap::from([
            (id(1), when(10)),
            (id(2), when(20)),
            (id(3), when(15)),
            (id(4), when(30)),
        ]);

        let history = GitHistory::create(graph, dates).unwrap();
        assert_eq!(history.roots(), [id(1), id(3)].into());
        assert_eq!(history.leaves(), [id(4)].into());
    }

    #[test]
    fn test_single_commit() {
        let mut graph = GraphBuilder::directed().build();
        graph.add_node(id(7));
        let history = GitHistory::create(graph, HashMap::from([(id(7), when(1))])).unwrap();

        assert_eq!(history.node_count(), 1);
        assert_eq!(history.graph().edge_count(), 0);
        assert_eq!(history.roots(), [id(7)].into());
        assert_eq!(history.date_of(&id(7)), Some(when(1)));
    }

    #[test]
    fn test_from_labeled_graph() {
        // Handles carry an id byte and a timestamp; the adapter strips them
        // down to plain identifiers and dates.
        let mut graph = GraphBuilder::directed().build();
        graph.put_edge((1u8, 100i64), (2u8, 200i64)).unwrap();

        let history =
            from_labeled_graph(&graph, |(byte, _)| id(*byte), |(_, secs)| when(*secs)).unwrap();

        assert_eq!(history.node_count(), 2);
        assert!(history.graph().has_edge(&id(1), &id(2)));
        assert_eq!(history.date_of(&id(2)), Some(when(200)));
        assert_eq!(history.roots(), [id(1)].into());
    }

    #[test]
    fn test_from_labeled_graph_collision_merges() {
        let mut graph = GraphBuilder::directed().build();
        graph.put_edge((1u8, 100i64), (2u8, 200i64)).unwrap();
        graph.put_edge((1u8, 150i64), (2u8, 200i64)).unwrap();

        // Two distinct handles resolve to commit 1; the graph merges them.
        let history =
            from_labeled_graph(&graph, |(byte, _)| id(*byte), |(_, secs)| when(*secs)).unwrap();
        assert_eq!(history.node_count(), 2);
        assert_eq!(history.graph().edge_count(), 1);
    }
}
