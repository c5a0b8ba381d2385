//! Commit history as a queryable directed graph.
//!
//! This crate is the backend-agnostic core: a generic directed-graph value
//! type with a frontier (breadth-first) construction engine and
//! structure-preserving transforms, plus the [`GitHistory`] value that pairs
//! a commit graph with per-commit creation times. Nothing here talks to a
//! repository; the `githist-git` crate supplies the git-backed extractor.
//!
//! The pieces compose in one direction: [`frontier::explore`] discovers a
//! graph from a successor relation, [`transform::transpose`] flips it from
//! the child→parent orientation a parent relation naturally produces into the
//! parent→child orientation consumers expect, and [`GitHistory::create`]
//! validates and freezes the result.
//!
//! # Example — a two-commit history by hand
//!
//! ```
//! use chrono::DateTime;
//! use githist::{CommitId, GitHistory, GraphError, frontier, transform};
//! use std::collections::HashMap;
//!
//! let root = CommitId::from_bytes([0xaa; 20]);
//! let tip = CommitId::from_bytes([0xbb; 20]);
//!
//! // Walk the parent relation from the tip: tip's parent is root.
//! let log_graph = frontier::explore([tip], |id| {
//!     Ok::<_, GraphError>(if *id == tip { vec![root] } else { vec![] })
//! })
//! .unwrap();
//!
//! let graph = transform::transpose(&log_graph);
//! let when = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
//! let dates = HashMap::from([(root, when), (tip, when)]);
//!
//! let history = GitHistory::create(graph, dates).unwrap();
//! assert!(history.graph().has_edge(&root, &tip));
//! assert_eq!(history.roots(), [root].into());
//! ```

pub mod frontier;
pub mod graph;
pub mod history;
pub mod id;
pub mod transform;

pub use graph::{DirectedGraph, GraphBuilder, GraphError};
pub use history::{GitHistory, HistoryError, from_labeled_graph};
pub use id::{CommitId, ParseCommitIdError};
