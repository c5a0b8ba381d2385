use chrono::{DateTime, FixedOffset};
use githist::{CommitId, GraphError, HistoryError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failures while extracting a history from a repository.
///
/// Three distinct kinds surface here: precondition violations
/// ([`MissingObjectStore`](ExtractError::MissingObjectStore)), data-integrity
/// evidence ([`TimestampOrder`](ExtractError::TimestampOrder),
/// [`InvalidTimestamp`](ExtractError::InvalidTimestamp)), and wrapped I/O
/// from the git backend. None of them is retried; every failure aborts the
/// extraction with no partial result.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("repository has no object database")]
    MissingObjectStore,

    #[error(
        "commit {commit}: author {author} ({author_time}) is after committer {committer} ({committer_time})"
    )]
    TimestampOrder {
        commit: CommitId,
        author: String,
        author_time: DateTime<FixedOffset>,
        committer: String,
        committer_time: DateTime<FixedOffset>,
    },

    #[error("commit {commit}: stored timestamp is not representable")]
    InvalidTimestamp { commit: CommitId },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    History(#[from] HistoryError),
}
