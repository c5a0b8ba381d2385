//! Extract the commit history of a git repository as a [`GitHistory`]:
//! a directed graph of commit identifiers in parent→child orientation,
//! annotated with per-commit creation times.
//!
//! [`extract_history`] resolves every reference under `refs/`, walks the
//! parent relation breadth-first from the resolved targets, transposes the
//! resulting graph into ancestor→descendant orientation, and validates each
//! commit's timestamps before assembling the immutable history value. The
//! graph and transform machinery lives in the backend-agnostic `githist`
//! crate; this crate only supplies the git2 binding.
//!
//! ```no_run
//! let repo = git2::Repository::open(".")?;
//! let history = githist_git::extract_history(&repo)?;
//! for root in history.roots() {
//!     println!("root: {}", root.short());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::{ExtractError, Result};

use chrono::{DateTime, FixedOffset, Utc};
use git2::{Oid, Repository};
use githist::{CommitId, GitHistory, frontier, transform};
use std::collections::HashMap;
use tracing::debug;

/// Glob covering the repository's whole ref namespace: branches, tags,
/// remotes, notes. `HEAD` itself is not under `refs/` and is deliberately
/// excluded; whatever it points at is reachable through the branch it names.
const REFS_GLOB: &str = "refs/*";

// ============================================================================
// Extraction
// ============================================================================

/// Extract the full commit history reachable from the repository's refs.
///
/// The returned graph is oriented parent→child; its node set is exactly the
/// commits reachable by parent links from any ref target, and every commit
/// carries its committer instant as creation time. A repository with no refs
/// yields an empty history.
///
/// Fails with [`ExtractError::MissingObjectStore`] when the repository has no
/// object database, [`ExtractError::TimestampOrder`] when a commit's author
/// time is after its committer time, and [`ExtractError::Git`] on any backend
/// I/O failure. No partial history is ever returned.
pub fn extract_history(repo: &Repository) -> Result<GitHistory> {
    ensure_object_store(repo)?;

    let targets = resolve_ref_targets(repo)?;
    debug!(targets = targets.len(), "resolved ref targets");

    // Commit metadata is captured while the frontier engine asks for
    // parents, so each commit is loaded from the object database exactly
    // once. The git2::Commit handle (and with it the message and tree
    // payload) is dropped before the closure returns; only identities,
    // parent ids, and raw times are retained.
    let mut metas: HashMap<CommitId, CommitMeta> = HashMap::new();
    let log_graph = frontier::explore(targets, |id| {
        let commit = repo.find_commit(to_oid(id)?)?;
        let meta = CommitMeta::read(&commit);
        let parents = meta.parents.clone();
        metas.insert(*id, meta);
        Ok::<_, ExtractError>(parents)
    })?;

    let graph = transform::transpose(&log_graph);

    let mut dates = HashMap::with_capacity(metas.len());
    for (id, meta) in &metas {
        dates.insert(*id, validated_date(*id, meta)?);
    }

    debug!(
        commits = graph.node_count(),
        edges = graph.edge_count(),
        "extracted commit history"
    );
    Ok(GitHistory::create(graph, dates)?)
}

/// A commit's committer instant, validated against its author instant.
///
/// The author may not have created the commit after the committer recorded
/// it; a violation is reported as [`ExtractError::TimestampOrder`] with both
/// identities and both zoned times, never silently corrected.
pub fn validated_creation_time(commit: &git2::Commit<'_>) -> Result<DateTime<FixedOffset>> {
    validated_zoned_date(to_commit_id(commit.id()), &CommitMeta::read(commit))
}

// ============================================================================
// Ref listing
// ============================================================================

/// Summary of one resolved reference.
#[derive(Debug, Clone)]
pub struct RefInfo {
    /// Full ref name (e.g. `refs/heads/main`, `refs/tags/v1`).
    pub name: String,
    /// Full hex of the commit the ref resolves to.
    pub target: String,
    /// Short (8-char) hex of the target commit.
    pub target_short: String,
    /// Whether the ref itself is symbolic (resolved through indirection).
    pub symbolic: bool,
}

/// List every ref under `refs/`, resolved to its target commit, sorted by
/// name.
pub fn list_refs(repo: &Repository) -> Result<Vec<RefInfo>> {
    let mut refs = Vec::new();
    for reference in repo.references_glob(REFS_GLOB)? {
        let reference = reference?;
        let symbolic = reference.kind() == Some(git2::ReferenceType::Symbolic);
        let name = reference.name().unwrap_or("<invalid utf-8>").to_string();
        let id = to_commit_id(reference.resolve()?.peel_to_commit()?.id());
        refs.push(RefInfo {
            name,
            target: id.to_hex(),
            target_short: id.short(),
            symbolic,
        });
    }
    refs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(refs)
}

// ============================================================================
// Private helpers
// ============================================================================

struct PersonMeta {
    name: String,
    when: git2::Time,
}

struct CommitMeta {
    author: PersonMeta,
    committer: PersonMeta,
    parents: Vec<CommitId>,
}

impl CommitMeta {
    fn read(commit: &git2::Commit<'_>) -> Self {
        Self {
            author: PersonMeta::read(&commit.author()),
            committer: PersonMeta::read(&commit.committer()),
            parents: commit.parent_ids().map(to_commit_id).collect(),
        }
    }
}

impl PersonMeta {
    fn read(signature: &git2::Signature<'_>) -> Self {
        Self {
            name: signature.name().unwrap_or("<invalid utf-8>").to_string(),
            when: signature.when(),
        }
    }
}

fn ensure_object_store(repo: &Repository) -> Result<()> {
    if !repo.path().join("objects").is_dir() || repo.odb().is_err() {
        return Err(ExtractError::MissingObjectStore);
    }
    Ok(())
}

fn resolve_ref_targets(repo: &Repository) -> Result<Vec<CommitId>> {
    let mut targets = Vec::new();
    for reference in repo.references_glob(REFS_GLOB)? {
        // Symbolic refs resolve through indirection; annotated tags peel to
        // their target commit.
        let id = to_commit_id(reference?.resolve()?.peel_to_commit()?.id());
        if !targets.contains(&id) {
            targets.push(id);
        }
    }
    Ok(targets)
}

fn validated_date(id: CommitId, meta: &CommitMeta) -> Result<DateTime<Utc>> {
    Ok(validated_zoned_date(id, meta)?.with_timezone(&Utc))
}

fn validated_zoned_date(id: CommitId, meta: &CommitMeta) -> Result<DateTime<FixedOffset>> {
    let author_time =
        zoned_time(meta.author.when).ok_or(ExtractError::InvalidTimestamp { commit: id })?;
    let committer_time =
        zoned_time(meta.committer.when).ok_or(ExtractError::InvalidTimestamp { commit: id })?;
    // Comparison is on instants; the offsets only matter for display.
    if author_time > committer_time {
        return Err(ExtractError::TimestampOrder {
            commit: id,
            author: meta.author.name.clone(),
            author_time,
            committer: meta.committer.name.clone(),
            committer_time,
        });
    }
    Ok(committer_time)
}

fn zoned_time(when: git2::Time) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(when.offset_minutes() * 60)?;
    Some(DateTime::from_timestamp(when.seconds(), 0)?.with_timezone(&offset))
}

fn to_commit_id(oid: Oid) -> CommitId {
    let mut raw = [0u8; 20];
    raw.copy_from_slice(oid.as_bytes());
    CommitId::from_bytes(raw)
}

fn to_oid(id: &CommitId) -> std::result::Result<Oid, git2::Error> {
    Oid::from_bytes(id.as_bytes())
}
