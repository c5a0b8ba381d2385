use anyhow::{Context, Result};
use githist::GitHistory;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON shape of an extracted history: hex commit ids, parent→child edges,
/// RFC 3339 dates. Every list is sorted so the output is stable across runs.
#[derive(Debug, Serialize)]
pub struct HistoryDoc {
    pub commits: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub dates: BTreeMap<String, String>,
    pub roots: Vec<String>,
}

pub fn run(repo_path: PathBuf, pretty: bool) -> Result<()> {
    let history = open_and_extract(&repo_path)?;
    let doc = history_doc(&history);

    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    println!("{}", json);
    Ok(())
}

pub fn history_doc(history: &GitHistory) -> HistoryDoc {
    let mut commits: Vec<String> = history.graph().nodes().map(|id| id.to_hex()).collect();
    commits.sort();

    let mut edges: Vec<(String, String)> = history
        .graph()
        .edges()
        .map(|(parent, child)| (parent.to_hex(), child.to_hex()))
        .collect();
    edges.sort();

    let dates = history
        .dates()
        .iter()
        .map(|(id, date)| (id.to_hex(), date.to_rfc3339()))
        .collect();

    let mut roots: Vec<String> = history.roots().iter().map(|id| id.to_hex()).collect();
    roots.sort();

    HistoryDoc {
        commits,
        edges,
        dates,
        roots,
    }
}

pub fn open_and_extract(repo_path: &Path) -> Result<GitHistory> {
    let repo = git2::Repository::open(repo_path)
        .with_context(|| format!("Failed to open repository at {:?}", repo_path))?;
    githist_git::extract_history(&repo)
        .with_context(|| format!("Failed to extract history from {:?}", repo_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;

    fn init_temp_repo() -> (tempfile::TempDir, git2::Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
        (dir, repo)
    }

    fn create_commit(
        repo: &git2::Repository,
        message: &str,
        seconds: i64,
        parent: Option<&git2::Commit>,
    ) -> git2::Oid {
        let sig =
            Signature::new("Test User", "test@example.com", &git2::Time::new(seconds, 0)).unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<&git2::Commit> = parent.into_iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_history_doc_sorted_and_complete() {
        let (dir, repo) = init_temp_repo();
        let oid1 = create_commit(&repo, "first", 1_000, None);
        let c1 = repo.find_commit(oid1).unwrap();
        let oid2 = create_commit(&repo, "second", 2_000, Some(&c1));

        let history = open_and_extract(dir.path()).unwrap();
        let doc = history_doc(&history);

        assert_eq!(doc.commits.len(), 2);
        assert!(doc.commits.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(doc.edges, vec![(oid1.to_string(), oid2.to_string())]);
        assert_eq!(doc.roots, vec![oid1.to_string()]);
        assert_eq!(doc.dates.len(), 2);
        assert!(doc.dates[&oid2.to_string()].starts_with("1970-01-01T00:33:20"));
    }

    #[test]
    fn test_run_prints_json() {
        let (dir, repo) = init_temp_repo();
        create_commit(&repo, "initial", 1_000, None);
        assert!(run(dir.path().to_path_buf(), false).is_ok());
        assert!(run(dir.path().to_path_buf(), true).is_ok());
    }

    #[test]
    fn test_run_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path().to_path_buf(), false).is_err());
    }
}
