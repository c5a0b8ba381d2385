use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;

pub fn run(repo_path: PathBuf, json_output: bool) -> Result<()> {
    let repo = git2::Repository::open(&repo_path)
        .with_context(|| format!("Failed to open repository at {:?}", repo_path))?;
    let refs = githist_git::list_refs(&repo)?;

    if json_output {
        let values: Vec<_> = refs
            .iter()
            .map(|r| {
                json!({
                    "name": r.name,
                    "target": r.target,
                    "symbolic": r.symbolic,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for r in &refs {
            let marker = if r.symbolic { "  (symbolic)" } else { "" };
            println!("{}  {}{}", r.target_short, r.name, marker);
        }
    }
    Ok(())
}
