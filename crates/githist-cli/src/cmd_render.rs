use crate::cmd_extract;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum RenderFormat {
    /// Render as Graphviz DOT
    Dot {
        /// Path to the git repository
        #[arg(short, long, default_value = ".")]
        repo: PathBuf,

        /// Output file (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include commit dates in node labels
        #[arg(long)]
        show_dates: bool,

        /// Fill root commits grey
        #[arg(long, default_value = "true")]
        highlight_roots: bool,
    },
}

pub fn run(format: RenderFormat) -> Result<()> {
    match format {
        RenderFormat::Dot {
            repo,
            output,
            show_dates,
            highlight_roots,
        } => run_dot(repo, output, show_dates, highlight_roots),
    }
}

fn run_dot(
    repo: PathBuf,
    output: Option<PathBuf>,
    show_dates: bool,
    highlight_roots: bool,
) -> Result<()> {
    let history = cmd_extract::open_and_extract(&repo)?;

    let options = githist_dot::RenderOptions {
        show_dates,
        highlight_roots,
    };
    let dot = githist_dot::render(&history, &options);

    if let Some(path) = &output {
        std::fs::write(path, &dot).with_context(|| format!("Failed to write {:?}", path))?;
    } else {
        print!("{}", dot);
    }
    Ok(())
}
