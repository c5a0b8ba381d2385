//! Generate Graphviz DOT visualizations from extracted commit histories.
//!
//! Renders a [`GitHistory`] as a digraph: commits become nodes labeled with
//! their short hex (optionally their creation date), parent→child links
//! become edges, and root commits are filled grey. Output is sorted so the
//! same history always renders to the same text.
//!
//! Pipe the output through Graphviz to produce images:
//!
//! ```bash
//! githist render dot --repo . | dot -Tpng -o history.png
//! ```

use githist::GitHistory;

/// Options controlling what information is rendered in the DOT output.
pub struct RenderOptions {
    /// Include each commit's creation date in its label.
    pub show_dates: bool,
    /// Fill root commits (no parent among the explored set) grey.
    pub highlight_roots: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_dates: false,
            highlight_roots: true,
        }
    }
}

/// Render a [`GitHistory`] to a Graphviz DOT string.
pub fn render(history: &GitHistory, options: &RenderOptions) -> String {
    let mut dot = String::new();
    dot.push_str("digraph githist {\n");
    dot.push_str("  rankdir=TB;\n");
    dot.push_str("  node [shape=box, style=rounded, fontname=\"Helvetica\"];\n");
    dot.push_str("  edge [color=\"#666666\"];\n\n");

    let roots = history.roots();

    let mut nodes: Vec<_> = history.graph().nodes().collect();
    nodes.sort();
    for &id in &nodes {
        let mut label = id.short();
        if options.show_dates && let Some(date) = history.date_of(id) {
            label.push_str(&format!("\\n{}", date.format("%Y-%m-%d")));
        }
        let style = if options.highlight_roots && roots.contains(id) {
            ", style=\"rounded,filled\", fillcolor=\"#e0e0e0\""
        } else {
            ""
        };
        dot.push_str(&format!("  \"{}\" [label=\"{}\"{}];\n", id, label, style));
    }

    if history.graph().edge_count() > 0 {
        dot.push('\n');
        let mut edges: Vec<_> = history.graph().edges().collect();
        edges.sort();
        for (parent, child) in edges {
            dot.push_str(&format!("  \"{}\" -> \"{}\";\n", parent, child));
        }
    }

    dot.push_str("}\n");
    dot
}
