use crate::output::print_json;
use anyhow::Context;
use docgen_core::{Emitter, Layout};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Entry {
    kind: String,
    path: String,
    bytes: usize,
}

#[derive(Serialize)]
struct Listing<'a> {
    layout: &'a Layout,
    documents: Vec<Entry>,
}

/// `docgen list` — show what `generate` would write, without touching disk.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let emitter = Emitter::builtin(root).context("failed to load embedded documents")?;
    let entries: Vec<Entry> = emitter
        .catalog()
        .iter()
        .map(|d| Entry {
            kind: d.kind.to_string(),
            path: d.path.clone(),
            bytes: d.content.len(),
        })
        .collect();

    if json {
        return print_json(&Listing {
            layout: emitter.layout(),
            documents: entries,
        });
    }

    print!("{}", render_table(&entries));
    Ok(())
}

/// KIND and PATH are left-aligned, BYTES right-aligned.
fn render_table(entries: &[Entry]) -> String {
    let kind_w = entries.iter().map(|e| e.kind.len()).fold("KIND".len(), usize::max);
    let path_w = entries.iter().map(|e| e.path.len()).fold("PATH".len(), usize::max);
    let bytes_w = entries
        .iter()
        .map(|e| e.bytes.to_string().len())
        .fold("BYTES".len(), usize::max);

    let mut out = format!("{:kind_w$}  {:path_w$}  {:>bytes_w$}\n", "KIND", "PATH", "BYTES");
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(kind_w),
        "-".repeat(path_w),
        "-".repeat(bytes_w)
    ));
    for e in entries {
        out.push_str(&format!(
            "{:kind_w$}  {:path_w$}  {:>bytes_w$}\n",
            e.kind, e.path, e.bytes
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let entries = vec![
            Entry {
                kind: "prd".to_string(),
                path: "docs/PRD.md".to_string(),
                bytes: 2974,
            },
            Entry {
                kind: "readme".to_string(),
                path: "README.md".to_string(),
                bytes: 12,
            },
        ];
        let table = render_table(&entries);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines,
            vec![
                "KIND    PATH         BYTES",
                "------  -----------  -----",
                "prd     docs/PRD.md   2974",
                "readme  README.md       12",
            ]
        );
    }
}
