use crate::output::print_json;
use anyhow::Context;
use docgen_core::Emitter;
use std::path::Path;

pub const SUMMARY_LINE: &str = "All documentation files generated successfully with full content!";

/// `docgen generate` — write every embedded document under `root`.
///
/// Per-file confirmations are printed as each write lands, so a failure part
/// way through still shows what made it to disk. The summary only prints
/// after the last write.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let emitter = Emitter::builtin(root).context("failed to load embedded documents")?;

    let report = emitter
        .generate(|written| {
            if !json {
                println!("Generated {}", written.path);
            }
        })
        .with_context(|| format!("failed to generate documentation in {}", root.display()))?;

    if json {
        print_json(&report)?;
    } else {
        println!("\n{SUMMARY_LINE}");
    }

    Ok(())
}
