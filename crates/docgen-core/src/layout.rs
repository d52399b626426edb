use serde::Serialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Output layout constants
// ---------------------------------------------------------------------------

pub const DOCS_DIR: &str = "docs";
pub const IMAGES_DIR: &str = "docs/images";

pub const RESEARCH_MD: &str = "docs/research.md";
pub const PRD_MD: &str = "docs/PRD.md";
pub const ARCHITECTURE_MD: &str = "docs/architecture.md";
pub const README_MD: &str = "README.md";

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where the documentation set is materialized.
///
/// The directory list is ordered parent-first. Relative entries resolve
/// against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub root: PathBuf,
    pub directories: Vec<String>,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: vec![DOCS_DIR.to_string(), IMAGES_DIR.to_string()],
        }
    }

    /// Absolute (root-joined) paths of every directory the layout needs.
    pub fn directory_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.directories.iter().map(|d| self.root.join(d))
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
