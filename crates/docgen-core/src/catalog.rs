use crate::error::{DocgenError, Result};
use crate::layout;
use crate::templates;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Research,
    Prd,
    Architecture,
    Readme,
}

impl DocumentKind {
    /// Emission order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Research,
        DocumentKind::Prd,
        DocumentKind::Architecture,
        DocumentKind::Readme,
    ];

    pub fn template(self) -> &'static str {
        match self {
            DocumentKind::Research => templates::RESEARCH,
            DocumentKind::Prd => templates::PRD,
            DocumentKind::Architecture => templates::ARCHITECTURE,
            DocumentKind::Readme => templates::README,
        }
    }

    pub fn output_path(self) -> &'static str {
        match self {
            DocumentKind::Research => layout::RESEARCH_MD,
            DocumentKind::Prd => layout::PRD_MD,
            DocumentKind::Architecture => layout::ARCHITECTURE_MD,
            DocumentKind::Readme => layout::README_MD,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentKind::Research => "research",
            DocumentKind::Prd => "prd",
            DocumentKind::Architecture => "architecture",
            DocumentKind::Readme => "readme",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A fixed payload bound to a path relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    pub path: String,
    pub content: String,
}

impl Document {
    pub fn load(kind: DocumentKind) -> Result<Self> {
        Ok(Self {
            kind,
            path: kind.output_path().to_string(),
            content: templates::load(kind.template())?,
        })
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Reduce a document path to its normal components.
///
/// Absolute paths, `..` and empty paths are rejected so every document lands
/// under the output root; `.` segments are dropped.
fn normalize(path: &str) -> Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(DocgenError::InvalidPath(path.to_string()));
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(DocgenError::InvalidPath(path.to_string()));
    }
    Ok(out)
}

/// Ordered set of documents with unique target paths.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<Document>,
}

impl Catalog {
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doc in &documents {
            if !seen.insert(normalize(&doc.path)?) {
                return Err(DocgenError::DuplicatePath(doc.path.clone()));
            }
        }
        Ok(Self { documents })
    }

    /// The research write-up, PRD, architecture document and README.
    pub fn builtin() -> Result<Self> {
        let documents = DocumentKind::ALL
            .into_iter()
            .map(Document::load)
            .collect::<Result<Vec<_>>>()?;
        Self::new(documents)
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&Document> {
        self.documents.iter().find(|d| d.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
