use crate::catalog::{Catalog, DocumentKind};
use crate::error::Result;
use crate::io;
use crate::layout::Layout;
use serde::Serialize;
use std::path::PathBuf;

/// One document that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenDocument {
    pub kind: DocumentKind,
    pub path: String,
    pub bytes: usize,
}

/// Outcome of a successful `generate` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub documents: Vec<WrittenDocument>,
}

pub struct Emitter {
    layout: Layout,
    catalog: Catalog,
}

impl Emitter {
    pub fn new(layout: Layout, catalog: Catalog) -> Self {
        Self { layout, catalog }
    }

    /// Emitter for the built-in documentation set rooted at `root`.
    pub fn builtin(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(Layout::new(root), Catalog::builtin()?))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create the layout directories, then overwrite every document in
    /// catalog order.
    ///
    /// `on_written` fires after each file lands. A failure stops the run
    /// immediately; files written before it are left in place.
    pub fn generate<F>(&self, mut on_written: F) -> Result<GenerateReport>
    where
        F: FnMut(&WrittenDocument),
    {
        for dir in self.layout.directory_paths() {
            io::ensure_dir(&dir)?;
            tracing::debug!(dir = %dir.display(), "ensured directory");
        }

        let mut documents = Vec::with_capacity(self.catalog.len());
        for doc in &self.catalog {
            let target = self.layout.resolve(&doc.path);
            io::overwrite(&target, doc.content.as_bytes())?;

            let written = WrittenDocument {
                kind: doc.kind,
                path: doc.path.clone(),
                bytes: doc.content.len(),
            };
            tracing::info!(
                kind = %doc.kind,
                path = %doc.path,
                bytes = written.bytes,
                "wrote document"
            );
            on_written(&written);
            documents.push(written);
        }

        Ok(GenerateReport {
            root: self.layout.root.clone(),
            directories: self.layout.directories.clone(),
            documents,
        })
    }
}
