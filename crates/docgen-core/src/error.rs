use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocgenError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("duplicate document path: {0}")]
    DuplicatePath(String),

    #[error("template not embedded: {0}")]
    TemplateMissing(String),

    #[error("template is not valid UTF-8: {0}")]
    TemplateEncoding(String),

    #[error("document path must be relative and stay under the output root: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, DocgenError>;
