use crate::error::{DocgenError, Result};
use std::io::Write;
use std::path::Path;

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| DocgenError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `data` to `path`, replacing whatever was there.
///
/// The file is truncated on open, so prior content never survives, and the
/// handle is dropped on every return path. Parent directories must already
/// exist.
pub fn overwrite(path: &Path, data: &[u8]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut f = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        f.write_all(data)?;
        f.flush()
    };
    write().map_err(|source| DocgenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
