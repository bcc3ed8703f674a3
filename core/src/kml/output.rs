use crate::prelude::{TrailError, TrailResult};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes `contents` to `path` through a sibling temporary file that is
/// renamed into place, so readers never observe a partial document.
///
/// A symlinked destination is written through to its target. An existing
/// file keeps its permissions; a new one is created world-readable (0644 on
/// unix).
pub fn write_document(path: &Path, contents: &str) -> TrailResult<()> {
    let io_error = |source| TrailError::Io {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(io_error)?;
    let dir = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir).map_err(io_error)?;
    staged.write_all(contents.as_bytes()).map_err(io_error)?;
    let permissions = match fs::metadata(&target) {
        Ok(existing) => existing.permissions(),
        Err(_) => new_file_permissions(&staged).map_err(io_error)?,
    };
    staged
        .as_file()
        .set_permissions(permissions)
        .map_err(io_error)?;
    staged.as_file().sync_all().map_err(io_error)?;
    staged
        .persist(&target)
        .map_err(|err| io_error(err.error))?;
    Ok(())
}

fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(unix)]
fn new_file_permissions(_staged: &NamedTempFile) -> std::io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions(staged: &NamedTempFile) -> std::io::Result<Permissions> {
    Ok(staged.as_file().metadata()?.permissions())
}
