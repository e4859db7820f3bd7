//! Filesystem primitives with errors mapped onto [`MirrorError`].

use crate::error::{MirrorError, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Mode for directories created in the destination tree (rwxr-xr-x).
pub const DIR_MODE: u32 = 0o755;

/// Stream every byte of `src` into `dst`, truncating `dst`.
///
/// Both handles are dropped on every exit path.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut reader = File::open(src).map_err(|e| MirrorError::from_io(src, e))?;
    let mut writer = File::create(dst).map_err(|e| MirrorError::from_io(dst, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| MirrorError::from_io(dst, e))
}

/// Delete `path` if it is a regular file; anything else is left alone.
pub fn remove_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Ok(());
    }
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MirrorError::from_io(path, e)),
    }
}

/// Create `path` with [`DIR_MODE`] unless it already exists.
pub fn ensure_directory(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    match builder.create(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(MirrorError::from_mkdir(path, e)),
    }
}
