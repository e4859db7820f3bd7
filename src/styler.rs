//! Styling of a single file.
//!
//! Distinct source and destination: the formatter writes straight to the
//! destination. Same path: the formatter writes a `styled_` sibling, which
//! is then renamed over the original when the overwrite policy allows it and
//! left beside the original otherwise.

use crate::classify::is_same_path;
use crate::error::{MirrorError, Result};
use crate::formatter::Formatter;
use crate::fs_ops::{copy_file, remove_file};
use crate::policy::OverwritePolicy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Prefix marking a styled copy written next to its original.
pub const STYLED_PREFIX: &str = "styled_";

/// `dir/name.cpp` -> `dir/styled_name.cpp`
pub fn styled_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{STYLED_PREFIX}{name}"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleOutcome {
    /// Styled output written to a distinct destination
    Written,
    /// Original replaced by its styled version
    Overwritten,
    /// Overwrite declined; styled copy kept at this path
    KeptBeside(PathBuf),
}

pub struct Styler<'a> {
    formatter: &'a dyn Formatter,
}

impl<'a> Styler<'a> {
    pub fn new(formatter: &'a dyn Formatter) -> Self {
        Self { formatter }
    }

    /// Style `src` into `dst`. `policy` only matters when both are the same
    /// path and must already be settled.
    pub fn style(&self, src: &Path, dst: &Path, policy: OverwritePolicy) -> Result<StyleOutcome> {
        if !is_same_path(src, dst) {
            self.formatter.format(src, dst)?;
            return Ok(StyleOutcome::Written);
        }

        let staged = styled_sibling(src);
        if let Err(e) = self.formatter.format(src, &staged) {
            if let Err(cleanup) = remove_file(&staged) {
                warn!(path = %staged.display(), "could not remove styled copy: {cleanup}");
            }
            return Err(e);
        }

        if !policy.allows_overwrite() {
            return Ok(StyleOutcome::KeptBeside(staged));
        }
        commit(&staged, src)?;
        Ok(StyleOutcome::Overwritten)
    }
}

// Replace the contents of `target` with `staged`. Regular files are renamed
// over after taking the original's permissions, so an interrupted run never
// leaves a half-written original. Symlinks are written through so the link
// survives and its target gets the styled content.
fn commit(staged: &Path, target: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(target).map_err(|e| MirrorError::from_io(target, e))?;
    if !meta.file_type().is_symlink() {
        fs::set_permissions(staged, meta.permissions())
            .map_err(|e| MirrorError::from_io(staged, e))?;
        if fs::rename(staged, target).is_ok() {
            return Ok(());
        }
    }
    copy_file(staged, target)?;
    remove_file(staged)
}
