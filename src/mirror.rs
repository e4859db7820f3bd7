//! Recursive directory mirroring
//!
//! [`DirectoryMirror`] walks a source path depth-first and rebuilds it under
//! a destination path. Styleable files go through the [`Styler`], other
//! regular files are copied byte for byte, and directories recurse. When
//! source and destination coincide nothing is copied; styleable files are
//! restyled in place subject to the [`OverwritePolicy`].
//!
//! Symbolic links to directories below the root are not followed, so the
//! traversal always terminates.
//!
//! # Example
//!
//! ```no_run
//! use stylemirror::formatter::Astyle;
//! use stylemirror::mirror::DirectoryMirror;
//! use stylemirror::policy::{OverwritePolicy, TerminalConfirm};
//! use std::path::Path;
//!
//! let astyle = Astyle::default();
//! let mut confirm = TerminalConfirm::stdio();
//! let report = DirectoryMirror::new(&astyle, &mut confirm, OverwritePolicy::Unset)
//!     .run(Path::new("src"), Path::new("styled"))
//!     .unwrap();
//! println!("{report}");
//! ```

use crate::classify::{is_same_path, is_styleable_file};
use crate::error::{MirrorError, Result};
use crate::formatter::Formatter;
use crate::fs_ops::{copy_file, ensure_directory};
use crate::policy::{Confirm, OverwritePolicy};
use crate::styler::{StyleOutcome, Styler};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// What a run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Styled into a distinct destination
    pub styled: usize,
    /// Styled in place over the original
    pub overwritten: usize,
    /// Styled copies left beside originals
    pub kept_beside: Vec<PathBuf>,
    pub copied: usize,
    pub directories_created: usize,
    /// In-place styling declined per file
    pub skipped: Vec<PathBuf>,
    /// Files whose formatter run failed
    pub failed: Vec<PathBuf>,
    /// Symlinked directories that were not descended
    pub symlinks_skipped: Vec<PathBuf>,
    /// Overwrite policy in force when the run ended
    pub policy: OverwritePolicy,
}

impl fmt::Display for MirrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} styled, {} overwritten, {} kept beside original, {} copied, {} directories created, {} skipped, {} failed",
            self.styled,
            self.overwritten,
            self.kept_beside.len(),
            self.copied,
            self.directories_created,
            self.skipped.len(),
            self.failed.len()
        )
    }
}

pub struct DirectoryMirror<'a> {
    formatter: &'a dyn Formatter,
    confirm: &'a mut dyn Confirm,
    policy: OverwritePolicy,
    root: PathBuf,
    dest_root: PathBuf,
    report: MirrorReport,
}

impl<'a> DirectoryMirror<'a> {
    pub fn new(
        formatter: &'a dyn Formatter,
        confirm: &'a mut dyn Confirm,
        policy: OverwritePolicy,
    ) -> Self {
        Self {
            formatter,
            confirm,
            policy,
            root: PathBuf::new(),
            dest_root: PathBuf::new(),
            report: MirrorReport::default(),
        }
    }

    /// Mirror `src` onto `dst` and return what was done.
    pub fn run(mut self, src: &Path, dst: &Path) -> Result<MirrorReport> {
        self.root = src.to_path_buf();
        self.dest_root = dst.to_path_buf();
        let span = tracing::info_span!("mirror", src = %src.display(), dst = %dst.display());
        let _guard = span.enter();
        self.mirror(src, dst)?;
        self.report.policy = self.policy;
        Ok(self.report)
    }

    fn mirror(&mut self, src: &Path, dst: &Path) -> Result<()> {
        if is_styleable_file(src) {
            return self.style_file(src, dst);
        }
        if src.is_file() {
            if !is_same_path(src, dst) {
                copy_file(src, dst)?;
                info!(src = %src.display(), dst = %dst.display(), "copied");
                self.report.copied += 1;
            }
            return Ok(());
        }
        if !src.is_dir() {
            debug!(path = %src.display(), "neither file nor directory");
            return Ok(());
        }

        // List before creating `dst`: a destination nested in the source
        // must not show up in its own listing.
        let entries = list_entries(src)?;
        if ensure_directory(dst)? {
            debug!(path = %dst.display(), "created directory");
            self.report.directories_created += 1;
        }
        for entry in entries {
            let name = entry.file_name();
            let child = src.join(name);
            if entry.path_is_symlink() && child.is_dir() {
                warn!(path = %child.display(), "not following symlinked directory");
                self.report.symlinks_skipped.push(child);
                continue;
            }
            if child.is_dir() && is_same_path(&child, &self.dest_root) {
                debug!(path = %child.display(), "skipping destination inside source");
                continue;
            }
            self.mirror(&child, &dst.join(name))?;
        }
        Ok(())
    }

    fn style_file(&mut self, src: &Path, dst: &Path) -> Result<()> {
        let policy = if is_same_path(src, dst) {
            let policy = self.policy.resolve(&self.root, &mut *self.confirm);
            if !policy.approve_file(src, &mut *self.confirm) {
                debug!(path = %src.display(), "overwrite declined");
                self.report.skipped.push(src.to_path_buf());
                return Ok(());
            }
            policy
        } else {
            self.policy
        };

        match Styler::new(self.formatter).style(src, dst, policy) {
            Ok(StyleOutcome::Written) => {
                info!(src = %src.display(), dst = %dst.display(), "styled");
                self.report.styled += 1;
            }
            Ok(StyleOutcome::Overwritten) => {
                info!(path = %src.display(), "styled in place");
                self.report.overwritten += 1;
            }
            Ok(StyleOutcome::KeptBeside(styled)) => {
                info!(path = %styled.display(), "styled copy kept beside original");
                self.report.kept_beside.push(styled);
            }
            Err(e) if !e.is_fatal() => {
                warn!("{e}");
                self.report.failed.push(src.to_path_buf());
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

// Immediate entries of `dir`, read eagerly so files created while styling
// are never visited.
fn list_entries(dir: &Path) -> Result<Vec<walkdir::DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|entry| entry.map_err(|e| list_error(dir, e)))
        .collect()
}

fn list_error(dir: &Path, err: walkdir::Error) -> MirrorError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    match err.into_io_error() {
        Some(io_err) => MirrorError::from_io(&path, io_err),
        None => MirrorError::Io {
            path,
            source: io::Error::other("filesystem loop"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct Passthrough;

    impl Formatter for Passthrough {
        fn format(&self, input: &Path, output: &Path) -> Result<()> {
            copy_file(input, output).map(|_| ())
        }
    }

    struct NoPrompt;

    impl Confirm for NoPrompt {
        fn confirm(&mut self, prompt: &str) -> bool {
            panic!("unexpected prompt: {prompt}");
        }

        fn notify(&mut self, _message: &str) {}
    }

    #[test]
    fn report_summary_line() {
        let report = MirrorReport {
            styled: 2,
            copied: 1,
            ..MirrorReport::default()
        };
        let line = report.to_string();
        assert!(line.starts_with("2 styled"));
        assert!(line.contains("1 copied"));
    }

    #[test]
    fn missing_source_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut confirm = NoPrompt;
        let report = DirectoryMirror::new(&Passthrough, &mut confirm, OverwritePolicy::Unset)
            .run(&dir.path().join("ghost"), &dir.path().join("out"))
            .unwrap();
        assert_eq!(report, MirrorReport::default());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn plain_file_in_place_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();
        let mut confirm = NoPrompt;
        let report = DirectoryMirror::new(&Passthrough, &mut confirm, OverwritePolicy::Unset)
            .run(&file, &file)
            .unwrap();
        assert_eq!(report.copied, 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn unlistable_directory_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_entries(&dir.path().join("absent")).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("absent"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_permission_error() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // root ignores mode bits
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = list_entries(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let err = result.unwrap_err();
        assert!(matches!(err, MirrorError::Permission(ref p) if p == &locked));
        assert!(err.is_fatal());
    }
}
