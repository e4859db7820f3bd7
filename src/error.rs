//! Error taxonomy for mirroring runs.

use std::io;
use std::path::{Path, PathBuf};

/// Process exit status used for every unrecoverable failure.
pub const EXIT_FAILURE: i32 = 1;

pub type Result<T> = std::result::Result<T, MirrorError>;

#[derive(thiserror::Error, Debug)]
pub enum MirrorError {
    #[error("Error: couldn't find a matching directory or file: {}", .0.display())]
    NotFound(PathBuf),

    #[error(
        "Error: cannot create a file/directory: {} or access its content. Please provide the necessary permissions.",
        .0.display()
    )]
    Permission(PathBuf),

    #[error("Error: parent path for path: {} doesn't exist.", .0.display())]
    InvalidParent(PathBuf),

    #[error("Error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Warning: formatter failed on {} ({status}): {stderr}", .path.display())]
    FormatterInvocation {
        path: PathBuf,
        status: String,
        stderr: String,
    },

    #[error(
        "Error: {program} is not installed on your system. Please follow the instructions: https://astyle.sourceforge.net/"
    )]
    FormatterMissing { program: String },
}

impl MirrorError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::Permission(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Like [`MirrorError::from_io`], but a missing path means the parent
    /// directory does not exist. Used for directory creation.
    pub fn from_mkdir(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::InvalidParent(path.to_path_buf()),
            _ => Self::from_io(path, err),
        }
    }

    /// Whether this error must stop the traversal.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::FormatterInvocation { .. })
    }
}
