//! Run configuration and validation of the `(source, destination)` pair.

use crate::error::{MirrorError, Result};
use crate::fs_ops::ensure_directory;
use crate::policy::OverwritePolicy;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct MirrorConfig {
    pub source: PathBuf,
    /// Defaults to `source`, which means styling in place.
    pub destination: Option<PathBuf>,
    pub policy: OverwritePolicy,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            destination: None,
            policy: OverwritePolicy::Unset,
        }
    }
}

/// A validated source and the destination it mirrors onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPair {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl MirrorConfig {
    /// Check the source exists and prepare the destination.
    ///
    /// A directory source gets its destination directory created up front.
    /// A file source aimed at a directory (existing, or a new path without
    /// an extension) lands inside it under its own name.
    pub fn validate(&self) -> Result<PathPair> {
        let source = self.source.clone();
        if !source.exists() {
            return Err(MirrorError::NotFound(source));
        }
        let mut destination = self.destination.clone().unwrap_or_else(|| source.clone());

        if source.is_dir() {
            ensure_directory(&destination)?;
        } else if destination.is_dir()
            || (!destination.exists() && destination.extension().is_none())
        {
            ensure_directory(&destination)?;
            if let Some(name) = source.file_name() {
                destination.push(name);
            }
        }

        Ok(PathPair {
            source,
            destination,
        })
    }
}
