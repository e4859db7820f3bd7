//! Classification of filesystem entries.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Extensions routed through the formatter: C, C++ and their headers.
pub static ALLOWED_EXTENSIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["c", "cpp", "cxx", "h", "hpp"].into_iter().collect());

/// True iff `path` is a regular file with an allowed extension.
///
/// Metadata failures (broken symlinks, vanished files) classify as
/// "not styleable" so they never abort a traversal.
pub fn is_styleable_file(path: &Path) -> bool {
    has_allowed_extension(path) && path.is_file()
}

pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(ext))
}

/// True iff both paths resolve to the same absolute location.
pub fn is_same_path(a: &Path, b: &Path) -> bool {
    match (resolve(a), resolve(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// Paths that do not exist yet cannot be canonicalized; fall back to the
// lexical absolute form for those.
fn resolve(path: &Path) -> Option<PathBuf> {
    path.canonicalize()
        .ok()
        .or_else(|| std::path::absolute(path).ok())
}
