//! # stylemirror - Mirror a Source Tree Through astyle
//!
//! stylemirror walks a directory tree and rebuilds it under a destination,
//! running every C and C++ source file through
//! [Artistic Style](https://astyle.sourceforge.net/) on the way. Everything
//! else is copied verbatim. When the destination is the source itself, the
//! sources are restyled in place after a one-time confirmation.
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use stylemirror::config::MirrorConfig;
//! use stylemirror::formatter::Astyle;
//! use stylemirror::mirror::DirectoryMirror;
//! use stylemirror::policy::{OverwritePolicy, TerminalConfirm};
//! use std::path::PathBuf;
//!
//! let config = MirrorConfig {
//!     source: PathBuf::from("src"),
//!     destination: Some(PathBuf::from("styled")),
//!     policy: OverwritePolicy::Unset,
//! };
//! let pair = config.validate().unwrap();
//!
//! let astyle = Astyle::default();
//! let mut confirm = TerminalConfirm::stdio();
//! let report = DirectoryMirror::new(&astyle, &mut confirm, config.policy)
//!     .run(&pair.source, &pair.destination)
//!     .unwrap();
//! println!("{report}");
//! ```
//!
//! ### As a CLI Tool
//!
//! ```text
//! stylemirror -s project/ -d styled/
//! stylemirror -s project/ --overwrite always
//! ```
//!
//! ## Modules
//!
//! - [`mirror`] - The recursive traversal
//! - [`styler`] - Styling one file, including the in-place overwrite
//! - [`policy`] - Overwrite confirmation state machine
//! - [`formatter`] - The external formatter seam and astyle driver

/// Styleable-file and same-path checks
pub mod classify;

/// Run configuration
pub mod config;

/// Error types and exit status
pub mod error;

/// External formatter invocation
pub mod formatter;

/// Copy, delete and mkdir wrappers
pub mod fs_ops;

/// Tracing subscriber setup
pub mod logging;

/// Recursive directory mirroring
pub mod mirror;

/// Overwrite confirmation
pub mod policy;

/// Single-file styling
pub mod styler;
