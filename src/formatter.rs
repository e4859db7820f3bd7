//! External formatter invocation
//!
//! The crate never formats code itself. Each styleable file is handed to a
//! [`Formatter`], which reads one path and writes the styled result to
//! another. [`Astyle`] is the production implementation and drives the
//! [Artistic Style](https://astyle.sourceforge.net/) binary.
//!
//! # Example
//!
//! ```no_run
//! use stylemirror::formatter::{Astyle, Formatter};
//! use std::path::Path;
//!
//! let astyle = Astyle::default();
//! astyle.format(Path::new("main.cpp"), Path::new("styled_main.cpp")).unwrap();
//! ```

use crate::error::{MirrorError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Something that turns the file at `input` into a styled file at `output`.
pub trait Formatter {
    fn format(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Brace placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BraceStyle {
    /// Each brace on its own line
    Allman,
    /// Opening brace attached to the statement
    Java,
}

impl BraceStyle {
    fn as_str(self) -> &'static str {
        match self {
            Self::Allman => "allman",
            Self::Java => "java",
        }
    }
}

/// Where the `*` or `&` of a declaration goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAlign {
    Type,
    Middle,
    Name,
}

impl PointerAlign {
    fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Middle => "middle",
            Self::Name => "name",
        }
    }
}

/// Style options handed to astyle on every invocation.
///
/// # Example
///
/// ```rust
/// use stylemirror::formatter::{Astyle, BraceStyle, StyleProfile};
/// use std::path::Path;
///
/// let profile = StyleProfile {
///     brace_style: BraceStyle::Java,
///     max_code_length: 100,
///     ..StyleProfile::default()
/// };
/// let astyle = Astyle::default().with_profile(profile);
/// let args = astyle.args(Path::new("a.c"), Path::new("b.c"));
/// assert!(args.contains(&"--style=java".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct StyleProfile {
    pub brace_style: BraceStyle,
    pub pointer_align: PointerAlign,
    /// Put closing braces on their own line
    pub break_closing_braces: bool,
    /// Maximum consecutive empty lines
    pub max_empty_lines: usize,
    /// Maximum characters per line of code
    pub max_code_length: usize,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            brace_style: BraceStyle::Allman,
            pointer_align: PointerAlign::Type,
            break_closing_braces: true,
            max_empty_lines: 2,
            max_code_length: 80,
        }
    }
}

impl StyleProfile {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![format!("--style={}", self.brace_style.as_str())];
        args.extend(
            [
                "--indent-switches",
                "--indent-cases",
                "--indent-namespaces",
                "--indent-after-parens",
                "--indent-preproc-define",
                "--indent-col1-comments",
                "--pad-oper",
                "--pad-include",
                "--pad-header",
                "--unpad-brackets",
            ]
            .map(String::from),
        );
        args.push(format!("--squeeze-lines={}", self.max_empty_lines));
        args.push("--squeeze-ws".into());
        args.push(format!("--align-pointer={}", self.pointer_align.as_str()));
        args.extend(
            ["--break-one-line-headers", "--add-braces", "--close-templates"].map(String::from),
        );
        args.push(format!("--max-code-length={}", self.max_code_length));
        args.push("--mode=c".into());
        if self.break_closing_braces {
            args.push("--break-closing-braces".into());
        }
        args
    }
}

/// Runs the `astyle` binary.
#[derive(Clone, Debug)]
pub struct Astyle {
    pub program: PathBuf,
    pub profile: StyleProfile,
}

impl Default for Astyle {
    fn default() -> Self {
        Self::new("astyle")
    }
}

impl Astyle {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            profile: StyleProfile::default(),
        }
    }

    pub fn with_profile(mut self, profile: StyleProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Full argument list for styling `input` into `output`.
    pub fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        let mut args = self.profile.to_args();
        args.push(format!("--stdin={}", input.display()));
        args.push(format!("--stdout={}", output.display()));
        args
    }

    /// Whether `<program> --version` runs successfully.
    pub fn is_installed(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    pub fn ensure_installed(&self) -> Result<()> {
        if self.is_installed() {
            Ok(())
        } else {
            Err(MirrorError::FormatterMissing {
                program: self.program.display().to_string(),
            })
        }
    }
}

impl Formatter for Astyle {
    fn format(&self, input: &Path, output: &Path) -> Result<()> {
        tracing::debug!(input = %input.display(), output = %output.display(), "running astyle");
        let result = Command::new(&self.program)
            .args(self.args(input, output))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| MirrorError::FormatterInvocation {
                path: input.to_path_buf(),
                status: "failed to start".into(),
                stderr: e.to_string(),
            })?;

        if result.status.success() {
            Ok(())
        } else {
            Err(MirrorError::FormatterInvocation {
                path: input.to_path_buf(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().replace('\n', "; "),
            })
        }
    }
}
