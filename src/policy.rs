//! Overwrite confirmation for in-place styling.
//!
//! A run starts [`OverwritePolicy::Unset`] unless the caller pre-selects a
//! mode. The first in-place styling operation triggers a one-time dialog
//! that settles the policy for the rest of the run; after that only
//! [`OverwritePolicy::PromptEachFile`] asks anything further.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Yes/no question answered by a human (or a script, in tests).
pub trait Confirm {
    /// Ask `prompt`; true iff the answer is affirmative.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show an informational line before a question.
    fn notify(&mut self, message: &str);
}

/// An answer is affirmative iff its first non-whitespace character is `y`/`Y`.
pub fn did_user_accept(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}

/// Line-oriented prompts over any reader/writer pair.
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalConfirm<io::StdinLock<'static>, io::Stderr> {
    /// Prompts on stderr, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => did_user_accept(&answer),
            Err(_) => false,
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Not decided yet; the dialog runs on first in-place styling.
    #[default]
    Unset,
    SilentOverwrite,
    PromptEachFile,
    /// Styled output stays beside the original.
    NoOverwrite,
}

impl OverwritePolicy {
    /// Settle the policy, running the dialog for `root` if still unset.
    pub fn resolve(&mut self, root: &Path, confirm: &mut dyn Confirm) -> Self {
        if *self == Self::Unset {
            *self = Self::dialog(root, confirm);
            tracing::debug!(policy = ?*self, "overwrite policy settled");
        }
        *self
    }

    fn dialog(root: &Path, confirm: &mut dyn Confirm) -> Self {
        confirm.notify(&format!(
            "Warning: source file/directory: {} will be overwritten.",
            root.display()
        ));
        if !confirm.confirm("Do you want to overwrite file(s)? ") {
            return Self::NoOverwrite;
        }
        if confirm.confirm("Do you want to be prompted before every file overwrite? ") {
            Self::PromptEachFile
        } else {
            Self::SilentOverwrite
        }
    }

    /// Whether styled output replaces the original.
    pub fn allows_overwrite(self) -> bool {
        matches!(self, Self::SilentOverwrite | Self::PromptEachFile)
    }

    /// Per-file gate. Only [`OverwritePolicy::PromptEachFile`] asks; a
    /// decline leaves the policy itself unchanged.
    pub fn approve_file(self, path: &Path, confirm: &mut dyn Confirm) -> bool {
        match self {
            Self::PromptEachFile => confirm.confirm(&format!(
                "Do you want to overwrite {} with style? ",
                path.display()
            )),
            _ => true,
        }
    }
}
