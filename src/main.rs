use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use stylemirror::config::MirrorConfig;
use stylemirror::error::EXIT_FAILURE;
use stylemirror::formatter::Astyle;
use stylemirror::logging::{init_tracing, level_from_env};
use stylemirror::mirror::DirectoryMirror;
use stylemirror::policy::{OverwritePolicy, TerminalConfirm};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "stylemirror",
    version,
    about = "Format C, C++ files using astyle recursively over a directory"
)]
struct Cli {
    /// Source file or directory
    #[arg(short, long, default_value = ".")]
    source: PathBuf,
    /// Destination file or directory (default: overwrite source)
    #[arg(short, long)]
    destination: Option<PathBuf>,
    /// What to do when styling in place
    #[arg(long, value_enum, default_value_t = OverwriteMode::Ask)]
    overwrite: OverwriteMode,
    /// astyle binary to run
    #[arg(long, default_value = "astyle")]
    astyle: PathBuf,
    /// Log every visited entry
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OverwriteMode {
    /// Ask once before the first in-place overwrite
    Ask,
    /// Overwrite without asking
    Always,
    /// Keep originals; write styled_ copies beside them
    Never,
    /// Ask before every file
    Each,
}

impl From<OverwriteMode> for OverwritePolicy {
    fn from(mode: OverwriteMode) -> Self {
        match mode {
            OverwriteMode::Ask => OverwritePolicy::Unset,
            OverwriteMode::Always => OverwritePolicy::SilentOverwrite,
            OverwriteMode::Never => OverwritePolicy::NoOverwrite,
            OverwriteMode::Each => OverwritePolicy::PromptEachFile,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(level_from_env(default_level));

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MirrorConfig {
        source: cli.source,
        destination: cli.destination,
        policy: cli.overwrite.into(),
    };
    let pair = config.validate()?;

    let astyle = Astyle::new(cli.astyle);
    astyle.ensure_installed()?;

    let mut confirm = TerminalConfirm::stdio();
    let report = DirectoryMirror::new(&astyle, &mut confirm, config.policy)
        .run(&pair.source, &pair.destination)?;

    println!("{report}");
    if report.failed.is_empty() {
        println!("Successfully styled the given directory");
    } else {
        for path in &report.failed {
            eprintln!("Warning: {} was not styled", path.display());
        }
    }
    Ok(())
}
