//! CLI entry point for twig

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use termcolor::WriteColor;
use twig::{OutputConfig, StreamingFormatter, TreeError, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print a directory as an indented tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show all files and directories, including hidden ones
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Limit the level of recursion (-1 = unlimited)
    #[arg(
        short = 'L',
        long = "level",
        default_value_t = -1,
        allow_negative_numbers = true,
        value_name = "LEVEL"
    )]
    level: i64,

    /// Show the full path of each file or directory
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Show only entries whose name matches this regex
    #[arg(short = 'P', long = "pattern", value_name = "REGEX")]
    pattern: Option<String>,

    /// Hide entries whose name matches this regex
    #[arg(short = 'I', long = "ignore", value_name = "REGEX")]
    ignore: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not draw indentation lines
    #[arg(short = 'i', long = "no-indent")]
    no_indent: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("twig={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn render<W: WriteColor>(
    walker: &TreeWalker,
    root: &Path,
    mut formatter: StreamingFormatter<W>,
) -> twig::Result<()> {
    let summary = walker.walk(root, &mut formatter)?;
    tracing::info!(
        directories = summary.directories,
        files = summary.files,
        entries = summary.total(),
        "rendered tree"
    );
    Ok(())
}

fn run(args: &Args) -> twig::Result<()> {
    let walker = TreeWalker::new(WalkerConfig {
        show_hidden: args.all,
        dirs_only: args.dirs_only,
        max_depth: WalkerConfig::depth_from_level(args.level),
        include_pattern: args.pattern.clone(),
        exclude_pattern: args.ignore.clone(),
    })?;

    let output_config = OutputConfig {
        full_path: args.full_path,
        indent: !args.no_indent,
        use_color: args.output.is_none() && should_use_color(args.color),
    };

    match &args.output {
        Some(file) => {
            tracing::info!(path = %file.display(), "writing output to file");
            render(
                &walker,
                &args.path,
                StreamingFormatter::create(file, output_config)?,
            )
        }
        None => render(&walker, &args.path, StreamingFormatter::stdout(output_config)),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    match run(&args) {
        Ok(()) => {}
        // Reader went away (e.g. piped into `head`); not an error for us.
        Err(TreeError::Write(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("twig: {}", e);
            process::exit(1);
        }
    }
}
