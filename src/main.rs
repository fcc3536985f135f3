use anyhow::Result;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use seqdiff::{AlgorithmKind, DEFAULT_WAGNER_SIZE, DiffOptions, OutputFormat, Session, TokenMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "seqdiff",
    version = "0.1.0",
    about = "Show the minimal differences between two files",
    long_about = "This command aligns two files line by line, word by word or character by character \
    and prints the minimal edit script turning the first into the second.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    old: PathBuf,
    #[arg(index = 2, help = "The changed file")]
    new: PathBuf,
    #[arg(short, long, value_enum, default_value_t = TokenMode::Lines, help = "How the files are split into entries")]
    mode: TokenMode,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::PlusMinus, help = "How the differences are printed")]
    format: OutputFormat,
    #[arg(short, long, value_enum, default_value_t = AlgorithmKind::Hybrid, help = "The alignment strategy")]
    algorithm: AlgorithmKind,
    #[arg(long, help = "Do not trim equal runs at every divide and conquer step")]
    no_reduce: bool,
    #[arg(long, default_value_t = DEFAULT_WAGNER_SIZE, help = "Cost matrix cells preallocated for the full aligner")]
    matrix_size: usize,
    #[arg(long, default_value_t = 0, help = "Initial score vector length for the divide and conquer aligner")]
    score_length: usize,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to colour the output")]
    color: ColorChoice,
}

impl Cli {
    fn options(&self) -> DiffOptions {
        DiffOptions::new(
            self.algorithm,
            !self.no_reduce,
            self.score_length,
            self.matrix_size,
        )
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => colored::control::set_override(std::io::stdout().is_terminal()),
    }

    let pwd = std::env::current_dir()?;
    let session = Session::new(
        &pwd.to_string_lossy(),
        Box::new(std::io::stdout()),
        cli.options(),
    )?;

    session.diff(&cli.old, &cli.new, cli.mode, cli.format)?;

    Ok(())
}
