//! pagesim command-line interface.
//!
//! Parses a reference string and frame count, runs the selected policies
//! and prints tables (or JSON) to stdout. Logs go to stderr, filtered by
//! `RUST_LOG` or the `-v` flag.
//!
//! ```text
//! pagesim --pages 0,1,2,3,0,1,4 --frames 3
//! pagesim --pages-file refs.txt --frames 4 --policy optimal --format json
//! ```

use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagesim::input::{parse_frame_count, parse_reference_string, read_reference_file};
use pagesim::report::{render_runs, to_json, RunSet};
use pagesim::{
    run_configured, run_policy, OutputFormat, PolicyKind, ReferenceStream, Result, SimConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator (FIFO, LRU, Optimal)",
    long_about = "Simulates page replacement over a reference string and prints the frame \
                  contents after every reference, the fault marks (F = fault, / = hit), \
                  fault counts and efficiency.\n\nExamples:\n  \
                  pagesim --pages 0,1,2,3,0,1,4 --frames 3\n  \
                  pagesim --pages-file refs.txt --policy fifo --policy optimal --format json"
)]
#[command(group(ArgGroup::new("input").required(true).args(["pages", "pages_file"])))]
struct Cli {
    /// Comma-separated reference string, e.g. 0,1,2,3,0,1,4.
    #[arg(short, long, allow_hyphen_values = true)]
    pages: Option<String>,

    /// File holding the reference string (commas or newlines).
    #[arg(long)]
    pages_file: Option<PathBuf>,

    /// Number of physical frames.
    #[arg(short, long, value_parser = parse_frame_count)]
    frames: Option<usize>,

    /// Policy to show step by step (repeatable). Defaults to FIFO and LRU.
    #[arg(long, value_enum)]
    policy: Vec<PolicyKind>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Run the policies on separate threads.
    #[arg(long)]
    parallel: bool,

    /// JSON config file; command-line flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let stream = read_stream(&cli)?;
    info!(
        references = stream.len(),
        frames = config.frames,
        policies = ?config.policies,
        "starting simulation"
    );

    let runs = run_configured(&config, &stream)?;
    let optimal_faults = match runs.iter().find(|r| r.policy() == PolicyKind::Optimal) {
        Some(run) => run.faults(),
        None => run_policy(PolicyKind::Optimal, &stream, config.frames)?.faults(),
    };

    match config.format {
        OutputFormat::Table => print!("{}", render_runs(&stream, &runs, optimal_faults)),
        OutputFormat::Json => {
            let set = RunSet {
                frames: config.frames,
                references: &stream,
                runs: &runs,
                optimal_faults,
            };
            println!("{}", to_json(&set)?);
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };

    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if !cli.policy.is_empty() {
        config.policies = cli.policy.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.parallel |= cli.parallel;

    config.validate()
}

fn read_stream(cli: &Cli) -> Result<ReferenceStream> {
    match (&cli.pages, &cli.pages_file) {
        (Some(pages), _) => parse_reference_string(pages),
        (None, Some(path)) => read_reference_file(path),
        // clap's "input" group requires one of the two
        (None, None) => Err(pagesim::Error::EmptyStream),
    }
}
