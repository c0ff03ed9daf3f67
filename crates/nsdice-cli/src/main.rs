#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Args, CommandFactory, Parser, Subcommand};
use nsdice_core::config::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_SIDES};
use nsdice_core::{ConfigError, DiceConfig, Face, timing};
use nsdice_graph::Analysis;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "nsdice: find intransitive sets among non-standard dice",
    long_about = "Enumerate every die with the given number of sides and face range, \
                  compare each pair, and prune dice that only win or only lose until \
                  the intransitive core is left."
)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit stage timing report to stderr.
    #[arg(long, global = true)]
    timing: bool,

    /// Output format (defaults to pretty on a TTY, text when piped).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(flatten)]
    dice: DiceArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// The three parameters of a dice family.
#[derive(Args, Debug, Clone, Copy)]
struct DiceArgs {
    /// Lowest face value.
    #[arg(long = "min", value_name = "N", default_value_t = DEFAULT_MIN_VALUE, global = true)]
    min_value: Face,

    /// Highest face value.
    #[arg(long = "max", value_name = "N", default_value_t = DEFAULT_MAX_VALUE, global = true)]
    max_value: Face,

    /// Number of sides per die.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SIDES, global = true)]
    sides: usize,
}

impl DiceArgs {
    fn config(self) -> Result<DiceConfig, ConfigError> {
        DiceConfig::new(self.min_value, self.max_value, self.sides)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "List the reduced win relation (default)",
        long_about = "Print one `A > B` line per edge that survives pruning.",
        after_help = "EXAMPLES:\n    # Default family: faces 0..=4, four sides\n    nsdice\n\n    # Six-sided dice with faces 0..=6\n    nsdice edges --max 6 --sides 6\n\n    # Emit machine-readable output\n    nsdice edges --format json"
    )]
    Edges(cmd::edges::EdgesArgs),

    #[command(
        about = "List intransitive cycles",
        long_about = "List strongly connected components and three-die cycles of the reduced relation.",
        after_help = "EXAMPLES:\n    # Cycles in the default family\n    nsdice cycles\n\n    # Show at most five triangles\n    nsdice cycles --limit 5"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        about = "Show pipeline statistics",
        long_about = "Show counts from generation, comparison and pruning.",
        after_help = "EXAMPLES:\n    # Statistics for the default family\n    nsdice stats\n\n    # Emit machine-readable output\n    nsdice stats --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Roll two dice against each other",
        long_about = "Count face pairings between two dice with the same number of sides and report which, if either, is better.",
        after_help = "EXAMPLES:\n    # One leg of an intransitive triangle\n    nsdice compare 3300 2210\n\n    # Faces of 10 or more need commas\n    nsdice compare 10,4,0 5,5,5"
    )]
    Compare(cmd::compare::CompareArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    nsdice completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NSDICE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "nsdice=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("NSDICE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Validate the dice flags, run the pipeline, and hand the result to `run`.
fn with_analysis(
    dice: DiceArgs,
    output: OutputMode,
    run: impl FnOnce(&Analysis) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let config = match dice.config() {
        Ok(config) => config,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!(err);
        }
    };

    let analysis = Analysis::run(&config);
    run(&analysis)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let timing_enabled = cli.timing || timing::timing_enabled_from_env();
    timing::set_timing_enabled(timing_enabled);
    timing::clear_timings();

    let output = resolve_output_mode(cli.format, cli.json);
    debug!(?output, "resolved output mode");

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Edges(cmd::edges::EdgesArgs::default()));

    let dice = cli.dice;
    let command_result = match command {
        Commands::Edges(args) => timing::timed("cmd.edges", || {
            with_analysis(dice, output, |analysis| {
                cmd::edges::run_edges(&args, analysis, output)
            })
        }),
        Commands::Cycles(args) => timing::timed("cmd.cycles", || {
            with_analysis(dice, output, |analysis| {
                cmd::cycles::run_cycles(&args, analysis, output)
            })
        }),
        Commands::Stats(args) => timing::timed("cmd.stats", || {
            with_analysis(dice, output, |analysis| {
                cmd::stats::run_stats(&args, analysis, output)
            })
        }),
        Commands::Compare(args) => {
            timing::timed("cmd.compare", || cmd::compare::run_compare(&args, output))
        }
        Commands::Completions(args) => {
            cmd::completions::run_completions(args.shell, &mut Cli::command())
        }
    };

    if timing_enabled {
        let report = timing::collect_report();
        if report.is_empty() {
            eprintln!("timing report: no samples recorded");
        } else if output.is_json() {
            eprintln!("{}", serde_json::to_string_pretty(&report.to_json())?);
        } else {
            eprintln!("timing report:");
            eprintln!("{}", report.display_table());
        }
    }

    command_result
}
