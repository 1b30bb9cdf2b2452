#![forbid(unsafe_code)]

mod config;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dyecast_core::generate::random_graph;
use dyecast_core::{ColorGraph, GraphStats, Palette};
use dyecast_sim::{
    LasVegasReport, MonteCarloReport, replay_statistics, run_trials, run_until_valid,
};

use config::Defaults;
use output::OutputMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dyecast: Monte Carlo probe of random graph-coloring success rates",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Seed for all random draws (generation and coloring).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a TOML defaults file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Generate a random graph and print its statistics",
        after_help = "EXAMPLES:\n    # 20 nodes at the default density\n    dyecast generate 20\n\n    # Reproducible graph, machine-readable output\n    dyecast generate 20 --density 0.4 --seed 7 --json"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Run a Monte Carlo coloring campaign",
        after_help = "EXAMPLES:\n    # 100 trials of 3-color guessing on a 10-node graph\n    dyecast run 10\n\n    # Two colors, bigger budget, fixed seed\n    dyecast run 10 --trials 5000 --color red --color blue --seed 42"
    )]
    Run(RunArgs),

    #[command(
        about = "Recolor until the first valid coloring (Las Vegas)",
        after_help = "EXAMPLES:\n    # Stop at the first conflict-free coloring\n    dyecast vegas 10\n\n    # Tight attempt cap\n    dyecast vegas 10 --max-attempts 500"
    )]
    Vegas(VegasArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of nodes.
    nodes: usize,

    /// Edge density factor in (0, 1].
    #[arg(long)]
    density: Option<f64>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Number of nodes.
    nodes: usize,

    /// Edge density factor in (0, 1].
    #[arg(long)]
    density: Option<f64>,

    /// Number of coloring trials.
    #[arg(long)]
    trials: Option<usize>,

    /// Palette label; repeat for more colors.
    #[arg(long = "color")]
    colors: Vec<String>,
}

#[derive(Args, Debug)]
struct VegasArgs {
    /// Number of nodes.
    nodes: usize,

    /// Edge density factor in (0, 1].
    #[arg(long)]
    density: Option<f64>,

    /// Attempt cap.
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Palette label; repeat for more colors.
    #[arg(long = "color")]
    colors: Vec<String>,
}

/// JSON payload for `run`.
#[derive(Debug, Serialize)]
struct RunPayload {
    stats: GraphStats,
    report: MonteCarloReport,
    success_rate: f64,
    replay_check: Option<ReplayCheck>,
}

/// JSON payload for `vegas`.
#[derive(Debug, Serialize)]
struct VegasPayload {
    stats: GraphStats,
    report: LasVegasReport,
}

/// Replay of the best recorded trial against the live graph.
#[derive(Debug, Serialize)]
struct ReplayCheck {
    trial: usize,
    recorded: usize,
    replayed: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let defaults = Defaults::load(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or(defaults.seed);
    let mode = cli.output_mode();

    match cli.command {
        Commands::Generate(args) => generate(&args, &defaults, seed, mode),
        Commands::Run(args) => run(&args, &defaults, seed, mode),
        Commands::Vegas(args) => vegas(&args, &defaults, seed, mode),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn build_graph(nodes: usize, density: f64, rng: &mut StdRng) -> Result<ColorGraph> {
    let graph = random_graph(nodes, density, rng)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph ready"
    );
    Ok(graph)
}

fn palette_from(colors: &[String], defaults: &Defaults) -> Palette {
    if colors.is_empty() {
        Palette::new(defaults.palette.iter().cloned())
    } else {
        Palette::new(colors.iter().cloned())
    }
}

fn generate(args: &GenerateArgs, defaults: &Defaults, seed: u64, mode: OutputMode) -> Result<()> {
    let density = args.density.unwrap_or(defaults.density);
    let mut rng = StdRng::seed_from_u64(seed);
    let graph = build_graph(args.nodes, density, &mut rng)?;
    let stats = GraphStats::from_graph(&graph);

    mode.emit(&stats, || {
        format!(
            "nodes={} edges={} density={:.3} components={} isolated={} max_degree={}",
            stats.node_count,
            stats.edge_count,
            stats.density,
            stats.component_count,
            stats.isolated_node_count,
            stats.max_degree,
        )
    })
}

fn run(args: &RunArgs, defaults: &Defaults, seed: u64, mode: OutputMode) -> Result<()> {
    let density = args.density.unwrap_or(defaults.density);
    let trials = args.trials.unwrap_or(defaults.trials);
    let palette = palette_from(&args.colors, defaults);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = build_graph(args.nodes, density, &mut rng)?;
    let report = run_trials(&mut graph, &palette, trials, &mut rng)?;

    // Replay the best trial as a bookkeeping sanity check.
    let replay_check = report
        .history
        .iter()
        .min_by_key(|record| record.conflicts)
        .cloned()
        .map(|best| ReplayCheck {
            trial: best.trial,
            recorded: best.conflicts,
            replayed: replay_statistics(&mut graph, &best),
        });

    let stats = GraphStats::from_graph(&graph);
    let success_rate = report.success_rate();
    let payload = RunPayload {
        stats,
        report,
        success_rate,
        replay_check,
    };

    mode.emit(&payload, || {
        let mut text = format!(
            "nodes={} edges={} density={:.3}\ntrials={} successes={} rate={:.2}% elapsed={}ms",
            payload.stats.node_count,
            payload.stats.edge_count,
            payload.stats.density,
            payload.report.history.len(),
            payload.report.successes,
            payload.success_rate * 100.0,
            payload.report.elapsed.as_millis(),
        );
        if let Some(check) = &payload.replay_check {
            let verdict = if check.recorded == check.replayed {
                "ok"
            } else {
                "DIVERGED"
            };
            text.push_str(&format!(
                "\nbest trial #{}: {} conflicts (replay {verdict})",
                check.trial, check.recorded,
            ));
        }
        text
    })
}

fn vegas(args: &VegasArgs, defaults: &Defaults, seed: u64, mode: OutputMode) -> Result<()> {
    let density = args.density.unwrap_or(defaults.density);
    let max_attempts = args.max_attempts.unwrap_or(defaults.max_attempts);
    let palette = palette_from(&args.colors, defaults);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = build_graph(args.nodes, density, &mut rng)?;
    let report = run_until_valid(&mut graph, &palette, max_attempts, &mut rng)?;

    let stats = GraphStats::from_graph(&graph);
    let payload = VegasPayload { stats, report };

    mode.emit(&payload, || {
        if payload.report.solved {
            format!(
                "solved after {} attempt(s) in {}ms",
                payload.report.attempts,
                payload.report.elapsed.as_millis(),
            )
        } else {
            format!(
                "no valid coloring in {} attempt(s); best conflict count {}",
                payload.report.attempts,
                payload
                    .report
                    .history
                    .iter()
                    .map(|record| record.conflicts)
                    .min()
                    .unwrap_or(0),
            )
        }
    })
}
