//! Sortlab demo CLI
//!
//! Generate a seeded random sequence, sort it with one traced strategy,
//! and print the working sequence as it evolves.

use clap::Parser;
use sortlab_core::{
    format_block, DataSource, SortRunner, StrategyId, DEFAULT_SEED, ORIGINAL_LINE_WIDTH,
    TRACE_LINE_WIDTH,
};
use sortlab_demo::exporter::TraceExport;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Traced sorting demonstration CLI
#[derive(Parser, Debug)]
#[command(name = "sortlab-demo")]
#[command(about = "Sort a seeded random sequence and print its intermediate states", long_about = None)]
struct Args {
    /// Number of elements to generate and sort (default 10)
    size: Option<String>,

    /// Strategy to run (selection, partition)
    #[arg(short = 'S', long, default_value = "partition")]
    strategy: String,

    /// Seed for the random data stream
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Passes/steps between trace snapshots (1 = every step)
    #[arg(short, long, default_value_t = 1)]
    interval: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON run summary on stdout instead of the formatted listing
    #[arg(long)]
    json: bool,

    /// Export the full trace to a JSON file
    #[arg(long)]
    export: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries only the listing so runs
    // stay byte-identical for a given seed, size, strategy, and interval.
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // The element count is parsed by hand so a bad value exits with
    // status 1 rather than clap's usage status.
    let size: i64 = match args.size.as_deref().unwrap_or("10").parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("sortlab-demo: first argument must be a whole number of elements to sort");
            std::process::exit(1);
        }
    };

    let strategy: StrategyId = args.strategy.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available strategies: selection, partition");
        std::process::exit(1);
    });

    let mut source = DataSource::new(args.seed);
    let original = match source.generate(size) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("sortlab-demo: {}", e);
            eprintln!("sortlab-demo: first argument must be a whole (zero or greater) number of elements to sort");
            std::process::exit(1);
        }
    };

    info!(
        "Generated {} values (seed={})",
        original.len(),
        source.seed()
    );

    let runner = SortRunner::new().with_progress_interval(args.interval);
    let outcome = runner.run(strategy, &original);

    info!(
        "{} sort: {} snapshots, {} comparisons, {} swaps",
        strategy.name(),
        outcome.metrics.snapshots,
        outcome.metrics.comparisons,
        outcome.metrics.swaps
    );

    if args.json {
        // Machine-readable summary for scripted runs
        let summary = serde_json::json!({
            "strategy": strategy.name(),
            "seed": args.seed,
            "size": original.len(),
            "interval": runner.progress_interval(),
            "snapshots": outcome.metrics.snapshots,
            "comparisons": outcome.metrics.comparisons,
            "swaps": outcome.metrics.swaps,
            "max_depth": outcome.metrics.max_depth,
            "sorted": outcome.sorted,
        });
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        println!("Original data: {}", format_block(&original, ORIGINAL_LINE_WIDTH));
        for snapshot in &outcome.snapshots {
            println!("{}", snapshot.label);
            println!("{}", format_block(&snapshot.values, TRACE_LINE_WIDTH));
        }
        println!("Original data: {}", format_block(&original, ORIGINAL_LINE_WIDTH));
        println!("Sorted data: {}", format_block(&outcome.sorted, TRACE_LINE_WIDTH));
    }

    if let Some(export_path) = &args.export {
        let export = TraceExport::new(&outcome, &original, args.seed, runner.progress_interval());
        if let Err(e) = export.write_to_file(export_path) {
            error!("Failed to write export: {:?}", e);
            std::process::exit(1);
        }
        info!("Exported {} frames to {}", export.frames.len(), export_path);
    }
}
