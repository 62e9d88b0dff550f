use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wavefront::puzzles::jam::JamConfig;
use wavefront::solver::engine::Solver;
use wavefront::solver::stats::render_stats_table;

/// Solve a Traffic Jam board loaded from a layout file.
#[derive(Parser)]
struct Args {
    /// Layout file: a `rows cols` header, a car-count line, then one
    /// `name startRow startCol endRow endCol` descriptor per car.
    layout: PathBuf,
    /// Print the search counters as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let start = match JamConfig::from_file(&args.layout) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load {}: {error}", args.layout.display());
            return ExitCode::FAILURE;
        }
    };

    println!("Loaded: {}", args.layout.display());
    println!("{start}");

    let (path, stats) = Solver::new().solve(start);

    match &path {
        Some(path) => {
            for (step, config) in path.iter().enumerate() {
                println!("Step {step}:\n{config}");
            }
        }
        None => println!("No solution."),
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).expect("stats are always serializable")
        );
    } else {
        println!("{}", render_stats_table(&stats, path.map(|p| p.len())));
    }
    ExitCode::SUCCESS
}
