use clap::Parser;
use wavefront::puzzles::clock::ClockConfig;
use wavefront::solver::engine::Solver;
use wavefront::solver::stats::render_stats_table;

/// Solve the modular clock puzzle: turn the hand from start to end in as
/// few +-1 steps as possible.
#[derive(Parser)]
struct Args {
    /// Number of hours on the clock face.
    hours: u32,
    /// Hour the hand starts on.
    start: u32,
    /// Hour to reach.
    end: u32,
    /// Print the search counters as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    println!(
        "Hours: {} Start: {} End: {}",
        args.hours, args.start, args.end
    );

    let (path, stats) = Solver::new().solve(ClockConfig::new(args.hours, args.start, args.end));

    match &path {
        Some(path) => {
            for (step, config) in path.iter().enumerate() {
                println!("Step {step}: {config}");
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
}
