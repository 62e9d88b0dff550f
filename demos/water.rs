use clap::Parser;
use wavefront::puzzles::water::WaterConfig;
use wavefront::solver::engine::Solver;
use wavefront::solver::stats::render_stats_table;

/// Solve the water-jug puzzle: measure out an exact amount using buckets
/// that can only be dumped, filled, or poured into each other.
#[derive(Parser)]
struct Args {
    /// Amount of water to measure out.
    amount: u32,
    /// Capacity of each bucket.
    #[arg(required = true)]
    buckets: Vec<u32>,
    /// Print the search counters as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    println!("Amount: {}, Buckets: {:?}", args.amount, args.buckets);

    let (path, stats) = Solver::new().solve(WaterConfig::new(args.amount, args.buckets));

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
