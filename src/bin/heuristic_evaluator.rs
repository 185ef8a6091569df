use clap::Parser;
use npuzzle_solver::engine::State;
use npuzzle_solver::solver::{solve, SearchConfig, Strategy, DEFAULT_NODE_LIMIT};
use std::collections::HashMap;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies on scrambled puzzles", long_about = None)]
struct Args {
    /// Number of puzzles to evaluate
    #[clap(short, long, default_value_t = 20)]
    puzzles: u64,

    /// Side length of each puzzle
    #[clap(short, long, default_value_t = 3)]
    size: usize,

    /// Random moves used to scramble each puzzle
    #[clap(short, long, default_value_t = 20)]
    moves: usize,

    /// Seed of the first puzzle; later puzzles use consecutive seeds
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Give up after expanding this many nodes
    #[clap(long, default_value_t = DEFAULT_NODE_LIMIT)]
    node_limit: usize,
}

/// Seed of the `puzzle_idx`-th puzzle. Wraps past `u64::MAX` back to 0.
fn puzzle_seed(first_seed: u64, puzzle_idx: u64) -> u64 {
    first_seed.wrapping_add(puzzle_idx)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.size == 0 || args.size > 256 {
        eprintln!("Puzzle size must be between 1 and 256");
        std::process::exit(1);
    }
    let config = SearchConfig {
        node_limit: args.node_limit,
    };

    let mut expansions: HashMap<Strategy, Vec<usize>> = HashMap::new();
    let mut failures: HashMap<Strategy, usize> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} puzzles ({}x{}, {} scramble moves)...",
        args.puzzles, args.size, args.size, args.moves
    );

    for puzzle_idx in 0..args.puzzles {
        let current_seed = puzzle_seed(args.seed, puzzle_idx);
        let start = State::scrambled(args.size, args.moves, current_seed);
        info!(puzzle_idx, current_seed, "Evaluating puzzle");

        println!("\nEvaluating Puzzle {} (Seed: {})", puzzle_idx, current_seed);
        print!("{}", start);

        for strategy in Strategy::ALL {
            let outcome = solve(&start, strategy, config);
            match outcome.path_len() {
                Some(moves) => {
                    println!(
                        "  Strategy: {:<16}, Moves: {:<4}, Expanded: {:<8}, Peak frontier: {}",
                        strategy, moves, outcome.nodes_expanded, outcome.frontier_size
                    );
                    expansions
                        .entry(strategy)
                        .or_default()
                        .push(outcome.nodes_expanded);
                }
                None => {
                    warn!(%strategy, current_seed, "No solution within the node limit");
                    println!("  Strategy: {:<16}, no solution found", strategy);
                    *failures.entry(strategy).or_default() += 1;
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of puzzles evaluated: {}", args.puzzles);
    println!(
        "Strategies evaluated: {}",
        Strategy::ALL
            .into_iter()
            .map(Strategy::name)
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Average Nodes Expanded ---");

    let mut sorted_averages: Vec<(Strategy, f64)> = Vec::new();
    for strategy in Strategy::ALL {
        let failed = failures.get(&strategy).copied().unwrap_or(0);
        match expansions.get(&strategy) {
            Some(counts) if !counts.is_empty() => {
                let total: usize = counts.iter().sum();
                sorted_averages.push((strategy, total as f64 / counts.len() as f64));
            }
            _ => println!("Strategy {}: No puzzles solved.", strategy),
        }
        if failed > 0 {
            println!("Strategy {}: {} puzzle(s) hit the node limit.", strategy, failed);
        }
    }

    // Fewest expansions first
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (strategy, average) in sorted_averages {
        println!("Strategy {:<16}: Average Expanded = {:.2}", strategy, average);
    }
}
