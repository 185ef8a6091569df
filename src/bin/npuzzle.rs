use clap::error::ErrorKind;
use clap::Parser;
use npuzzle_solver::solver::{solve, SearchConfig, SearchOutcome, Strategy, DEFAULT_NODE_LIMIT};
use npuzzle_solver::utils::read_puzzle_file;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm: bfs, astar_manhattan or astar_misplaced
    algorithm: Strategy,

    /// Path to the puzzle file (one row per line, blank written as '.')
    puzzle_file: PathBuf,

    /// Give up after expanding this many nodes
    #[clap(long, default_value_t = DEFAULT_NODE_LIMIT)]
    node_limit: usize,
}

fn print_metrics(outcome: &SearchOutcome) {
    println!("Num nodes added to frontier queue: {}\n", outcome.nodes_in_frontier);
    println!("Num nodes selected for expansion: {}\n", outcome.nodes_expanded);
    println!("Max size of queue at any given time: {}\n", outcome.frontier_size);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            // Usage errors (wrong argument count, unknown algorithm) exit with 1.
            let _ = e.print();
            process::exit(1);
        }
    };

    let start = match read_puzzle_file(&args.puzzle_file) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let config = SearchConfig {
        node_limit: args.node_limit,
    };
    let outcome = solve(&start, args.algorithm, config);

    match &outcome.path {
        Some(path) => {
            println!("{}", start);
            for step in path {
                println!("{}", step);
            }
            println!("-------- Efficiency Metrics --------\n");
        }
        None => {
            println!("-------- Efficiency Metrics --------\n");
            if outcome.nodes_expanded == config.node_limit {
                println!("No solution found ({} node limit reached)\n", config.node_limit);
            } else {
                println!("No solution found (every reachable state was explored)\n");
            }
        }
    }
    print_metrics(&outcome);
}
