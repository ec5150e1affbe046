// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: load a puzzle, search, print the board.
//!
//! ```bash
//! # Solve the built-in 10×10 puzzle
//! cargo run --release
//!
//! # Solve a puzzle file with a node budget and show each beam's path
//! cargo run --release -- puzzles/hall_of_mirrors.toml --max-nodes 1000000 --trace
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mirror_search::puzzle::{reference_puzzle, ConfigError, Puzzle};
use mirror_search::{trace_path, Board, Pruning, SearchOutcome};

#[derive(Parser, Debug)]
#[command(name = "mirrors")]
#[command(about = "Place mirrors on a grid so every laser beam meets its target product")]
struct Cli {
    /// Puzzle file (TOML); the built-in reference puzzle if omitted
    puzzle: Option<PathBuf>,

    /// Stop after this many generator nodes
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Stop after this many seconds
    #[arg(long, value_name = "SECS")]
    time_limit: Option<u64>,

    /// Only prune step lengths whose partial product exceeds the target
    #[arg(long)]
    no_divisor_pruning: bool,

    /// Print each beam's segments after solving
    #[arg(long)]
    trace: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mirror_search={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_puzzle(cli: &Cli) -> Result<Puzzle, ConfigError> {
    let puzzle = match &cli.puzzle {
        Some(path) => Puzzle::load(path)?,
        None => reference_puzzle(),
    };
    let mut search = *puzzle.search();
    if let Some(max_nodes) = cli.max_nodes {
        search.max_nodes = Some(max_nodes);
    }
    if let Some(secs) = cli.time_limit {
        search.time_limit_secs = Some(secs);
    }
    if cli.no_divisor_pruning {
        search.pruning = Pruning::Bound;
    }
    Ok(puzzle.with_search(search))
}

fn print_traces(puzzle: &Puzzle, board: &Board) {
    for (index, beam) in puzzle.beams().iter().enumerate() {
        let path = trace_path(board, puzzle.bounds(), beam.start(), beam.direction());
        let lengths: Vec<String> = path
            .segments
            .iter()
            .map(|segment| format!("{}{}", segment.length, segment.direction.arrow()))
            .collect();
        println!(
            "beam {index:2} from {} {}: {} = {} (target {})",
            beam.start(),
            beam.direction(),
            lengths.join(" "),
            path.product(),
            beam.target()
        );
    }
}

fn run(cli: &Cli) -> Result<ExitCode, ConfigError> {
    let puzzle = load_puzzle(cli)?;
    println!(
        "{}: {}x{} grid, {} beams",
        puzzle.name(),
        puzzle.bounds().columns(),
        puzzle.bounds().rows(),
        puzzle.beams().len()
    );

    let result = puzzle.engine().solve();
    let code = match &result.outcome {
        SearchOutcome::Solved(board) => {
            println!("Global solution found:");
            print!("{}", board.render(puzzle.bounds()));
            if cli.trace {
                println!();
                print_traces(&puzzle, board);
            }
            ExitCode::SUCCESS
        }
        SearchOutcome::NoSolution => {
            println!("No solution exists.");
            ExitCode::from(2)
        }
        SearchOutcome::BudgetExhausted => {
            println!("Search budget exhausted before a solution was found.");
            ExitCode::from(3)
        }
    };
    println!(
        "Elapsed {:.3}s; {}",
        result.elapsed.as_secs_f64(),
        result.statistics
    );
    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
