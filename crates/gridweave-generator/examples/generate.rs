//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` at a difficulty preset or an explicit
//!   removal count
//! - Generate a random puzzle, or reproduce one from its seed
//! - Display the puzzle, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```
//!
//! Pick a difficulty preset (easy/medium/hard):
//!
//! ```sh
//! cargo run --example generate -- --difficulty hard
//! ```
//!
//! Remove an explicit number of cells instead:
//!
//! ```sh
//! cargo run --example generate -- --removed 64
//! ```
//!
//! Reproduce a puzzle from a 64-hex-character seed:
//!
//! ```sh
//! cargo run --example generate -- --seed <SEED>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use gridweave_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset controlling how many cells are removed.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Explicit number of cells to remove (0-81); overrides --difficulty.
    #[arg(long, value_name = "COUNT")]
    removed: Option<u8>,

    /// Seed (64 hex characters) to reproduce a specific puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = match args.removed {
        Some(count) => match PuzzleGenerator::new(count) {
            Ok(generator) => generator,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        None => PuzzleGenerator::for_difficulty(args.difficulty.into()),
    };

    let result = match args.seed.as_deref() {
        Some(seed) => match seed.parse::<PuzzleSeed>() {
            Ok(seed) => generator.generate_with_seed(seed),
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        None => generator.generate(),
    };

    match result {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Puzzle:");
    println!("  {}", puzzle.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
