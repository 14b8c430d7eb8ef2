//! Example demonstrating puzzle generation.
//!
//! Generates one puzzle and prints the seed, the carved problem, and the
//! solution as 81-character grid strings.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Replay a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use carvoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to carve at (easy, medium, hard).
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Reproduce the puzzle for this seed instead of drawing a fresh one.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty);
    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty: {} ({} clues)", puzzle.difficulty, puzzle.clue_count());
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
