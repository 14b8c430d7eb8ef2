//! Terminal front end for the carvoku Sudoku engine.
//!
//! Thin presentation glue: renders the board, reads prompt commands, and
//! dispatches them into the game session. All puzzle logic lives in the
//! engine crates.

mod command;
mod render;

use std::io::{self, BufRead, Lines, StdinLock, Write as _};

use carvoku_core::Position;
use carvoku_game::Game;
use carvoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
use clap::Parser;

use crate::command::Command;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to carve at (easy, medium, hard).
    #[arg(long, value_name = "LEVEL", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Replay the puzzle for this seed instead of drawing a fresh one.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn new_game(difficulty: Difficulty, seed: Option<PuzzleSeed>) -> Game {
    let generator = PuzzleGenerator::new(difficulty);
    let puzzle = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    log::info!(
        "new {} puzzle with {} clues (seed {})",
        puzzle.difficulty,
        puzzle.clue_count(),
        puzzle.seed
    );
    Game::new(puzzle)
}

fn prompt(lines: &mut Lines<StdinLock<'_>>, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = new_game(args.difficulty, args.seed);

    println!("Welcome to carvoku!");
    loop {
        println!("\n{}", render::board(&game.working_grid()));

        if game.is_solved() {
            println!("Congratulations, you solved it!");
            let Some(answer) = prompt(&mut lines, "Play again? (y/n): ")? else {
                break;
            };
            if answer.trim().eq_ignore_ascii_case("y") {
                game = new_game(args.difficulty, None);
                continue;
            }
            break;
        }

        let Some(line) = prompt(
            &mut lines,
            "Enter `row col value`, `clear row col`, `hint`, `solve`, `new`, `restart`, or `quit`: ",
        )?
        else {
            break;
        };

        let cmd = match command::parse(&line) {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match cmd {
            Command::Move { pos, digit } => {
                if let Err(err) = game.set_digit(pos, digit) {
                    println!("Rejected: {err}.");
                }
            }
            Command::Clear { pos } => {
                if let Err(err) = game.clear_cell(pos) {
                    println!("Rejected: {err}.");
                }
            }
            Command::Hint => match game.hint(&mut rand::rng()) {
                Some((pos, digit)) => {
                    println!(
                        "Hint: placed {digit} at row {}, col {}.",
                        pos.y() + 1,
                        pos.x() + 1
                    );
                }
                None => println!("No empty cells left."),
            },
            Command::Solve => match game.solve_working() {
                Some(solved) => {
                    log::debug!("completed from the current entries");
                    game.reset();
                    for pos in Position::ALL {
                        if let Some(digit) = solved[pos]
                            && !game.is_given(pos)
                        {
                            game.set_digit(pos, digit).expect("completion is legal");
                        }
                    }
                }
                None => {
                    println!("Your current entries admit no completion; showing the stored solution.");
                    game.apply_solution();
                }
            },
            Command::New => game = new_game(args.difficulty, None),
            Command::Restart => {
                game.reset();
                println!("Board restored to the original puzzle.");
            }
            Command::Quit => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}
