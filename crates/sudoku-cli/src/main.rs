//! Interactive Sudoku shell.
//!
//! Thin front end over `sudoku-engine`: generates a puzzle, renders it, and
//! validates each submitted move before committing it. All input parsing and
//! range checking happens here; the engine only ever sees in-range moves.

use clap::Parser;
use std::io::{self, BufRead, Write};
use sudoku_engine::{Generator, Grid, Position, Solver};

/// Play a randomly generated Sudoku puzzle in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the puzzle generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play a specific puzzle given as 81 characters, `.` or `0` for empty
    #[arg(long, value_name = "CELLS", conflicts_with = "seed")]
    puzzle: Option<String>,

    /// Print the puzzle and its solution instead of playing
    #[arg(long)]
    solve: bool,
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum MoveInput {
    /// Place a value: 0-indexed position, value 1..=9.
    Place(Position, u8),
    Quit,
}

/// Parse a move line: three whitespace-separated integers (1-indexed row,
/// 1-indexed column, value, all 1..=9), or `q` to quit. Returns `None` for
/// anything malformed or out of range.
fn parse_move(line: &str) -> Option<MoveInput> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(MoveInput::Quit);
    }

    let mut numbers = [0u8; 3];
    let mut tokens = line.split_whitespace();
    for slot in &mut numbers {
        let n: u8 = tokens.next()?.parse().ok()?;
        if !(1..=9).contains(&n) {
            return None;
        }
        *slot = n;
    }
    if tokens.next().is_some() {
        return None;
    }

    let [row, col, value] = numbers;
    Some(MoveInput::Place(
        Position::new(row as usize - 1, col as usize - 1),
        value,
    ))
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let grid = match &cli.puzzle {
        Some(s) => match Grid::from_string(s) {
            Some(grid) => grid,
            None => {
                eprintln!("Error: --puzzle must be 81 characters of 0-9 or '.'");
                std::process::exit(1);
            }
        },
        None => match cli.seed {
            Some(seed) => Generator::with_seed(seed).generate(),
            None => Generator::new().generate(),
        },
    };

    if cli.solve {
        return print_solution(&grid);
    }

    play(grid)
}

/// Print the puzzle and its computed solution.
fn print_solution(grid: &Grid) -> io::Result<()> {
    println!("Puzzle:");
    println!("{}", grid);
    match Solver::new().solve(grid) {
        Some(solution) => {
            println!("Solution:");
            println!("{}", solution);
            Ok(())
        }
        None => {
            eprintln!("Error: the puzzle has no solution");
            std::process::exit(1);
        }
    }
}

/// The interactive move loop.
fn play(mut grid: Grid) -> io::Result<()> {
    println!("Welcome to Sudoku!");
    println!("Enter row, column, and number (e.g., '3 4 5') or 'q' to quit.");

    let stdin = io::stdin();
    loop {
        println!("{}", grid);
        print!("Enter your move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like quitting.
            println!();
            break;
        }

        match parse_move(&line) {
            Some(MoveInput::Quit) => {
                println!("Thanks for playing!");
                break;
            }
            Some(MoveInput::Place(pos, value)) => {
                if grid.is_valid_move(pos, value) {
                    grid.set(pos, value);
                    if grid.is_solved() {
                        println!("{}", grid);
                        println!("Congratulations, you solved it!");
                        break;
                    }
                } else {
                    println!("Invalid move. Try again.");
                }
            }
            None => println!("Invalid input. Please enter row, column, and number."),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        assert_eq!(
            parse_move("3 4 5"),
            Some(MoveInput::Place(Position::new(2, 3), 5))
        );
        assert_eq!(
            parse_move("  9 1 9 \n"),
            Some(MoveInput::Place(Position::new(8, 0), 9))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_move("q"), Some(MoveInput::Quit));
        assert_eq!(parse_move("Q\n"), Some(MoveInput::Quit));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_move("").is_none());
        assert!(parse_move("3 4").is_none());
        assert!(parse_move("3 4 5 6").is_none());
        assert!(parse_move("a b c").is_none());
        assert!(parse_move("quit").is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range_input() {
        assert!(parse_move("0 4 5").is_none());
        assert!(parse_move("10 4 5").is_none());
        assert!(parse_move("3 0 5").is_none());
        assert!(parse_move("3 4 0").is_none());
        assert!(parse_move("3 4 10").is_none());
        assert!(parse_move("-1 4 5").is_none());
    }
}
