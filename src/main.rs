use std::io::{self, Write};

use clap::{Parser, Subcommand};
use flotilla::{init_logging, Board, Cell, BOARD_SIZE, DEMO_LAYOUT};

#[derive(Parser)]
#[command(author, version, about = "Solo Battleship firing range", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fire at the demo fleet until every vessel is sunk.
    Play,
    /// Print the demo fleet layout and exit.
    Show,
}

fn coord_to_string(cell: Cell) -> String {
    let column = (b'A' + cell.1 as u8) as char;
    format!("{}{}", column, cell.0 + 1)
}

/// Parse a target like `A5`: letter column, 1-based row.
fn parse_coord(input: &str) -> Option<Cell> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let column = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || column >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, column))
}

fn play() -> anyhow::Result<()> {
    let mut board = Board::new(&DEMO_LAYOUT)?;
    let mut shots = 0usize;
    println!("Enter a target (e.g. A5), or q to quit.");
    board.display();
    loop {
        print!("Target: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        let Some(cell) = parse_coord(line) else {
            println!("Invalid target");
            continue;
        };
        shots += 1;
        let report = board.fire(cell);
        println!("{} -> {}", coord_to_string(cell), report);
        board.display();
        if board.all_sunk() {
            println!("Fleet destroyed in {} shots.", shots);
            break;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => play()?,
        Commands::Show => {
            let board = Board::new(&DEMO_LAYOUT)?;
            board.display();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{coord_to_string, parse_coord};

    #[test]
    fn parse_coord_accepts_valid_targets() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("a1"), Some((0, 0)));
        assert_eq!(parse_coord("J10"), Some((9, 9)));
        assert_eq!(parse_coord("C7"), Some((6, 2)));
    }

    #[test]
    fn parse_coord_rejects_out_of_range_targets() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("A11"), None);
        assert_eq!(parse_coord("K5"), None);
        assert_eq!(parse_coord("5A"), None);
    }

    #[test]
    fn coord_round_trips_through_display_form() {
        for cell in [(0, 0), (9, 9), (4, 7)] {
            assert_eq!(parse_coord(&coord_to_string(cell)), Some(cell));
        }
    }
}
