use std::str::FromStr;

use crate::board::{Board, ConfigErr};
use crate::data::Cell;

impl FromStr for Board {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One line per row, one char per cell.
///
/// Unknown chars are free cells so any filler works, `.` is what we print.
pub(crate) fn parse(board: &str) -> Result<Board, ConfigErr> {
    // trim so we can specify boards using raw strings more easily
    let board = board.trim_matches(|c: char| c == '\n' || c == '\r');

    let rows: Vec<Vec<Cell>> = board
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().map(Cell::from_code).collect())
        .collect();
    Board::new(rows)
}
