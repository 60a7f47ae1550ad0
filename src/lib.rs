// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod agent;
pub mod board;
pub mod config;
pub mod data;
pub mod movement;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod parser;
mod vec2d;

use std::error::Error;
use std::fs;

use crate::board::{Board, ConfigErr};
use crate::config::Config;
use crate::solver::SolverOk;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

impl LoadBoard for str {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, config: &Config, print_status: bool) -> Result<SolverOk, ConfigErr>;
}

#[cfg(test)]
mod tests {
    use crate::config::{AgentKind, Method};
    use crate::movement::Movement;

    use super::*;

    #[test]
    fn test_boards() {
        let boards = [
            (Movement::Default, "simple.txt", Some(5)),
            (Movement::Rook, "simple.txt", Some(3)),
            (Movement::Queen, "simple.txt", Some(3)),
            (Movement::Default, "portals.txt", Some(7)),
            (Movement::Rook, "portals.txt", Some(4)),
            (Movement::Queen, "portals.txt", Some(4)),
            (Movement::Default, "closed.txt", None),
            (Movement::Queen, "closed.txt", None),
        ];

        for &(movement, name, expected) in boards.iter() {
            for &agent in &[AgentKind::Exit, AgentKind::Collector] {
                test_board(movement, agent, name, expected);
            }
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn test_board(movement: Movement, agent: AgentKind, name: &str, expected: Option<usize>) {
        let path = format!("boards/{}", name);
        let board = path.load_board().unwrap();
        let config = Config {
            movement,
            method: Method::BreadthFirst,
            agent,
            ..Config::default()
        };

        println!("Solving {} using {} and {}", path, movement, agent);
        let solution = board.solve(&config, false).unwrap();
        println!("{:?}", solution);
        assert_eq!(solution.move_cnt(), expected, "{} {} {}", name, movement, agent);
    }

    #[test]
    fn missing_file() {
        assert!("boards/does-not-exist.txt".load_board().is_err());
    }

    #[test]
    fn loading_board_files() {
        let board = "boards/simple.txt".load_board().unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.to_string(), "r....\n.ww..\n..b.g\n");

        let err = "boards/jagged.txt".load_board().unwrap_err();
        assert!(err.to_string().starts_with("Row 1 has 1 cells, expected 3"));
    }
}
