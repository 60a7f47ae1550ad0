use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::{Dir, Pos};

const UP: Dir = Dir::new(-1, 0);
const RIGHT: Dir = Dir::new(0, 1);
const DOWN: Dir = Dir::new(1, 0);
const LEFT: Dir = Dir::new(0, -1);
const UP_LEFT: Dir = Dir::new(-1, -1);
const UP_RIGHT: Dir = Dir::new(-1, 1);
const DOWN_LEFT: Dir = Dir::new(1, -1);
const DOWN_RIGHT: Dir = Dir::new(1, 1);

const KING_STEPS: [Dir; 8] = [RIGHT, LEFT, DOWN, UP, UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

const KNIGHT_STEPS: [Dir; 8] = [
    Dir::new(2, 1),
    Dir::new(2, -1),
    Dir::new(-2, 1),
    Dir::new(-2, -1),
    Dir::new(1, 2),
    Dir::new(-1, 2),
    Dir::new(1, -2),
    Dir::new(-1, -2),
];

const ROOK_RAYS: [Dir; 4] = [DOWN, UP, RIGHT, LEFT];

const QUEEN_RAYS: [Dir; 8] = [DOWN, UP, RIGHT, LEFT, DOWN_RIGHT, DOWN_LEFT, UP_LEFT, UP_RIGHT];

/// How the agent moves, fixed for the whole search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// One step in any of the 8 directions.
    Default,
    Knight,
    /// Slides any distance in the 8 directions until a wall or the edge.
    Queen,
    /// Slides any distance orthogonally until a wall or the edge.
    Rook,
}

impl Movement {
    pub const ALL: [Movement; 4] = [
        Movement::Default,
        Movement::Knight,
        Movement::Queen,
        Movement::Rook,
    ];

    /// Candidate positions reachable from `pos` in one move.
    ///
    /// When standing on a portal, all the other portals come first.
    /// Every returned position is inside the board and not a wall.
    pub fn legal_positions(self, board: &Board, pos: Pos) -> Vec<Pos> {
        let mut positions = Vec::new();

        if board.is_portal(pos) {
            positions.extend(board.portals().iter().filter(|&&portal| portal != pos));
        }

        match self {
            Movement::Default => steps(board, pos, &KING_STEPS, &mut positions),
            Movement::Knight => steps(board, pos, &KNIGHT_STEPS, &mut positions),
            Movement::Queen => slides(board, pos, &QUEEN_RAYS, &mut positions),
            Movement::Rook => slides(board, pos, &ROOK_RAYS, &mut positions),
        }

        positions
    }
}

fn steps(board: &Board, pos: Pos, dirs: &[Dir], positions: &mut Vec<Pos>) {
    for &dir in dirs {
        let new_pos = pos + dir;
        if !board.is_wall(new_pos) {
            positions.push(new_pos);
        }
    }
}

fn slides(board: &Board, pos: Pos, dirs: &[Dir], positions: &mut Vec<Pos>) {
    for &dir in dirs {
        let mut new_pos = pos + dir;
        // is_wall is true past the edge too
        while !board.is_wall(new_pos) {
            positions.push(new_pos);
            new_pos = new_pos + dir;
        }
    }
}

impl Display for Movement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Movement::Default => write!(f, "default"),
            Movement::Knight => write!(f, "knight"),
            Movement::Queen => write!(f, "queen"),
            Movement::Rook => write!(f, "rook"),
        }
    }
}

impl FromStr for Movement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Movement::Default),
            "knight" => Ok(Movement::Knight),
            "queen" => Ok(Movement::Queen),
            "rook" => Ok(Movement::Rook),
            _ => Err(format!("Unknown movement: {}", s)),
        }
    }
}
