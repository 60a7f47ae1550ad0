use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErr {
    Empty,
    JaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    MissingMarker(Cell),
    TooLarge {
        rows: usize,
        cols: usize,
    },
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::Empty => write!(f, "Board has no cells"),
            ConfigErr::JaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            ConfigErr::MissingMarker(cell) => {
                write!(f, "No cell with code '{}' on the board", cell.code())
            }
            ConfigErr::TooLarge { rows, cols } => write!(
                f,
                "Board is {}x{}, at most {} rows and columns are supported",
                rows, cols, MAX_SIDE
            ),
        }
    }
}

impl Error for ConfigErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub r: i32,
    pub c: i32,
}

impl Display for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position [{}, {}] is outside the board", self.r, self.c)
    }
}

impl Error for OutOfBounds {}

/// Positions are `i32`, keep enough headroom that knight jumps and distances can't overflow.
pub const MAX_SIDE: usize = (i32::MAX / 4) as usize;

/// The static part of the problem - walls, markers, boxes and portals.
///
/// Boxes are numbered in row-major order, the same order `find_position` returns them in.
/// Collected sets refer to boxes by that number.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Cell>,
    boxes: Vec<Pos>,
    portals: Vec<Pos>,
    box_ids: Vec2d<Option<usize>>,
}

impl Board {
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Board, ConfigErr> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(ConfigErr::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(ConfigErr::JaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        check_size(rows.len(), expected)?;

        let grid = Vec2d::new(rows);
        let boxes = find_in(&grid, Cell::Box);
        let portals = find_in(&grid, Cell::Portal);
        let mut box_ids = grid.scratchpad(None);
        for (i, &pos) in boxes.iter().enumerate() {
            box_ids[pos] = Some(i);
        }

        Ok(Board {
            grid,
            boxes,
            portals,
            box_ids,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// All cells with the given code in row-major order.
    pub fn find_position(&self, cell: Cell) -> Vec<Pos> {
        match cell {
            Cell::Box => self.boxes.clone(),
            Cell::Portal => self.portals.clone(),
            _ => find_in(&self.grid, cell),
        }
    }

    pub fn cell_at(&self, r: i32, c: i32) -> Result<Cell, OutOfBounds> {
        self.grid
            .get(Pos::new(r, c))
            .cloned()
            .ok_or(OutOfBounds { r, c })
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// Out of bounds counts as a wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == Cell::Wall)
    }

    pub fn is_portal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&Cell::Portal)
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn portals(&self) -> &[Pos] {
        &self.portals
    }

    pub(crate) fn box_id(&self, pos: Pos) -> Option<usize> {
        self.box_ids.get(pos).cloned().unwrap_or(None)
    }

    pub(crate) fn grid(&self) -> &Vec2d<Cell> {
        &self.grid
    }
}

fn check_size(rows: usize, cols: usize) -> Result<(), ConfigErr> {
    if rows > MAX_SIDE || cols > MAX_SIDE {
        Err(ConfigErr::TooLarge { rows, cols })
    } else {
        Ok(())
    }
}

fn find_in(grid: &Vec2d<Cell>, cell: Cell) -> Vec<Pos> {
    grid.positions().filter(|&pos| grid[pos] == cell).collect()
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
