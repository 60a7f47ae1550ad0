use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Add;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Free,
    Start,
    Exit,
    Box,
    Portal,
}

impl Cell {
    /// Anything that isn't one of the known codes is a free cell.
    pub fn from_code(code: char) -> Cell {
        match code {
            'w' => Cell::Wall,
            'b' => Cell::Box,
            'g' => Cell::Exit,
            'r' => Cell::Start,
            'p' => Cell::Portal,
            _ => Cell::Free,
        }
    }

    pub fn code(self) -> char {
        match self {
            Cell::Wall => 'w',
            Cell::Free => '.',
            Cell::Start => 'r',
            Cell::Exit => 'g',
            Cell::Box => 'b',
            Cell::Portal => 'p',
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    pub fn manhattan(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }

    pub fn euclidean(self, other: Pos) -> f64 {
        let dr = f64::from(self.r - other.r);
        let dc = f64::from(self.c - other.c);
        (dr * dr + dc * dc).sqrt()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

// the derived version is too noisy in assert messages
impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dir {
    pub r: i32,
    pub c: i32,
}

impl Dir {
    pub(crate) const fn new(r: i32, c: i32) -> Dir {
        Dir { r, c }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            r: self.r + dir.r,
            c: self.c + dir.c,
        }
    }
}
