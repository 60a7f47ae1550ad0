use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::{Cell, Pos};

/// Draws the board once for every position on a path.
///
/// The agent is drawn as `r`, the start marker is drawn as free
/// and so are boxes once the agent has been on them.
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    path: &'a [Pos],
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(board: &'a Board, path: &'a [Pos]) -> Self {
        Self { board, path }
    }

    fn write_step(&self, step: usize, f: &mut Formatter<'_>) -> fmt::Result {
        let agent = self.path[step];
        let visited = &self.path[..=step];
        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                let pos = Pos::new(r as i32, c as i32);
                let cell = self.board.grid()[pos];
                let shown = if pos == agent {
                    Cell::Start
                } else {
                    match cell {
                        Cell::Start => Cell::Free,
                        Cell::Box if visited.contains(&pos) => Cell::Free,
                        _ => cell,
                    }
                };
                write!(f, "{}", shown)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for step in 0..self.path.len() {
            self.write_step(step, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_path() {
        let board: Board = "rb.\npwg".parse().unwrap();
        let path = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 2)];
        let expected = r"
rb.
pwg

.r.
pwg

..r
pwg

...
pwr

";
        assert_eq!(
            SolutionFormatter::new(&board, &path).to_string(),
            expected.trim_start_matches('\n')
        );
    }

    #[test]
    fn empty_path() {
        let board: Board = "rg".parse().unwrap();
        assert_eq!(SolutionFormatter::new(&board, &[]).to_string(), "");
    }
}
