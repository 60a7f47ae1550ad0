use crate::board::Board;
use crate::config::{AgentKind, Config, Metric};
use crate::data::{Cell, Pos};
use crate::movement::Movement;
use crate::state::{Collected, State, StateKey};

/// Everything that differs between kinds of agents searching the board.
///
/// The provided methods are shared by both kinds, only the goal policy and the heuristic differ.
pub trait Agent {
    fn agent_cell(&self) -> Cell {
        Cell::Start
    }

    fn goal_cell(&self) -> Cell {
        Cell::Exit
    }

    fn legal_positions(&self, board: &Board, pos: Pos, movement: Movement) -> Vec<Pos> {
        movement.legal_positions(board, pos)
    }

    /// Where a state at `pos` with `collected` boxes is heading.
    fn goal(&self, board: &Board, pos: Pos, collected: &Collected, exit: Pos) -> Pos;

    /// All boxes collected and standing on the goal.
    fn is_final(&self, board: &Board, state: &State) -> bool {
        state.collected().len() == board.boxes().len() && state.pos() == state.goal()
    }

    fn heuristic_cost(&self, board: &Board, state: &State) -> f64;

    /// One per move.
    fn path_cost(&self, state: &State) -> f64 {
        f64::from(state.depth())
    }

    fn unique_hash(&self, state: &State) -> StateKey {
        state.key()
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn agent_cell(&self) -> Cell {
        (**self).agent_cell()
    }

    fn goal_cell(&self) -> Cell {
        (**self).goal_cell()
    }

    fn legal_positions(&self, board: &Board, pos: Pos, movement: Movement) -> Vec<Pos> {
        (**self).legal_positions(board, pos, movement)
    }

    fn goal(&self, board: &Board, pos: Pos, collected: &Collected, exit: Pos) -> Pos {
        (**self).goal(board, pos, collected, exit)
    }

    fn is_final(&self, board: &Board, state: &State) -> bool {
        (**self).is_final(board, state)
    }

    fn heuristic_cost(&self, board: &Board, state: &State) -> f64 {
        (**self).heuristic_cost(board, state)
    }

    fn path_cost(&self, state: &State) -> f64 {
        (**self).path_cost(state)
    }

    fn unique_hash(&self, state: &State) -> StateKey {
        (**self).unique_hash(state)
    }
}

pub fn from_config(config: &Config) -> Box<dyn Agent> {
    match config.agent {
        AgentKind::Exit => Box::new(ExitAgent::new(config.metric)),
        AgentKind::Collector => Box::new(CollectorAgent::new(config.metric, config.box_penalty)),
    }
}

/// Picks up boxes on the way but only ever heads for the exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitAgent {
    metric: Metric,
}

impl ExitAgent {
    pub fn new(metric: Metric) -> Self {
        ExitAgent { metric }
    }
}

impl Agent for ExitAgent {
    fn goal(&self, _board: &Board, _pos: Pos, _collected: &Collected, exit: Pos) -> Pos {
        exit
    }

    fn heuristic_cost(&self, _board: &Board, state: &State) -> f64 {
        self.metric.distance(state.pos(), state.goal())
    }
}

/// Heads for the nearest uncollected box and only goes for the exit once it has all of them.
#[derive(Debug, Clone, Copy)]
pub struct CollectorAgent {
    metric: Metric,
    box_penalty: bool,
}

impl CollectorAgent {
    /// With `box_penalty`, every remaining box adds rows + cols to the heuristic
    /// so states closer to finishing the collection are preferred.
    /// The heuristic is then no longer admissible.
    pub fn new(metric: Metric, box_penalty: bool) -> Self {
        CollectorAgent {
            metric,
            box_penalty,
        }
    }
}

impl Default for CollectorAgent {
    fn default() -> Self {
        CollectorAgent::new(Metric::Euclidean, true)
    }
}

impl Agent for CollectorAgent {
    fn goal(&self, board: &Board, pos: Pos, collected: &Collected, exit: Pos) -> Pos {
        // strictly less - ties go to the first box in row-major order
        let mut nearest = None;
        for (id, &box_pos) in board.boxes().iter().enumerate() {
            if collected.contains(id) {
                continue;
            }
            let dist = pos.manhattan(box_pos);
            match nearest {
                Some((min, _)) if min <= dist => {}
                _ => nearest = Some((dist, box_pos)),
            }
        }
        nearest.map_or(exit, |(_, box_pos)| box_pos)
    }

    fn heuristic_cost(&self, board: &Board, state: &State) -> f64 {
        let dist = self.metric.distance(state.pos(), state.goal());
        if self.box_penalty {
            let remaining = board.boxes().len() - state.collected().len();
            let perimeter = board.rows() + board.cols();
            dist + (remaining * perimeter) as f64
        } else {
            dist
        }
    }
}
