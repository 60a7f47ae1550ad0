use std::fmt::{self, Debug, Formatter};
use std::ops::Index;
use std::rc::Rc;

use log::{debug, trace};

use crate::agent::Agent;
use crate::board::{Board, ConfigErr};
use crate::data::{Cell, Pos};
use crate::movement::Movement;

/// Set of collected boxes, one bit per box on the board.
///
/// Children share the parent's bits until they pick up a new box.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collected {
    bits: Rc<[u64]>,
    len: usize,
}

impl Collected {
    pub(crate) fn empty(box_cnt: usize) -> Self {
        let words = (box_cnt + 63) / 64;
        Collected {
            bits: vec![0; words].into(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `box_id` is the index into `Board::boxes`.
    pub fn contains(&self, box_id: usize) -> bool {
        self.bits
            .get(box_id / 64)
            .map_or(false, |word| word & (1u64 << (box_id % 64)) != 0)
    }

    pub fn contains_pos(&self, board: &Board, pos: Pos) -> bool {
        board.box_id(pos).map_or(false, |id| self.contains(id))
    }

    pub(crate) fn with(&self, box_id: usize) -> Self {
        if self.contains(box_id) {
            return self.clone();
        }
        let mut bits = self.bits.to_vec();
        bits[box_id / 64] |= 1u64 << (box_id % 64);
        Collected {
            bits: bits.into(),
            len: self.len + 1,
        }
    }

    pub fn ids<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
        (0..self.bits.len() * 64).filter(move |&id| self.contains(id))
    }

    pub fn positions(&self, board: &Board) -> Vec<Pos> {
        self.ids().map(|id| board.boxes()[id]).collect()
    }
}

impl Debug for Collected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ids()).finish()
    }
}

/// Identifies states which are interchangeable for the search
/// no matter how they were reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pos: Pos,
    collected: Collected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pos: Pos,
    goal: Pos,
    parent: Option<StateId>,
    depth: u32,
    collected: Collected,
}

impl State {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// The root has depth 1.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn collected(&self) -> &Collected {
        &self.collected
    }

    pub fn key(&self) -> StateKey {
        StateKey {
            pos: self.pos,
            collected: self.collected.clone(),
        }
    }
}

/// All states created during one search.
///
/// States are never removed or modified so a `StateId` stays valid
/// for as long as the space lives and parent chains can always be walked back to the root.
pub struct StateSpace<'b, A> {
    board: &'b Board,
    agent: A,
    exit: Pos,
    states: Vec<State>,
}

impl<'b, A: Agent> StateSpace<'b, A> {
    /// Creates the space with just the root state.
    ///
    /// The first agent and goal marker in row-major order are used.
    pub fn new(board: &'b Board, agent: A) -> Result<Self, ConfigErr> {
        let pos = first_marker(board, agent.agent_cell())?;
        let exit = first_marker(board, agent.goal_cell())?;

        let mut collected = Collected::empty(board.boxes().len());
        if let Some(id) = board.box_id(pos) {
            collected = collected.with(id);
        }
        let goal = agent.goal(board, pos, &collected, exit);
        debug!("Root at {}, exit at {}, first goal {}", pos, exit, goal);

        let root = State {
            pos,
            goal,
            parent: None,
            depth: 1,
            collected,
        };
        Ok(StateSpace {
            board,
            agent,
            exit,
            states: vec![root],
        })
    }

    pub fn root(&self) -> StateId {
        StateId(0)
    }

    pub fn board(&self) -> &'b Board {
        self.board
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Number of states created so far, at least 1 for the root.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Creates one child for every legal position from the given state.
    pub fn next_states(&mut self, id: StateId, movement: Movement) -> Vec<StateId> {
        let pos = self.states[id.0].pos;
        let positions = self.agent.legal_positions(self.board, pos, movement);

        let mut children = Vec::with_capacity(positions.len());
        for new_pos in positions {
            let child = self.child(id, new_pos);
            children.push(StateId(self.states.len()));
            self.states.push(child);
        }
        trace!("Expanded {} at {} into {} states", id.0, pos, children.len());
        children
    }

    fn child(&self, parent_id: StateId, pos: Pos) -> State {
        let parent = &self.states[parent_id.0];
        let collected = match self.board.box_id(pos) {
            Some(box_id) => parent.collected.with(box_id),
            None => parent.collected.clone(),
        };
        let goal = self.agent.goal(self.board, pos, &collected, self.exit);
        State {
            pos,
            goal,
            parent: Some(parent_id),
            depth: parent.depth + 1,
            collected,
        }
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.agent.is_final(self.board, &self.states[id.0])
    }

    pub fn unique_hash(&self, id: StateId) -> StateKey {
        self.agent.unique_hash(&self.states[id.0])
    }

    pub fn heuristic_cost(&self, id: StateId) -> f64 {
        self.agent.heuristic_cost(self.board, &self.states[id.0])
    }

    pub fn path_cost(&self, id: StateId) -> f64 {
        self.agent.path_cost(&self.states[id.0])
    }

    /// Ids from the root to the given state, both included.
    pub fn path(&self, id: StateId) -> Vec<StateId> {
        let mut path = vec![id];
        let mut cur = id;
        while let Some(parent) = self.states[cur.0].parent {
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }
}

impl<A> Index<StateId> for StateSpace<'_, A> {
    type Output = State;

    fn index(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}

impl<A> Debug for StateSpace<'_, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSpace")
            .field("exit", &self.exit)
            .field("states", &self.states.len())
            .finish()
    }
}

fn first_marker(board: &Board, cell: Cell) -> Result<Pos, ConfigErr> {
    board
        .find_position(cell)
        .first()
        .cloned()
        .ok_or(ConfigErr::MissingMarker(cell))
}
