mod frontier;
mod stats;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};

use crate::agent::{self, Agent};
use crate::board::{Board, ConfigErr};
use crate::config::{Config, Method};
use crate::data::Pos;
use crate::movement::Movement;
use crate::state::{StateId, StateSpace};
use crate::Solve;

use self::frontier::Frontier;

pub use self::stats::Stats;

pub struct SolverOk {
    /// Positions from the start to the exit, both included.
    pub path: Option<Vec<Pos>>,
    pub stats: Stats,
    pub(crate) method: Method,
}

impl SolverOk {
    fn new(path: Option<Vec<Pos>>, stats: Stats, method: Method) -> Self {
        Self {
            path,
            stats,
            method,
        }
    }

    /// Number of moves, teleports included.
    pub fn move_cnt(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.move_cnt() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "{}: {}", self.method, moves)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, config: &Config, print_status: bool) -> Result<SolverOk, ConfigErr> {
        let mut space = StateSpace::new(self, agent::from_config(config))?;
        Ok(search(&mut space, config.movement, config.method, print_status))
    }
}

/// Explores the space from its root until a final state is visited.
///
/// States with a key that was already visited are skipped when popped,
/// the goal is tested when a state is visited, not when it's created.
pub fn search<A: Agent>(
    space: &mut StateSpace<'_, A>,
    movement: Movement,
    method: Method,
    print_status: bool,
) -> SolverOk {
    debug!("Search called: {}, {}", method, movement);

    let mut stats = Stats::new();
    let mut frontier = Frontier::new(method);
    let mut visited = FnvHashSet::default();

    let root = space.root();
    stats.add_created(moves(space, root));
    frontier.push(root, priority(space, root, method));

    while let Some(cur) = frontier.pop() {
        let key = space.unique_hash(cur);
        if visited.contains(&key) {
            stats.add_reached_duplicate(moves(space, cur));
            continue;
        }
        if stats.add_unique_visited(moves(space, cur)) && print_status {
            println!("Visited new depth: {}", moves(space, cur));
            println!("{:?}", stats);
        }
        visited.insert(key);

        if space.is_final(cur) {
            debug!("Solved, backtracking path");
            info!(
                "Solution with {} moves, {} states in the space, {} left in the frontier",
                moves(space, cur),
                space.len(),
                frontier.len()
            );
            let path = space.path(cur).into_iter().map(|id| space[id].pos()).collect();
            return SolverOk::new(Some(path), stats, method);
        }

        for next in space.next_states(cur, movement) {
            stats.add_created(moves(space, next));
            frontier.push(next, priority(space, next, method));
        }
    }

    info!("No solution, {} states in the space", space.len());
    SolverOk::new(None, stats, method)
}

fn moves<A: Agent>(space: &StateSpace<'_, A>, id: StateId) -> usize {
    space[id].depth() as usize - 1
}

fn priority<A: Agent>(space: &StateSpace<'_, A>, id: StateId, method: Method) -> f64 {
    match method {
        Method::BreadthFirst | Method::DepthFirst => 0.0,
        Method::UniformCost => space.path_cost(id),
        Method::Greedy => space.heuristic_cost(id),
        Method::AStar => space.path_cost(id) + space.heuristic_cost(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{CollectorAgent, ExitAgent};
    use crate::config::AgentKind;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn solve(board: &Board, agent: AgentKind, movement: Movement, method: Method) -> SolverOk {
        let config = Config {
            movement,
            method,
            agent,
            ..Config::default()
        };
        board.solve(&config, false).unwrap()
    }

    fn assert_valid(board: &Board, movement: Movement, path: &[Pos]) {
        assert_eq!(path[0], board.find_position(crate::data::Cell::Start)[0]);
        assert_eq!(
            *path.last().unwrap(),
            board.find_position(crate::data::Cell::Exit)[0]
        );
        for pair in path.windows(2) {
            assert!(
                movement.legal_positions(board, pair[0]).contains(&pair[1]),
                "{} can't move from {} to {}",
                movement,
                pair[0],
                pair[1]
            );
        }
        for box_pos in board.boxes() {
            assert!(path.contains(box_pos), "{} not collected", box_pos);
        }
    }

    #[test]
    fn straight_line() {
        let board = board("r..g");
        let solution = solve(&board, AgentKind::Exit, Movement::Default, Method::BreadthFirst);
        assert_eq!(
            solution.path,
            Some(vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3)
            ])
        );
        assert_eq!(solution.move_cnt(), Some(3));
    }

    #[test]
    fn no_solution() {
        let board = board("r.wbg");
        let solution = solve(&board, AgentKind::Exit, Movement::Default, Method::BreadthFirst);
        assert_eq!(solution.path, None);
        assert_eq!(solution.move_cnt(), None);
        // root, (0, 1) and root again
        assert_eq!(solution.stats.total_created(), 3);
        assert_eq!(solution.stats.total_unique_visited(), 2);
        assert_eq!(solution.stats.total_reached_duplicates(), 1);
        assert!(format!("{:?}", solution).starts_with("No solution\n"));
    }

    #[test]
    fn portal_shortcut() {
        let board = board("rpwwwpg");
        for &method in &Method::ALL {
            let solution = solve(&board, AgentKind::Exit, Movement::Default, method);
            assert_eq!(
                solution.path,
                Some(vec![
                    Pos::new(0, 0),
                    Pos::new(0, 1),
                    Pos::new(0, 5),
                    Pos::new(0, 6)
                ]),
                "{}",
                method
            );
        }
    }

    #[test]
    fn knight_detour() {
        let board = board(
            r"
r..
...
..g
",
        );
        let solution = solve(&board, AgentKind::Exit, Movement::Knight, Method::BreadthFirst);
        let path = solution.path.unwrap();
        assert_eq!(path.len(), 5);
        assert_valid(&board, Movement::Knight, &path);
    }

    #[test]
    fn rook_slides() {
        let board = board(
            r"
r...
www.
...g
",
        );
        let solution = solve(&board, AgentKind::Exit, Movement::Rook, Method::BreadthFirst);
        assert_eq!(
            solution.path,
            Some(vec![Pos::new(0, 0), Pos::new(0, 3), Pos::new(2, 3)])
        );
    }

    #[test]
    fn collecting_on_the_way() {
        let board = board(
            r"
r..
.b.
..g
",
        );
        for &agent in &[AgentKind::Exit, AgentKind::Collector] {
            for &method in &[Method::BreadthFirst, Method::UniformCost] {
                let solution = solve(&board, agent, Movement::Default, method);
                assert_eq!(
                    solution.path,
                    Some(vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)])
                );
            }
        }
    }

    #[test]
    fn all_methods_and_movements() {
        let board = board(
            r"
r.w...
..w.b.
..p.w.
b...wg
p.....
",
        );
        for &agent in &[AgentKind::Exit, AgentKind::Collector] {
            for &movement in &[Movement::Default, Movement::Queen, Movement::Rook] {
                let optimal = solve(&board, agent, movement, Method::BreadthFirst)
                    .move_cnt()
                    .unwrap();
                for &method in &Method::ALL {
                    let solution = solve(&board, agent, movement, method);
                    let path = solution.path.unwrap();
                    assert_valid(&board, movement, &path);
                    assert!(path.len() - 1 >= optimal);
                    if method == Method::UniformCost {
                        assert_eq!(path.len() - 1, optimal);
                    }
                }
            }
        }
    }

    #[test]
    fn explicit_agents() {
        let board = board(
            r"
r.b
...
b.g
",
        );
        let mut space = StateSpace::new(&board, ExitAgent::default()).unwrap();
        let exit = search(&mut space, Movement::Default, Method::AStar, false);
        assert_valid(&board, Movement::Default, exit.path.as_ref().unwrap());

        let mut space = StateSpace::new(&board, CollectorAgent::default()).unwrap();
        let collector = search(&mut space, Movement::Default, Method::Greedy, false);
        assert_valid(&board, Movement::Default, collector.path.as_ref().unwrap());
        // the same space can be searched again, the old states just stay around
        let created = space.len();
        let again = search(&mut space, Movement::Default, Method::Greedy, false);
        assert_eq!(again.path, collector.path);
        assert!(space.len() > created);
    }
}
