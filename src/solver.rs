use crate::engine::State;
use crate::error::PuzzleError;
use crate::frontier::{FifoFrontier, Frontier, PriorityFrontier};
use crate::heuristics::{manhattan_distance, misplaced_tiles, HeuristicFn};
use crate::node::Node;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, debug_span, trace, warn};

/// Number of expansions after which a search gives up.
pub const DEFAULT_NODE_LIMIT: usize = 100_000;

/// Tunable limits for a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Hard cap on node expansions. Unsolvable puzzles are only detected by
    /// reaching it.
    pub node_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}

/// The search algorithms the solver can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first search over a FIFO frontier.
    Bfs,
    /// A* ordered by cost plus Manhattan distance.
    AStarManhattan,
    /// A* ordered by cost plus the number of misplaced tiles.
    AStarMisplaced,
}

impl Strategy {
    /// Every strategy, in the order they are listed on the command line.
    pub const ALL: [Strategy; 3] = [
        Strategy::Bfs,
        Strategy::AStarManhattan,
        Strategy::AStarMisplaced,
    ];

    /// The command-line name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::AStarManhattan => "astar_manhattan",
            Strategy::AStarMisplaced => "astar_misplaced",
        }
    }

    /// The heuristic guiding this strategy, or `None` for uninformed search.
    pub fn heuristic(self) -> Option<HeuristicFn> {
        match self {
            Strategy::Bfs => None,
            Strategy::AStarManhattan => Some(manhattan_distance),
            Strategy::AStarMisplaced => Some(misplaced_tiles),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| PuzzleError::UnknownStrategy(s.to_string()))
    }
}

/// What a search found, plus how much work it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the goal was reached.
    pub possible: bool,
    /// States from the first move to the goal (the start state is not
    /// included). `None` when the goal was not reached.
    pub path: Option<Vec<State>>,
    /// Nodes taken off the frontier and expanded.
    pub nodes_expanded: usize,
    /// Nodes ever added to the frontier, the root included.
    pub nodes_in_frontier: usize,
    /// Largest frontier size observed.
    pub frontier_size: usize,
}

impl SearchOutcome {
    /// Number of moves in the solution, if one was found.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Solves `start` with the chosen strategy.
///
/// Breadth-first search uses a FIFO frontier; both A* variants use a priority
/// frontier ordered by `cost + heuristic`.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::State;
/// use npuzzle_solver::solver::{solve, SearchConfig, Strategy};
///
/// let start = State::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
/// let outcome = solve(&start, Strategy::AStarManhattan, SearchConfig::default());
/// assert!(outcome.possible);
/// assert_eq!(outcome.path_len(), Some(2));
/// ```
pub fn solve(start: &State, strategy: Strategy, config: SearchConfig) -> SearchOutcome {
    let span = debug_span!("solve", strategy = %strategy, size = start.size());
    let _guard = span.enter();

    match strategy {
        Strategy::Bfs => search(start, FifoFrontier::new(), None, config),
        Strategy::AStarManhattan | Strategy::AStarMisplaced => {
            search(start, PriorityFrontier::new(), strategy.heuristic(), config)
        }
    }
}

/// Runs the generic best-first search loop from `start`.
///
/// The frontier decides expansion order; `heuristic`, when present, is added
/// to each child's cost to form its priority. Each state is enqueued at most
/// once per search. The search stops on reaching the goal, after
/// `config.node_limit` expansions, or when the frontier runs dry.
pub fn search<F>(
    start: &State,
    mut frontier: F,
    heuristic: Option<HeuristicFn>,
    config: SearchConfig,
) -> SearchOutcome
where
    F: Frontier<Node>,
{
    let size = start.size();
    let goal = State::goal(size);

    // Expanded nodes, addressed by `Node::parent`.
    let mut arena: Vec<Node> = Vec::new();
    let mut visited: HashSet<State> = HashSet::new();
    let mut enqueued: HashSet<State> = HashSet::new();

    let mut nodes_expanded = 0;
    let mut nodes_in_frontier = 1;
    let mut frontier_max = 1;

    enqueued.insert(start.clone());
    frontier.push(Node::root(start.clone()), 0);

    while !frontier.is_empty() {
        if frontier.len() > frontier_max {
            frontier_max = frontier.len();
            trace!(frontier_max, "New frontier peak");
        }
        let Some(current) = frontier.pop() else {
            break;
        };
        enqueued.remove(&current.state);
        visited.insert(current.state.clone());

        if current.state == goal {
            let path = reconstruct_path(&arena, current);
            debug!(
                moves = path.len(),
                nodes_expanded, nodes_in_frontier, frontier_max, "Goal found"
            );
            return SearchOutcome {
                possible: true,
                path: Some(path),
                nodes_expanded,
                nodes_in_frontier,
                frontier_size: frontier_max,
            };
        }

        if nodes_expanded == config.node_limit {
            warn!(
                node_limit = config.node_limit,
                nodes_in_frontier, frontier_max, "Node limit reached without finding the goal"
            );
            return SearchOutcome {
                possible: false,
                path: None,
                nodes_expanded,
                nodes_in_frontier,
                frontier_size: frontier_max,
            };
        }

        nodes_expanded += 1;
        let id = arena.len();
        let children = current.children(id);
        arena.push(current);

        for child in children {
            if visited.contains(&child.state) || enqueued.contains(&child.state) {
                continue;
            }
            let priority = match heuristic {
                Some(h) => child.cost + h(&child.state, &goal, size),
                None => child.cost,
            };
            enqueued.insert(child.state.clone());
            frontier.push(child, priority);
            nodes_in_frontier += 1;
        }
    }

    debug!(nodes_expanded, "Frontier exhausted without finding the goal");
    SearchOutcome {
        possible: false,
        path: None,
        nodes_expanded,
        nodes_in_frontier,
        frontier_size: frontier_max,
    }
}

// Walks parent links from `goal` back to the root. The root itself is left
// out; the rest is returned start-to-goal.
fn reconstruct_path(arena: &[Node], goal: Node) -> Vec<State> {
    let mut path = Vec::new();
    let mut parent = goal.parent;
    if parent.is_some() {
        path.push(goal.state);
    }
    while let Some(id) = parent {
        let node = &arena[id];
        if node.parent.is_some() {
            path.push(node.state.clone());
        }
        parent = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;
    use crate::utils::parse_puzzle;

    fn run_all(start: &State, config: SearchConfig) -> Vec<(Strategy, SearchOutcome)> {
        Strategy::ALL
            .into_iter()
            .map(|strategy| (strategy, solve(start, strategy, config)))
            .collect()
    }

    fn assert_valid_path(start: &State, path: &[State]) {
        let mut previous = start.clone();
        for step in path {
            let reachable = Direction::ALL
                .into_iter()
                .filter_map(|d| previous.apply_move(d))
                .any(|next| &next == step);
            assert!(reachable, "Step\n{}is not one move from\n{}", step, previous);
            previous = step.clone();
        }
        assert!(previous.is_goal(), "Path must end at the goal");
    }

    #[test]
    fn test_already_solved() {
        let start = State::goal(3);
        for (strategy, outcome) in run_all(&start, SearchConfig::default()) {
            assert!(outcome.possible, "{}", strategy);
            assert_eq!(outcome.path, Some(vec![]), "{}", strategy);
            assert_eq!(outcome.nodes_expanded, 0, "{}", strategy);
            assert_eq!(outcome.nodes_in_frontier, 1, "{}", strategy);
            assert_eq!(outcome.frontier_size, 1, "{}", strategy);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let start = parse_puzzle("1 . 2\n3 4 5\n6 7 8").unwrap();
        let outcomes = run_all(&start, SearchConfig::default());

        let bfs_expanded = outcomes[0].1.nodes_expanded;
        for (strategy, outcome) in &outcomes {
            assert!(outcome.possible, "{}", strategy);
            assert_eq!(outcome.path, Some(vec![State::goal(3)]), "{}", strategy);
            assert!(outcome.nodes_expanded <= bfs_expanded, "{}", strategy);
        }
        // Left is generated first, so BFS reaches the goal right after the root.
        assert_eq!(bfs_expanded, 1);
        assert_eq!(outcomes[0].1.nodes_in_frontier, 4);
    }

    #[test]
    fn test_hand_checked_fixtures_are_solved_optimally() {
        let fixtures = [
            ("1 . 2\n3 4 5\n6 7 8", 1),
            ("1 2 .\n3 4 5\n6 7 8", 2),
            ("1 2 5\n3 4 .\n6 7 8", 3),
            ("3 1 2\n4 . 5\n6 7 8", 2),
        ];
        for (text, moves) in fixtures {
            let start = parse_puzzle(text).unwrap();
            for (strategy, outcome) in run_all(&start, SearchConfig::default()) {
                assert!(outcome.possible, "{} on\n{}", strategy, start);
                let path = outcome.path.unwrap();
                assert_eq!(path.len(), moves, "{} on\n{}", strategy, start);
                assert_valid_path(&start, &path);
            }
        }
    }

    #[test]
    fn test_scrambled_puzzles_are_solved_by_every_strategy() {
        for seed in 0..8 {
            let start = State::scrambled(3, 14, seed);
            let outcomes = run_all(&start, SearchConfig::default());
            let shortest = outcomes[0].1.path_len().expect("BFS must solve a scrambled puzzle");
            assert!(shortest <= 14);

            for (strategy, outcome) in &outcomes {
                assert!(outcome.possible, "{} seed {}", strategy, seed);
                let path = outcome.path.as_ref().unwrap();
                assert!(path.len() >= shortest, "{} seed {}", strategy, seed);
                assert_eq!(path.len() % 2, shortest % 2, "{} seed {}", strategy, seed);
                assert_valid_path(&start, path);
            }
        }
    }

    #[test]
    fn test_astar_keeps_first_enqueued_cost() {
        // A cheaper route to a state already on the frontier is dropped, so
        // A* can settle for a longer path than BFS.
        let start = parse_puzzle("1 5 .\n7 3 4\n8 6 2").unwrap();

        let bfs = solve(&start, Strategy::Bfs, SearchConfig::default());
        assert!(bfs.possible);
        assert_eq!(bfs.path_len(), Some(18));
        assert_valid_path(&start, bfs.path.as_ref().unwrap());

        let manhattan = solve(&start, Strategy::AStarManhattan, SearchConfig::default());
        assert!(manhattan.possible);
        assert_eq!(manhattan.path_len(), Some(20));
        assert_valid_path(&start, manhattan.path.as_ref().unwrap());
    }

    #[test]
    fn test_metrics_relations() {
        for seed in 0..5 {
            let start = State::scrambled(3, 12, seed);
            for (strategy, outcome) in run_all(&start, SearchConfig::default()) {
                let moves = outcome.path_len().unwrap();
                assert!(outcome.nodes_in_frontier >= moves + 1, "{}", strategy);
                assert!(outcome.frontier_size <= outcome.nodes_in_frontier, "{}", strategy);
                assert!(outcome.nodes_expanded < outcome.nodes_in_frontier, "{}", strategy);
            }
        }
    }

    #[test]
    fn test_heuristics_are_admissible_on_solved_paths() {
        let goal = State::goal(3);
        for seed in 0..5 {
            let start = State::scrambled(3, 16, seed);
            let optimal = solve(&start, Strategy::Bfs, SearchConfig::default())
                .path_len()
                .unwrap() as u32;
            assert!(manhattan_distance(&start, &goal, 3) <= optimal);
            assert!(misplaced_tiles(&start, &goal, 3) <= optimal);
        }
    }

    #[test]
    fn test_astar_expands_fewer_nodes_than_bfs() {
        let start = parse_puzzle("1 2 5\n3 4 .\n6 7 8").unwrap();
        let bfs = solve(&start, Strategy::Bfs, SearchConfig::default());
        let manhattan = solve(&start, Strategy::AStarManhattan, SearchConfig::default());
        let misplaced = solve(&start, Strategy::AStarMisplaced, SearchConfig::default());
        // The heuristic is exact along the solution, so A* only expands it.
        assert_eq!(manhattan.nodes_expanded, 3);
        assert_eq!(misplaced.nodes_expanded, 3);
        assert!(bfs.nodes_expanded > manhattan.nodes_expanded);
    }

    #[test]
    fn test_unsolvable_hits_custom_limit() {
        // Two tiles swapped: wrong parity, never reaches the goal.
        let start = parse_puzzle(". 2 1\n3 4 5\n6 7 8").unwrap();
        let config = SearchConfig { node_limit: 500 };
        for (strategy, outcome) in run_all(&start, config) {
            assert!(!outcome.possible, "{}", strategy);
            assert_eq!(outcome.path, None, "{}", strategy);
            assert_eq!(outcome.nodes_expanded, 500, "{}", strategy);
            assert!(outcome.frontier_size <= outcome.nodes_in_frontier);
        }
    }

    #[test]
    fn test_unsolvable_hits_default_limit() {
        let start = parse_puzzle(". 2 1\n3 4 5\n6 7 8").unwrap();
        let outcome = solve(&start, Strategy::AStarMisplaced, SearchConfig::default());
        assert!(!outcome.possible);
        assert!(outcome.path.is_none());
        assert_eq!(outcome.nodes_expanded, DEFAULT_NODE_LIMIT);
    }

    #[test]
    fn test_unsolvable_small_puzzle_exhausts_frontier() {
        // A 2x2 puzzle's reachable states form a single cycle of 12. Every
        // expansion regenerates the state it came from, so this only
        // terminates if equal states are recognised as duplicates.
        let start = parse_puzzle(". 2\n1 3").unwrap();
        for (strategy, outcome) in run_all(&start, SearchConfig::default()) {
            assert!(!outcome.possible, "{}", strategy);
            assert_eq!(outcome.path, None, "{}", strategy);
            assert_eq!(outcome.nodes_expanded, 12, "{}", strategy);
            assert_eq!(outcome.nodes_in_frontier, 12, "{}", strategy);
        }
    }

    #[test]
    fn test_search_is_reproducible() {
        let start = State::scrambled(3, 20, 11);
        for strategy in Strategy::ALL {
            let a = solve(&start, strategy, SearchConfig::default());
            let b = solve(&start, strategy, SearchConfig::default());
            assert_eq!(a, b, "{}", strategy);
        }
    }

    #[test]
    fn test_generic_search_with_explicit_frontier() {
        let start = State::goal(3)
            .apply_move(Direction::Down)
            .and_then(|s| s.apply_move(Direction::Right))
            .unwrap();
        let outcome = search(
            &start,
            PriorityFrontier::new(),
            Some(manhattan_distance),
            SearchConfig::default(),
        );
        assert_eq!(outcome.path_len(), Some(2));
        assert_eq!(outcome.nodes_expanded, 2);
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
        let err = "dfs".parse::<Strategy>().unwrap_err();
        assert!(err.to_string().contains("Invalid search method 'dfs'"));
        assert!(Strategy::Bfs.heuristic().is_none());
        assert!(Strategy::AStarMisplaced.heuristic().is_some());
    }

    #[test]
    fn test_fifteen_puzzle() {
        let start = State::scrambled(4, 20, 5);
        let outcome = solve(&start, Strategy::AStarManhattan, SearchConfig::default());
        assert!(outcome.possible);
        assert_valid_path(&start, outcome.path.as_ref().unwrap());
    }
}
