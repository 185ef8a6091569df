//! Search tree nodes.

use crate::engine::{Direction, State};
use std::fmt;

/// Index of an expanded node in the search engine's arena.
pub type NodeId = usize;

/// A state reached during search, with its path cost and a link to the node
/// it was generated from.
///
/// Parents are referenced by arena index rather than by pointer: the engine
/// stores every expanded node in a `Vec<Node>` and a child only ever points at
/// an entry that is already there.
#[derive(Clone, Debug)]
pub struct Node {
    /// The puzzle configuration at this node.
    pub state: State,
    /// Number of moves from the start state.
    pub cost: u32,
    /// Arena index of the generating node (`None` for the root).
    pub parent: Option<NodeId>,
}

impl Node {
    /// Creates the root node of a search.
    pub fn root(state: State) -> Self {
        Node {
            state,
            cost: 0,
            parent: None,
        }
    }

    /// Generates the successors of this node, which is stored at `id`.
    ///
    /// Moves are tried left, right, up, down, in that order; the order decides
    /// how ties are broken later on, so it must not change.
    pub fn children(&self, id: NodeId) -> Vec<Node> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.state.apply_move(direction))
            .map(|state| Node {
                state,
                cost: self.cost + 1,
                parent: Some(id),
            })
            .collect()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}
