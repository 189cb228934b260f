//! Search-tree arena for Monte Carlo Tree Search.
//!
//! Nodes live in a contiguous arena and refer to each other by index: a
//! parent owns the ids of its children, while each child carries a
//! non-owning back-link used during backpropagation. A tree is built fresh
//! for every move selection and dropped when the chosen position is
//! returned.

use crate::board::Board;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A node in the search tree.
#[derive(Debug)]
pub struct Node {
    /// Snapshot of the game at this node
    pub board: Board,

    /// Position that led here from the parent (`None` for the root)
    pub position: Option<usize>,

    /// Back-link for backpropagation; the parent owns this node, never the
    /// reverse
    pub parent: Option<NodeId>,

    /// Ids of the children expanded so far
    pub children: Vec<NodeId>,

    /// Number of times backpropagation has passed through this node
    pub visits: u64,

    /// Signed, unclamped accumulator of simulation results
    pub wins: i64,
}

/// Arena-backed search tree rooted at a board snapshot.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Creates a tree holding only the root.
    pub fn new(root: Board) -> Self {
        SearchTree {
            nodes: vec![Node {
                board: root,
                position: None,
                parent: None,
                children: Vec::new(),
                visits: 0,
                wins: 0,
            }],
        }
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a child of `parent` reached by playing `position`.
    pub fn add_child(&mut self, parent: NodeId, board: Board, position: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            board,
            position: Some(position),
            parent: Some(parent),
            children: Vec::new(),
            visits: 0,
            wins: 0,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Child of `id` with the highest UCT score, or `None` when the node
    /// has no children. With `exploration_constant` 0 this degenerates to
    /// the pure win-rate pick used for the final move decision.
    pub fn best_child(&self, id: NodeId, exploration_constant: f64) -> Option<NodeId> {
        let node = self.get(id);
        let parent_visits = node.visits;

        let mut best_score = f64::NEG_INFINITY;
        let mut best = None;
        for &child_id in &node.children {
            let child = self.get(child_id);
            let score = uct_score(child.wins, child.visits, parent_visits, exploration_constant);
            if score > best_score {
                best_score = score;
                best = Some(child_id);
            }
        }
        best
    }
}

/// UCT value of a child node.
///
/// Balances exploitation (average result) against exploration (how rarely
/// the child has been visited relative to its parent). An unvisited child
/// scores positive infinity so it is always preferred over any visited
/// sibling; this also keeps the division well-defined.
pub fn uct_score(wins: i64, visits: u64, parent_visits: u64, exploration_constant: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }

    let exploitation = wins as f64 / visits as f64;
    let exploration =
        exploration_constant * ((parent_visits as f64).ln() / visits as f64).sqrt();

    exploitation + exploration
}

/// Average result per visit. Returns 0.0 for an unvisited node.
pub fn win_rate(wins: i64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    wins as f64 / visits as f64
}
