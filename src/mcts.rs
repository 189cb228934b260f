//! Monte Carlo Tree Search move selection.
//!
//! Each iteration runs the four classic phases over the arena tree:
//!
//! 1. **Selection**: walk from the root while the game is not over. A node
//!    that has never been expanded is expanded once and the walk continues
//!    from the new child; otherwise the walk descends via UCT best-child.
//! 2. **Expansion**: create a child for the first legal move only, in
//!    ascending position order. A node counts as expanded from then on.
//! 3. **Simulation**: play uniformly-random legal moves, strictly
//!    alternating between the two players, until the game concludes, and
//!    score the outcome from X's perspective.
//! 4. **Backpropagation**: credit the result to every node on the path
//!    from the simulated node back to the root, negating it first when the
//!    acting player is O so that `wins` always accumulates from the acting
//!    player's point of view.
//!
//! The final decision ignores the exploration term: the root child with the
//! best plain win rate is chosen.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Action, Board, Player};
use crate::config::MctsConfig;
use crate::tree::{win_rate, NodeId, SearchTree};
use crate::{GameError, Result};

/// Runs the configured number of iterations from `board` and returns the
/// chosen position for `player`.
///
/// Fails with [`GameError::TerminalState`] when the game is already over
/// and with [`GameError::ExhaustedMoves`] when no iteration ever expanded
/// the root (a zero-iteration configuration).
pub fn search<R: Rng>(
    board: &Board,
    player: Player,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<usize> {
    let tree = build_tree(board, player, config, rng)?;

    let best = tree
        .best_child(tree.root(), 0.0)
        .ok_or(GameError::ExhaustedMoves)?;
    let chosen = tree.get(best);
    debug!(
        "mcts chose position {:?} (win rate {:.3} over {} visits)",
        chosen.position,
        win_rate(chosen.wins, chosen.visits),
        chosen.visits
    );
    chosen.position.ok_or(GameError::ExhaustedMoves)
}

/// Builds and returns the search tree after running all iterations.
///
/// Exposed separately from [`search`] so callers can inspect visit counts
/// and accumulated results.
pub fn build_tree<R: Rng>(
    board: &Board,
    player: Player,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<SearchTree> {
    if board.is_game_over() {
        return Err(GameError::TerminalState);
    }

    let mut tree = SearchTree::new(*board);
    for _ in 0..config.iterations {
        execute_iteration(&mut tree, player, config.exploration_constant, rng)?;
    }
    Ok(tree)
}

/// One selection/expansion/simulation/backpropagation cycle.
fn execute_iteration<R: Rng>(
    tree: &mut SearchTree,
    player: Player,
    exploration_constant: f64,
    rng: &mut R,
) -> Result<()> {
    let mut current = tree.root();
    while !tree.get(current).board.is_game_over() {
        current = if tree.get(current).children.is_empty() {
            expand(tree, current, player)?
        } else if let Some(next) = tree.best_child(current, exploration_constant) {
            next
        } else {
            break;
        };
    }

    let mut result = simulate(&tree.get(current).board, player, rng);
    if player.index() == 1 {
        result = -result;
    }

    backpropagate(tree, current, result);
    Ok(())
}

/// One-shot expansion: a child for the first legal move only.
fn expand(tree: &mut SearchTree, id: NodeId, player: Player) -> Result<NodeId> {
    let board = tree.get(id).board;
    let position = board
        .legal_moves()
        .into_iter()
        .next()
        .ok_or(GameError::ExhaustedMoves)?;
    let successor = board.generate_successor(Action::new(player, position))?;
    Ok(tree.add_child(id, successor, position))
}

/// Random rollout to a terminal state, the two players alternating from
/// `player` onwards. Returns +1, 0 or -1 from X's perspective.
fn simulate<R: Rng>(board: &Board, player: Player, rng: &mut R) -> i64 {
    let mut current = *board;
    let mut to_act = player;
    while !current.is_game_over() {
        let moves = current.legal_moves();
        let Some(&position) = moves.choose(rng) else {
            break;
        };
        let Ok(next) = current.generate_successor(Action::new(to_act, position)) else {
            break;
        };
        current = next;
        to_act = to_act.other();
    }
    current.evaluate() as i64
}

/// Walks the parent back-links from `id` to the root inclusive, counting
/// the visit and adding the signed result at every node on the path.
fn backpropagate(tree: &mut SearchTree, id: NodeId, result: i64) {
    let mut cursor = Some(id);
    while let Some(node_id) = cursor {
        let node = tree.get_mut(node_id);
        node.visits += 1;
        node.wins += result;
        cursor = node.parent;
    }
}
