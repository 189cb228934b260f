//! Exact game-value search: depth-first minimax with alpha-beta pruning.
//!
//! Terminal values are perspective-fixed: +1.0 always means a winning line
//! for X and -1.0 a winning line for O, whoever is searching. Maximizing
//! nodes therefore expand X's moves and minimizing nodes expand O's moves,
//! and the top-level flag decides which side acts first below the root.

use log::debug;

use crate::board::{Action, Board, Player};

/// Game-theoretic value of `board` under optimal play by both sides.
///
/// `maximizing` selects the side to act at the root of the search. The
/// recursion is bounded by the nine cells of the board.
pub fn alpha_beta_search(board: &Board, maximizing: bool) -> f64 {
    minimax(board, f64::NEG_INFINITY, f64::INFINITY, maximizing)
}

fn minimax(board: &Board, mut alpha: f64, mut beta: f64, maximizing: bool) -> f64 {
    if board.is_win() {
        return 1.0;
    }
    if board.is_lose() {
        return -1.0;
    }
    if board.is_tie() {
        return 0.0;
    }

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for successor in board.generate_successors(Player::X) {
            value = value.max(minimax(&successor, alpha, beta, false));
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for successor in board.generate_successors(Player::O) {
            value = value.min(minimax(&successor, alpha, beta, true));
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Picks `player`'s best move by evaluating every successor with the
/// alpha-beta search.
///
/// X keeps the move with the strictly highest value, O the strictly lowest;
/// under strict comparison the first of several equal candidates survives,
/// so the lowest-index move among equals wins. Returns `None` when no legal
/// move exists.
pub fn select_move(board: &Board, player: Player) -> Option<Action> {
    let mut best_value = match player {
        Player::X => f64::NEG_INFINITY,
        Player::O => f64::INFINITY,
    };
    let mut best_action = None;

    for position in board.legal_moves() {
        let action = Action::new(player, position);
        let Ok(successor) = board.generate_successor(action) else {
            continue;
        };
        let value = alpha_beta_search(&successor, player.index() == 1);
        debug!("position {position} evaluates to {value}");

        let better = match player {
            Player::X => value > best_value,
            Player::O => value < best_value,
        };
        if better {
            best_value = value;
            best_action = Some(action);
        }
    }

    best_action
}
