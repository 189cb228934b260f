//! # oxo-engine
//!
//! A two-player Tic-Tac-Toe engine with pluggable players and rendering.
//!
//! The engine is built around an immutable-snapshot [`Board`]: successor
//! generation always clones, so the search algorithms can explore the game
//! tree without ever touching the live game state. Two searches operate over
//! that abstraction:
//!
//! - [`minimax`]: exact game-value computation via depth-first alpha-beta
//!   search. The board is at most nine plies deep, so the recursion is
//!   bounded and needs no iterative deepening.
//! - [`mcts`]: approximate move selection via Monte Carlo Tree Search, with
//!   UCT child selection and uniformly-random rollouts.
//!
//! Around the search core sit the [`Controller`] variants (human, random,
//! minimax, MCTS), the [`Game`] driving loop and the [`View`] rendering seam.
//!
//! ## Basic Usage
//!
//! ```
//! use oxo_engine::{mcts, minimax, Board, MctsConfig, Player};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let board = Board::new();
//!
//! // Exact search: perfect play from the empty board is a tie.
//! assert_eq!(minimax::alpha_beta_search(&board, false), 0.0);
//!
//! // Probabilistic search: pick an opening move for X with a seeded
//! // rollout source.
//! let config = MctsConfig::default().with_iterations(200);
//! let mut rng = StdRng::seed_from_u64(7);
//! let position = mcts::search(&board, Player::X, &config, &mut rng).unwrap();
//! assert!(board.legal_moves().contains(&position));
//! ```
//!
//! ## Running a full game
//!
//! ```
//! use oxo_engine::{Controller, Game, MctsConfig, NoView, Player};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let player_x = Controller::minimax(Player::X);
//! let player_o = Controller::random(Player::O, StdRng::seed_from_u64(1));
//!
//! let mut game = Game::new(player_x, player_o);
//! game.run(&mut NoView);
//!
//! // Minimax never loses, so O cannot have a three-in-a-row.
//! assert!(!game.board().is_lose());
//! ```
//!
//! Random sources are always supplied by the caller, which keeps games and
//! searches reproducible under a fixed seed.

pub mod board;
pub mod config;
pub mod controller;
pub mod game;
pub mod mcts;
pub mod minimax;
pub mod tree;
pub mod view;

pub use board::{Action, Board, Mark, Player};
pub use config::MctsConfig;
pub use controller::{Controller, InputSource};
pub use game::Game;
pub use tree::{Node, NodeId, SearchTree};
pub use view::{NoView, TextView, View};

/// Error types for the game engine
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A move failed validation: position out of range or cell occupied
    #[error("Invalid move at position {0}")]
    InvalidMove(usize),

    /// Successor generation was attempted on a finished game
    #[error("Cannot generate a successor of a terminal state")]
    TerminalState,

    /// Expansion was requested on a node with no legal moves left
    #[error("No legal moves left to expand")]
    ExhaustedMoves,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;
