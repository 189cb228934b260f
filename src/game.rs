//! Turn-taking driving loop.
//!
//! The loop repeatedly polls the controller whose turn it is. A controller
//! that produces no move (a human with no input this tick, for instance)
//! leaves the board unchanged and keeps the turn; the turn is handed over
//! only when the board actually changed.

use log::info;

use crate::board::{Action, Board, Player};
use crate::controller::Controller;
use crate::view::View;

/// A running game: the board, the two controllers and the move history.
pub struct Game {
    board: Board,
    controllers: [Controller; 2],
    current: usize,
    num_moves: usize,
    history: Vec<Action>,
}

impl Game {
    /// Starts a fresh game. `player_one` acts first as X.
    pub fn new(player_one: Controller, player_two: Controller) -> Self {
        Game {
            board: Board::new(),
            controllers: [player_one, player_two],
            current: 0,
            num_moves: 0,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    pub fn current_player(&self) -> Player {
        match self.current {
            0 => Player::X,
            _ => Player::O,
        }
    }

    /// Moves committed so far, in play order.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// One tick of the loop: poll the current controller, hand the turn
    /// over if the board changed, then render.
    pub fn tick(&mut self, view: &mut dyn View) {
        let before = self.board;
        self.controllers[self.current].process_turn(&mut self.board, Some(&mut self.history));
        if self.board != before {
            self.current = 1 - self.current;
            self.num_moves += 1;
        }
        view.display(&self.board);
    }

    /// Ticks until the game concludes.
    pub fn run(&mut self, view: &mut dyn View) {
        while !self.board.is_game_over() {
            self.tick(view);
        }
        info!("game over after {} moves", self.num_moves);
    }
}
