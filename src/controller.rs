//! Player controllers: the per-turn decision contract.
//!
//! A controller turns the current board into a committed move. The automated
//! variants consult their search or policy; the human variant translates an
//! externally-resolved cell position into a move. Illegal or absent input is
//! a silent no-op, which lets the driving loop poll a human controller on
//! every tick without erroring on ticks with no input.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::board::{Action, Board, Player};
use crate::config::MctsConfig;
use crate::{mcts, minimax};

/// Source of resolved cell positions for human play.
///
/// The engine knows nothing about pointers, windows or event queues. An
/// input collaborator resolves whatever it captures into a cell index.
pub trait InputSource {
    /// The cell the human selected this tick, or `None` when there was no
    /// usable input.
    fn poll(&mut self) -> Option<usize>;
}

pub struct HumanController {
    player: Player,
    input: Box<dyn InputSource>,
}

pub struct RandomController {
    player: Player,
    rng: StdRng,
}

pub struct MinimaxController {
    player: Player,
}

pub struct MctsController {
    player: Player,
    config: MctsConfig,
    rng: StdRng,
}

/// The four player variants.
pub enum Controller {
    Human(HumanController),
    Random(RandomController),
    Minimax(MinimaxController),
    Mcts(MctsController),
}

impl Controller {
    /// A controller fed by an external input collaborator.
    pub fn human(player: Player, input: Box<dyn InputSource>) -> Self {
        Controller::Human(HumanController { player, input })
    }

    /// A baseline agent playing uniformly-random legal moves.
    pub fn random(player: Player, rng: StdRng) -> Self {
        Controller::Random(RandomController { player, rng })
    }

    /// An exact player backed by the alpha-beta search.
    pub fn minimax(player: Player) -> Self {
        Controller::Minimax(MinimaxController { player })
    }

    /// A probabilistic player backed by Monte Carlo Tree Search.
    pub fn mcts(player: Player, config: MctsConfig, rng: StdRng) -> Self {
        Controller::Mcts(MctsController {
            player,
            config,
            rng,
        })
    }

    /// The side this controller plays.
    pub fn player(&self) -> Player {
        match self {
            Controller::Human(c) => c.player,
            Controller::Random(c) => c.player,
            Controller::Minimax(c) => c.player,
            Controller::Mcts(c) => c.player,
        }
    }

    /// Produces the move this controller wants to play, if any.
    pub fn decide(&mut self, board: &Board) -> Option<Action> {
        match self {
            Controller::Human(c) => c.input.poll().map(|pos| Action::new(c.player, pos)),
            Controller::Random(c) => {
                let moves = board.legal_moves();
                moves
                    .choose(&mut c.rng)
                    .map(|&pos| Action::new(c.player, pos))
            }
            Controller::Minimax(c) => minimax::select_move(board, c.player),
            Controller::Mcts(c) => mcts::search(board, c.player, &c.config, &mut c.rng)
                .ok()
                .map(|pos| Action::new(c.player, pos)),
        }
    }

    /// One turn of the driving-loop contract: ask for a move and commit it
    /// if legal.
    ///
    /// Anything else leaves the board untouched so the loop can simply call
    /// again on its next tick. Applied moves are appended to `history` when
    /// one is provided.
    pub fn process_turn(&mut self, board: &mut Board, history: Option<&mut Vec<Action>>) {
        let Some(action) = self.decide(board) else {
            return;
        };
        if !board.legal_moves().contains(&action.position) {
            trace!("ignoring illegal move at position {}", action.position);
            return;
        }
        if board.apply(action).is_ok() {
            debug!("{:?} plays position {}", action.player, action.position);
            if let Some(history) = history {
                history.push(action);
            }
        }
    }
}
