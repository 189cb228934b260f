//! Command-line driver for the engine.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use oxo_engine::{Controller, Game, InputSource, MctsConfig, NoView, Player, TextView, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewKind {
    /// No rendering at all
    None,
    /// Terminal rendering after every tick
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Random,
    Minimax,
    Mcts,
}

#[derive(Parser, Debug)]
#[command(name = "oxo", about = "Tic-Tac-Toe with human, random, minimax and MCTS players")]
struct Args {
    /// Rendering of the game
    #[arg(long, value_enum, default_value_t = ViewKind::Text)]
    view: ViewKind,

    /// Player 1, playing X (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    player1: PlayerKind,

    /// Player 2, playing O
    #[arg(long, value_enum, default_value_t = PlayerKind::Mcts)]
    player2: PlayerKind,

    /// Seed for the random agents and the MCTS rollouts; omit for entropy
    #[arg(long)]
    seed: Option<u64>,

    /// MCTS iterations per move selection
    #[arg(long, default_value_t = 1_000)]
    iterations: usize,

    /// MCTS exploration constant
    #[arg(long, default_value_t = 1.414)]
    exploration: f64,
}

/// Reads one cell index (0-8) per line from standard input.
struct StdinInput;

impl InputSource for StdinInput {
    fn poll(&mut self) -> Option<usize> {
        print!("Your move (0-8): ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        line.trim().parse().ok()
    }
}

/// Distinct seed stream per player so both sides never share a sequence.
fn rng_for(seed: Option<u64>, player: Player) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(player.index() as u64)),
        None => StdRng::from_entropy(),
    }
}

fn build_controller(kind: PlayerKind, player: Player, args: &Args) -> Controller {
    match kind {
        PlayerKind::Human => Controller::human(player, Box::new(StdinInput)),
        PlayerKind::Random => Controller::random(player, rng_for(args.seed, player)),
        PlayerKind::Minimax => Controller::minimax(player),
        PlayerKind::Mcts => {
            let config = MctsConfig::default()
                .with_iterations(args.iterations)
                .with_exploration_constant(args.exploration);
            Controller::mcts(player, config, rng_for(args.seed, player))
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let player_one = build_controller(args.player1, Player::X, &args);
    let player_two = build_controller(args.player2, Player::O, &args);
    let mut game = Game::new(player_one, player_two);

    let mut view: Box<dyn View> = match args.view {
        ViewKind::None => Box::new(NoView),
        ViewKind::Text => Box::new(TextView),
    };
    game.run(view.as_mut());
}
