//! Immutable-snapshot representation of the 3x3 board.
//!
//! A [`Board`] is a plain value: nine cells plus the three terminal flags,
//! all recomputed after every mutation. Successor generation copies the
//! receiver and applies exactly one action, so a parent state is never
//! changed by exploring the game tree below it.

use std::fmt;

use crate::{GameError, Result};

/// The eight winning triples: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Single-character rendering of the cell.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// One of the two players. `X` is player index 0 and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Numeric index of the player: 0 for `X`, 1 for `O`.
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// The opposing player.
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// A move by one player: which cell to claim.
///
/// Actions are ephemeral values. A controller produces one, the board
/// consumes it, and the driving loop may append it to a move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub player: Player,
    pub position: usize,
}

impl Action {
    pub fn new(player: Player, position: usize) -> Self {
        Action { player, position }
    }
}

/// State of the game at a point in time.
///
/// The cell at `(row, column)` lives at index `row + 3 * column`. The
/// terminal flags are derived data: `win` means X owns a winning line,
/// `lose` means O owns one, and `tie` means the board is full with no
/// winning line for either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Mark; 9],
    win: bool,
    lose: bool,
    tie: bool,
}

impl Board {
    /// An empty board at game start.
    pub fn new() -> Self {
        Board {
            squares: [Mark::Empty; 9],
            win: false,
            lose: false,
            tie: false,
        }
    }

    /// Builds a board from raw cell contents, deriving the terminal flags.
    pub fn from_squares(squares: [Mark; 9]) -> Self {
        let mut board = Board {
            squares,
            win: false,
            lose: false,
            tie: false,
        };
        board.update();
        board
    }

    /// Read-only view of the nine cells.
    pub fn squares(&self) -> &[Mark; 9] {
        &self.squares
    }

    /// True if X owns a winning line.
    pub fn is_win(&self) -> bool {
        self.win
    }

    /// True if O owns a winning line.
    pub fn is_lose(&self) -> bool {
        self.lose
    }

    /// True if the board is full and neither side owns a winning line.
    pub fn is_tie(&self) -> bool {
        self.tie
    }

    /// True if the game has concluded in any way.
    pub fn is_game_over(&self) -> bool {
        self.is_win() || self.is_lose() || self.is_tie()
    }

    /// Fixed-scale value of the state: +1.0 for a win, -1.0 for a loss,
    /// 0.0 otherwise, checked in that order.
    pub fn evaluate(&self) -> f64 {
        if self.is_win() {
            1.0
        } else if self.is_lose() {
            -1.0
        } else {
            0.0
        }
    }

    /// All empty cell indices in ascending order, or nothing once the game
    /// is over. The ordering is stable so that both searches break ties
    /// reproducibly.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, &mark)| mark == Mark::Empty)
            .map(|(position, _)| position)
            .collect()
    }

    /// Places the acting player's mark and recomputes the terminal flags.
    ///
    /// Fails with [`GameError::InvalidMove`] when the position is outside
    /// the board or the cell is already occupied. Callers that route through
    /// [`Board::legal_moves`] first never hit the error.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        if action.position >= self.squares.len() {
            return Err(GameError::InvalidMove(action.position));
        }
        if self.squares[action.position] != Mark::Empty {
            return Err(GameError::InvalidMove(action.position));
        }
        self.squares[action.position] = action.player.mark();
        self.update();
        Ok(())
    }

    /// Clones the state and applies one action, leaving the receiver
    /// untouched.
    ///
    /// Fails with [`GameError::TerminalState`] when the game is already
    /// over; check [`Board::is_game_over`] first to avoid the error.
    pub fn generate_successor(&self, action: Action) -> Result<Board> {
        if self.is_game_over() {
            return Err(GameError::TerminalState);
        }
        let mut successor = *self;
        successor.apply(action)?;
        Ok(successor)
    }

    /// One successor per legal move, in legal-move order. Empty on a
    /// terminal state.
    pub fn generate_successors(&self, player: Player) -> Vec<Board> {
        self.legal_moves()
            .into_iter()
            .filter_map(|position| self.generate_successor(Action::new(player, position)).ok())
            .collect()
    }

    /// Recomputes the derived flags from the raw cells.
    ///
    /// Every winning line is checked on every call. A board that (illegally)
    /// holds a line for each player ends up with both `win` and `lose` set;
    /// consumers that check `is_win` first will report a win.
    fn update(&mut self) {
        self.win = false;
        self.lose = false;
        self.tie = false;
        for [a, b, c] in WINNING_LINES {
            let line = [self.squares[a], self.squares[b], self.squares[c]];
            if line == [Mark::X; 3] {
                self.win = true;
            } else if line == [Mark::O; 3] {
                self.lose = true;
            }
        }
        if !self.win && !self.lose && !self.squares.contains(&Mark::Empty) {
            self.tie = true;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write!(f, "|")?;
            for column in 0..3 {
                write!(f, " {} |", self.squares[row + 3 * column].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
