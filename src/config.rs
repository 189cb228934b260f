//! Configuration options for the MCTS player.

/// Parameters controlling a Monte Carlo Tree Search.
///
/// # Example
///
/// ```
/// use oxo_engine::MctsConfig;
///
/// let config = MctsConfig::default()
///     .with_iterations(5_000)
///     .with_exploration_constant(1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of search iterations per move selection
    pub iterations: usize,

    /// Exploration constant for the UCT formula
    ///
    /// Higher values favor exploration of less-visited children. The
    /// standard value is sqrt(2), roughly 1.414.
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            iterations: 1_000,
            exploration_constant: 1.414, // sqrt(2)
        }
    }
}

impl MctsConfig {
    /// Sets the number of iterations per move selection
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }
}
