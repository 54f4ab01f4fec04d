//! # PUCT-MCTS
//!
//! An AlphaZero-style Monte Carlo Tree Search engine for two-player,
//! perfect-information games.
//!
//! ## Features
//!
//! - **Search Engine**: PUCT selection, evaluator-guided expansion and
//!   minimax-style value backup over an index-addressed node arena
//! - **Pluggable Collaborators**: game rules and position evaluator are
//!   injected as traits, so the engine never depends on a concrete game
//! - **Policy Extraction**: visit counts converted into a temperature-scaled
//!   move distribution, with stochastic or deterministic action sampling
//! - **Demo Game**: a tic-tac-toe rules implementation used by the CLI
//!   harness and the integration tests
//!
//! ## Usage
//!
//! ```rust
//! use puct_mcts::{
//!     evaluator::UniformEvaluator,
//!     game::tic_tac_toe::TicTacToe,
//!     mcts::{algorithm::search, hyperparameters::MctsHyperparameters, tree::SearchTree},
//! };
//!
//! let rules = TicTacToe::new();
//! let evaluator = UniformEvaluator::new(9);
//! let params = MctsHyperparameters::default();
//! let mut tree = SearchTree::new(TicTacToe::initial_state(), 0);
//! let mut rng = rand::rng();
//! let policy = search(&mut tree, &rules, &evaluator, &params, &mut rng).unwrap();
//! assert_eq!(policy.len(), 9);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Position evaluator trait and stub implementations
pub mod evaluator;

/// Demo game implementations
pub mod game;

/// Monte Carlo Tree Search engine
pub mod mcts;

/// Game rules capability trait
pub mod rules;

// ============================================================================
// INTERNAL MODULES (not exposed publicly)
// ============================================================================

mod logging;

pub use logging::setup_logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the search engine.
///
/// All evaluator and rules-engine failures surface through this enum and
/// abort the in-progress simulation. A temperature of zero is not an error;
/// it is special-cased to deterministic argmax selection.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The evaluator call itself failed.
    #[error("evaluator failed: {0}")]
    Evaluator(String),

    /// The evaluator returned a prior vector that does not cover the
    /// action space.
    #[error("evaluator returned {got} priors for an action space of {expected}")]
    PriorLengthMismatch { expected: usize, got: usize },

    /// A transition was requested for an action the legality check rejects.
    /// Unreachable given correct expansion logic.
    #[error("transition requested for illegal action {action}")]
    IllegalTransition { action: usize },

    /// A selection, play or backup operation was invoked on a leaf that has
    /// no children and is not terminal. Caller-ordering violation.
    #[error("node has no children to select from")]
    UnexpandedLeaf,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SearchError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
