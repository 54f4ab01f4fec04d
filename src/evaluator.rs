//! Position evaluator trait.
//!
//! In an AlphaZero-style setup the evaluator is a policy/value network; the
//! search engine only sees this trait. [`UniformEvaluator`] is the stub used
//! by the tests and by the CLI's pure-search mode.

use crate::{Result, SearchError};

/// Output of one evaluator call.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Per-action prior probabilities covering the full action space.
    /// Entries for illegal actions are ignored by expansion.
    pub priors: Vec<f32>,

    /// Scalar value estimate for the player to move at the evaluated state.
    pub value: f64,
}

/// Evaluator used by the search engine to rank candidate moves.
///
/// Must be callable synchronously. Failures surface as
/// [`SearchError::Evaluator`] and abort the in-progress simulation.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> Result<Evaluation>;
}

/// Stub evaluator returning uniform priors and a neutral value.
///
/// Search guided by this evaluator degenerates to prior-free PUCT, which is
/// enough for tests and for playing without a trained network.
#[derive(Debug, Clone)]
pub struct UniformEvaluator {
    action_space_size: usize,
}

impl UniformEvaluator {
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl<S> Evaluator<S> for UniformEvaluator {
    fn evaluate(&self, _state: &S) -> Result<Evaluation> {
        if self.action_space_size == 0 {
            return Err(SearchError::Evaluator(
                "action space is empty".to_string(),
            ));
        }
        let p = 1.0 / self.action_space_size as f32;
        Ok(Evaluation {
            priors: vec![p; self.action_space_size],
            value: 0.0,
        })
    }
}
