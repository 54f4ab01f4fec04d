//! Shared stub game for engine tests.

use crate::rules::GameRules;
use crate::{Result, SearchError};

/// One-ply stub game: the start position has two moves, both immediately
/// terminal. Rewards are stored from the mover's perspective;
/// `compute_reward` scores them from the player to move at the terminal
/// state, i.e. the opponent of the mover.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OnePlyState {
    pub terminal: bool,
    pub mover_reward: f64,
    pub to_move: u8,
}

impl OnePlyState {
    pub fn start() -> Self {
        Self {
            terminal: false,
            mover_reward: 0.0,
            to_move: 0,
        }
    }
}

pub(crate) struct OnePlyGame {
    pub rewards: [f64; 2],
}

impl GameRules for OnePlyGame {
    type State = OnePlyState;

    fn action_space_size(&self) -> usize {
        2
    }

    fn is_terminal(&self, state: &OnePlyState) -> bool {
        state.terminal
    }

    fn compute_reward(&self, state: &OnePlyState) -> f64 {
        -state.mover_reward
    }

    fn is_legal(&self, _action: usize, state: &OnePlyState) -> bool {
        !state.terminal
    }

    fn transition(&self, state: &OnePlyState, action: usize) -> Result<OnePlyState> {
        if state.terminal {
            return Err(SearchError::IllegalTransition { action });
        }
        Ok(OnePlyState {
            terminal: true,
            mover_reward: self.rewards[action],
            to_move: state.to_move,
        })
    }

    fn advance_player(&self, state: &mut OnePlyState) {
        state.to_move = (state.to_move + 1) % 2;
    }
}
