//! Tic-tac-toe rules: the demo game behind the CLI harness and the
//! integration tests.
//!
//! Actions are cell indices 0..9, row-major. Rewards follow the engine's
//! perspective convention: `compute_reward` scores a terminal board for the
//! player to move there, so a decided game is worth -1 (the winner just
//! moved; the player to move has lost) and a draw is worth 0.

use std::fmt;

use crate::rules::GameRules;
use crate::{Result, SearchError};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3×3 board snapshot. `cells` holds the occupying player id, `to_move`
/// the active-player marker consumed by the search engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub cells: [Option<u8>; 9],
    pub to_move: u8,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; 9],
            to_move: 0,
        }
    }

    /// Player holding a completed line, if any.
    pub fn winner(&self) -> Option<u8> {
        for line in &LINES {
            if let Some(p) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(p) && self.cells[line[2]] == Some(p) {
                    return Some(p);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let mark = match self.cells[row * 3 + col] {
                    Some(0) => 'X',
                    Some(_) => 'O',
                    None => '.',
                };
                write!(f, "{mark}")?;
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Tic-tac-toe rules engine.
#[derive(Debug, Clone, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn new() -> Self {
        Self
    }

    pub fn initial_state() -> Board {
        Board::empty()
    }
}

impl GameRules for TicTacToe {
    type State = Board;

    fn action_space_size(&self) -> usize {
        9
    }

    fn is_terminal(&self, state: &Board) -> bool {
        state.winner().is_some() || state.is_full()
    }

    fn compute_reward(&self, state: &Board) -> f64 {
        match state.winner() {
            Some(p) if p == state.to_move => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn is_legal(&self, action: usize, state: &Board) -> bool {
        action < 9 && state.cells[action].is_none() && !self.is_terminal(state)
    }

    fn transition(&self, state: &Board, action: usize) -> Result<Board> {
        if !self.is_legal(action, state) {
            return Err(SearchError::IllegalTransition { action });
        }
        let mut next = state.clone();
        next.cells[action] = Some(state.to_move);
        Ok(next)
    }

    fn advance_player(&self, state: &mut Board) {
        state.to_move = (state.to_move + 1) % 2;
    }
}
