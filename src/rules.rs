//! Game rules capability trait.
//!
//! The search engine never depends on a concrete game. Everything it needs
//! from the rules side is expressed through [`GameRules`]: legality,
//! transition, termination and terminal reward. Board encoding and anything
//! else the surrounding application does with states is out of scope here.

use crate::Result;

/// Rules engine for a two-player, perfect-information game.
///
/// The engine is injected into the search driver; all calls are synchronous
/// and assumed cheap relative to evaluator calls.
pub trait GameRules {
    /// Opaque game-state snapshot owned by each tree node.
    type State;

    /// Fixed size of the action space. Action ids are `0..action_space_size`.
    fn action_space_size(&self) -> usize;

    /// Whether `state` is a terminal position.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Terminal reward for `state`, from the perspective of the player to
    /// move there. Only defined for terminal states.
    fn compute_reward(&self, state: &Self::State) -> f64;

    /// Whether `action` may be played in `state`.
    fn is_legal(&self, action: usize, state: &Self::State) -> bool;

    /// Successor of `state` under `action`. The active-player marker of the
    /// returned state is *not* yet advanced; expansion calls
    /// [`advance_player`](Self::advance_player) afterwards.
    ///
    /// Implementations should return [`SearchError::IllegalTransition`] when
    /// called with an action that [`is_legal`](Self::is_legal) rejects. The
    /// expansion step filters illegal actions first, so hitting that error
    /// is an internal-consistency failure, not a runtime condition.
    ///
    /// [`SearchError::IllegalTransition`]: crate::SearchError::IllegalTransition
    fn transition(&self, state: &Self::State, action: usize) -> Result<Self::State>;

    /// Flip the active-player marker of `state` in place.
    fn advance_player(&self, state: &mut Self::State);
}
