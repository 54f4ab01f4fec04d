//! Expansion & evaluation of a selected leaf.
//!
//! Terminal leaves never grow children; their reward is *accumulated* into
//! `w` because the same terminal node is reselected across simulations and
//! each revisit must contribute its reward exactly once. Non-terminal leaves
//! are evaluated once: `w` is overwritten with the value estimate and one
//! child is appended per legal action, in ascending action order, so the
//! dense policy vector stays consistent with the action-space indexing.

use crate::evaluator::Evaluator;
use crate::mcts::arena::NodeIndex;
use crate::mcts::node::Node;
use crate::mcts::tree::SearchTree;
use crate::rules::GameRules;
use crate::{Result, SearchError};

/// Expands and evaluates `leaf` in place.
pub fn expand_and_evaluate<R, E>(
    tree: &mut SearchTree<R::State>,
    leaf: NodeIndex,
    rules: &R,
    evaluator: &E,
) -> Result<()>
where
    R: GameRules,
    E: Evaluator<R::State>,
{
    if rules.is_terminal(&tree.node(leaf).state) {
        let reward = rules.compute_reward(&tree.node(leaf).state);
        tree.node_mut(leaf).total_value += reward;
        return Ok(());
    }

    let evaluation = evaluator.evaluate(&tree.node(leaf).state)?;
    let action_space = rules.action_space_size();
    if evaluation.priors.len() != action_space {
        return Err(SearchError::PriorLengthMismatch {
            expected: action_space,
            got: evaluation.priors.len(),
        });
    }

    // Expansion happens exactly once per node, so overwriting is correct
    // here, unlike the terminal case above.
    tree.node_mut(leaf).total_value = evaluation.value;

    let leaf_to_play = tree.node(leaf).to_play;
    let child_to_play = (leaf_to_play + 1) % 2;

    for (action, &prior) in evaluation.priors.iter().enumerate() {
        if !rules.is_legal(action, &tree.node(leaf).state) {
            continue;
        }
        let mut state = rules.transition(&tree.node(leaf).state, action)?;
        rules.advance_player(&mut state);
        let child = tree
            .arena_mut()
            .alloc(Node::child(state, child_to_play, leaf, action, prior));
        tree.node_mut(leaf).children.push(child);
    }

    Ok(())
}
