//! Policy extraction and action sampling.
//!
//! Visit counts are converted into a move distribution sharpened by a
//! temperature exponent: weights are `n^(1/temperature)`. A temperature of
//! zero is degenerate (division by zero in the exponent) and is special-cased
//! to deterministic argmax-by-visit-count selection.

use rand::{Rng, RngExt};

use crate::mcts::arena::NodeIndex;
use crate::mcts::tree::SearchTree;
use crate::{Result, SearchError};

/// Below this the temperature is treated as zero.
const TEMPERATURE_EPS: f64 = 1e-6;

/// Dense policy vector of length `action_space_size`.
///
/// The entry for action `a` is `n_a^(1/temperature) / Σ n^(1/temperature)`
/// when a child with that action exists, 0 otherwise. Sums to 1 whenever the
/// node has at least one visited child; all-zero when the node is a leaf.
/// At temperature zero the vector is one-hot at the most-visited child.
pub fn policy<S>(
    tree: &SearchTree<S>,
    node: NodeIndex,
    temperature: f64,
    action_space_size: usize,
) -> Vec<f64> {
    let mut dense = vec![0.0; action_space_size];
    let children = &tree.node(node).children;
    if children.is_empty() {
        return dense;
    }

    if temperature < TEMPERATURE_EPS {
        if let Some(best) = argmax_by_visits(tree, node) {
            if let Some(action) = tree.node(best).action {
                dense[action] = 1.0;
            }
        }
        return dense;
    }

    let exponent = 1.0 / temperature;
    let mut sum = 0.0;
    for &child in children {
        sum += (tree.node(child).visits as f64).powf(exponent);
    }
    if sum == 0.0 {
        return dense;
    }
    for &child in children {
        if let Some(action) = tree.node(child).action {
            dense[action] = (tree.node(child).visits as f64).powf(exponent) / sum;
        }
    }
    dense
}

/// Samples one child with probability proportional to `n^(1/temperature)`.
///
/// Temperature zero selects the most-visited child deterministically.
/// Returns [`SearchError::UnexpandedLeaf`] when the node has no children.
pub fn best_child_to_play<S>(
    tree: &SearchTree<S>,
    node: NodeIndex,
    temperature: f64,
    rng: &mut impl Rng,
) -> Result<NodeIndex> {
    let children = &tree.node(node).children;
    if children.is_empty() {
        return Err(SearchError::UnexpandedLeaf);
    }

    if temperature < TEMPERATURE_EPS {
        return argmax_by_visits(tree, node).ok_or(SearchError::UnexpandedLeaf);
    }

    let exponent = 1.0 / temperature;
    let weights: Vec<f64> = children
        .iter()
        .map(|&c| (tree.node(c).visits as f64).powf(exponent))
        .collect();
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        // No child visited yet; nothing to weight by.
        return Ok(children[0]);
    }

    let mut draw = rng.random_range(0.0..total);
    for (&child, &w) in children.iter().zip(&weights) {
        if draw < w {
            return Ok(child);
        }
        draw -= w;
    }
    // Floating-point slack on the last interval.
    Ok(children[children.len() - 1])
}

/// Samples the next move from `node`, returning both the action and the
/// chosen child so the caller can advance the external game state and
/// optionally retain the child's subtree as the next search root.
pub fn play<S>(
    tree: &SearchTree<S>,
    node: NodeIndex,
    temperature: f64,
    rng: &mut impl Rng,
) -> Result<(usize, NodeIndex)> {
    let child = best_child_to_play(tree, node, temperature, rng)?;
    let action = tree
        .node(child)
        .action
        .ok_or(SearchError::UnexpandedLeaf)?;
    Ok((action, child))
}

/// Most-visited child, first maximal on ties.
fn argmax_by_visits<S>(tree: &SearchTree<S>, node: NodeIndex) -> Option<NodeIndex> {
    let children = &tree.node(node).children;
    let mut best: Option<NodeIndex> = None;
    let mut best_visits = 0u32;
    for &child in children {
        let visits = tree.node(child).visits;
        if best.is_none() || visits > best_visits {
            best = Some(child);
            best_visits = visits;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcts::node::Node;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Root with one child per `(action, visits)` pair.
    fn tree_with_visits(visits: &[(usize, u32)]) -> SearchTree<()> {
        let mut tree = SearchTree::new((), 0);
        let root = tree.root();
        for &(action, n) in visits {
            let child = tree.arena_mut().alloc(Node::child((), 1, root, action, 0.0));
            tree.node_mut(child).visits = n;
            tree.node_mut(root).children.push(child);
        }
        tree
    }

    #[test]
    fn leaf_policy_is_all_zeros() {
        let tree: SearchTree<()> = SearchTree::new((), 0);
        let dense = policy(&tree, tree.root(), 1.0, 4);
        assert_eq!(dense, vec![0.0; 4]);
    }

    #[test]
    fn unit_temperature_matches_visit_fractions() {
        let tree = tree_with_visits(&[(0, 6), (2, 3), (3, 1)]);
        let dense = policy(&tree, tree.root(), 1.0, 5);
        assert_eq!(dense.len(), 5);
        assert!((dense[0] - 0.6).abs() < 1e-9);
        assert_eq!(dense[1], 0.0);
        assert!((dense[2] - 0.3).abs() < 1e-9);
        assert!((dense[3] - 0.1).abs() < 1e-9);
        assert_eq!(dense[4], 0.0);
        assert!((dense.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn low_temperature_sharpens_towards_argmax() {
        let tree = tree_with_visits(&[(0, 6), (1, 4)]);
        let sharp = policy(&tree, tree.root(), 0.25, 2);
        let smooth = policy(&tree, tree.root(), 1.0, 2);
        assert!(sharp[0] > smooth[0]);
        assert!((sharp.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_temperature_policy_is_one_hot() {
        let tree = tree_with_visits(&[(0, 2), (1, 7), (2, 7)]);
        let dense = policy(&tree, tree.root(), 0.0, 3);
        // First maximal child wins the tie.
        assert_eq!(dense, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_temperature_sampling_is_deterministic() {
        let tree = tree_with_visits(&[(0, 2), (1, 9), (2, 5)]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (action, _) = play(&tree, tree.root(), 0.0, &mut rng).unwrap();
            assert_eq!(action, 1);
        }
    }

    #[test]
    fn unit_temperature_sampling_tracks_visit_shares() {
        let tree = tree_with_visits(&[(0, 80), (1, 20)]);
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 2000;
        let mut hits = 0;
        for _ in 0..draws {
            let (action, _) = play(&tree, tree.root(), 1.0, &mut rng).unwrap();
            if action == 0 {
                hits += 1;
            }
        }
        let share = hits as f64 / draws as f64;
        assert!((share - 0.8).abs() < 0.05, "share was {share}");
    }

    #[test]
    fn play_on_leaf_is_caller_error() {
        let tree: SearchTree<()> = SearchTree::new((), 0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_matches!(
            play(&tree, tree.root(), 1.0, &mut rng),
            Err(SearchError::UnexpandedLeaf)
        );
    }
}
