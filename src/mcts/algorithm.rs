//! Search driver: the select → expand-and-evaluate → backup loop.
//!
//! Runs a fixed simulation budget on the tree's current root, then converts
//! the root's visit counts into a move distribution. Fully single-threaded
//! and synchronous; the only stopping condition is the budget.

use rand::Rng;
use rand_distr::{Distribution, Gamma};

use crate::evaluator::Evaluator;
use crate::mcts::arena::NodeIndex;
use crate::mcts::backup::backup;
use crate::mcts::expansion::expand_and_evaluate;
use crate::mcts::hyperparameters::MctsHyperparameters;
use crate::mcts::policy::policy;
use crate::mcts::selection::select;
use crate::mcts::tree::SearchTree;
use crate::rules::GameRules;
use crate::Result;

/// Runs the full simulation budget on the tree's current root and returns
/// the dense move distribution extracted from the root's visit counts.
///
/// With `dirichlet_weight > 0` the root's children priors are perturbed
/// with a Dirichlet draw before the bulk of the budget runs, the usual
/// self-play exploration device. Evaluator and rules failures abort the
/// search and surface to the caller.
pub fn search<R, E>(
    tree: &mut SearchTree<R::State>,
    rules: &R,
    evaluator: &E,
    params: &MctsHyperparameters,
    rng: &mut impl Rng,
) -> Result<Vec<f64>>
where
    R: GameRules,
    E: Evaluator<R::State>,
{
    let root = tree.root();
    let mut remaining = params.num_simulations;

    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "[Search] starting: {} root_visits={}",
            params.to_config_string(),
            tree.node(root).visits
        );
    }

    if params.root_noise_enabled() {
        // Noise applies to children priors, so the root must be expanded
        // first. A fresh root consumes one simulation for that.
        if tree.node(root).is_leaf() && !rules.is_terminal(&tree.node(root).state) && remaining > 0
        {
            expand_and_evaluate(tree, root, rules, evaluator)?;
            backup(tree, root);
            remaining -= 1;
        }
        apply_root_noise(tree, root, params, rng);
    }

    for _ in 0..remaining {
        let leaf = select(tree, root, params.c_puct);
        expand_and_evaluate(tree, leaf, rules, evaluator)?;
        backup(tree, leaf);
    }

    log::debug!(
        "[Search] done: root_visits={} nodes={}",
        tree.node(root).visits,
        tree.arena().len()
    );

    Ok(policy(
        tree,
        root,
        params.temperature,
        rules.action_space_size(),
    ))
}

/// Mixes a Dirichlet draw into the root's children priors:
/// `prior ← (1-ε)·prior + ε·noise`.
///
/// The draw is built from per-child Gamma(α, 1) samples normalized to sum
/// to one, which is the standard construction for a Dirichlet sample of
/// dynamic length.
fn apply_root_noise<S>(
    tree: &mut SearchTree<S>,
    root: NodeIndex,
    params: &MctsHyperparameters,
    rng: &mut impl Rng,
) {
    let children = tree.node(root).children.clone();
    if children.len() < 2 {
        return;
    }
    let gamma = match Gamma::new(params.dirichlet_alpha, 1.0) {
        Ok(g) => g,
        Err(e) => {
            log::warn!("[Search] skipping root noise: {e}");
            return;
        }
    };

    let mut noise: Vec<f64> = (0..children.len()).map(|_| gamma.sample(rng)).collect();
    let sum: f64 = noise.iter().sum();
    if sum <= 0.0 {
        return;
    }
    for n in &mut noise {
        *n /= sum;
    }

    let eps = params.dirichlet_weight;
    for (&child, &n) in children.iter().zip(&noise) {
        let node = tree.node_mut(child);
        node.prior = ((1.0 - eps) * node.prior as f64 + eps * n) as f32;
    }
}
