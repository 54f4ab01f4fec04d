//! End-to-end search behaviour over the tic-tac-toe demo game.

use rand::rngs::StdRng;
use rand::SeedableRng;

use puct_mcts::evaluator::UniformEvaluator;
use puct_mcts::game::tic_tac_toe::{Board, TicTacToe};
use puct_mcts::mcts::algorithm::search;
use puct_mcts::mcts::hyperparameters::MctsHyperparameters;
use puct_mcts::mcts::policy::play;
use puct_mcts::mcts::tree::SearchTree;
use puct_mcts::rules::GameRules;

fn params(num_simulations: usize, temperature: f64) -> MctsHyperparameters {
    MctsHyperparameters {
        num_simulations,
        temperature,
        ..Default::default()
    }
}

#[test]
fn opening_policy_covers_all_legal_moves() {
    let rules = TicTacToe::new();
    let evaluator = UniformEvaluator::new(9);
    let mut tree = SearchTree::new(TicTacToe::initial_state(), 0);
    let mut rng = StdRng::seed_from_u64(11);

    let policy = search(&mut tree, &rules, &evaluator, &params(200, 1.0), &mut rng).unwrap();

    assert_eq!(policy.len(), 9);
    assert!((policy.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    for p in &policy {
        assert!(*p >= 0.0);
    }
}

#[test]
fn immediate_win_is_taken_at_zero_temperature() {
    // X holds cells 0 and 1; cell 2 wins on the spot.
    let rules = TicTacToe::new();
    let evaluator = UniformEvaluator::new(9);
    let mut board = Board::empty();
    board.cells[0] = Some(0);
    board.cells[1] = Some(0);
    board.cells[3] = Some(1);
    board.cells[4] = Some(1);
    // Block O's counter-line so the only tactical point is the win itself.
    board.cells[5] = Some(0);
    board.to_move = 0;

    let mut tree = SearchTree::new(board, 0);
    let mut rng = StdRng::seed_from_u64(12);

    search(&mut tree, &rules, &evaluator, &params(400, 0.0), &mut rng).unwrap();
    let (action, _) = play(&tree, tree.root(), 0.0, &mut rng).unwrap();
    assert_eq!(action, 2);
}

#[test]
fn self_play_reaches_a_terminal_position() {
    let rules = TicTacToe::new();
    let evaluator = UniformEvaluator::new(9);
    let search_params = params(100, 1.0);
    let mut rng = StdRng::seed_from_u64(13);

    let mut state = TicTacToe::initial_state();
    let mut tree = SearchTree::new(state.clone(), 0);
    let mut plies = 0;

    while !rules.is_terminal(&state) {
        search(&mut tree, &rules, &evaluator, &search_params, &mut rng).unwrap();
        let (action, _) = play(&tree, tree.root(), search_params.temperature, &mut rng).unwrap();
        assert!(rules.is_legal(action, &state));

        state = rules.transition(&state, action).unwrap();
        rules.advance_player(&mut state);
        if !tree.advance_root(action) {
            tree.reinit(state.clone(), state.to_move);
        }

        plies += 1;
        assert!(plies <= 9, "game ran past the board size");
    }

    assert!(state.winner().is_some() || state.is_full());
}

#[test]
fn retained_subtree_matches_fresh_state() {
    let rules = TicTacToe::new();
    let evaluator = UniformEvaluator::new(9);
    let search_params = params(50, 1.0);
    let mut rng = StdRng::seed_from_u64(14);

    let mut state = TicTacToe::initial_state();
    let mut tree = SearchTree::new(state.clone(), 0);

    search(&mut tree, &rules, &evaluator, &search_params, &mut rng).unwrap();
    let (action, _) = play(&tree, tree.root(), 1.0, &mut rng).unwrap();

    state = rules.transition(&state, action).unwrap();
    rules.advance_player(&mut state);
    assert!(tree.advance_root(action));

    // The retained root must describe exactly the externally advanced game.
    assert_eq!(tree.node(tree.root()).state, state);
    assert_eq!(tree.node(tree.root()).to_play, state.to_move);
}
