//! Self-play CLI harness: runs PUCT search over the demo tic-tac-toe game
//! with the uniform stub evaluator and prints each move as it is played.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use puct_mcts::evaluator::UniformEvaluator;
use puct_mcts::game::tic_tac_toe::TicTacToe;
use puct_mcts::mcts::algorithm::search;
use puct_mcts::mcts::hyperparameters::MctsHyperparameters;
use puct_mcts::mcts::inspect::dump_tree;
use puct_mcts::mcts::policy::play;
use puct_mcts::mcts::tree::SearchTree;
use puct_mcts::rules::GameRules;
use puct_mcts::setup_logging;

#[derive(Parser, Debug)]
#[command(name = "puct-mcts")]
struct Config {
    /// Number of simulations per move
    #[arg(short = 's', long, default_value_t = 800)]
    num_simulations: usize,

    /// Sampling temperature (0 = deterministic argmax)
    #[arg(short = 't', long, default_value_t = 1.0)]
    temperature: f64,

    /// Exploration constant
    #[arg(long, default_value_t = 1.0)]
    c_puct: f64,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding all hyperparameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the visited tree after each search
    #[arg(long, default_value_t = false)]
    dump_tree: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();
    let config = Config::parse();

    let params = match &config.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        }
        None => MctsHyperparameters {
            num_simulations: config.num_simulations,
            temperature: config.temperature,
            c_puct: config.c_puct,
            ..Default::default()
        },
    };
    params.validate().map_err(std::io::Error::other)?;
    log::info!("self-play with {}", params.to_config_string());

    let rules = TicTacToe::new();
    let evaluator = UniformEvaluator::new(rules.action_space_size());
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => rand::make_rng(),
    };

    let mut state = TicTacToe::initial_state();
    let mut tree = SearchTree::new(state.clone(), state.to_move);
    let mut ply = 0;

    while !rules.is_terminal(&state) {
        search(&mut tree, &rules, &evaluator, &params, &mut rng)?;
        if config.dump_tree {
            println!("{}", dump_tree(&tree, tree.root()));
        }

        let (action, _child) = play(&tree, tree.root(), params.temperature, &mut rng)?;
        state = rules.transition(&state, action)?;
        rules.advance_player(&mut state);
        ply += 1;

        println!("ply {ply}: player {} -> cell {action}", 1 - state.to_move);
        println!("{state}\n");

        // Retain the played subtree when possible.
        if !tree.advance_root(action) {
            tree.reinit(state.clone(), state.to_move);
        }
    }

    match state.winner() {
        Some(0) => println!("X wins"),
        Some(_) => println!("O wins"),
        None => println!("draw"),
    }

    Ok(())
}
