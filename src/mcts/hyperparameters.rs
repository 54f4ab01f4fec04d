//! MCTS Hyperparameters Configuration
//!
//! This module defines all tunable hyperparameters for the search driver.
//! Defaults follow the usual AlphaZero settings: 800 simulations, unit
//! temperature, exploration constant 1.0, root noise disabled.

use serde::{Deserialize, Serialize};

/// Search hyperparameters configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MctsHyperparameters {
    /// Exploration constant in the PUCT formula.
    /// Higher values = more exploration.
    /// Default: 1.0
    pub c_puct: f64,

    /// Fixed simulation budget per search invocation.
    /// Default: 800
    pub num_simulations: usize,

    /// Temperature converting visit counts into the move distribution.
    /// 0 selects the most-visited move deterministically.
    /// Default: 1.0
    pub temperature: f64,

    /// Dirichlet concentration for root-prior noise.
    /// Default: 0.3
    pub dirichlet_alpha: f64,

    /// Mixing weight ε for root-prior noise:
    /// `prior ← (1-ε)·prior + ε·noise`. 0 disables noise entirely.
    /// Default: 0.0
    pub dirichlet_weight: f64,
}

impl Default for MctsHyperparameters {
    fn default() -> Self {
        Self {
            c_puct: 1.0,
            num_simulations: 800,
            temperature: 1.0,
            dirichlet_alpha: 0.3,
            dirichlet_weight: 0.0,
        }
    }
}

impl MctsHyperparameters {
    /// Whether root-prior noise is active.
    pub fn root_noise_enabled(&self) -> bool {
        self.dirichlet_weight > 0.0
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.c_puct <= 0.0 {
            return Err(format!("c_puct must be positive, got {}", self.c_puct));
        }
        if self.num_simulations == 0 {
            return Err("num_simulations must be at least 1".to_string());
        }
        if self.temperature < 0.0 {
            return Err(format!(
                "temperature must be non-negative, got {}",
                self.temperature
            ));
        }
        if self.dirichlet_alpha <= 0.0 {
            return Err(format!(
                "dirichlet_alpha must be positive, got {}",
                self.dirichlet_alpha
            ));
        }
        if !(0.0..=1.0).contains(&self.dirichlet_weight) {
            return Err(format!(
                "dirichlet_weight must be in [0, 1], got {}",
                self.dirichlet_weight
            ));
        }
        Ok(())
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "c_puct[{:.2}]_sims[{}]_temp[{:.2}]_dirichlet[{:.2},{:.2}]",
            self.c_puct,
            self.num_simulations,
            self.temperature,
            self.dirichlet_alpha,
            self.dirichlet_weight
        )
    }
}
