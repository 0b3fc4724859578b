//! Engine configuration: variant, difficulty, seed, noise.

use serde::{Deserialize, Serialize};

use crate::rules::Variant;
use crate::search::Difficulty;

/// Engine configuration.
///
/// This is the whole host-facing configuration surface: which game to
/// play, how hard the built-in opponent searches, and an optional
/// override of the difficulty's noise probability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which game variant to play.
    pub variant: Variant,

    /// Default difficulty for `best_move`.
    pub difficulty: Difficulty,

    /// Seed for the engine RNG (noise reproducibility).
    pub seed: u64,

    /// Override of the difficulty's noise probability, if set.
    pub noise_probability: Option<f64>,
}

impl EngineConfig {
    /// Create a config for a variant with default settings.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            difficulty: Difficulty::Medium,
            seed: 42,
            noise_probability: None,
        }
    }

    /// Create a new config with custom difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config overriding the noise probability.
    #[must_use]
    pub fn with_noise(mut self, probability: f64) -> Self {
        self.noise_probability = Some(probability);
        self
    }
}
