//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Difficulty levels exposed to hosts.
///
/// Each level maps to a fixed search depth in plies; Easy additionally
/// plays a uniformly random move with fixed probability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies for this difficulty.
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Probability of skipping the search for a random move.
    #[must_use]
    pub const fn noise_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium | Difficulty::Hard => 0.0,
        }
    }
}

/// Alpha-beta search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in plies.
    pub depth: u32,

    /// Probability of playing a uniformly random legal move instead of
    /// searching (easy-mode behavior). 0.0 disables the escape hatch.
    pub noise_probability: f64,

    /// Chebyshev radius for the relevance filter on placement games:
    /// candidate placements farther than this from every existing stone
    /// are excluded from search. `None` disables the filter.
    pub relevance_radius: Option<u8>,

    /// Random seed for the noise RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Difficulty::Medium.depth(),
            noise_probability: 0.0,
            relevance_radius: None,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a config from a difficulty level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            noise_probability: difficulty.noise_probability(),
            ..Self::default()
        }
    }

    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom noise probability.
    #[must_use]
    pub fn with_noise(mut self, probability: f64) -> Self {
        self.noise_probability = probability;
        self
    }

    /// Create a new config with a relevance filter radius.
    #[must_use]
    pub fn with_relevance_radius(mut self, radius: u8) -> Self {
        self.relevance_radius = Some(radius);
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
