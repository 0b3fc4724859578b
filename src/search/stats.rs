//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one alpha-beta search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior and leaf nodes visited.
    pub nodes_visited: u64,

    /// Leaf evaluations performed (terminal or depth-zero nodes).
    pub leaf_evals: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// 1 if the noise escape hatch replaced the search with a random
    /// move, 0 otherwise.
    pub random_moves: u32,

    /// Configured search depth for this run.
    pub depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visited nodes that were pruned exits.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes_visited as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.cutoffs, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 1000;
        stats.time_us = 1_000_000; // 1 second

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_cutoff_rate() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.cutoffs = 25;

        assert_eq!(stats.cutoff_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.cutoffs = 50;

        stats.reset();

        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.nodes_visited, deserialized.nodes_visited);
    }
}
