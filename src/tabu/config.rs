//! Tabu Search configuration.

use crate::error::ConfigError;

/// Which counter ends the search.
///
/// Both counters always advance; only the selected one is compared
/// against [`TabuConfig::threshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopPolicy {
    /// Stop after `threshold` iterations in total.
    #[default]
    Iterations,
    /// Stop after `threshold` consecutive iterations without a new best.
    Stagnation,
}

/// What the tabu list remembers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoryPolicy {
    /// Recently visited tours. A neighbor equal (position by position) to
    /// a remembered tour is forbidden.
    Solutions,
    /// Recently applied `(i, j)` move signatures. A neighbor produced by a
    /// remembered signature is forbidden.
    Moves {
        /// Admit a forbidden neighbor anyway if it is strictly cheaper
        /// than the best tour found so far.
        aspiration: bool,
    },
}

impl Default for MemoryPolicy {
    fn default() -> Self {
        MemoryPolicy::Moves { aspiration: true }
    }
}

/// How the neighborhood sampler draws its discard decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborhoodSeeding {
    /// Re-seed with [`TabuConfig::seed`] on every neighborhood call. The
    /// same `(i, j)` positions are dropped at every iteration.
    #[default]
    PerCall,
    /// Seed once per run and continue the stream across iterations, so a
    /// different subset is dropped each time.
    Continuous,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::{MemoryPolicy, StopPolicy, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_stop_policy(StopPolicy::Stagnation)
///     .with_threshold(100)
///     .with_memory_capacity(10)
///     .with_memory(MemoryPolicy::Solutions)
///     .with_discard_probability(0.25);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.threshold, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Counter compared against `threshold`.
    pub stop_policy: StopPolicy,
    /// Iteration (or stagnation) limit. Must be positive.
    pub threshold: usize,
    /// Number of entries held by the tabu list. Must be positive.
    pub memory_capacity: usize,
    /// Probability in `[0, 1]` that a 2-opt move is left out of the
    /// neighborhood.
    pub discard_probability: f64,
    /// What the tabu list stores.
    pub memory: MemoryPolicy,
    /// Seed of the discard stream.
    pub seed: u64,
    /// Whether the discard stream restarts at every iteration.
    pub seeding: NeighborhoodSeeding,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            stop_policy: StopPolicy::Iterations,
            threshold: 500,
            memory_capacity: 7,
            discard_probability: 0.0,
            memory: MemoryPolicy::default(),
            seed: 42,
            seeding: NeighborhoodSeeding::PerCall,
        }
    }
}

impl TabuConfig {
    /// Sets the stopping policy.
    pub fn with_stop_policy(mut self, policy: StopPolicy) -> Self {
        self.stop_policy = policy;
        self
    }

    /// Sets the stopping threshold.
    pub fn with_threshold(mut self, n: usize) -> Self {
        self.threshold = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_memory_capacity(mut self, k: usize) -> Self {
        self.memory_capacity = k;
        self
    }

    /// Sets the probability of dropping each 2-opt move.
    pub fn with_discard_probability(mut self, p: f64) -> Self {
        self.discard_probability = p;
        self
    }

    /// Sets the memory policy.
    pub fn with_memory(mut self, memory: MemoryPolicy) -> Self {
        self.memory = memory;
        self
    }

    /// Sets the discard stream seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets how the discard stream is seeded.
    pub fn with_seeding(mut self, seeding: NeighborhoodSeeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_capacity == 0 {
            return Err(ConfigError::ZeroMemoryCapacity);
        }
        if self.threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if !(0.0..=1.0).contains(&self.discard_probability) {
            return Err(ConfigError::InvalidDiscardProbability(
                self.discard_probability,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.stop_policy, StopPolicy::Iterations);
        assert_eq!(config.threshold, 500);
        assert_eq!(config.memory_capacity, 7);
        assert_eq!(config.discard_probability, 0.0);
        assert_eq!(config.memory, MemoryPolicy::Moves { aspiration: true });
        assert_eq!(config.seed, 42);
        assert_eq!(config.seeding, NeighborhoodSeeding::PerCall);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_stop_policy(StopPolicy::Stagnation)
            .with_threshold(30)
            .with_memory_capacity(3)
            .with_discard_probability(0.5)
            .with_memory(MemoryPolicy::Moves { aspiration: false })
            .with_seed(7)
            .with_seeding(NeighborhoodSeeding::Continuous);

        assert_eq!(config.stop_policy, StopPolicy::Stagnation);
        assert_eq!(config.threshold, 30);
        assert_eq!(config.memory_capacity, 3);
        assert_eq!(config.discard_probability, 0.5);
        assert_eq!(config.memory, MemoryPolicy::Moves { aspiration: false });
        assert_eq!(config.seed, 7);
        assert_eq!(config.seeding, NeighborhoodSeeding::Continuous);
    }

    #[test]
    fn test_validate_zero_capacity() {
        let config = TabuConfig::default().with_memory_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMemoryCapacity));
    }

    #[test]
    fn test_validate_zero_threshold() {
        let config = TabuConfig::default().with_threshold(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreshold));
    }

    #[test]
    fn test_validate_discard_probability() {
        for p in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let config = TabuConfig::default().with_discard_probability(p);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidDiscardProbability(_))
            ));
        }
        for p in [0.0, 0.5, 1.0] {
            let config = TabuConfig::default().with_discard_probability(p);
            assert!(config.validate().is_ok());
        }
    }
}
