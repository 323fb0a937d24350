//! Simulation configuration.

/// Trials per configuration when nothing else is asked for.
pub const DEFAULT_NUM_SIMULATIONS: u32 = 10_000;

/// (doors, reveals) pairs shown in the default 2x2 grid.
pub const DEFAULT_CONFIGURATIONS: [(usize, usize); 4] = [(3, 1), (20, 18), (50, 48), (100, 98)];

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of trials played for every configuration
    pub num_simulations: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// (num_doors, doors_to_reveal) pairs, validated when the run starts
    pub configurations: Vec<(usize, usize)>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            seed: None,
            configurations: DEFAULT_CONFIGURATIONS.to_vec(),
        }
    }
}

impl SimConfig {
    /// The three-door, one-reveal game on its own
    pub fn classic(num_simulations: u32) -> Self {
        Self {
            num_simulations,
            configurations: vec![(3, 1)],
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_literal_configurations() {
        let config = SimConfig::default();
        assert_eq!(config.num_simulations, 10_000);
        assert_eq!(config.seed, None);
        assert_eq!(
            config.configurations,
            vec![(3, 1), (20, 18), (50, 48), (100, 98)]
        );
    }

    #[test]
    fn test_classic_preset() {
        let config = SimConfig::classic(500).with_seed(4);
        assert_eq!(config.num_simulations, 500);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.configurations, vec![(3, 1)]);
    }
}
