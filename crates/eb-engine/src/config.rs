//! Configuration for a bracket session.

/// Configuration for the match simulator and session.
#[derive(Debug, Clone)]
pub struct BracketConfig {
    /// RNG seed for reproducible simulations and scorer picks.
    pub seed: u64,
    /// Probability (0.0-1.0) that a simulated match goes to penalties.
    pub shootout_chance: f64,
    /// Upper bound (inclusive, at least 1) of simulated total goals.
    pub max_total_goals: u32,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shootout_chance: 0.10,
            max_total_goals: 5,
        }
    }
}

impl BracketConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the shootout probability (clamped to 0.0-1.0).
    pub fn with_shootout_chance(mut self, chance: f64) -> Self {
        self.shootout_chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the maximum simulated total goals (at least 1).
    ///
    /// With a maximum of 0 every draw would be 0-0 and the simulator could
    /// never produce a decisive score.
    pub fn with_max_total_goals(mut self, max: u32) -> Self {
        self.max_total_goals = max.max(1);
        self
    }
}
