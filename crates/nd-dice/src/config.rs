//! Configuration for a rolling session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a rolling session.
#[derive(Debug, Clone)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether output should be coloured.
    pub color: bool,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
        }
    }
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable coloured output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Build the random source for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
