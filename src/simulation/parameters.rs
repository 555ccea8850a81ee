//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// Default maximum number of individuals a run may hold.
pub const DEFAULT_MAX_POPULATION: usize = 750;

/// Parameters for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum population; seeding fails when the requested total meets or
    /// exceeds this bound and generations are truncated to it
    pub max_population: usize,
    /// Number of generations to advance in `run`
    pub generations: usize,
    /// Random seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration.
    ///
    /// # Errors
    /// Fails if `max_population` is zero.
    pub fn new(
        max_population: usize,
        generations: usize,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if max_population == 0 {
            return Err(SimulationError::InvalidConfig(
                "max_population must be positive".to_string(),
            ));
        }
        Ok(Self {
            max_population,
            generations,
            seed,
        })
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_population: DEFAULT_MAX_POPULATION,
            generations: 10,
            seed: None,
        }
    }
}
