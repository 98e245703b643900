use radarcore::scan::{NetworkObservation, ScanSource};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for the simulated scan source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub network_count: usize,
    pub seed: u64,
    pub prefix: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            network_count: 3,
            seed: 0,
            prefix: "Network".into(),
        }
    }
}

/// Deterministic stand-in for the platform scan utility.
///
/// Each scan reseeds from the configured seed, so repeated scans report the
/// same networks with the same signals. A real radio source would implement
/// the same trait and replace this at the wiring level.
pub struct SimulatedScanSource {
    config: SimulatorConfig,
}

impl SimulatedScanSource {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }
}

impl ScanSource for SimulatedScanSource {
    fn scan(&self) -> Vec<NetworkObservation> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        (1..=self.config.network_count)
            .map(|index| {
                let signal = rng.gen_range(-90..=-30);
                NetworkObservation::new(format!("{}{}", self.config.prefix, index), signal)
            })
            .collect()
    }
}
