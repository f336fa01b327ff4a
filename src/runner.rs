//! Drives generation and measurement across the configured sizes.

use tracing::{info, info_span};

use crate::config::RunConfig;
use crate::generator::InputGenerator;
use crate::measure::{measure, Measurement};
use crate::strategy::Strategy;

pub struct Runner {
    config: RunConfig,
    generator: InputGenerator,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self::with_generator(config, InputGenerator::new())
    }

    pub fn with_generator(config: RunConfig, generator: InputGenerator) -> Self {
        Self { config, generator }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Measures every strategy at every size, reporting each result as it completes.
    ///
    /// The sequence for a size is generated once and shared, unchanged, by all
    /// strategies at that size.
    pub fn run_with<F: FnMut(&Measurement)>(&mut self, mut report: F) {
        for &size in self.config.sizes() {
            let _span = info_span!("size", %size).entered();
            let items = self.generator.generate(size);
            let iterations = self.config.iterations_for(size);

            for strategy in Strategy::ALL {
                let measurement = measure(strategy, &items, size, iterations);
                info!(
                    strategy = strategy.name(),
                    iterations,
                    ns_per_op = measurement.nanos_per_op(),
                    "strategy measured"
                );
                report(&measurement);
            }
        }
    }

    pub fn run(&mut self) -> Vec<Measurement> {
        let mut results = Vec::new();
        self.run_with(|m| results.push(m.clone()));
        results
    }
}
