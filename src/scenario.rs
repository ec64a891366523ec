//! Scenario runner for validated single and batch projections
//!
//! Validates each scenario before handing it to the engine; independent
//! scenarios run in parallel on the rayon pool.

use rayon::prelude::*;

use crate::config::ScenarioConfig;
use crate::error::PlannerError;
use crate::projection::{ProjectionEngine, ProjectionSettings, ScenarioRunResult, SummaryMetrics};

/// Validate-then-project front end to [`ProjectionEngine`]
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&config)?;
///
/// // Compare several scenarios side by side
/// let summaries = runner.compare(&[baseline, buy_flat, rent_longer])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner with default projection settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ProjectionSettings) -> Self {
        Self {
            engine: ProjectionEngine::new(settings),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Validate and project a single scenario
    pub fn run(&self, config: &ScenarioConfig) -> Result<ScenarioRunResult, PlannerError> {
        config.validate().map_err(|errors| PlannerError::Validation {
            name: config.name.clone(),
            errors,
        })?;
        Ok(self.engine.run(config)?)
    }

    /// Run independent scenarios in parallel; results keep input order
    pub fn run_batch(&self, configs: &[ScenarioConfig]) -> Vec<Result<ScenarioRunResult, PlannerError>> {
        configs.par_iter().map(|config| self.run(config)).collect()
    }

    /// Summaries of every scenario, failing on the first invalid one
    pub fn compare(&self, configs: &[ScenarioConfig]) -> Result<Vec<SummaryMetrics>, PlannerError> {
        self.run_batch(configs)
            .into_iter()
            .map(|result| result.map(|r| r.summary))
            .collect()
    }

    /// Re-run one scenario under different inflation assumptions
    pub fn run_inflation_variants(
        &self,
        base: &ScenarioConfig,
        inflation_rates: &[f64],
    ) -> Vec<Result<ScenarioRunResult, PlannerError>> {
        let variants: Vec<ScenarioConfig> = inflation_rates
            .iter()
            .map(|rate| {
                base.clone()
                    .with_inflation(*rate)
                    .with_description(format!("{} (inflation {:.2}%)", base.description, rate * 100.0))
            })
            .collect();
        self.run_batch(&variants)
    }
}
