//! Financial Planner - Deterministic multi-year personal finance projections
//!
//! This library provides:
//! - Growth, inflation and loan amortization primitives
//! - Scenario configuration with validation and JSON persistence
//! - Independent projectors for cash, stocks, real estate and income
//! - A year-by-year aggregator producing nominal and real net worth
//! - Bank transaction categorization and historical living-expense baselines

pub mod config;
pub mod error;
pub mod growth;
pub mod loans;
pub mod projection;
pub mod scenario;
pub mod transactions;

// Re-export commonly used types
pub use config::{load_scenario, save_scenario, ScenarioConfig};
pub use error::{ConfigurationError, PlannerError};
pub use projection::{
    run_scenario, ProjectionEngine, ProjectionSettings, ResultsTimeseries, ScenarioRunResult,
    SummaryMetrics, YearRow,
};
pub use scenario::ScenarioRunner;
