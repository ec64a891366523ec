//! Component projectors and the year-by-year scenario aggregator

mod components;
mod engine;
mod timeseries;

pub use components::{
    project_cash, project_income, project_real_estate, project_stocks, ComponentProjections,
    RealEstateProjection, RentalCashFlow,
};
pub use engine::{
    run_scenario, run_scenario_from, ProjectionEngine, ProjectionSettings, DEFAULT_ANNUAL_LIVING_EXPENSES,
};
pub use timeseries::{ResultsTimeseries, ScenarioRunResult, SummaryMetrics, YearRow};
