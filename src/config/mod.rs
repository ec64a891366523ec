//! Scenario configuration: input structures, validation and JSON persistence

mod params;
mod validation;
mod loader;

pub use params::{
    CashHoldingParams, IncomeSourceParams, MajorExpenseParams, PropertyUse, RealEstateParams,
    ScenarioConfig, StockInvestmentParams,
};
pub use validation::{ValidationResult, MAX_HORIZON_YEARS, MAX_MORTGAGE_TERM_YEARS};
pub use loader::{load_scenario, load_scenario_from_reader, save_scenario, DEFAULT_SCENARIO_DIR};
