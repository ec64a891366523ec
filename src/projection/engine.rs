//! Scenario aggregation engine
//!
//! Projects every component of a scenario independently, then walks the
//! horizon year by year summing the precomputed series into one row per year.
//! The engine assumes validated input and holds no state between runs.

use chrono::{Local, NaiveDate};
use log::{debug, info, warn};

use super::components::ComponentProjections;
use super::timeseries::{ResultsTimeseries, ScenarioRunResult, YearRow};
use crate::config::ScenarioConfig;
use crate::error::ConfigurationError;
use crate::growth::{apply_inflation, discount_to_present_value};
use crate::loans::DEFAULT_PAYMENTS_PER_YEAR;

/// Living expenses (today's money) used when a scenario sets none
pub const DEFAULT_ANNUAL_LIVING_EXPENSES: f64 = 30_000.0;

/// Tuning for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSettings {
    /// Fallback for `baseAnnualLivingExpenses`
    pub default_living_expenses: f64,

    /// Mortgage payment frequency for real estate
    pub mortgage_payments_per_year: u32,

    /// Project components on the rayon pool
    pub parallel_components: bool,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            default_living_expenses: DEFAULT_ANNUAL_LIVING_EXPENSES,
            mortgage_payments_per_year: DEFAULT_PAYMENTS_PER_YEAR,
            parallel_components: true,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    settings: ProjectionSettings,
}

impl ProjectionEngine {
    /// A payment frequency of 0 is raised to one payment a year
    pub fn new(mut settings: ProjectionSettings) -> Self {
        settings.mortgage_payments_per_year = settings.mortgage_payments_per_year.max(1);
        Self { settings }
    }

    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    /// Run the full projection for one scenario.
    ///
    /// Fails only when the inflation rate makes real-value discounting
    /// undefined (a rate of exactly -1).
    pub fn run(&self, config: &ScenarioConfig) -> Result<ScenarioRunResult, ConfigurationError> {
        info!(
            "Projecting scenario '{}' over {} years ({} components)",
            config.name,
            config.horizon_years,
            config.component_count()
        );

        for property in &config.real_estate_investments {
            if property.is_rental && property.is_primary_residence {
                warn!(
                    "Property '{}' is flagged both rental and primary residence; treating as rental",
                    property.name
                );
            }
        }

        let start_date = config
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());
        let components = ComponentProjections::build(config, &self.settings, start_date);

        let mut timeseries = ResultsTimeseries::with_capacity(config.horizon_years as usize);
        for year in 1..=config.horizon_years {
            timeseries.add_row(self.project_year(config, &components, year)?);
        }

        let summary = timeseries.summary(&config.name, config.horizon_years);
        info!(
            "Scenario '{}' complete: ending net worth {:.2} nominal, {:.2} real",
            config.name, summary.ending_net_worth_nominal, summary.ending_net_worth_real
        );

        Ok(ScenarioRunResult {
            timeseries,
            summary,
            components,
        })
    }

    /// Aggregate one year from the precomputed component series
    fn project_year(
        &self,
        config: &ScenarioConfig,
        components: &ComponentProjections,
        year: u32,
    ) -> Result<YearRow, ConfigurationError> {
        let inflation = config.general_annual_inflation_rate;
        let mut row = YearRow::new(year);

        // Balance sheet
        row.assets_cash_nominal = components.total_cash(year);
        row.assets_stocks_nominal = components.total_stocks(year);
        row.assets_real_estate_equity_nominal = components.total_real_estate_equity(year);
        row.total_assets_nominal =
            row.assets_cash_nominal + row.assets_stocks_nominal + row.assets_real_estate_equity_nominal;
        row.total_liabilities_nominal = components.total_real_estate_debt(year);
        row.net_worth_nominal = row.total_assets_nominal - row.total_liabilities_nominal;

        // Flows
        row.income_sources_total_nominal = components.total_income(year);
        row.real_estate_net_cashflow_nominal = components.total_real_estate_cash_flow(year);
        row.major_expenses_scheduled_nominal = major_expenses_in_year(config, year);
        row.annual_living_expenses_nominal = apply_inflation(
            config
                .base_annual_living_expenses
                .unwrap_or(self.settings.default_living_expenses),
            inflation,
            year,
        );
        row.net_annual_cash_flow_est_nominal = row.income_sources_total_nominal
            + row.real_estate_net_cashflow_nominal
            - row.annual_living_expenses_nominal
            - row.major_expenses_scheduled_nominal;

        // Today's money
        row.net_worth_real = discount_to_present_value(row.net_worth_nominal, inflation, year)?;
        row.total_assets_real = discount_to_present_value(row.total_assets_nominal, inflation, year)?;
        row.income_sources_total_real =
            discount_to_present_value(row.income_sources_total_nominal, inflation, year)?;
        row.annual_living_expenses_real =
            discount_to_present_value(row.annual_living_expenses_nominal, inflation, year)?;

        debug!(
            "Year {}: assets {:.2}, liabilities {:.2}, net cash flow {:.2}",
            year, row.total_assets_nominal, row.total_liabilities_nominal, row.net_annual_cash_flow_est_nominal
        );

        Ok(row)
    }
}

/// Inflated sum of the major expenses scheduled for exactly `year`
fn major_expenses_in_year(config: &ScenarioConfig, year: u32) -> f64 {
    config
        .major_expenses
        .iter()
        .filter(|e| e.year_of_expense == year)
        .map(|e| apply_inflation(e.amount, config.general_annual_inflation_rate, year))
        .sum()
}

/// Run a scenario with default settings
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioRunResult, ConfigurationError> {
    ProjectionEngine::default().run(config)
}

/// Run with a fixed amortization start date (handy when schedule dates matter to the caller)
pub fn run_scenario_from(
    config: &ScenarioConfig,
    start_date: NaiveDate,
) -> Result<ScenarioRunResult, ConfigurationError> {
    let mut dated = config.clone();
    dated.start_date = Some(start_date);
    run_scenario(&dated)
}
