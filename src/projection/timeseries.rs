//! Year-by-year projection output and its summary

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::components::ComponentProjections;
use crate::error::PlannerError;

/// One projected year, amounts in nominal money unless the field says `real`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    pub year: u32,

    // Balance sheet
    pub net_worth_nominal: f64,
    pub net_worth_real: f64,
    pub total_assets_nominal: f64,
    pub total_assets_real: f64,
    pub assets_cash_nominal: f64,
    pub assets_stocks_nominal: f64,
    pub assets_real_estate_equity_nominal: f64,
    pub total_liabilities_nominal: f64,

    // Flows
    pub income_sources_total_nominal: f64,
    pub income_sources_total_real: f64,
    pub real_estate_net_cashflow_nominal: f64,
    pub annual_living_expenses_nominal: f64,
    pub annual_living_expenses_real: f64,
    pub major_expenses_scheduled_nominal: f64,

    /// Reported only; never reinvested into any component
    pub net_annual_cash_flow_est_nominal: f64,
}

impl YearRow {
    pub fn new(year: u32) -> Self {
        Self {
            year,
            net_worth_nominal: 0.0,
            net_worth_real: 0.0,
            total_assets_nominal: 0.0,
            total_assets_real: 0.0,
            assets_cash_nominal: 0.0,
            assets_stocks_nominal: 0.0,
            assets_real_estate_equity_nominal: 0.0,
            total_liabilities_nominal: 0.0,
            income_sources_total_nominal: 0.0,
            income_sources_total_real: 0.0,
            real_estate_net_cashflow_nominal: 0.0,
            annual_living_expenses_nominal: 0.0,
            annual_living_expenses_real: 0.0,
            major_expenses_scheduled_nominal: 0.0,
            net_annual_cash_flow_est_nominal: 0.0,
        }
    }
}

/// Ordered projection rows, one per year starting at year 1
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsTimeseries {
    rows: Vec<YearRow>,
}

impl ResultsTimeseries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            rows: Vec::with_capacity(years),
        }
    }

    pub fn add_row(&mut self, row: YearRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[YearRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&YearRow> {
        self.rows.last()
    }

    /// Row for a given projection year
    pub fn row(&self, year: u32) -> Option<&YearRow> {
        self.rows.iter().find(|r| r.year == year)
    }

    /// Net worth (nominal) per year, in row order
    pub fn net_worth_nominal(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.net_worth_nominal).collect()
    }

    /// Terminal snapshot; monetary fields are zero for an empty timeseries
    pub fn summary(&self, scenario_name: &str, horizon_years: u32) -> SummaryMetrics {
        let last = self.rows.last();

        SummaryMetrics {
            scenario_name: scenario_name.to_string(),
            ending_net_worth_nominal: last.map(|r| r.net_worth_nominal).unwrap_or(0.0),
            ending_net_worth_real: last.map(|r| r.net_worth_real).unwrap_or(0.0),
            horizon_years,
            total_major_expenses_nominal: self
                .rows
                .iter()
                .map(|r| r.major_expenses_scheduled_nominal)
                .sum(),
            cumulative_net_cash_flow_nominal: self
                .rows
                .iter()
                .map(|r| r.net_annual_cash_flow_est_nominal)
                .sum(),
        }
    }

    /// Write all rows as CSV with a camelCase header line
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), PlannerError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Terminal metrics of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub scenario_name: String,
    pub ending_net_worth_nominal: f64,
    pub ending_net_worth_real: f64,
    pub horizon_years: u32,
    pub total_major_expenses_nominal: f64,
    pub cumulative_net_cash_flow_nominal: f64,
}

/// Output of one projection run. The input configuration is never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRunResult {
    pub timeseries: ResultsTimeseries,
    pub summary: SummaryMetrics,

    /// Per-component series the timeseries was aggregated from
    pub components: ComponentProjections,
}
