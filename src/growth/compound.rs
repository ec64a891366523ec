//! Annual compounding with optional level contributions

use serde::{Deserialize, Serialize};

/// Rates below this magnitude are treated as zero (linear accumulation)
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// When in the year a level contribution is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionTiming {
    /// Added before the year's growth (annuity due)
    Start,
    /// Added after the year's growth (ordinary annuity)
    #[default]
    End,
}

/// Future value of `principal` plus `years` equal annual contributions.
///
/// With a zero rate the contribution stream accumulates linearly
/// (`contribution * years`); `Start` timing scales the ordinary annuity by `(1 + rate)`.
pub fn compound_growth(
    principal: f64,
    annual_rate: f64,
    years: u32,
    annual_contribution: f64,
    timing: ContributionTiming,
) -> f64 {
    let growth_factor = (1.0 + annual_rate).powi(years as i32);
    let fv_principal = principal * growth_factor;

    if annual_contribution == 0.0 {
        return fv_principal;
    }

    let fv_contributions = if annual_rate.abs() < ZERO_RATE_EPSILON {
        annual_contribution * years as f64
    } else {
        let ordinary = annual_contribution * (growth_factor - 1.0) / annual_rate;
        match timing {
            ContributionTiming::End => ordinary,
            ContributionTiming::Start => ordinary * (1.0 + annual_rate),
        }
    };

    fv_principal + fv_contributions
}

/// One year of an unrolled growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRow {
    /// Projection year (1-indexed)
    pub year: u32,
    pub start_balance: f64,
    pub contribution: f64,
    pub growth_amount: f64,
    pub end_balance: f64,
}

/// Year-by-year unroll of [`compound_growth`] over `horizon` years.
pub fn project_value_over_time(
    principal: f64,
    annual_rate: f64,
    horizon: u32,
    annual_contribution: f64,
    timing: ContributionTiming,
) -> Vec<GrowthRow> {
    let mut rows = Vec::with_capacity(horizon as usize);
    let mut balance = principal;

    for year in 1..=horizon {
        let start_balance = balance;

        if timing == ContributionTiming::Start {
            balance += annual_contribution;
        }

        let growth_amount = balance * annual_rate;
        balance += growth_amount;

        if timing == ContributionTiming::End {
            balance += annual_contribution;
        }

        rows.push(GrowthRow {
            year,
            start_balance,
            contribution: annual_contribution,
            growth_amount,
            end_balance: balance,
        });
    }

    rows
}

/// Value of an appreciating (or depreciating) asset at one point in the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetValueRow {
    pub year: u32,
    pub value: f64,
}

/// Closed-form appreciation: `initial_value * (1 + rate)^years`
pub fn project_asset_value(initial_value: f64, annual_growth_rate: f64, years: u32) -> f64 {
    initial_value * (1.0 + annual_growth_rate).powi(years as i32)
}

/// Appreciation-only series for years `1..=horizon`, compounded iteratively
pub fn project_asset_value_over_time(
    initial_value: f64,
    annual_growth_rate: f64,
    horizon: u32,
) -> Vec<AssetValueRow> {
    let mut value = initial_value;
    (1..=horizon)
        .map(|year| {
            value *= 1.0 + annual_growth_rate;
            AssetValueRow { year, value }
        })
        .collect()
}
