//! Per-component annual value series
//!
//! Every projector reads only its own parameters and the horizon, so the
//! components of a scenario can be projected independently (and in parallel).
//! Series are indexed by `year - 1` for years `1..=horizon` and never change
//! once built.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::engine::ProjectionSettings;
use crate::config::{
    CashHoldingParams, IncomeSourceParams, PropertyUse, RealEstateParams, ScenarioConfig,
    StockInvestmentParams,
};
use crate::growth::{project_asset_value_over_time, project_value_over_time, ContributionTiming};
use crate::loans::amortization_schedule_through;

/// Year-end balances of a cash holding growing at its own rate
pub fn project_cash(holding: &CashHoldingParams, horizon: u32) -> Vec<f64> {
    project_value_over_time(
        holding.initial_amount,
        holding.annual_interest_rate,
        horizon,
        0.0,
        ContributionTiming::End,
    )
    .into_iter()
    .map(|row| row.end_balance)
    .collect()
}

/// Year-end balances of a stock portfolio with year-end contributions
pub fn project_stocks(investment: &StockInvestmentParams, horizon: u32) -> Vec<f64> {
    project_value_over_time(
        investment.initial_investment,
        investment.expected_annual_return,
        horizon,
        investment.annual_contribution,
        ContributionTiming::End,
    )
    .into_iter()
    .map(|row| row.end_balance)
    .collect()
}

/// Annual income, growing geometrically from the initial amount
pub fn project_income(income: &IncomeSourceParams, horizon: u32) -> Vec<f64> {
    project_asset_value_over_time(
        income.initial_annual_income,
        income.expected_annual_growth_rate,
        horizon,
    )
    .into_iter()
    .map(|row| row.value)
    .collect()
}

/// Breakdown of a rental's year-1 cash flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCashFlow {
    /// Rent after vacancy
    pub gross_rent: f64,
    /// Management, tax, insurance and maintenance
    pub operating_expenses: f64,
    /// Sum of the first year of scheduled mortgage payments
    pub mortgage_payment_annual: f64,
    pub net_cash_flow: f64,
}

impl RentalCashFlow {
    /// Tax and maintenance are charged on the purchase price, not the appreciated value.
    pub fn from_params(property: &RealEstateParams, mortgage_payment_annual: f64) -> Self {
        let gross_rent = property.monthly_rent_income * 12.0 * (1.0 - property.vacancy_rate_pct);
        let operating_expenses = gross_rent * property.management_fee_pct_rent
            + property.purchase_price * property.property_tax_annual_pct_value
            + property.insurance_annual_fixed
            + property.purchase_price * property.maintenance_annual_pct_value;

        Self {
            gross_rent,
            operating_expenses,
            mortgage_payment_annual,
            net_cash_flow: gross_rent - operating_expenses - mortgage_payment_annual,
        }
    }
}

/// Value, debt, equity and cash flow series for one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateProjection {
    pub name: String,
    pub usage: PropertyUse,

    /// Appreciated market value per year
    pub value: Vec<f64>,

    /// Outstanding mortgage at each year end, zero once paid off
    pub debt: Vec<f64>,

    /// `value - debt` per year
    pub equity: Vec<f64>,

    /// Constant annual cash flow (held at its year-1 level)
    pub annual_cash_flow: f64,

    /// Present for rentals only
    pub rental: Option<RentalCashFlow>,

    selling_costs_pct: f64,
}

impl RealEstateProjection {
    pub fn cash_flow(&self, year: u32) -> f64 {
        if year >= 1 && (year as usize) <= self.value.len() {
            self.annual_cash_flow
        } else {
            0.0
        }
    }

    /// Proceeds from selling in `year`: value net of selling costs, less the remaining mortgage
    pub fn net_sale_proceeds(&self, year: u32) -> Option<f64> {
        let value = value_at(&self.value, year)?;
        let debt = value_at(&self.debt, year)?;
        Some(value * (1.0 - self.selling_costs_pct) - debt)
    }
}

/// Project one property.
///
/// The mortgage is amortized with `payments_per_year` payments starting on
/// `start_date`, built only as far as the horizon; each year's debt is the
/// balance after that year's payments.
pub fn project_real_estate(
    property: &RealEstateParams,
    horizon: u32,
    payments_per_year: u32,
    start_date: NaiveDate,
) -> RealEstateProjection {
    let loan_amount = property.loan_amount();

    let value: Vec<f64> = project_asset_value_over_time(
        property.purchase_price,
        property.expected_annual_appreciation,
        horizon,
    )
    .into_iter()
    .map(|row| row.value)
    .collect();

    let (debt, first_year_payments) = if loan_amount > 0.0 {
        let schedule = amortization_schedule_through(
            loan_amount,
            property.mortgage_interest_rate_annual,
            property.mortgage_term_years,
            payments_per_year,
            start_date,
            horizon,
        );
        (
            schedule.year_end_balances(horizon),
            schedule.payments_in_first(schedule.payments_per_year as usize),
        )
    } else {
        (vec![0.0; horizon as usize], 0.0)
    };

    let equity = value.iter().zip(&debt).map(|(v, d)| v - d).collect();

    let usage = property.usage();
    let (annual_cash_flow, rental) = match usage {
        PropertyUse::Rental => {
            let rental = RentalCashFlow::from_params(property, first_year_payments);
            (rental.net_cash_flow, Some(rental))
        }
        PropertyUse::PrimaryResidence => (property.equivalent_monthly_rent_saved * 12.0, None),
        PropertyUse::InvestmentOnly => (0.0, None),
    };

    log::debug!(
        "Property '{}' ({:?}): loan {:.2}, annual cash flow {:.2}",
        property.name,
        usage,
        loan_amount,
        annual_cash_flow
    );

    RealEstateProjection {
        name: property.name.clone(),
        usage,
        value,
        debt,
        equity,
        annual_cash_flow,
        rental,
        selling_costs_pct: property.selling_costs_pct,
    }
}

/// Value of a 1-indexed series in `year`, if projected
fn value_at(series: &[f64], year: u32) -> Option<f64> {
    (year as usize).checked_sub(1).and_then(|i| series.get(i)).copied()
}

fn sum_at<'a>(series: impl IntoIterator<Item = &'a Vec<f64>>, year: u32) -> f64 {
    series
        .into_iter()
        .map(|s| value_at(s, year).unwrap_or(0.0))
        .sum()
}

fn project_each<T, R, F>(items: &[T], parallel: bool, project: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if parallel {
        items.par_iter().map(project).collect()
    } else {
        items.iter().map(project).collect()
    }
}

/// Every component series of a scenario, precomputed for the aggregation loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProjections {
    pub horizon_years: u32,
    pub cash: Vec<Vec<f64>>,
    pub stocks: Vec<Vec<f64>>,
    pub real_estate: Vec<RealEstateProjection>,
    pub income: Vec<Vec<f64>>,
}

impl ComponentProjections {
    /// Project all components of `config`, preserving configured order within each kind
    pub fn build(config: &ScenarioConfig, settings: &ProjectionSettings, start_date: NaiveDate) -> Self {
        let horizon = config.horizon_years;
        let parallel = settings.parallel_components;
        let payments_per_year = settings.mortgage_payments_per_year;

        Self {
            horizon_years: horizon,
            cash: project_each(&config.cash_holdings, parallel, |c| project_cash(c, horizon)),
            stocks: project_each(&config.stock_investments, parallel, |s| project_stocks(s, horizon)),
            real_estate: project_each(&config.real_estate_investments, parallel, |p| {
                project_real_estate(p, horizon, payments_per_year, start_date)
            }),
            income: project_each(&config.income_sources, parallel, |i| project_income(i, horizon)),
        }
    }

    pub fn total_cash(&self, year: u32) -> f64 {
        sum_at(&self.cash, year)
    }

    pub fn total_stocks(&self, year: u32) -> f64 {
        sum_at(&self.stocks, year)
    }

    pub fn total_real_estate_equity(&self, year: u32) -> f64 {
        sum_at(self.real_estate.iter().map(|p| &p.equity), year)
    }

    pub fn total_real_estate_debt(&self, year: u32) -> f64 {
        sum_at(self.real_estate.iter().map(|p| &p.debt), year)
    }

    pub fn total_real_estate_cash_flow(&self, year: u32) -> f64 {
        self.real_estate.iter().map(|p| p.cash_flow(year)).sum()
    }

    pub fn total_income(&self, year: u32) -> f64 {
        sum_at(&self.income, year)
    }
}
