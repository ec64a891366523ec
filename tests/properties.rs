//! Property-based checks on the growth, loan and aggregation primitives

use chrono::NaiveDate;
use financial_planner::config::{CashHoldingParams, RealEstateParams, StockInvestmentParams};
use financial_planner::growth::{apply_inflation, compound_growth, discount_to_present_value, ContributionTiming};
use financial_planner::loans::amortization_schedule;
use financial_planner::projection::project_real_estate;
use financial_planner::{run_scenario, ScenarioConfig};
use proptest::prelude::{prop_assert, proptest};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_zero_rate_is_linear(
        principal in 0.0f64..1e7,
        years in 0u32..100,
        contribution in 0.0f64..1e5,
    ) {
        let fv = compound_growth(principal, 0.0, years, contribution, ContributionTiming::End);
        prop_assert!(close(fv, principal + contribution * years as f64, 1e-12));
    }

    #[test]
    fn prop_amortization_pays_off(
        principal in 1_000.0f64..2_000_000.0,
        rate_bp in 0u32..1500,
        term in 1u32..41,
    ) {
        let schedule = amortization_schedule(principal, rate_bp as f64 / 10_000.0, term, 12, start());
        let last = schedule.rows.last().unwrap();
        prop_assert!(last.remaining_balance.abs() < 0.01);
        prop_assert!(close(schedule.total_principal(), principal, 1e-9));
        prop_assert!(schedule.rows.iter().all(|r| r.remaining_balance >= 0.0));
    }

    #[test]
    fn prop_inflation_round_trip(
        value in -1e8f64..1e8,
        rate_bp in -9_000i32..3_000,
        years in 0u32..80,
    ) {
        let rate = rate_bp as f64 / 10_000.0;
        let nominal = apply_inflation(value, rate, years);
        let real = discount_to_present_value(nominal, rate, years).unwrap();
        prop_assert!(close(real, value, 1e-9));
    }

    #[test]
    fn prop_equity_non_decreasing(
        price in 50_000.0f64..2_000_000.0,
        down_bp in 0u32..10_001,
        rate_bp in 0u32..1_000,
        appreciation_bp in 1u32..800,
        term in 5u32..36,
    ) {
        let property = RealEstateParams::primary_residence("Home", price, 1_000.0)
            .with_mortgage(down_bp as f64 / 10_000.0, term, rate_bp as f64 / 10_000.0)
            .with_appreciation(appreciation_bp as f64 / 10_000.0);

        let projection = project_real_estate(&property, term + 5, 12, start());
        for pair in projection.equity.windows(2) {
            prop_assert!(pair[1] >= pair[0] - 1e-6 * pair[0].abs().max(1.0));
        }
    }

    #[test]
    fn prop_zero_component_does_not_change_totals(
        cash in 0.0f64..1e6,
        stock in 0.0f64..1e6,
        contribution in 0.0f64..5e4,
        horizon in 1u32..40,
    ) {
        let base = ScenarioConfig::new("Base", horizon)
            .with_cash_holding(CashHoldingParams::new("Cash", cash, 0.01))
            .with_stock_investment(StockInvestmentParams::new("ETF", stock, contribution, 0.06));
        let padded = base
            .clone()
            .with_cash_holding(CashHoldingParams::new("Empty", 0.0, 0.03))
            .with_stock_investment(StockInvestmentParams::new("Empty", 0.0, 0.0, 0.08));

        let a = run_scenario(&base).unwrap();
        let b = run_scenario(&padded).unwrap();

        for (x, y) in a.timeseries.rows().iter().zip(b.timeseries.rows()) {
            prop_assert!(x.total_assets_nominal == y.total_assets_nominal);
            prop_assert!(
                y.total_assets_nominal
                    == y.assets_cash_nominal + y.assets_stocks_nominal + y.assets_real_estate_equity_nominal
            );
        }
    }
}
