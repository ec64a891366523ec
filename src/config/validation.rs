//! Up-front checks on scenario input
//!
//! The projection engine assumes validated input; callers validate once when a
//! scenario is built or loaded.

use super::params::{RealEstateParams, ScenarioConfig};
use crate::error::ConfigurationError;

/// Validation result carrying every problem found
pub type ValidationResult = Result<(), Vec<ConfigurationError>>;

/// Longest projection accepted
pub const MAX_HORIZON_YEARS: u32 = 200;

/// Longest mortgage term accepted
pub const MAX_MORTGAGE_TERM_YEARS: u32 = 100;

struct Checker {
    errors: Vec<ConfigurationError>,
}

impl Checker {
    fn non_negative(&mut self, field: String, value: f64) {
        if !value.is_finite() || value < 0.0 {
            self.errors.push(ConfigurationError::negative(field, value));
        }
    }

    fn within(&mut self, field: String, value: f64, min: f64, max: f64) {
        if value.is_nan() || value < min || value > max {
            self.errors.push(ConfigurationError::out_of_range(field, value, min, max));
        }
    }

    fn growth_rate(&mut self, field: String, value: f64) {
        self.within(field, value, -1.0, f64::MAX);
    }
}

impl ScenarioConfig {
    /// Check the whole scenario, collecting all errors rather than stopping at the first
    pub fn validate(&self) -> ValidationResult {
        let mut c = Checker { errors: Vec::new() };

        if self.horizon_years < 1 {
            c.errors.push(ConfigurationError::InvalidHorizon(self.horizon_years));
        } else if self.horizon_years > MAX_HORIZON_YEARS {
            c.errors.push(ConfigurationError::HorizonTooLong {
                years: self.horizon_years,
                max: MAX_HORIZON_YEARS,
            });
        }
        c.within(
            "generalAnnualInflationRate".to_string(),
            self.general_annual_inflation_rate,
            0.0,
            f64::MAX,
        );
        if let Some(expenses) = self.base_annual_living_expenses {
            c.non_negative("baseAnnualLivingExpenses".to_string(), expenses);
        }

        for cash in &self.cash_holdings {
            c.non_negative(format!("{}.initialAmount", cash.name), cash.initial_amount);
            c.non_negative(format!("{}.annualInterestRate", cash.name), cash.annual_interest_rate);
        }

        for stock in &self.stock_investments {
            c.non_negative(format!("{}.initialInvestment", stock.name), stock.initial_investment);
            c.non_negative(format!("{}.annualContribution", stock.name), stock.annual_contribution);
            c.growth_rate(format!("{}.expectedAnnualReturn", stock.name), stock.expected_annual_return);
        }

        for property in &self.real_estate_investments {
            check_property(&mut c, property);
        }

        for income in &self.income_sources {
            c.non_negative(format!("{}.initialAnnualIncome", income.name), income.initial_annual_income);
            c.growth_rate(
                format!("{}.expectedAnnualGrowthRate", income.name),
                income.expected_annual_growth_rate,
            );
        }

        for expense in &self.major_expenses {
            c.non_negative(format!("{}.amount", expense.name), expense.amount);
            if expense.year_of_expense < 1 || expense.year_of_expense > self.horizon_years {
                c.errors.push(ConfigurationError::ExpenseOutsideHorizon {
                    name: expense.name.clone(),
                    year: expense.year_of_expense,
                    horizon: self.horizon_years,
                });
            }
        }

        if c.errors.is_empty() {
            Ok(())
        } else {
            Err(c.errors)
        }
    }
}

fn check_property(c: &mut Checker, p: &RealEstateParams) {
    let field = |suffix: &str| format!("{}.{}", p.name, suffix);

    if p.is_primary_residence && p.is_rental {
        c.errors.push(ConfigurationError::ConflictingPropertyUse(p.name.clone()));
    }
    if p.mortgage_term_years == 0 {
        c.errors.push(ConfigurationError::ZeroMortgageTerm(p.name.clone()));
    } else if p.mortgage_term_years > MAX_MORTGAGE_TERM_YEARS {
        c.errors.push(ConfigurationError::MortgageTermTooLong {
            name: p.name.clone(),
            years: p.mortgage_term_years,
            max: MAX_MORTGAGE_TERM_YEARS,
        });
    }

    c.non_negative(field("purchasePrice"), p.purchase_price);
    c.within(field("downPaymentPct"), p.down_payment_pct, 0.0, 1.0);
    c.non_negative(field("mortgageInterestRateAnnual"), p.mortgage_interest_rate_annual);
    c.non_negative(field("propertyTaxAnnualPctValue"), p.property_tax_annual_pct_value);
    c.non_negative(field("insuranceAnnualFixed"), p.insurance_annual_fixed);
    c.non_negative(field("maintenanceAnnualPctValue"), p.maintenance_annual_pct_value);
    c.growth_rate(field("expectedAnnualAppreciation"), p.expected_annual_appreciation);
    c.non_negative(field("equivalentMonthlyRentSaved"), p.equivalent_monthly_rent_saved);
    c.non_negative(field("monthlyRentIncome"), p.monthly_rent_income);
    c.within(field("vacancyRatePct"), p.vacancy_rate_pct, 0.0, 1.0);
    c.within(field("managementFeePctRent"), p.management_fee_pct_rent, 0.0, 1.0);
    c.within(field("sellingCostsPct"), p.selling_costs_pct, 0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CashHoldingParams, MajorExpenseParams, StockInvestmentParams};

    #[test]
    fn test_default_scenario_is_valid() {
        assert_eq!(ScenarioConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let errors = ScenarioConfig::new("Empty", 0).validate().unwrap_err();
        assert!(errors.contains(&ConfigurationError::InvalidHorizon(0)));
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let mut property = RealEstateParams::rental("Flat", 200_000.0, 1_000.0);
        property.is_primary_residence = true;
        let errors = ScenarioConfig::new("Both", 10)
            .with_real_estate(property)
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ConfigurationError::ConflictingPropertyUse("Flat".to_string())]);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut property = RealEstateParams::rental("Flat", 200_000.0, 1_000.0);
        property.down_payment_pct = 1.5;
        property.vacancy_rate_pct = -0.1;
        property.mortgage_term_years = 0;

        let config = ScenarioConfig::new("Broken", 10)
            .with_inflation(-0.01)
            .with_cash_holding(CashHoldingParams::new("Cash", -5.0, 0.01))
            .with_stock_investment(StockInvestmentParams::new("ETF", 1_000.0, 100.0, -1.5))
            .with_real_estate(property)
            .with_major_expense(MajorExpenseParams::new("Boat", 5_000.0, 11));

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 7);
        assert!(errors.contains(&ConfigurationError::ZeroMortgageTerm("Flat".to_string())));
        assert!(errors.contains(&ConfigurationError::ExpenseOutsideHorizon {
            name: "Boat".to_string(),
            year: 11,
            horizon: 10,
        }));
    }

    #[test]
    fn test_horizon_upper_bound() {
        assert_eq!(ScenarioConfig::new("Long", MAX_HORIZON_YEARS).validate(), Ok(()));
        assert_eq!(
            ScenarioConfig::new("Too long", MAX_HORIZON_YEARS + 1).validate(),
            Err(vec![ConfigurationError::HorizonTooLong {
                years: MAX_HORIZON_YEARS + 1,
                max: MAX_HORIZON_YEARS,
            }])
        );
    }

    #[test]
    fn test_mortgage_term_upper_bound() {
        let at_limit = RealEstateParams::rental("Flat", 300_000.0, 1_500.0)
            .with_mortgage(0.25, MAX_MORTGAGE_TERM_YEARS, 0.04);
        assert_eq!(ScenarioConfig::new("Ok", 5).with_real_estate(at_limit).validate(), Ok(()));

        let huge = RealEstateParams::rental("Flat", 300_000.0, 1_500.0)
            .with_mortgage(0.25, 400_000_000, 0.04);
        let errors = ScenarioConfig::new("Huge", 5).with_real_estate(huge).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigurationError::MortgageTermTooLong {
                name: "Flat".to_string(),
                years: 400_000_000,
                max: MAX_MORTGAGE_TERM_YEARS,
            }]
        );
    }

    #[test]
    fn test_infinite_amounts_are_rejected() {
        let mut property = RealEstateParams::primary_residence("Home", f64::INFINITY, 1_000.0);
        property.insurance_annual_fixed = f64::INFINITY;
        let config = ScenarioConfig::new("Inf", 5)
            .with_living_expenses(f64::INFINITY)
            .with_real_estate(property);

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigurationError::negative("Home.purchasePrice", f64::INFINITY)));
    }

    #[test]
    fn test_nan_is_rejected() {
        let config = ScenarioConfig::new("Nan", 3)
            .with_cash_holding(CashHoldingParams::new("Cash", f64::NAN, 0.01));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_expense_in_final_year_is_valid() {
        let config = ScenarioConfig::new("Edge", 10)
            .with_major_expense(MajorExpenseParams::new("Roof", 20_000.0, 10));
        assert_eq!(config.validate(), Ok(()));
    }
}
