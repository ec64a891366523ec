//! Scenario input structures
//!
//! Field names serialize in camelCase to match persisted scenario files.
//! Every field has a default so partially specified files still load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Interest-bearing cash balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashHoldingParams {
    pub name: String,
    pub initial_amount: f64,
    pub annual_interest_rate: f64,
}

impl Default for CashHoldingParams {
    fn default() -> Self {
        Self {
            name: "Cash Savings".to_string(),
            initial_amount: 0.0,
            annual_interest_rate: 0.001,
        }
    }
}

impl CashHoldingParams {
    pub fn new(name: impl Into<String>, initial_amount: f64, annual_interest_rate: f64) -> Self {
        Self {
            name: name.into(),
            initial_amount,
            annual_interest_rate,
        }
    }
}

/// Stock portfolio with a level year-end contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockInvestmentParams {
    pub name: String,
    pub initial_investment: f64,
    pub annual_contribution: f64,
    pub expected_annual_return: f64,
}

impl Default for StockInvestmentParams {
    fn default() -> Self {
        Self {
            name: "Stock Portfolio".to_string(),
            initial_investment: 0.0,
            annual_contribution: 0.0,
            expected_annual_return: 0.07,
        }
    }
}

impl StockInvestmentParams {
    pub fn new(
        name: impl Into<String>,
        initial_investment: f64,
        annual_contribution: f64,
        expected_annual_return: f64,
    ) -> Self {
        Self {
            name: name.into(),
            initial_investment,
            annual_contribution,
            expected_annual_return,
        }
    }
}

/// How a property contributes to annual cash flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyUse {
    /// Owner-occupied; imputed rent saved counts as cash flow
    PrimaryResidence,
    /// Let out; net rent after costs and mortgage counts as cash flow
    Rental,
    /// Held for appreciation only; no cash flow
    InvestmentOnly,
}

/// Mortgaged (or cash-bought) property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealEstateParams {
    pub name: String,
    pub purchase_price: f64,

    /// Fraction of the purchase price paid up front (0..1)
    pub down_payment_pct: f64,

    pub mortgage_term_years: u32,
    pub mortgage_interest_rate_annual: f64,

    /// Annual property tax as a fraction of purchase price
    pub property_tax_annual_pct_value: f64,
    pub insurance_annual_fixed: f64,

    /// Annual maintenance as a fraction of purchase price
    pub maintenance_annual_pct_value: f64,

    /// May be negative for a depreciating property
    pub expected_annual_appreciation: f64,

    pub is_primary_residence: bool,
    pub equivalent_monthly_rent_saved: f64,

    pub is_rental: bool,
    pub monthly_rent_income: f64,
    pub vacancy_rate_pct: f64,
    pub management_fee_pct_rent: f64,

    /// Disposal cost fraction; only used by sale-proceeds estimates
    pub selling_costs_pct: f64,
}

impl Default for RealEstateParams {
    fn default() -> Self {
        Self {
            name: "Property Investment".to_string(),
            purchase_price: 0.0,
            down_payment_pct: 0.20,
            mortgage_term_years: 20,
            mortgage_interest_rate_annual: 0.035,
            property_tax_annual_pct_value: 0.005,
            insurance_annual_fixed: 500.0,
            maintenance_annual_pct_value: 0.01,
            expected_annual_appreciation: 0.03,
            is_primary_residence: false,
            equivalent_monthly_rent_saved: 0.0,
            is_rental: false,
            monthly_rent_income: 0.0,
            vacancy_rate_pct: 0.05,
            management_fee_pct_rent: 0.08,
            selling_costs_pct: 0.06,
        }
    }
}

impl RealEstateParams {
    /// Mortgage principal: purchase price less the down payment
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price * (1.0 - self.down_payment_pct)
    }

    /// Resolve the use flags. A rental flag wins when both are set.
    pub fn usage(&self) -> PropertyUse {
        if self.is_rental {
            PropertyUse::Rental
        } else if self.is_primary_residence {
            PropertyUse::PrimaryResidence
        } else {
            PropertyUse::InvestmentOnly
        }
    }

    pub fn rental(name: impl Into<String>, purchase_price: f64, monthly_rent_income: f64) -> Self {
        Self {
            name: name.into(),
            purchase_price,
            is_rental: true,
            monthly_rent_income,
            ..Default::default()
        }
    }

    pub fn primary_residence(
        name: impl Into<String>,
        purchase_price: f64,
        equivalent_monthly_rent_saved: f64,
    ) -> Self {
        Self {
            name: name.into(),
            purchase_price,
            is_primary_residence: true,
            equivalent_monthly_rent_saved,
            ..Default::default()
        }
    }

    pub fn with_mortgage(mut self, down_payment_pct: f64, term_years: u32, annual_rate: f64) -> Self {
        self.down_payment_pct = down_payment_pct;
        self.mortgage_term_years = term_years;
        self.mortgage_interest_rate_annual = annual_rate;
        self
    }

    pub fn with_appreciation(mut self, expected_annual_appreciation: f64) -> Self {
        self.expected_annual_appreciation = expected_annual_appreciation;
        self
    }
}

/// Salary or other recurring income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeSourceParams {
    pub name: String,
    pub initial_annual_income: f64,
    pub expected_annual_growth_rate: f64,
}

impl Default for IncomeSourceParams {
    fn default() -> Self {
        Self {
            name: "Primary Salary".to_string(),
            initial_annual_income: 60_000.0,
            expected_annual_growth_rate: 0.025,
        }
    }
}

impl IncomeSourceParams {
    pub fn new(name: impl Into<String>, initial_annual_income: f64, expected_annual_growth_rate: f64) -> Self {
        Self {
            name: name.into(),
            initial_annual_income,
            expected_annual_growth_rate,
        }
    }
}

/// One-off expense in today's money, paid once in `year_of_expense`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MajorExpenseParams {
    pub name: String,
    pub amount: f64,
    pub year_of_expense: u32,
}

impl Default for MajorExpenseParams {
    fn default() -> Self {
        Self {
            name: "Future Expense".to_string(),
            amount: 10_000.0,
            year_of_expense: 5,
        }
    }
}

impl MajorExpenseParams {
    pub fn new(name: impl Into<String>, amount: f64, year_of_expense: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            year_of_expense,
        }
    }
}

/// Complete input for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioConfig {
    pub name: String,
    pub description: String,
    pub horizon_years: u32,

    /// Display label only; all amounts are assumed to share it
    pub scenario_base_currency: String,

    pub general_annual_inflation_rate: f64,

    /// Living expenses in today's money; `None` falls back to the engine default
    pub base_annual_living_expenses: Option<f64>,

    /// First mortgage payment date; defaults to the run date
    pub start_date: Option<NaiveDate>,

    pub cash_holdings: Vec<CashHoldingParams>,
    pub stock_investments: Vec<StockInvestmentParams>,
    pub real_estate_investments: Vec<RealEstateParams>,
    pub income_sources: Vec<IncomeSourceParams>,
    pub major_expenses: Vec<MajorExpenseParams>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "Default Scenario".to_string(),
            description: "A baseline financial projection.".to_string(),
            horizon_years: 30,
            scenario_base_currency: "DKK".to_string(),
            general_annual_inflation_rate: 0.02,
            base_annual_living_expenses: None,
            start_date: None,
            cash_holdings: Vec::new(),
            stock_investments: Vec::new(),
            real_estate_investments: Vec::new(),
            income_sources: Vec::new(),
            major_expenses: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    /// Empty scenario with default assumptions
    pub fn new(name: impl Into<String>, horizon_years: u32) -> Self {
        Self {
            name: name.into(),
            horizon_years,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_inflation(mut self, rate: f64) -> Self {
        self.general_annual_inflation_rate = rate;
        self
    }

    pub fn with_living_expenses(mut self, annual_amount: f64) -> Self {
        self.base_annual_living_expenses = Some(annual_amount);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_cash_holding(mut self, holding: CashHoldingParams) -> Self {
        self.cash_holdings.push(holding);
        self
    }

    pub fn with_stock_investment(mut self, investment: StockInvestmentParams) -> Self {
        self.stock_investments.push(investment);
        self
    }

    pub fn with_real_estate(mut self, property: RealEstateParams) -> Self {
        self.real_estate_investments.push(property);
        self
    }

    pub fn with_income_source(mut self, income: IncomeSourceParams) -> Self {
        self.income_sources.push(income);
        self
    }

    pub fn with_major_expense(mut self, expense: MajorExpenseParams) -> Self {
        self.major_expenses.push(expense);
        self
    }

    /// Number of configured components across all kinds
    pub fn component_count(&self) -> usize {
        self.cash_holdings.len()
            + self.stock_investments.len()
            + self.real_estate_investments.len()
            + self.income_sources.len()
            + self.major_expenses.len()
    }
}
