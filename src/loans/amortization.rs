//! Level-payment amortization
//!
//! Payments are computed with the standard annuity formula; the schedule is an
//! iterative unroll splitting each payment into interest and principal.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monthly payments unless stated otherwise
pub const DEFAULT_PAYMENTS_PER_YEAR: u32 = 12;

/// Balances within this distance of zero are snapped to exactly zero
const BALANCE_DUST: f64 = 0.01;

/// Fixed periodic payment that retires `principal` over `term_years`.
///
/// Falls back to straight-line repayment when the rate is zero.
/// `term_years` must be positive; a `payments_per_year` of 0 is treated as 1.
pub fn loan_payment(
    principal: f64,
    annual_interest_rate: f64,
    term_years: u32,
    payments_per_year: u32,
) -> f64 {
    let payments_per_year = payments_per_year.max(1);
    let num_payments = (u64::from(term_years) * u64::from(payments_per_year)) as f64;
    let rate_per_period = annual_interest_rate / payments_per_year as f64;

    if rate_per_period == 0.0 {
        return principal / num_payments;
    }

    let compounded = (1.0 + rate_per_period).powf(num_payments);
    if !compounded.is_finite() {
        // Interest-only in the limit of a very long term
        return principal * rate_per_period;
    }
    principal * rate_per_period * compounded / (compounded - 1.0)
}

/// One payment period of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub period: u32,
    pub date: NaiveDate,
    pub payment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
}

/// Complete payment-by-payment schedule for one loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Original loan amount
    pub principal: f64,

    /// Payments per year used to build the schedule
    pub payments_per_year: u32,

    /// Ordered payment rows
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Level payment amount (0 for an empty schedule)
    pub fn payment(&self) -> f64 {
        self.rows.first().map(|r| r.payment).unwrap_or(0.0)
    }

    pub fn total_payments(&self) -> usize {
        self.rows.len()
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest_paid).sum()
    }

    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal_paid).sum()
    }

    /// Outstanding balance once `payments_made` payments have been made.
    ///
    /// Requests past the final payment return the final (zero) balance.
    pub fn balance_after(&self, payments_made: usize) -> f64 {
        if payments_made == 0 {
            return self.principal;
        }
        payments_made
            .min(self.rows.len())
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|r| r.remaining_balance)
            .unwrap_or(0.0)
    }

    /// Sum of the first `count` scheduled payments (fewer if the loan is shorter)
    pub fn payments_in_first(&self, count: usize) -> f64 {
        self.rows.iter().take(count).map(|r| r.payment).sum()
    }

    /// Balance at the end of each year `1..=years`, floored at zero after payoff
    pub fn year_end_balances(&self, years: u32) -> Vec<f64> {
        let per_year = self.payments_per_year as usize;
        (1..=years as usize)
            .map(|year| self.balance_after(year * per_year))
            .collect()
    }
}

/// Build the full amortization schedule, first payment dated `start_date`.
///
/// Each later payment falls one calendar month (scaled by `payments_per_year`)
/// after the previous one.
pub fn amortization_schedule(
    principal: f64,
    annual_interest_rate: f64,
    term_years: u32,
    payments_per_year: u32,
    start_date: NaiveDate,
) -> AmortizationSchedule {
    amortization_schedule_through(
        principal,
        annual_interest_rate,
        term_years,
        payments_per_year,
        start_date,
        term_years,
    )
}

/// Schedule rows for the first `years` years of the loan only.
///
/// Payments and balances match the full schedule; rows past `years` (or past
/// the term, whichever is earlier) are not built.
pub fn amortization_schedule_through(
    principal: f64,
    annual_interest_rate: f64,
    term_years: u32,
    payments_per_year: u32,
    start_date: NaiveDate,
    years: u32,
) -> AmortizationSchedule {
    let payments_per_year = payments_per_year.max(1);
    let payment = loan_payment(principal, annual_interest_rate, term_years, payments_per_year);
    let rate_per_period = annual_interest_rate / payments_per_year as f64;
    let num_payments = term_years.min(years).saturating_mul(payments_per_year);
    let months_per_period = (12 / payments_per_year).max(1);

    let mut rows = Vec::with_capacity(num_payments as usize);
    let mut remaining_balance = principal;

    for period in 1..=num_payments {
        let interest_paid = remaining_balance * rate_per_period;
        let principal_paid = payment - interest_paid;
        remaining_balance -= principal_paid;

        if remaining_balance.abs() < BALANCE_DUST {
            remaining_balance = 0.0;
        }

        let date = start_date
            .checked_add_months(Months::new((period - 1).saturating_mul(months_per_period)))
            .unwrap_or(NaiveDate::MAX);

        rows.push(AmortizationRow {
            period,
            date,
            payment,
            principal_paid,
            interest_paid,
            remaining_balance,
        });
    }

    AmortizationSchedule {
        principal,
        payments_per_year,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_monthly_payment() {
        // 200k over 20 years at 3.5%
        let payment = loan_payment(200_000.0, 0.035, 20, 12);
        assert_abs_diff_eq!(payment, 1159.92, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        assert_eq!(loan_payment(120_000.0, 0.0, 10, 12), 1_000.0);
    }

    #[test]
    fn test_schedule_terminal_balance() {
        let schedule = amortization_schedule(50_000.0, 0.04, 5, 12, start());
        assert_eq!(schedule.total_payments(), 60);

        let last = schedule.rows.last().unwrap();
        assert_eq!(last.period, 60);
        assert_eq!(last.remaining_balance, 0.0);
        assert_relative_eq!(schedule.total_principal(), 50_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_first_period_split() {
        let schedule = amortization_schedule(225_000.0, 0.04, 25, 12, start());
        let first = &schedule.rows[0];
        assert_abs_diff_eq!(first.interest_paid, 750.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal_paid + first.interest_paid, first.payment, epsilon = 1e-9);
    }

    #[test]
    fn test_dates_advance_monthly() {
        let schedule = amortization_schedule(12_000.0, 0.05, 1, 12, start());
        assert_eq!(schedule.rows[0].date, start());
        assert_eq!(schedule.rows[1].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(schedule.rows[11].date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_balance_after_payoff_is_zero() {
        let schedule = amortization_schedule(30_000.0, 0.06, 3, 12, start());
        assert_eq!(schedule.balance_after(0), 30_000.0);
        assert_eq!(schedule.balance_after(36), 0.0);
        assert_eq!(schedule.balance_after(500), 0.0);

        let balances = schedule.year_end_balances(5);
        assert_eq!(balances.len(), 5);
        assert!(balances[0] > balances[1]);
        assert_eq!(balances[2], 0.0);
        assert_eq!(balances[4], 0.0);
    }

    #[test]
    fn test_first_year_payments() {
        let schedule = amortization_schedule(100_000.0, 0.05, 10, 12, start());
        assert_relative_eq!(
            schedule.payments_in_first(12),
            schedule.payment() * 12.0,
            max_relative = 1e-12
        );

        let short = amortization_schedule(6_000.0, 0.0, 1, 4, start());
        assert_eq!(short.total_payments(), 4);
        assert_eq!(short.payments_in_first(12), 6_000.0);
        assert_eq!(short.rows[1].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn test_very_long_term_does_not_overflow() {
        let payment = loan_payment(225_000.0, 0.04, 400_000_000, 12);
        assert_abs_diff_eq!(payment, 750.0, epsilon = 1e-9);

        let schedule = amortization_schedule_through(225_000.0, 0.04, 400_000_000, 12, start(), 5);
        assert_eq!(schedule.total_payments(), 60);
        assert!(schedule.year_end_balances(5).iter().all(|b| b.is_finite() && *b > 0.0));
    }

    #[test]
    fn test_truncated_schedule_matches_full() {
        let full = amortization_schedule(225_000.0, 0.04, 25, 12, start());
        let head = amortization_schedule_through(225_000.0, 0.04, 25, 12, start(), 10);
        assert_eq!(head.total_payments(), 120);
        assert_eq!(head.year_end_balances(10), full.year_end_balances(10));

        let past_term = amortization_schedule_through(225_000.0, 0.04, 25, 12, start(), 40);
        assert_eq!(past_term.total_payments(), 300);
        assert_eq!(past_term.balance_after(480), 0.0);
    }

    #[test]
    fn test_zero_payments_per_year_means_annual() {
        let schedule = amortization_schedule(10_000.0, 0.05, 4, 0, start());
        assert_eq!(schedule.payments_per_year, 1);
        assert_eq!(schedule.total_payments(), 4);
        assert!(schedule.payment().is_finite());
        assert!(schedule.year_end_balances(2)[0] < 10_000.0);
        assert_eq!(schedule.rows[1].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }
}
