//! Historical spending baselines from categorized transactions

use chrono::Datelike;
use std::collections::BTreeMap;

use super::loader::Transaction;

/// Total expense magnitude per calendar month, keyed by `(year, month)`.
///
/// Only negative amounts count, and transactions in `exclude_categories` are
/// skipped. Months without a qualifying expense are absent.
pub fn monthly_expense_totals<S: AsRef<str>>(
    transactions: &[Transaction],
    exclude_categories: &[S],
) -> BTreeMap<(i32, u32), f64> {
    let mut sums: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for t in transactions.iter().filter(|t| t.is_expense()) {
        if exclude_categories.iter().any(|c| c.as_ref() == t.category) {
            continue;
        }
        *sums.entry((t.date.year(), t.date.month())).or_insert(0.0) += t.amount;
    }

    sums.into_iter().map(|(month, total)| (month, total.abs())).collect()
}

/// Average monthly expense magnitude, annualized (× 12). Zero when nothing qualifies.
pub fn historical_average_annual_living_expenses<S: AsRef<str>>(
    transactions: &[Transaction],
    exclude_categories: &[S],
) -> f64 {
    let monthly = monthly_expense_totals(transactions, exclude_categories);
    if monthly.is_empty() {
        return 0.0;
    }

    let average_monthly = monthly.values().sum::<f64>() / monthly.len() as f64;
    log::debug!(
        "Average monthly expenses {:.2} over {} months",
        average_monthly,
        monthly.len()
    );
    average_monthly * 12.0
}
