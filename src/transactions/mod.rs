//! Bank transaction ingestion, categorization and spending baselines

mod categorizer;
mod expenses;
mod loader;

pub use categorizer::{CategoryRule, CategoryRules, UNCATEGORIZED};
pub use expenses::{historical_average_annual_living_expenses, monthly_expense_totals};
pub use loader::{load_transactions, load_transactions_from_reader, write_transactions, Transaction};
