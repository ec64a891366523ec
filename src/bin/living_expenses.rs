//! Historical living expenses from a transaction CSV

use anyhow::{Context, Result};
use clap::Parser;
use financial_planner::transactions::{
    historical_average_annual_living_expenses, load_transactions, monthly_expense_totals, CategoryRules,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "living_expenses",
    about = "Categorize transactions and estimate annual living expenses"
)]
struct Args {
    /// Transaction CSV (Date,Description,Amount[,Category])
    transactions: PathBuf,

    /// Categories to leave out, e.g. "Rent/Mortgage" (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Category rules JSON; defaults to the built-in table
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Keep categories already present in the file instead of re-categorizing
    #[arg(long, default_value_t = false)]
    keep_categories: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut transactions = load_transactions(&args.transactions)
        .with_context(|| format!("load transactions: {}", args.transactions.display()))?;

    if !args.keep_categories {
        let rules = match &args.rules {
            Some(path) => {
                CategoryRules::load(path).with_context(|| format!("load category rules: {}", path.display()))?
            }
            None => CategoryRules::default_rules(),
        };
        rules.categorize_all(&mut transactions);
    }

    println!("{:>7} {:>14}", "Month", "Expenses");
    println!("{}", "-".repeat(22));
    for ((year, month), total) in monthly_expense_totals(&transactions, &args.exclude) {
        println!("{:>4}-{:02} {:>14.2}", year, month, total);
    }

    let annual = historical_average_annual_living_expenses(&transactions, &args.exclude);
    println!("\nAverage annual living expenses: {:.2}", annual);
    Ok(())
}
