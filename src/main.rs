//! Financial Planner CLI
//!
//! Runs one scenario file and prints the year-by-year projection

use anyhow::{Context, Result};
use clap::Parser;
use financial_planner::transactions::{
    historical_average_annual_living_expenses, load_transactions, CategoryRules,
};
use financial_planner::{load_scenario, ScenarioRunner};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "financial_planner",
    about = "Project net worth, cash flow and expenses for a scenario file"
)]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Write the full timeseries to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Transaction CSV used to derive base living expenses
    #[arg(long)]
    transactions: Option<PathBuf>,

    /// Categories left out of the living-expense baseline (repeatable)
    #[arg(long, requires = "transactions")]
    exclude: Vec<String>,

    /// Category rules JSON; defaults to the built-in table
    #[arg(long, requires = "transactions")]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_scenario(&args.scenario)
        .with_context(|| format!("load scenario: {}", args.scenario.display()))?;

    if let Some(path) = &args.transactions {
        let rules = match &args.rules {
            Some(rules_path) => CategoryRules::load(rules_path)
                .with_context(|| format!("load category rules: {}", rules_path.display()))?,
            None => CategoryRules::default_rules(),
        };
        let mut transactions =
            load_transactions(path).with_context(|| format!("load transactions: {}", path.display()))?;
        rules.categorize_all(&mut transactions);

        let baseline = historical_average_annual_living_expenses(&transactions, &args.exclude);
        println!(
            "Living expenses from {} transactions: {:.2} {}/year",
            transactions.len(),
            baseline,
            config.scenario_base_currency
        );
        config.base_annual_living_expenses = Some(baseline);
    }

    let result = ScenarioRunner::new()
        .run(&config)
        .with_context(|| format!("run scenario '{}'", config.name))?;

    println!("Scenario: {} ({})", config.name, config.scenario_base_currency);
    if !config.description.is_empty() {
        println!("  {}", config.description);
    }
    println!();
    println!(
        "{:>4} {:>16} {:>16} {:>14} {:>14} {:>14} {:>14}",
        "Year", "NetWorth", "NetWorthReal", "Liabilities", "Income", "LivingExp", "NetCashFlow"
    );
    println!("{}", "-".repeat(98));

    for row in result.timeseries.rows() {
        println!(
            "{:>4} {:>16.2} {:>16.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.net_worth_nominal,
            row.net_worth_real,
            row.total_liabilities_nominal,
            row.income_sources_total_nominal,
            row.annual_living_expenses_nominal,
            row.net_annual_cash_flow_est_nominal,
        );
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        result.timeseries.write_csv(BufWriter::new(file))?;
        println!("\nFull results written to: {}", path.display());
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Horizon: {} years", summary.horizon_years);
    println!("  Ending Net Worth (nominal): {:.2}", summary.ending_net_worth_nominal);
    println!("  Ending Net Worth (real): {:.2}", summary.ending_net_worth_real);
    println!("  Major Expenses (nominal): {:.2}", summary.total_major_expenses_nominal);
    println!("  Cumulative Net Cash Flow: {:.2}", summary.cumulative_net_cash_flow_nominal);

    for property in &result.components.real_estate {
        if let Some(proceeds) = property.net_sale_proceeds(summary.horizon_years) {
            println!("  {} net sale proceeds at horizon: {:.2}", property.name, proceeds);
        }
    }

    Ok(())
}
