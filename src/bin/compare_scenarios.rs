//! Run several scenario files side by side
//!
//! With no arguments, every `*.json` in the scenario directory is compared.

use anyhow::{bail, Context, Result};
use clap::Parser;
use financial_planner::config::DEFAULT_SCENARIO_DIR;
use financial_planner::{load_scenario, ScenarioConfig, ScenarioRunner};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "compare_scenarios", about = "Compare ending net worth across scenario files")]
struct Args {
    /// Scenario JSON files
    scenarios: Vec<PathBuf>,

    /// Directory searched when no files are given
    #[arg(long, default_value = DEFAULT_SCENARIO_DIR)]
    dir: PathBuf,
}

fn scenario_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("read scenario directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let paths = if args.scenarios.is_empty() {
        scenario_files(&args.dir)?
    } else {
        args.scenarios
    };
    if paths.is_empty() {
        bail!("no scenario files found");
    }

    let configs = paths
        .iter()
        .map(|p| load_scenario(p).with_context(|| format!("load scenario: {}", p.display())))
        .collect::<Result<Vec<ScenarioConfig>>>()?;

    let start = Instant::now();
    let summaries = ScenarioRunner::new().compare(&configs)?;
    println!("Ran {} scenarios in {:?}\n", summaries.len(), start.elapsed());

    println!(
        "{:<30} {:>7} {:>16} {:>16} {:>16}",
        "Scenario", "Years", "NetWorth", "NetWorthReal", "CumCashFlow"
    );
    println!("{}", "-".repeat(89));
    for s in &summaries {
        println!(
            "{:<30} {:>7} {:>16.2} {:>16.2} {:>16.2}",
            s.scenario_name,
            s.horizon_years,
            s.ending_net_worth_nominal,
            s.ending_net_worth_real,
            s.cumulative_net_cash_flow_nominal
        );
    }

    if let Some(best) = summaries
        .iter()
        .max_by(|a, b| a.ending_net_worth_real.total_cmp(&b.ending_net_worth_real))
    {
        println!("\nHighest real net worth: {} ({:.2})", best.scenario_name, best.ending_net_worth_real);
    }

    Ok(())
}
