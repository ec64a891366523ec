//! Load and save scenarios as JSON files

use super::ScenarioConfig;
use crate::error::PlannerError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Default directory for saved scenario files
pub const DEFAULT_SCENARIO_DIR: &str = "scenario_configs";

/// Load and validate a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, PlannerError> {
    let file = File::open(path.as_ref())?;
    let config = load_scenario_from_reader(BufReader::new(file))?;
    log::debug!(
        "Loaded scenario '{}' from {} ({} components)",
        config.name,
        path.as_ref().display(),
        config.component_count()
    );
    Ok(config)
}

/// Load and validate a scenario from any reader (e.g., string buffer, upload)
pub fn load_scenario_from_reader<R: Read>(reader: R) -> Result<ScenarioConfig, PlannerError> {
    let config: ScenarioConfig = serde_json::from_reader(reader)?;
    config.validate().map_err(|errors| PlannerError::Validation {
        name: config.name.clone(),
        errors,
    })?;
    Ok(config)
}

/// Write a scenario as pretty-printed JSON
pub fn save_scenario<P: AsRef<Path>>(config: &ScenarioConfig, path: P) -> Result<(), PlannerError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::info!("Saved scenario '{}' to {}", config.name, path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IncomeSourceParams, MajorExpenseParams, RealEstateParams, StockInvestmentParams};
    use chrono::NaiveDate;

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "name": "Minimal",
            "horizonYears": 12,
            "stockInvestments": [{"initialInvestment": 5000.0}]
        }"#;
        let config = load_scenario_from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.name, "Minimal");
        assert_eq!(config.horizon_years, 12);
        assert_eq!(config.general_annual_inflation_rate, 0.02);
        assert_eq!(config.base_annual_living_expenses, None);
        assert_eq!(config.stock_investments[0].name, "Stock Portfolio");
        assert_eq!(config.stock_investments[0].expected_annual_return, 0.07);
    }

    #[test]
    fn test_round_trip_is_exact() {
        let config = ScenarioConfig::new("Round trip", 25)
            .with_inflation(0.0213)
            .with_living_expenses(31_234.567_891)
            .with_start_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .with_stock_investment(StockInvestmentParams::new("B", 0.1 + 0.2, 1.0 / 3.0, 0.0612))
            .with_stock_investment(StockInvestmentParams::new("A", 1e-7, 12.5, 0.07))
            .with_real_estate(RealEstateParams::rental("Flat", 300_000.0, 1_500.0).with_mortgage(0.25, 25, 0.04))
            .with_income_source(IncomeSourceParams::new("Salary", 70_000.0, 0.03))
            .with_major_expense(MajorExpenseParams::new("Car", 25_000.0, 5));

        let json = serde_json::to_string(&config).unwrap();
        let loaded = load_scenario_from_reader(json.as_bytes()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.stock_investments[0].name, "B");
    }

    #[test]
    fn test_invalid_json_scenario_is_rejected() {
        let json = r#"{"name": "Bad", "horizonYears": 0}"#;
        match load_scenario_from_reader(json.as_bytes()) {
            Err(PlannerError::Validation { name, errors }) => {
                assert_eq!(name, "Bad");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_scenario_from_reader("{not json".as_bytes()),
            Err(PlannerError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("planner_scenario_{}.json", std::process::id()));
        let config = ScenarioConfig::new("On disk", 8).with_living_expenses(28_000.0);
        save_scenario(&config, &path).unwrap();
        let loaded = load_scenario(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
