//! Error types shared across the planner

use thiserror::Error;

/// Invalid scenario input, or a numeric boundary the engine refuses to cross
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Horizon must be at least 1 year, got {0}")]
    InvalidHorizon(u32),

    #[error("Horizon of {years} years exceeds the maximum of {max}")]
    HorizonTooLong { years: u32, max: u32 },

    #[error("{field} must be a finite non-negative amount, got {value}")]
    NegativeAmount { field: String, value: f64 },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    RateOutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Property '{0}' cannot be both a primary residence and a rental")]
    ConflictingPropertyUse(String),

    #[error("Property '{0}' has a mortgage term of zero years")]
    ZeroMortgageTerm(String),

    #[error("Property '{name}' has a {years}-year mortgage term, above the maximum of {max}")]
    MortgageTermTooLong { name: String, years: u32, max: u32 },

    #[error("Major expense '{name}' is scheduled in year {year}, outside 1..={horizon}")]
    ExpenseOutsideHorizon { name: String, year: u32, horizon: u32 },

    #[error("Cannot discount at a rate of {0}: (1 + rate) is zero")]
    DegenerateDiscountRate(f64),
}

impl ConfigurationError {
    pub(crate) fn negative(field: impl Into<String>, value: f64) -> Self {
        ConfigurationError::NegativeAmount {
            field: field.into(),
            value,
        }
    }

    pub(crate) fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        ConfigurationError::RateOutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}

/// Errors raised while loading or writing planner files
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date '{value}': {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Scenario '{name}' failed validation: {}", format_errors(.errors))]
    Validation {
        name: String,
        errors: Vec<ConfigurationError>,
    },
}

fn format_errors(errors: &[ConfigurationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
