//! Load standardized transaction CSV files
//!
//! Expected columns: `Date,Description,Amount` with an optional `Category`.
//! Dates are ISO (`YYYY-MM-DD`); expenses are negative amounts.

use chrono::NaiveDate;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use super::categorizer::UNCATEGORIZED;
use crate::error::PlannerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single bank transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: UNCATEGORIZED.to_string(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Raw CSV row matching the standardized column names
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Category", default)]
    category: Option<String>,
}

impl CsvRow {
    fn to_transaction(self) -> Result<Transaction, PlannerError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|source| {
            PlannerError::Date {
                value: self.date.clone(),
                source,
            }
        })?;

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        Ok(Transaction {
            date,
            description: self.description,
            amount: self.amount,
            category,
        })
    }
}

/// Load all transactions from a CSV file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, PlannerError> {
    let file = std::fs::File::open(path.as_ref())?;
    let transactions = load_transactions_from_reader(file)?;
    log::info!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.as_ref().display()
    );
    Ok(transactions)
}

/// Load transactions from any CSV source, in file order
pub fn load_transactions_from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>, PlannerError> {
    let mut reader = Reader::from_reader(reader);
    let mut transactions = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        transactions.push(row.to_transaction()?);
    }

    Ok(transactions)
}

/// Write transactions back out in the standardized layout
pub fn write_transactions<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), PlannerError> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["Date", "Description", "Amount", "Category"])?;
    for t in transactions {
        wtr.write_record([
            t.date.format(DATE_FORMAT).to_string(),
            t.description.clone(),
            t.amount.to_string(),
            t.category.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_category_column() {
        let csv = "Date,Description,Amount\n2024-01-22,COOP365 SLUSEHOLMEN,-218.75\n2024-01-25,Salary,50000\n";
        let transactions = load_transactions_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].date, NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
        assert_eq!(transactions[0].amount, -218.75);
        assert_eq!(transactions[0].category, UNCATEGORIZED);
        assert!(transactions[0].is_expense());
        assert!(!transactions[1].is_expense());
    }

    #[test]
    fn test_load_with_category_column() {
        let csv = "Date,Description,Amount,Category\n2024-02-01,Rent,-9000,Rent/Mortgage\n2024-02-02,Misc,-10,\n";
        let transactions = load_transactions_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(transactions[0].category, "Rent/Mortgage");
        assert_eq!(transactions[1].category, UNCATEGORIZED);
    }

    #[test]
    fn test_bad_date_is_reported() {
        let csv = "Date,Description,Amount\n22.01.2024,Shop,-5\n";
        match load_transactions_from_reader(csv.as_bytes()) {
            Err(PlannerError::Date { value, .. }) => assert_eq!(value, "22.01.2024"),
            other => panic!("expected date error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_amount_is_reported() {
        let csv = "Date,Description,Amount\n2024-01-01,Shop,lots\n";
        assert!(matches!(
            load_transactions_from_reader(csv.as_bytes()),
            Err(PlannerError::Csv(_))
        ));
    }

    #[test]
    fn test_write_then_load() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let original = vec![
            Transaction::new(date, "Netflix, monthly", -89.0).with_category("Subscriptions"),
            Transaction::new(date, "Refund", 12.5),
        ];

        let mut buf = Vec::new();
        write_transactions(&original, &mut buf).unwrap();
        let loaded = load_transactions_from_reader(buf.as_slice()).unwrap();
        assert_eq!(loaded, original);
    }
}
