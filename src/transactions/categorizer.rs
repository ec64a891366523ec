//! Keyword-based transaction categorization
//!
//! Rules are checked in order; the first category with a keyword appearing as
//! a whole word in the (lowercased) description wins.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use super::loader::Transaction;
use crate::error::PlannerError;

/// Category assigned when no rule matches
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Keywords identifying one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            category: category.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn matches(&self, description_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| contains_word(description_lower, &k.to_lowercase()))
    }
}

/// Ordered rule table. Serialized as a JSON array so the order survives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Load a rule table from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let file = std::fs::File::open(path.as_ref())?;
        let rules = Self::from_reader(file)?;
        log::debug!("Loaded {} category rules from {}", rules.len(), path.as_ref().display());
        Ok(rules)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PlannerError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn push(&mut self, rule: CategoryRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.category.as_str())
    }

    /// Category for a description, or [`UNCATEGORIZED`]
    pub fn categorize(&self, description: &str) -> &str {
        let lower = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Re-categorize every transaction in place, replacing any existing category
    pub fn categorize_all(&self, transactions: &mut [Transaction]) {
        for t in transactions.iter_mut() {
            t.category = self.categorize(&t.description).to_string();
        }
    }

    /// Danish bank default table
    pub fn default_rules() -> Self {
        Self::new(vec![
            CategoryRule::new(
                "Groceries",
                &["coop365", "superbrugsen", "netto", "rema1000", "føtex", "meny", "lidl", "irma", "bilka togo"],
            ),
            CategoryRule::new("Salary", &["løn", "salary", "indkomst"]),
            CategoryRule::new("Sports", &["fitnessworld", "sats", "gym", "sportmaster", "fitness dk"]),
            CategoryRule::new(
                "Rent/Mortgage",
                &["husleje", "rent", "boligudgift", "mortgage payment", "realkredit"],
            ),
            CategoryRule::new(
                "Household",
                &["ikea", "jysk", "imerco", "silvan", "jem & fix", "bauhaus", "isenkram"],
            ),
            CategoryRule::new(
                "Transport",
                &[
                    "dsb", "rejsekort", "movia", "gomore", "uber", "bolt", "benzin", "esso", "circle k", "shell",
                    "færge", "easyjet", "sas", "norwegian", "ryanair", "brobizz", "parkering",
                ],
            ),
            CategoryRule::new(
                "Utilities",
                &["dong", "hofor", "øresundsenergi", "vand", "varme", "el", "gas", "forsyning"],
            ),
            CategoryRule::new(
                "Shopping",
                &["magasin", "zalando", "hm", "elgiganten", "power", "asos", "boozt", "matas", "bog & ide"],
            ),
            CategoryRule::new(
                "Internet/Phone",
                &["fastnet", "bredbånd", "telia", "tdc", "hiper", "yousee", "oister", "cbb mobil", "telefon"],
            ),
            CategoryRule::new(
                "Dining Out",
                &["restaurant", "cafe", "just eat", "wolt", "mcdonalds", "burger king", "pizzeria"],
            ),
            CategoryRule::new(
                "Subscriptions",
                &[
                    "netflix", "spotify", "hbo", "disney+", "apple music", "storytel", "mofibo", "tv2 play",
                    "viaplay", "avis", "blad",
                ],
            ),
            CategoryRule::new(
                "Healthcare",
                &["apotek", "læge", "tandlæge", "sygehus", "optiker", "fysioterapeut"],
            ),
            CategoryRule::new(
                "Transfers",
                &["overførsel", "transfer", "egen konto", "mobilepay overførsel"],
            ),
            CategoryRule::new("Cash Withdrawal", &["hævning", "atm", "kontant", "bankautomat"]),
            CategoryRule::new(
                "Entertainment",
                &["biograf", "kino", "koncert", "teater", "museum", "tivoli", "zoo"],
            ),
            CategoryRule::new("Gifts/Charity", &["gave", "donation", "indsamling", "røde kors"]),
            CategoryRule::new("Financial/Fees", &["gebyr", "renteudgift", "bank fee", "finance charge"]),
            CategoryRule::new("Education", &["kursus", "uddannelse", "skole", "universitet"]),
            CategoryRule::new("Personal Care", &["frisør", "kosmetolog", "barber"]),
            CategoryRule::new("Other Income", &["tilbagebetaling", "refund", "renteindtægt"]),
        ])
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word boundary between two neighbouring characters (or a string edge)
fn is_boundary(before: Option<char>, after: Option<char>) -> bool {
    before.is_some_and(is_word_char) != after.is_some_and(is_word_char)
}

/// True if `needle` occurs in `haystack` with a word boundary on both sides
fn contains_word(haystack: &str, needle: &str) -> bool {
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };

    haystack.char_indices().any(|(start, _)| {
        let rest = &haystack[start..];
        if !rest.starts_with(needle) {
            return false;
        }
        let before = haystack[..start].chars().next_back();
        let after = rest[needle.len()..].chars().next();
        is_boundary(before, Some(first)) && is_boundary(Some(last), after)
    })
}
