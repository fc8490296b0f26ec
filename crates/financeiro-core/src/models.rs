//! Domain models for Financeiro

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out (also the default when nothing indicates otherwise)
    #[default]
    Expense,
    /// Money coming in
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" | "despesa" => Ok(Self::Expense),
            "income" | "receita" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured output of the extractor
///
/// Carries no identity or timestamp; those are assigned on acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// First monetary value in the text, 0 when none was found
    pub amount: f64,
    /// Matched taxonomy category, or the fallback
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Known bank mentioned in the text, first letter capitalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    /// Text left after stripping amounts, verbs and prepositions (may be empty)
    pub description: String,
}

impl ExtractionResult {
    /// A result is only usable when the amount is finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0
    }
}

/// An accepted transaction, as persisted and displayed by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Acceptance time in epoch milliseconds
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Month key used for dashboard grouping and filtering (YYYY-MM, UTC)
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Chat confirmation line shown after a transaction is accepted
    pub fn confirmation(&self) -> String {
        format!(
            "{} - R$ {:.2} ({})",
            self.description, self.amount, self.category
        )
    }
}
