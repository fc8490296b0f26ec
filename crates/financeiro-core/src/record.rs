//! Turning extraction results into accepted transactions
//!
//! The extractor assigns no identity or timestamp and leaves an empty
//! description alone. Acceptance does both and is where a result without a
//! positive amount gets rejected.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::extract::try_extract;
use crate::models::{ExtractionResult, Transaction};
use crate::taxonomy::CategoryTaxonomy;

/// Description used when nothing is left after stripping amounts and verbs
pub const PLACEHOLDER_DESCRIPTION: &str = "Transação não categorizada";

impl Transaction {
    /// Assemble a transaction from an extraction accepted at `now`
    ///
    /// The id is the acceptance time in epoch milliseconds.
    pub fn from_extraction(result: ExtractionResult, now: DateTime<Utc>) -> Self {
        let description = if result.description.is_empty() {
            PLACEHOLDER_DESCRIPTION.to_string()
        } else {
            result.description
        };

        Self {
            id: now.timestamp_millis(),
            description,
            amount: result.amount,
            category: result.category,
            transaction_type: result.transaction_type,
            bank: result.bank,
            date: now,
        }
    }
}

/// Extract, validate and stamp a transaction from free text
pub fn accept(
    text: &str,
    taxonomy: Option<&CategoryTaxonomy>,
    now: DateTime<Utc>,
) -> Result<Transaction> {
    let result = try_extract(text, taxonomy)?;
    let transaction = Transaction::from_extraction(result, now);
    info!(
        "Accepted transaction {}: {} R$ {:.2} ({}, {})",
        transaction.id,
        transaction.description,
        transaction.amount,
        transaction.category,
        transaction.transaction_type
    );
    Ok(transaction)
}
