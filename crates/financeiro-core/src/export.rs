//! CSV export of transactions
//!
//! One header row then one row per transaction with the date in pt-BR
//! dd/mm/yyyy form and the amount with two decimals.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::Transaction;

pub const CSV_HEADERS: [&str; 6] = ["Data", "Descrição", "Valor", "Categoria", "Tipo", "Banco"];

/// Render transactions as CSV, in the order given
pub fn export_transactions_csv(transactions: &[Transaction]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for tx in transactions {
        let date = tx.date.format("%d/%m/%Y").to_string();
        let amount = format!("{:.2}", tx.amount);
        writer.write_record([
            date.as_str(),
            tx.description.as_str(),
            amount.as_str(),
            tx.category.as_str(),
            tx.transaction_type.as_str(),
            tx.bank.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::InvalidData(format!("CSV writer flush failed: {}", e)))?;
    let csv = String::from_utf8(bytes)
        .map_err(|e| Error::InvalidData(format!("CSV output is not UTF-8: {}", e)))?;

    info!("Exported {} transactions to CSV", transactions.len());
    Ok(csv)
}

/// Download name for an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("transacoes_{}.csv", date.format("%Y-%m-%d"))
}
