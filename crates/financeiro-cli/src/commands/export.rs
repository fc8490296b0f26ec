//! CSV export command

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use financeiro_core::{
    export_file_name, export_transactions_csv, filter_transactions, LocalStore,
    TransactionFilter,
};

/// Export to a file, into a directory under the dated default name, or to stdout
pub fn cmd_export(store: &LocalStore, output: Option<&Path>, filter: TransactionFilter) -> Result<()> {
    let transactions = store.load_transactions()?;
    let filtered = filter_transactions(&transactions, &filter);
    let csv = export_transactions_csv(&filtered)?;

    match output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(export_file_name(Utc::now().date_naive()))
            } else {
                path.to_path_buf()
            };
            std::fs::write(&path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "✓ Exported {} transactions to {}",
                filtered.len(),
                path.display()
            );
        }
        None => print!("{}", csv),
    }

    Ok(())
}
