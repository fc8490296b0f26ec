//! Transaction command implementations

use anyhow::Result;
use financeiro_core::LocalStore;

use super::{format_brl, truncate};

pub fn cmd_transactions_list(store: &LocalStore, limit: usize) -> Result<()> {
    let transactions = store.load_transactions()?;

    if transactions.is_empty() {
        println!("No transactions found. Add one with:");
        println!("  financeiro add \"gastei 30 reais de pizza\"");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions.iter().take(limit) {
        let amount_str = if tx.is_expense() {
            format!("\x1b[31m-{}\x1b[0m", format_brl(tx.amount)) // Red for expenses
        } else {
            format!("\x1b[32m+{}\x1b[0m", format_brl(tx.amount)) // Green for income
        };

        println!(
            "   [{}] {} │ {:>14} │ {:<14} │ {}",
            tx.id,
            tx.date.format("%d/%m/%Y"),
            amount_str,
            truncate(&tx.category, 14),
            truncate(&tx.description, 35)
        );
    }

    if transactions.len() > limit {
        println!();
        println!("   ... and {} more", transactions.len() - limit);
    }

    Ok(())
}

pub fn cmd_transactions_delete(store: &LocalStore, id: i64) -> Result<()> {
    if !store.delete_transaction(id)? {
        anyhow::bail!("Transaction {} not found", id);
    }

    println!("✓ Deleted transaction {}", id);
    Ok(())
}
