//! Summary report command

use anyhow::Result;
use financeiro_core::{filter_transactions, summarize, LocalStore, TransactionFilter};

use super::format_brl;

pub fn cmd_summary(store: &LocalStore, filter: TransactionFilter) -> Result<()> {
    let transactions = store.load_transactions()?;
    let filtered = filter_transactions(&transactions, &filter);
    let summary = summarize(&filtered);

    println!();
    println!("💰 Summary ({} transactions)", summary.transaction_count);
    if let Some(category) = &filter.category {
        println!("   Category: {}", category);
    }
    if let Some(month) = &filter.month {
        println!("   Month:    {}", month);
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Income:   \x1b[32m{:>14}\x1b[0m", format_brl(summary.total_income));
    println!("   Expenses: \x1b[31m{:>14}\x1b[0m", format_brl(summary.total_expenses));
    println!("   Balance:  {:>14}", format_brl(summary.balance));

    if !summary.by_category.is_empty() {
        println!();
        println!("📊 Expenses by category");
        for entry in &summary.by_category {
            let share = if summary.total_expenses > 0.0 {
                entry.amount / summary.total_expenses * 100.0
            } else {
                0.0
            };
            println!(
                "   {:<16} {:>14}  {:>5.1}%",
                entry.category,
                format_brl(entry.amount),
                share
            );
        }
    }

    if !summary.monthly.is_empty() {
        println!();
        println!("📅 By month");
        for month in &summary.monthly {
            println!(
                "   {}  +{:<14} -{:<14}",
                month.month,
                format_brl(month.income),
                format_brl(month.expenses)
            );
        }
    }

    Ok(())
}
