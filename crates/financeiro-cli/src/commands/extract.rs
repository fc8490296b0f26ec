//! Sentence intake commands

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use financeiro_core::{accept, extract, LocalStore};

use super::format_brl;

pub fn cmd_extract(store: &LocalStore, text: &str, json: bool) -> Result<()> {
    let taxonomy = store.load_taxonomy()?;
    let result = extract(text, Some(&taxonomy));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("🔎 Extraction");
    println!("   Amount:      {}", format_brl(result.amount));
    println!("   Category:    {}", result.category);
    println!("   Type:        {}", result.transaction_type);
    println!("   Bank:        {}", result.bank.as_deref().unwrap_or("-"));
    println!("   Description: {}", result.description);

    if !result.is_valid() {
        println!();
        println!("   ⚠️  No amount found - this sentence would be rejected");
    }

    Ok(())
}

pub fn cmd_add(store: &LocalStore, text: &str) -> Result<()> {
    let taxonomy = store.load_taxonomy()?;

    // Ids are acceptance milliseconds; step past any id already taken
    let existing = store.load_transactions()?;
    let mut now = Utc::now();
    while existing.iter().any(|t| t.id == now.timestamp_millis()) {
        now += Duration::milliseconds(1);
    }

    let transaction = accept(text, Some(&taxonomy), now)?;
    store
        .append_transaction(&transaction)
        .context("Failed to save transaction")?;

    println!("✅ {}", transaction.confirmation());
    println!("   id {} │ {}", transaction.id, transaction.transaction_type);

    Ok(())
}
