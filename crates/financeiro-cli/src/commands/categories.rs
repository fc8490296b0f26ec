//! Category management commands

use anyhow::Result;
use financeiro_core::{CategoryTaxonomy, LocalStore};

pub fn cmd_categories_list(store: &LocalStore) -> Result<()> {
    let taxonomy = store.load_taxonomy()?;

    println!();
    println!("🏷️  Categories (checked in this order)");
    println!("   ─────────────────────────────────────────────────────────────");

    for category in taxonomy.categories() {
        if category.keywords.is_empty() {
            println!("   {}", category.name);
        } else {
            println!("   {}: {}", category.name, category.keywords.join(", "));
        }
    }

    Ok(())
}

pub fn cmd_categories_add(store: &LocalStore, name: &str) -> Result<()> {
    let mut taxonomy = store.load_taxonomy()?;
    taxonomy.add_category(name)?;
    store.save_taxonomy(&taxonomy)?;

    println!("✓ Added category '{}'", name.trim());
    println!(
        "  Add keywords with: financeiro categories add-keyword \"{}\" <keyword>",
        name.trim()
    );
    Ok(())
}

pub fn cmd_categories_remove(store: &LocalStore, name: &str) -> Result<()> {
    let mut taxonomy = store.load_taxonomy()?;
    let removed = taxonomy.remove_category(name)?;
    store.save_taxonomy(&taxonomy)?;

    println!(
        "✓ Removed category '{}' ({} keywords)",
        removed.name,
        removed.keywords.len()
    );
    Ok(())
}

pub fn cmd_categories_add_keyword(store: &LocalStore, category: &str, keyword: &str) -> Result<()> {
    let mut taxonomy = store.load_taxonomy()?;
    if !taxonomy.add_keyword(category, keyword)? {
        println!("'{}' is already a keyword of '{}'", keyword.trim(), category);
        return Ok(());
    }
    store.save_taxonomy(&taxonomy)?;

    println!("✓ Added keyword '{}' to '{}'", keyword.trim(), category);
    Ok(())
}

pub fn cmd_categories_remove_keyword(
    store: &LocalStore,
    category: &str,
    keyword: &str,
) -> Result<()> {
    let mut taxonomy = store.load_taxonomy()?;
    if !taxonomy.remove_keyword(category, keyword)? {
        println!("'{}' is not a keyword of '{}'", keyword, category);
        return Ok(());
    }
    store.save_taxonomy(&taxonomy)?;

    println!("✓ Removed keyword '{}' from '{}'", keyword, category);
    Ok(())
}

pub fn cmd_categories_reset(store: &LocalStore) -> Result<()> {
    store.save_taxonomy(&CategoryTaxonomy::default())?;
    println!("✓ Restored the built-in categories");
    Ok(())
}
