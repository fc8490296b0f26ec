//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use financeiro_core::{CategoryTaxonomy, Config, LocalStore, TransactionType};
use tempfile::TempDir;

use crate::commands::{self, filter, truncate};

fn setup_test_store() -> (TempDir, LocalStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = LocalStore::open(temp_dir.path().join("data")).unwrap();
    (temp_dir, store)
}

// ========== Helpers ==========

#[test]
fn test_truncate_counts_characters() {
    assert_eq!(truncate("Alimentação", 20), "Alimentação");
    assert_eq!(truncate("Transação não categorizada", 10), "Transaç...");
}

#[test]
fn test_open_store_prefers_flag() {
    let temp_dir = TempDir::new().unwrap();
    let flag_dir = temp_dir.path().join("from-flag");
    let mut config = Config::default();
    config.storage.data_dir = Some(temp_dir.path().join("from-config"));

    let store = commands::open_store(&config, Some(flag_dir.as_path())).unwrap();
    assert_eq!(store.dir(), flag_dir.as_path());

    let store = commands::open_store(&config, None).unwrap();
    assert_eq!(store.dir(), temp_dir.path().join("from-config").as_path());
}

// ========== Extract / Add ==========

#[test]
fn test_cmd_extract_does_not_save() {
    let (_temp, store) = setup_test_store();
    commands::cmd_extract(&store, "gastei 30 reais de pizza", false).unwrap();
    commands::cmd_extract(&store, "gastei 30 reais de pizza", true).unwrap();
    assert!(store.load_transactions().unwrap().is_empty());
}

#[test]
fn test_cmd_extract_without_amount_is_ok() {
    let (_temp, store) = setup_test_store();
    assert!(commands::cmd_extract(&store, "gastei com pizza", false).is_ok());
}

#[test]
fn test_cmd_add() {
    let (_temp, store) = setup_test_store();
    commands::cmd_add(&store, "Gastei R$ 150 na conta de luz").unwrap();

    let transactions = store.load_transactions().unwrap();
    assert_eq!(transactions.len(), 1);
    let tx = &transactions[0];
    assert_eq!(tx.amount, 150.0);
    assert_eq!(tx.category, "Moradia");
    assert_eq!(tx.description, "Conta luz");
    assert_eq!(tx.id, tx.date.timestamp_millis());
}

#[test]
fn test_cmd_add_back_to_back_gets_distinct_ids() {
    let (_temp, store) = setup_test_store();
    commands::cmd_add(&store, "gastei 10 no uber").unwrap();
    commands::cmd_add(&store, "gastei 20 no uber").unwrap();
    commands::cmd_add(&store, "gastei 30 no uber").unwrap();

    let transactions = store.load_transactions().unwrap();
    assert_eq!(transactions.len(), 3);
    assert_ne!(transactions[0].id, transactions[1].id);
    assert_ne!(transactions[1].id, transactions[2].id);
}

#[test]
fn test_cmd_add_uses_stored_categories() {
    let (_temp, store) = setup_test_store();
    commands::cmd_categories_add(&store, "Pets").unwrap();
    commands::cmd_categories_add_keyword(&store, "Pets", "ração").unwrap();

    commands::cmd_add(&store, "comprei ração por 80").unwrap();
    let tx = &store.load_transactions().unwrap()[0];
    assert_eq!(tx.category, "Pets");
}

#[test]
fn test_cmd_add_income() {
    let (_temp, store) = setup_test_store();
    commands::cmd_add(&store, "recebi 2500 de salário no nubank").unwrap();

    let tx = &store.load_transactions().unwrap()[0];
    assert_eq!(tx.transaction_type, TransactionType::Income);
    assert_eq!(tx.bank.as_deref(), Some("Nubank"));
}

#[test]
fn test_cmd_add_rejects_missing_amount() {
    let (_temp, store) = setup_test_store();
    let err = commands::cmd_add(&store, "gastei com pizza").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Não foi possível identificar um valor válido no texto"
    );
    assert!(store.load_transactions().unwrap().is_empty());
}

// ========== Transactions ==========

#[test]
fn test_cmd_transactions_list() {
    let (_temp, store) = setup_test_store();
    assert!(commands::cmd_transactions_list(&store, 20).is_ok());

    commands::cmd_add(&store, "gastei 30 reais de pizza").unwrap();
    assert!(commands::cmd_transactions_list(&store, 20).is_ok());
    assert!(commands::cmd_transactions_list(&store, 0).is_ok());
}

#[test]
fn test_cmd_transactions_delete() {
    let (_temp, store) = setup_test_store();
    commands::cmd_add(&store, "gastei 30 reais de pizza").unwrap();
    let id = store.load_transactions().unwrap()[0].id;

    commands::cmd_transactions_delete(&store, id).unwrap();
    assert!(store.load_transactions().unwrap().is_empty());
}

#[test]
fn test_cmd_transactions_delete_nonexistent() {
    let (_temp, store) = setup_test_store();
    let result = commands::cmd_transactions_delete(&store, 42);
    assert!(result.is_err());
}

// ========== Categories ==========

#[test]
fn test_cmd_categories_list() {
    let (_temp, store) = setup_test_store();
    assert!(commands::cmd_categories_list(&store).is_ok());
}

#[test]
fn test_cmd_categories_add_and_remove() {
    let (_temp, store) = setup_test_store();
    commands::cmd_categories_add(&store, "  Pets  ").unwrap();
    assert!(store.load_taxonomy().unwrap().contains("Pets"));

    // Duplicate
    assert!(commands::cmd_categories_add(&store, "Pets").is_err());

    commands::cmd_categories_remove(&store, "Pets").unwrap();
    assert!(!store.load_taxonomy().unwrap().contains("Pets"));
}

#[test]
fn test_cmd_categories_remove_fallback_fails() {
    let (_temp, store) = setup_test_store();
    assert!(commands::cmd_categories_remove(&store, "Outros").is_err());
    assert!(store.load_taxonomy().unwrap().contains("Outros"));
}

#[test]
fn test_cmd_categories_keywords() {
    let (_temp, store) = setup_test_store();
    commands::cmd_categories_add_keyword(&store, "Lazer", "karaokê").unwrap();
    // Adding again is a no-op
    commands::cmd_categories_add_keyword(&store, "Lazer", "karaokê").unwrap();

    let taxonomy = store.load_taxonomy().unwrap();
    let keywords = taxonomy.keywords("Lazer").unwrap();
    assert_eq!(keywords.iter().filter(|k| *k == "karaokê").count(), 1);

    commands::cmd_categories_remove_keyword(&store, "Lazer", "karaokê").unwrap();
    let taxonomy = store.load_taxonomy().unwrap();
    assert!(!taxonomy.keywords("Lazer").unwrap().contains(&"karaokê".to_string()));

    assert!(commands::cmd_categories_add_keyword(&store, "Inexistente", "x").is_err());
}

#[test]
fn test_cmd_categories_reset() {
    let (_temp, store) = setup_test_store();
    commands::cmd_categories_remove(&store, "Lazer").unwrap();
    commands::cmd_categories_reset(&store).unwrap();
    assert_eq!(store.load_taxonomy().unwrap(), CategoryTaxonomy::default());
}

// ========== Summary / Export ==========

#[test]
fn test_cmd_summary() {
    let (_temp, store) = setup_test_store();
    assert!(commands::cmd_summary(&store, filter(None, None)).is_ok());

    commands::cmd_add(&store, "gastei 30 reais de pizza").unwrap();
    commands::cmd_add(&store, "recebi 2500 de salário").unwrap();
    assert!(commands::cmd_summary(&store, filter(None, None)).is_ok());
    assert!(
        commands::cmd_summary(&store, filter(Some("Alimentação".to_string()), None)).is_ok()
    );
}

#[test]
fn test_cmd_export_to_file() {
    let (temp, store) = setup_test_store();
    commands::cmd_add(&store, "gastei 30 reais de pizza").unwrap();
    commands::cmd_add(&store, "paguei 100 de luz").unwrap();

    let path = temp.path().join("out.csv");
    commands::cmd_export(&store, Some(path.as_path()), filter(Some("Moradia".to_string()), None)).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Data,Descrição,Valor,Categoria,Tipo,Banco");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains(",100.00,Moradia,expense,"));
}

#[test]
fn test_cmd_export_to_directory() {
    let (temp, store) = setup_test_store();
    commands::cmd_add(&store, "gastei 30 reais de pizza").unwrap();

    let out_dir = temp.path().join("exports");
    std::fs::create_dir(&out_dir).unwrap();
    commands::cmd_export(&store, Some(out_dir.as_path()), filter(None, None)).unwrap();

    let entries: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].as_ref().unwrap().file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("transacoes_"));
    assert!(name.ends_with(".csv"));
}
