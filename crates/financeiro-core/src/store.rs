//! Local JSON persistence for the taxonomy and accepted transactions
//!
//! Two documents live side by side in the data directory, mirroring the
//! browser storage keys the dashboard used. Writes go through a temp file in
//! the same directory and are renamed into place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::Transaction;
use crate::summary::sort_newest_first;
use crate::taxonomy::CategoryTaxonomy;

pub const CATEGORIES_FILE: &str = "financial_categories.json";
pub const TRANSACTIONS_FILE: &str = "financial_transactions.json";

/// File-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::Config(format!(
                    "Failed to create data directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", dir.display());
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn categories_path(&self) -> PathBuf {
        self.dir.join(CATEGORIES_FILE)
    }

    fn transactions_path(&self) -> PathBuf {
        self.dir.join(TRANSACTIONS_FILE)
    }

    /// Load the taxonomy, writing the default one on first use
    pub fn load_taxonomy(&self) -> Result<CategoryTaxonomy> {
        match self.read_json::<CategoryTaxonomy>(&self.categories_path())? {
            Some(taxonomy) => Ok(taxonomy),
            None => {
                let taxonomy = CategoryTaxonomy::default();
                self.save_taxonomy(&taxonomy)?;
                info!("Initialized default categories in {}", self.dir.display());
                Ok(taxonomy)
            }
        }
    }

    pub fn save_taxonomy(&self, taxonomy: &CategoryTaxonomy) -> Result<()> {
        self.write_json(&self.categories_path(), taxonomy)
    }

    /// All stored transactions, newest first
    pub fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let mut transactions = self
            .read_json::<Vec<Transaction>>(&self.transactions_path())?
            .unwrap_or_default();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Store a newly accepted transaction
    pub fn append_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.load_transactions()?;
        if transactions.iter().any(|t| t.id == transaction.id) {
            return Err(Error::InvalidData(format!(
                "Transaction {} already exists",
                transaction.id
            )));
        }
        transactions.insert(0, transaction.clone());
        sort_newest_first(&mut transactions);
        self.write_json(&self.transactions_path(), &transactions)?;
        info!("Saved transaction {}", transaction.id);
        Ok(())
    }

    /// Delete a transaction by id; returns whether anything was removed
    pub fn delete_transaction(&self, id: i64) -> Result<bool> {
        let mut transactions = self.load_transactions()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Ok(false);
        }
        self.write_json(&self.transactions_path(), &transactions)?;
        info!("Deleted transaction {}", id);
        Ok(true)
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            debug!("{} does not exist yet", path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&contents).map_err(|e| {
            Error::InvalidData(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.persist(path).map_err(|e| Error::Io(e.error))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use crate::taxonomy::FALLBACK_CATEGORY;
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, LocalStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::open(temp_dir.path().join("data")).unwrap();
        (temp_dir, store)
    }

    fn tx(id: i64, minutes: i64) -> Transaction {
        Transaction {
            id,
            description: format!("tx {}", id),
            amount: 10.0,
            category: FALLBACK_CATEGORY.to_string(),
            transaction_type: TransactionType::Expense,
            bank: None,
            date: Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_open_creates_directory() {
        let (_temp, store) = setup_store();
        assert!(store.dir().exists());
    }

    #[test]
    fn test_load_taxonomy_initializes_default() {
        let (_temp, store) = setup_store();
        assert!(!store.dir().join(CATEGORIES_FILE).exists());

        let taxonomy = store.load_taxonomy().unwrap();
        assert_eq!(taxonomy, CategoryTaxonomy::default());
        assert!(store.dir().join(CATEGORIES_FILE).exists());
    }

    #[test]
    fn test_save_and_reload_taxonomy() {
        let (_temp, store) = setup_store();
        let mut taxonomy = store.load_taxonomy().unwrap();
        taxonomy.add_category("Pets").unwrap();
        taxonomy.add_keyword("Pets", "ração").unwrap();
        store.save_taxonomy(&taxonomy).unwrap();

        let reloaded = store.load_taxonomy().unwrap();
        assert_eq!(reloaded, taxonomy);
        assert_eq!(reloaded.classify("comprei ração"), "Pets");
    }

    #[test]
    fn test_transactions_empty_then_newest_first() {
        let (_temp, store) = setup_store();
        assert!(store.load_transactions().unwrap().is_empty());

        store.append_transaction(&tx(1, 0)).unwrap();
        store.append_transaction(&tx(3, 20)).unwrap();
        store.append_transaction(&tx(2, 10)).unwrap();

        let ids: Vec<i64> = store
            .load_transactions()
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let (_temp, store) = setup_store();
        store.append_transaction(&tx(1, 0)).unwrap();
        assert!(store.append_transaction(&tx(1, 5)).is_err());
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp, store) = setup_store();
        store.append_transaction(&tx(1, 0)).unwrap();
        store.append_transaction(&tx(2, 10)).unwrap();

        assert!(store.delete_transaction(1).unwrap());
        assert!(!store.delete_transaction(1).unwrap());
        assert_eq!(store.load_transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let (_temp, store) = setup_store();
        fs::write(store.dir().join(TRANSACTIONS_FILE), "not json").unwrap();
        let err = store.load_transactions().unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
