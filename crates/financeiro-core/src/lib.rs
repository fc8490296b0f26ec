//! Financeiro Core Library
//!
//! Shared functionality for the Financeiro finance tracker:
//! - Rule-based extraction of transactions from spoken or typed Portuguese
//! - Keyword taxonomy for categorization, with editing
//! - Dashboard summaries and CSV export
//! - Local JSON storage
//! - Layered TOML configuration

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod record;
pub mod store;
pub mod summary;
pub mod taxonomy;

pub use config::{Config, ServerSettings, StorageSettings};
pub use error::{Error, Result};
pub use export::{export_file_name, export_transactions_csv};
pub use extract::{extract, try_extract};
pub use models::{ExtractionResult, Transaction, TransactionType};
pub use record::{accept, PLACEHOLDER_DESCRIPTION};
pub use store::LocalStore;
pub use summary::{
    distinct_categories, distinct_months, filter_transactions, summarize, CategoryTotal,
    MonthlyTotal, Summary, TransactionFilter,
};
pub use taxonomy::{default_taxonomy, Category, CategoryTaxonomy, FALLBACK_CATEGORY};
