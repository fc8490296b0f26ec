//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_config, open_store)
//! - `extract` - Sentence intake (extract dry run, add)
//! - `transactions` - Transaction commands (list, delete)
//! - `categories` - Category and keyword management
//! - `reports` - Summary report
//! - `export` - CSV export
//! - `serve` - Web server command

pub mod categories;
pub mod core;
pub mod export;
pub mod extract;
pub mod reports;
pub mod serve;
pub mod transactions;

// Re-export command functions for main.rs
pub use categories::*;
pub use self::core::*;
pub use export::*;
pub use extract::*;
pub use reports::*;
pub use serve::*;
pub use transactions::*;

use financeiro_core::TransactionFilter;

/// Truncate to `max` characters, adding an ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount as Brazilian reais
pub fn format_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

/// Build a dashboard filter from optional command-line values
pub fn filter(category: Option<String>, month: Option<String>) -> TransactionFilter {
    TransactionFilter { category, month }
}
