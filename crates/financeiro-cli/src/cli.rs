//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Financeiro - Track spending by talking to it
#[derive(Parser)]
#[command(name = "financeiro")]
#[command(about = "Personal finance tracker for spoken or typed Portuguese", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory for categories and transactions
    ///
    /// Overrides FINANCEIRO_DATA_DIR and the config file.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to FINANCEIRO_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what would be extracted from a sentence, without saving
    Extract {
        /// Sentence, e.g. "gastei 30 reais de pizza no nubank"
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a transaction from a sentence
    Add {
        /// Sentence, e.g. "recebi 2500 de salário"
        text: String,
    },

    /// Manage transactions (list, delete)
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Manage categories and their keywords
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },

    /// Show income, expenses and balance
    Summary {
        /// Only this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only this month (YYYY-MM, "all" for every month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export transactions to CSV
    Export {
        /// Output file or directory (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Start the web server
    Serve {
        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List recent transactions
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CategoriesAction {
    /// List categories and keywords in match order
    List,

    /// Add a category with no keywords
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category ("Outros" cannot be removed)
    Remove {
        /// Category name
        name: String,
    },

    /// Add a keyword to a category
    AddKeyword {
        /// Category name
        category: String,
        /// Keyword matched anywhere in the text, case-insensitively
        keyword: String,
    },

    /// Remove a keyword from a category
    RemoveKeyword {
        /// Category name
        category: String,
        /// Keyword to remove
        keyword: String,
    },

    /// Restore the built-in categories
    Reset,
}
