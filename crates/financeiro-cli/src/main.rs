//! Financeiro CLI - Voice-driven personal finance tracker
//!
//! Usage:
//!   financeiro add "gastei 30 reais de pizza"   Record a transaction
//!   financeiro summary --month 2026-10          Show totals
//!   financeiro export --output .                Export to CSV
//!   financeiro serve --port 3000                Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let store = commands::open_store(&config, cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Extract { text, json } => commands::cmd_extract(&store, &text, json),
        Commands::Add { text } => commands::cmd_add(&store, &text),
        Commands::Transactions { action } => match action {
            None => commands::cmd_transactions_list(&store, 20),
            Some(TransactionsAction::List { limit }) => {
                commands::cmd_transactions_list(&store, limit)
            }
            Some(TransactionsAction::Delete { id }) => {
                commands::cmd_transactions_delete(&store, id)
            }
        },
        Commands::Categories { action } => match action {
            None | Some(CategoriesAction::List) => commands::cmd_categories_list(&store),
            Some(CategoriesAction::Add { name }) => commands::cmd_categories_add(&store, &name),
            Some(CategoriesAction::Remove { name }) => {
                commands::cmd_categories_remove(&store, &name)
            }
            Some(CategoriesAction::AddKeyword { category, keyword }) => {
                commands::cmd_categories_add_keyword(&store, &category, &keyword)
            }
            Some(CategoriesAction::RemoveKeyword { category, keyword }) => {
                commands::cmd_categories_remove_keyword(&store, &category, &keyword)
            }
            Some(CategoriesAction::Reset) => commands::cmd_categories_reset(&store),
        },
        Commands::Summary { category, month } => {
            commands::cmd_summary(&store, commands::filter(category, month))
        }
        Commands::Export {
            output,
            category,
            month,
        } => commands::cmd_export(&store, output.as_deref(), commands::filter(category, month)),
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            commands::cmd_serve(
                &config,
                &store,
                host.as_deref(),
                port,
                static_dir.as_deref(),
            )
            .await
        }
    }
}
