//! Dashboard figures over accepted transactions
//!
//! Filtering by category and month, income/expense totals, expense breakdown
//! per category and a month-by-month series for the charts.

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Value accepted by the dashboard pickers meaning "no filter"
pub const ALL: &str = "all";

/// Dashboard filter; `None` (or "all") leaves the dimension unfiltered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(default)]
    pub category: Option<String>,
    /// Month as YYYY-MM
    #[serde(default)]
    pub month: Option<String>,
}

impl TransactionFilter {
    fn active(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty() && *v != ALL)
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(category) = Self::active(&self.category) {
            if tx.category != category {
                return false;
            }
        }
        if let Some(month) = Self::active(&self.month) {
            if tx.month_key() != month {
                return false;
            }
        }
        true
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Income and expenses for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// YYYY-MM
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// Aggregates shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub transaction_count: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses
    pub balance: f64,
    /// Expenses only, in order of first appearance
    pub by_category: Vec<CategoryTotal>,
    /// Chronological
    pub monthly: Vec<MonthlyTotal>,
}

/// Newest first
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Transactions matching the filter, newest first
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect();
    sort_newest_first(&mut filtered);
    filtered
}

/// Compute the dashboard aggregates
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut by_category: Vec<CategoryTotal> = Vec::new();
    let mut monthly: Vec<MonthlyTotal> = Vec::new();

    for tx in transactions {
        let month = tx.month_key();
        let idx = match monthly.iter().position(|m| m.month == month) {
            Some(i) => i,
            None => {
                monthly.push(MonthlyTotal {
                    month,
                    income: 0.0,
                    expenses: 0.0,
                });
                monthly.len() - 1
            }
        };
        let month_entry = &mut monthly[idx];

        if tx.is_income() {
            total_income += tx.amount;
            month_entry.income += tx.amount;
            continue;
        }

        total_expenses += tx.amount;
        month_entry.expenses += tx.amount;
        match by_category.iter_mut().find(|c| c.category == tx.category) {
            Some(entry) => entry.amount += tx.amount,
            None => by_category.push(CategoryTotal {
                category: tx.category.clone(),
                amount: tx.amount,
            }),
        }
    }

    monthly.sort_by(|a, b| a.month.cmp(&b.month));

    Summary {
        transaction_count: transactions.len(),
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        by_category,
        monthly,
    }
}

/// Distinct categories in order of first appearance
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tx in transactions {
        if !seen.contains(&tx.category) {
            seen.push(tx.category.clone());
        }
    }
    seen
}

/// Distinct YYYY-MM months, newest first
pub fn distinct_months(transactions: &[Transaction]) -> Vec<String> {
    let mut months: Vec<String> = transactions.iter().map(Transaction::month_key).collect();
    months.sort_by(|a, b| b.cmp(a));
    months.dedup();
    months
}
