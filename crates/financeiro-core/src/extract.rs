//! Natural-language transaction extractor
//!
//! Turns a free-form Portuguese sentence such as "gastei R$150 na luz" into an
//! [`ExtractionResult`]. The work is split into independent passes that all
//! read the original text:
//!
//! 1. amount      - first monetary mention wins
//! 2. category    - first taxonomy category (in order) with a contained keyword
//! 3. bank        - first entry of [`KNOWN_BANKS`] contained in the text
//! 4. type        - income keywords are checked before expense keywords
//! 5. description - text minus amounts, action verbs and prepositions
//!
//! Extraction never fails: missing pieces become defaults (amount 0, fallback
//! category, no bank, expense, empty description). [`try_extract`] is the
//! checked entry point that rejects blank input and non-positive amounts.
//!
//! Only the first monetary mention is used. "R$30 em doce, R$200 no médico"
//! yields 30 and does not produce two transactions.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ExtractionResult, TransactionType};
use crate::taxonomy::{default_taxonomy, CategoryTaxonomy};

/// Bank names recognized in text; list order breaks ties
pub const KNOWN_BANKS: &[&str] = &[
    "nubank",
    "itau",
    "itaú",
    "bradesco",
    "santander",
    "banco do brasil",
    "bb",
    "caixa",
    "inter",
    "c6",
    "picpay",
    "mercado pago",
    "pagseguro",
];

/// Keywords marking money coming in; checked first
pub const INCOME_KEYWORDS: &[&str] = &[
    "recebi",
    "ganhei",
    "salário",
    "pagamento",
    "bonus",
    "bônus",
    "comissão",
];

/// Keywords marking money going out
pub const EXPENSE_KEYWORDS: &[&str] = &["gastei", "paguei", "comprei", "despesa", "conta"];

/// Action verbs stripped from descriptions
pub const ACTION_VERBS: &[&str] = &["gastei", "paguei", "comprei", "recebi", "ganhei"];

/// Prepositions stripped from descriptions
pub const PREPOSITIONS: &[&str] = &["com", "na", "no", "em", "de", "da", "do"];

/// Optional `R$`/`$` marker, optional spaces, ASCII digits with at most one `.`/`,`
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:R\$|\$)?\s*([0-9]+[.,]?[0-9]*)").expect("amount regex")
    })
}

fn whole_words_re(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("word list regex")
}

fn verbs_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_words_re(ACTION_VERBS))
}

fn prepositions_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_words_re(PREPOSITIONS))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

/// A monetary mention found in the text
#[derive(Debug, Clone, PartialEq)]
pub struct AmountMention {
    /// Byte range of the whole match, marker included
    pub start: usize,
    pub end: usize,
    /// Parsed value with comma normalized to a decimal point
    pub value: f64,
}

/// All monetary mentions, in reading order
pub fn amount_mentions(text: &str) -> Vec<AmountMention> {
    amount_re()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(AmountMention {
                start: whole.start(),
                end: whole.end(),
                value: parse_amount(caps.get(1)?.as_str()),
            })
        })
        .collect()
}

/// Parse a matched digit run; 0 when it does not fit a finite number
fn parse_amount(digits: &str) -> f64 {
    let normalized = digits.replace(',', ".");
    // "150," and "150." carry a separator with no decimals
    match normalized.trim_end_matches('.').parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Amount pass: value of the first mention, 0 when there is none
pub fn extract_amount(text: &str) -> f64 {
    amount_mentions(text)
        .first()
        .map(|m| m.value)
        .unwrap_or(0.0)
}

/// Bank pass: first known bank contained in the text
pub fn detect_bank(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    KNOWN_BANKS
        .iter()
        .find(|bank| lower.contains(*bank))
        .map(|bank| capitalize_first(bank))
}

/// Type pass: income keywords win over expense keywords; default is expense
pub fn determine_type(text: &str) -> TransactionType {
    let lower = text.to_lowercase();
    if INCOME_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return TransactionType::Income;
    }
    if EXPENSE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return TransactionType::Expense;
    }
    TransactionType::Expense
}

/// Description pass: strip amounts, verbs and prepositions, tidy spacing
pub fn synthesize_description(text: &str) -> String {
    let without_amounts = amount_re().replace_all(text, "");
    let without_verbs = verbs_re().replace_all(&without_amounts, "");
    let without_prepositions = prepositions_re().replace_all(&without_verbs, "");
    let collapsed = whitespace_re().replace_all(&without_prepositions, " ");
    capitalize_first(collapsed.trim())
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run every pass over the text
///
/// Uses the built-in taxonomy when none is supplied.
pub fn extract(text: &str, taxonomy: Option<&CategoryTaxonomy>) -> ExtractionResult {
    let taxonomy = match taxonomy {
        Some(t) => t,
        None => default_taxonomy(),
    };

    let result = ExtractionResult {
        amount: extract_amount(text),
        category: taxonomy.classify(text).to_string(),
        transaction_type: determine_type(text),
        bank: detect_bank(text),
        description: synthesize_description(text),
    };

    debug!(
        "Extracted from '{}': amount={} category={} type={} bank={:?}",
        text, result.amount, result.category, result.transaction_type, result.bank
    );

    result
}

/// Checked extraction: blank text and non-positive amounts are rejected
pub fn try_extract(text: &str, taxonomy: Option<&CategoryTaxonomy>) -> Result<ExtractionResult> {
    if text.trim().is_empty() {
        return Err(Error::MissingInput);
    }
    let result = extract(text, taxonomy);
    if !result.is_valid() {
        debug!("No valid amount in '{}'", text);
        return Err(Error::NoAmountFound);
    }
    Ok(result)
}
