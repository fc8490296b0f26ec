//! Error types for Financeiro

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Text absent, not a string, or blank
    #[error("Texto é obrigatório")]
    MissingInput,

    /// No strictly positive monetary value in the text
    #[error("Não foi possível identificar um valor válido no texto")]
    NoAmountFound,

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is a rejection of user input rather than a failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::NoAmountFound | Self::Taxonomy(_) | Self::InvalidData(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
