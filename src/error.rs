use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Catalog error: {0}")]
    CatalogError(#[from] serde_json::Error),
    #[error("Link error: {0}")]
    LinkError(#[from] url::ParseError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
