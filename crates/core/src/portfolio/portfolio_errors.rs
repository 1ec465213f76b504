use thiserror::Error;

/// Errors for read-side portfolio queries.
#[derive(Debug, Error, PartialEq)]
pub enum PortfolioError {
    #[error("No holding found for symbol {0}")]
    PositionNotFound(String),
}
