use thiserror::Error;

/// Errors that can occur during recipe export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to fetch the recipe page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Expected markup element or attribute was absent from the page
    #[error("Failed to parse recipe page: {0}")]
    ParseError(String),

    /// Failed to create the output directory or write the output file
    #[error("Failed to write output: {0}")]
    WriteError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
