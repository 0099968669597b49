pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod renderer;
pub mod writer;

use std::path::{Path, PathBuf};

use scraper::Html;

use crate::config::AppConfig;
use crate::error::ExportError;
use crate::extractors::{ChefkochExtractor, Extractor};
use crate::fetcher::Fetcher;

/// Fetch a recipe page and extract its structured data.
pub fn fetch_recipe(url: &str, config: &AppConfig) -> Result<model::Recipe, ExportError> {
    let body = Fetcher::new(config)?.fetch(url)?;

    // Parse the HTML document
    let document = Html::parse_document(&body);

    let extractor = ChefkochExtractor;
    if !extractor.can_parse(&document) {
        return Err(ExportError::ParseError(
            "page does not look like a chefkoch recipe".to_string(),
        ));
    }

    extractor.parse(&document)
}

/// Run the full pipeline with the given configuration and return the path
/// of the written file.
pub fn export_recipe_with(url: &str, config: &AppConfig) -> Result<PathBuf, ExportError> {
    let recipe = fetch_recipe(url, config)?;
    let document = renderer::render(&recipe);

    writer::write(&document, Path::new(&config.output_dir))
}

/// Run the full pipeline with configuration loaded from the optional
/// config file and environment.
pub fn export_recipe(url: &str) -> Result<PathBuf, ExportError> {
    let config = AppConfig::load()?;

    export_recipe_with(url, &config)
}
