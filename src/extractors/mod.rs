use scraper::Html;

use crate::error::ExportError;
use crate::model::Recipe;

mod chefkoch;

pub use self::chefkoch::ChefkochExtractor;

/// A site-specific recipe extractor over a parsed HTML document.
pub trait Extractor {
    /// Whether the document carries the markup this extractor understands.
    fn can_parse(&self, document: &Html) -> bool;

    fn parse(&self, document: &Html) -> Result<Recipe, ExportError>;
}
