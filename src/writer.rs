use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ExportError;
use crate::renderer::HtmlDocument;

/// Derive the output file name from a recipe title: lowercased, spaces
/// replaced with hyphens, commas removed.
pub fn file_name(title: &str) -> String {
    format!(
        "{}.html",
        title.to_lowercase().replace(' ', "-").replace(',', "")
    )
}

/// Write the document into `output_dir`, creating the directory if needed.
/// An existing file of the same name is overwritten. Returns the written
/// path.
pub fn write(document: &HtmlDocument, output_dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(file_name(&document.title));
    fs::write(&path, &document.html)?;
    debug!("Wrote {}", path.display());

    Ok(path)
}
