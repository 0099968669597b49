use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::ExportError;
use crate::extractors::Extractor;
use crate::model::{Recipe, RecipeIngredients};

/// Extractor for recipe pages from chefkoch.de.
///
/// The page is located by two markers: the instruction container
/// `#rezept-zubereitung` and the ingredient container `#recipe-incredients`
/// (the site misspells "ingredients"; the lookup has to match it exactly).
pub struct ChefkochExtractor;

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

/// A row is a section header iff its amount cell is empty and its substance
/// ends with a colon. Checking emptiness alone would misclassify rows with a
/// genuinely blank amount field, e.g. "Salz".
fn is_section_header(amount: &str, substance: &str) -> bool {
    amount.is_empty() && substance.ends_with(':')
}

fn extract_title(document: &Html) -> Result<String, ExportError> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#).unwrap();

    let title = document
        .select(&selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .ok_or_else(|| ExportError::ParseError("og:title metadata is missing".to_string()))?
        .trim()
        .to_string();

    if title.is_empty() {
        return Err(ExportError::ParseError(
            "og:title metadata is empty".to_string(),
        ));
    }

    Ok(title)
}

fn extract_instructions(document: &Html) -> Result<Vec<String>, ExportError> {
    let selector = Selector::parse("#rezept-zubereitung").unwrap();

    let container = document.select(&selector).next().ok_or_else(|| {
        ExportError::ParseError("instruction container #rezept-zubereitung is missing".to_string())
    })?;

    // One step per non-blank line of the container's text content
    let instructions = element_text(container)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(instructions)
}

fn row_cells(row: ElementRef, cell_selector: &Selector) -> Result<(String, String), ExportError> {
    let mut cells = row.select(cell_selector);

    let amount = cells.next().ok_or_else(|| {
        ExportError::ParseError("ingredient row has no amount cell".to_string())
    })?;
    let substance = cells.next().ok_or_else(|| {
        ExportError::ParseError("ingredient row has no substance cell".to_string())
    })?;

    Ok((
        element_text(amount).trim().to_string(),
        element_text(substance).trim().to_string(),
    ))
}

fn extract_ingredients(document: &Html) -> Result<RecipeIngredients, ExportError> {
    let container_selector = Selector::parse("#recipe-incredients").unwrap();
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let container = document.select(&container_selector).next().ok_or_else(|| {
        ExportError::ParseError("ingredient container #recipe-incredients is missing".to_string())
    })?;

    let table = container.select(&table_selector).next().ok_or_else(|| {
        ExportError::ParseError("ingredient container has no table".to_string())
    })?;

    let rows = table
        .select(&row_selector)
        .map(|row| row_cells(row, &cell_selector))
        .collect::<Result<Vec<_>, _>>()?;

    let (first_amount, first_substance) = rows.first().ok_or_else(|| {
        ExportError::ParseError("ingredient table has no rows".to_string())
    })?;

    let mut ingredients = RecipeIngredients::default();

    // Rows before the first section header belong to an untitled section
    if !is_section_header(first_amount, first_substance) {
        ingredients.add_section("");
    }

    for (amount, substance) in rows {
        if is_section_header(&amount, &substance) {
            // The colon stays part of the section title
            ingredients.add_section(substance);
        } else {
            ingredients.add_ingredient(amount, substance);
        }
    }

    Ok(ingredients)
}

impl Extractor for ChefkochExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        let instructions = Selector::parse("#rezept-zubereitung").unwrap();
        let ingredients = Selector::parse("#recipe-incredients").unwrap();

        document.select(&instructions).next().is_some()
            && document.select(&ingredients).next().is_some()
    }

    fn parse(&self, document: &Html) -> Result<Recipe, ExportError> {
        let recipe = Recipe {
            title: extract_title(document)?,
            ingredients: extract_ingredients(document)?,
            instructions: extract_instructions(document)?,
        };

        debug!("Extracted recipe: {:#?}", recipe);

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn create_recipe_document(title: &str, rows: &str, instructions: &str) -> Html {
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta property="og:title" content="{title}">
</head>
<body>
    <div id="recipe-incredients">
        <table>
{rows}
        </table>
    </div>
    <div id="rezept-zubereitung">{instructions}</div>
</body>
</html>"#
        );
        Html::parse_document(&html)
    }

    #[test]
    fn test_can_parse() {
        let document = create_recipe_document(
            "Testrezept",
            "<tr><td>1</td><td>Ei</td></tr>",
            "Verrühren.",
        );
        assert!(ChefkochExtractor.can_parse(&document));
    }

    #[test]
    fn test_can_parse_rejects_other_pages() {
        let document = Html::parse_document("<html><body><p>Hello</p></body></html>");
        assert!(!ChefkochExtractor.can_parse(&document));
    }

    #[test]
    fn test_parse_basic_recipe() {
        let document = create_recipe_document(
            "Pfannkuchen",
            r#"<tr><td>200 g</td><td>Mehl</td></tr>
               <tr><td>2</td><td>Eier</td></tr>
               <tr><td>250 ml</td><td>Milch</td></tr>"#,
            "Alles verrühren.\nAusbacken.",
        );

        let recipe = ChefkochExtractor.parse(&document).unwrap();

        assert_eq!(recipe.title, "Pfannkuchen");
        assert_eq!(recipe.instructions, vec!["Alles verrühren.", "Ausbacken."]);

        // No section headers: exactly one untitled section, rows in order
        assert_eq!(recipe.ingredients.sections.len(), 1);
        let section = &recipe.ingredients.sections[0];
        assert_eq!(section.title, "");
        assert_eq!(section.ingredients.len(), 3);
        assert_eq!(section.ingredients[0].amount, "200 g");
        assert_eq!(section.ingredients[0].substance, "Mehl");
        assert_eq!(section.ingredients[2].substance, "Milch");
    }

    #[test]
    fn test_leading_section_header_suppresses_default_section() {
        let document = create_recipe_document(
            "Kuchen",
            r#"<tr><td></td><td>Für den Teig:</td></tr>
               <tr><td>200 g</td><td>Mehl</td></tr>
               <tr><td></td><td>Für den Belag:</td></tr>
               <tr><td>1</td><td>Ei</td></tr>"#,
            "Backen.",
        );

        let recipe = ChefkochExtractor.parse(&document).unwrap();

        let sections = &recipe.ingredients.sections;
        assert_eq!(sections.len(), 2);
        // Colon is retained in the section title
        assert_eq!(sections[0].title, "Für den Teig:");
        assert_eq!(sections[0].ingredients[0].substance, "Mehl");
        assert_eq!(sections[1].title, "Für den Belag:");
        assert_eq!(sections[1].ingredients[0].substance, "Ei");
    }

    #[test]
    fn test_blank_amount_without_colon_is_an_ingredient() {
        let document = create_recipe_document(
            "Suppe",
            r#"<tr><td>1 l</td><td>Brühe</td></tr>
               <tr><td></td><td>Salz</td></tr>"#,
            "Würzen.",
        );

        let recipe = ChefkochExtractor.parse(&document).unwrap();

        let section = &recipe.ingredients.sections[0];
        assert_eq!(section.ingredients.len(), 2);
        assert_eq!(section.ingredients[1].amount, "");
        assert_eq!(section.ingredients[1].substance, "Salz");
    }

    #[test]
    fn test_instruction_splitting_drops_blank_lines_and_trims() {
        let document = create_recipe_document(
            "Testrezept",
            "<tr><td>1</td><td>Ei</td></tr>",
            "Step one.\n\n  Step two.  \n",
        );

        let recipe = ChefkochExtractor.parse(&document).unwrap();

        assert_eq!(recipe.instructions, vec!["Step one.", "Step two."]);
    }

    #[test]
    fn test_ingredient_cells_are_trimmed() {
        let document = create_recipe_document(
            "Testrezept",
            "<tr><td>  200 g </td><td> Mehl\n</td></tr>",
            "Backen.",
        );

        let recipe = ChefkochExtractor.parse(&document).unwrap();

        let ingredient = &recipe.ingredients.sections[0].ingredients[0];
        assert_eq!(ingredient.amount, "200 g");
        assert_eq!(ingredient.substance, "Mehl");
    }

    #[test]
    fn test_missing_title_fails() {
        let html = r#"<html><body>
            <div id="recipe-incredients"><table><tr><td>1</td><td>Ei</td></tr></table></div>
            <div id="rezept-zubereitung">Backen.</div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let result = ChefkochExtractor.parse(&document);
        assert!(matches!(result, Err(ExportError::ParseError(_))));
    }

    #[test]
    fn test_missing_ingredient_table_fails() {
        let html = r#"<html><head><meta property="og:title" content="Testrezept"></head><body>
            <div id="recipe-incredients"><p>no table here</p></div>
            <div id="rezept-zubereitung">Backen.</div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let result = ChefkochExtractor.parse(&document);
        assert!(matches!(result, Err(ExportError::ParseError(_))));
    }

    #[test]
    fn test_missing_instruction_container_fails() {
        let html = r#"<html><head><meta property="og:title" content="Testrezept"></head><body>
            <div id="recipe-incredients"><table><tr><td>1</td><td>Ei</td></tr></table></div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let result = ChefkochExtractor.parse(&document);
        assert!(matches!(result, Err(ExportError::ParseError(_))));
    }

    #[test]
    fn test_row_with_single_cell_fails() {
        let document = create_recipe_document(
            "Testrezept",
            "<tr><td>orphan</td></tr>",
            "Backen.",
        );

        let result = ChefkochExtractor.parse(&document);
        assert!(matches!(result, Err(ExportError::ParseError(_))));
    }
}
