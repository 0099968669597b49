use std::fmt::Write;

use html_escape::encode_text;

use crate::model::Recipe;

/// A rendered, self-contained HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub title: String,
    pub html: String,
}

/// Render a recipe into a standalone HTML document.
///
/// The body holds an ingredient region ("Zutaten") with one block per
/// section and an instruction region ("Zubereitung") with one paragraph
/// per step. All interpolated text is entity-escaped.
pub fn render(recipe: &Recipe) -> HtmlDocument {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<style>body{font-size: 4vmin;}</style>\n");
    writeln!(out, "<title>{}</title>", encode_text(&recipe.title)).unwrap();
    out.push_str("</head>\n<body>\n");

    out.push_str("<div id=\"ingredients\">\n<h3>Zutaten</h3>\n");
    for section in &recipe.ingredients.sections {
        out.push_str("<div class=\"section\">\n");
        if !section.title.is_empty() {
            writeln!(out, "<h4>{}</h4>", encode_text(&section.title)).unwrap();
        }
        out.push_str("<table>\n");
        for ingredient in &section.ingredients {
            writeln!(
                out,
                "<tr><td class=\"amount\">{}</td><td class=\"substance\">{}</td></tr>",
                encode_text(&ingredient.amount),
                encode_text(&ingredient.substance)
            )
            .unwrap();
        }
        out.push_str("</table>\n</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<div id=\"instructions\">\n<h3>Zubereitung</h3>\n");
    for instruction in &recipe.instructions {
        writeln!(out, "<p>{}</p>", encode_text(instruction)).unwrap();
    }
    out.push_str("</div>\n</body>\n</html>\n");

    HtmlDocument {
        title: recipe.title.clone(),
        html: out,
    }
}
