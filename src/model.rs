use serde::Serialize;

/// One (amount, substance) pair from a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub amount: String,
    pub substance: String,
}

/// A group of ingredients under one heading. An empty title marks the
/// untitled default section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSection {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
}

impl IngredientSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ingredients: Vec::new(),
        }
    }
}

/// The sectioned ingredient list of a recipe, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeIngredients {
    pub sections: Vec<IngredientSection>,
}

impl RecipeIngredients {
    /// Start a new section. Subsequent ingredients are appended to it.
    pub fn add_section(&mut self, title: impl Into<String>) {
        self.sections.push(IngredientSection::new(title));
    }

    /// Append an ingredient to the last section. An untitled default
    /// section is synthesized if no section exists yet.
    pub fn add_ingredient(&mut self, amount: impl Into<String>, substance: impl Into<String>) {
        if self.sections.is_empty() {
            self.add_section("");
        }
        if let Some(section) = self.sections.last_mut() {
            section.ingredients.push(Ingredient {
                amount: amount.into(),
                substance: substance.into(),
            });
        }
    }
}

/// A fully extracted recipe: title, sectioned ingredients and ordered
/// preparation steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: RecipeIngredients,
    pub instructions: Vec<String>,
}
