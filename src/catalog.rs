use crate::recipe::Recipe;
use std::collections::HashSet;

/// Label of the chip that disables the category filter.
pub const ALL_LABEL: &str = "All";

/// Active category filter. `All` is never confused with a category named "All".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Named(name) => name,
        }
    }

    /// Whether a recipe passes this filter. A category missing from the data
    /// simply admits nothing.
    pub fn admits(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => recipe.category.iter().any(|c| c == name),
        }
    }
}

/// Case-insensitive substring match over title, description, ingredients and tags.
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let haystack = [
        recipe.title.as_str(),
        recipe.description_text(),
        recipe.ingredients.join(" ").as_str(),
        recipe.category.join(" ").as_str(),
    ]
    .join(" ")
    .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

/// The in-memory recipe collection plus the active filters.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    pub category: CategoryFilter,
    pub query: String,
}

impl Catalog {
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Replace the collection wholesale. Active filters are kept as they are.
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    /// Look up a recipe by id. With duplicate ids the first one wins.
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Filter options derived from the current data, `All` first, then
    /// categories in first-seen order.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut options = vec![CategoryFilter::All];
        for tag in self.recipes.iter().flat_map(|r| r.category.iter()) {
            if seen.insert(tag.as_str()) {
                options.push(CategoryFilter::Named(tag.clone()));
            }
        }
        options
    }

    /// Indices into `recipes()` of the recipes passing both filters, in order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.recipes
            .iter()
            .enumerate()
            .filter(|(_, r)| self.category.admits(r) && matches_query(r, &self.query))
            .map(|(i, _)| i)
            .collect()
    }
}
