use crate::catalog::Recipe;
use std::collections::HashSet;
use tracing::debug;

/// Normalize ingredient name (lowercase, trim)
pub fn normalize(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

/// Normalized set of the ingredients a user has on hand for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableIngredients {
    names: HashSet<String>,
}

impl AvailableIngredients {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ingredients.into_iter().collect()
    }

    /// Check membership of an ingredient after normalizing it
    pub fn contains(&self, ingredient: &str) -> bool {
        self.names.contains(&normalize(ingredient))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AvailableIngredients {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }
}

impl Recipe {
    /// A recipe is makeable when every required ingredient is available.
    /// An empty ingredient list is always makeable.
    pub fn is_makeable_with(&self, available: &AvailableIngredients) -> bool {
        self.ingredients
            .iter()
            .all(|ingredient| available.contains(ingredient))
    }
}

/// Check if we have all required ingredients for a recipe
pub fn is_makeable<S: AsRef<str>>(recipe: &Recipe, available: &[S]) -> bool {
    recipe.is_makeable_with(&AvailableIngredients::new(available))
}

/// Find all recipes that can be made with the available ingredients, in
/// catalog order
pub fn find_matches<'a, S: AsRef<str>>(available: &[S], catalog: &'a [Recipe]) -> Vec<&'a Recipe> {
    let available = AvailableIngredients::new(available);

    let matches: Vec<&Recipe> = catalog
        .iter()
        .filter(|recipe| recipe.is_makeable_with(&available))
        .collect();

    debug!(
        "Matched {} of {} recipes against {} available ingredients",
        matches.len(),
        catalog.len(),
        available.len()
    );

    matches
}

/// Required ingredients of `recipe` that are not available, deduplicated by
/// normalized name and kept in recipe order.
pub fn missing_ingredients(recipe: &Recipe, available: &AvailableIngredients) -> Vec<String> {
    let mut seen = HashSet::new();

    recipe
        .ingredients
        .iter()
        .filter(|ingredient| !available.contains(ingredient))
        .filter(|ingredient| seen.insert(normalize(ingredient)))
        .map(|ingredient| ingredient.trim().to_string())
        .collect()
}
