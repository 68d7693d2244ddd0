use serde::{Deserialize, Serialize};

/// A single catalog entry. Ingredient order is kept for display only; matching
/// treats the list as a set of normalized names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Recipe {
    pub fn new<N, I, S>(name: N, ingredients: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_are_optional() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"name": "Toast", "ingredients": ["Bread"]}"#).unwrap();

        assert_eq!(recipe, Recipe::new("Toast", ["Bread"]));
        assert!(recipe.instructions.is_none());
    }

    #[test]
    fn test_missing_ingredients_is_rejected() {
        let result: std::result::Result<Recipe, _> =
            serde_json::from_str(r#"{"name": "Toast"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_instructions() {
        let json = serde_json::to_string(&Recipe::new("Toast", ["Bread"])).unwrap();
        assert!(!json.contains("instructions"));

        let json =
            serde_json::to_string(&Recipe::new("Toast", ["Bread"]).with_instructions("Toast it"))
                .unwrap();
        assert!(json.contains("\"instructions\":\"Toast it\""));
    }
}
