pub mod recipe;

pub use recipe::Recipe;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// The recipe catalog, loaded once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load and validate a catalog from a JSON or YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| Error::CatalogUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let format = DocumentFormat::from_path(path);
        debug!("Parsing catalog {} as {:?}", path.display(), format);

        let catalog =
            parse_document(&content, format).map_err(|reason| Error::CatalogMalformed {
                path: path.to_path_buf(),
                reason,
            })?;

        info!("Loaded {} recipes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_document(content, DocumentFormat::Json).map_err(malformed_in_memory)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        parse_document(content, DocumentFormat::Yaml).map_err(malformed_in_memory)
    }

    /// Validate the catalog entries
    pub fn validate(&self) -> Result<()> {
        self.check_entries().map_err(malformed_in_memory)
    }

    fn check_entries(&self) -> std::result::Result<(), String> {
        for (index, recipe) in self.recipes.iter().enumerate() {
            if recipe.name.trim().is_empty() {
                warn!("Rejected catalog: recipe #{} has a blank name", index + 1);
                return Err(format!("Recipe #{}: name cannot be empty", index + 1));
            }
        }

        Ok(())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Parse a catalog document into a generic value, check that it is shaped
/// like `{"recipes": [{...}, ...]}`, then build the typed catalog from it.
/// Lists in place of objects are rejected here, not by the struct derives.
fn parse_document(content: &str, format: DocumentFormat) -> std::result::Result<Catalog, String> {
    let document: Value = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| e.to_string())?;
            serde_json::to_value(yaml).map_err(|e| e.to_string())?
        }
    };

    check_shape(&document)?;

    let catalog: Catalog = serde_json::from_value(document).map_err(|e| e.to_string())?;
    catalog.check_entries()?;
    Ok(catalog)
}

fn check_shape(document: &Value) -> std::result::Result<(), String> {
    let object = document.as_object().ok_or_else(|| {
        format!(
            "expected an object with a \"recipes\" list at the top level, found {}",
            kind_of(document)
        )
    })?;

    // A missing list is an empty catalog
    let Some(recipes) = object.get("recipes") else {
        return Ok(());
    };

    let recipes = recipes
        .as_array()
        .ok_or_else(|| format!("\"recipes\" must be a list, found {}", kind_of(recipes)))?;

    for (index, recipe) in recipes.iter().enumerate() {
        if !recipe.is_object() {
            return Err(format!(
                "Recipe #{}: expected an object, found {}",
                index + 1,
                kind_of(recipe)
            ));
        }
    }

    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn malformed_in_memory(reason: String) -> Error {
    Error::CatalogMalformed {
        path: "<memory>".into(),
        reason,
    }
}
