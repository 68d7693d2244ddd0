use crate::catalog::Catalog;
use crate::cli::display::{render_catalog, render_matches, render_matches_json};
use crate::cli::input::{parse_ingredient_list, prompt_ingredients};
use crate::config::OutputFormat;
use crate::matcher::{find_matches, AvailableIngredients};
use crate::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// Print the interactive welcome banner
pub fn print_banner<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "🍳 Welcome to Recipe Matcher! 🍳")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    Ok(())
}

/// Take ingredients from the command line when given, otherwise prompt on
/// `prompt_out` and read the answer from `input`
pub fn acquire_ingredients<R: BufRead, W: Write>(
    ingredients: Option<&str>,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<Vec<String>> {
    match ingredients {
        Some(line) => parse_ingredient_list(line),
        None => prompt_ingredients(input, prompt_out),
    }
}

/// Find and render the recipes that can be made
pub fn run_match<W: Write>(
    catalog: &Catalog,
    available: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!("Searching {} recipes", catalog.len());
    let matches = find_matches(available, catalog.recipes());

    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "\n🔍 Searching for recipes with: {}",
                available.join(", ")
            )?;
            render_matches(out, &matches)
        }
        OutputFormat::Json => render_matches_json(out, &matches),
    }
}

/// List the catalog, optionally annotated with missing ingredients
pub fn list<W: Write>(
    catalog: &Catalog,
    ingredients: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let available = ingredients
                .map(parse_ingredient_list)
                .transpose()?
                .map(AvailableIngredients::new);
            render_catalog(out, catalog, available.as_ref())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, catalog)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Load the catalog and report how many recipes it holds
pub fn validate<W: Write>(path: &Path, color: bool, out: &mut W) -> Result<()> {
    let catalog = Catalog::from_file(path)?;

    let check = if color {
        "\x1b[32m\u{2713}\x1b[0m"
    } else {
        "\u{2713}"
    };

    writeln!(
        out,
        "{check} Valid catalog: {} ({} recipes)",
        path.display(),
        catalog.len()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Recipe;
    use crate::Error;
    use std::io::Cursor;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Recipe::new("Omelette", ["Eggs", "Milk"]),
            Recipe::new("Toast", ["Bread"]),
        ])
    }

    fn run(ingredients: Option<&str>, stdin: &str, format: OutputFormat) -> Result<String> {
        let mut input = Cursor::new(stdin.to_string());
        let mut prompt = Vec::new();
        let mut out = Vec::new();

        let available = acquire_ingredients(ingredients, &mut input, &mut prompt)?;
        run_match(&sample_catalog(), &available, format, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_match_from_flag() {
        let output = run(Some("eggs, milk, bread"), "", OutputFormat::Text).unwrap();

        assert!(output.contains("Searching for recipes with: eggs, milk, bread"));
        assert!(output.contains("1. Omelette"));
        assert!(output.contains("2. Toast"));
    }

    #[test]
    fn test_match_from_prompt() {
        let output = run(None, "BREAD\n", OutputFormat::Text).unwrap();

        assert!(output.contains("1. Toast"));
        assert!(!output.contains("Omelette"));
    }

    #[test]
    fn test_separator_only_input_is_rejected() {
        let mut input = Cursor::new("  ,  ,\n");
        let mut prompt = Vec::new();

        let result = acquire_ingredients(None, &mut input, &mut prompt);
        assert!(matches!(result, Err(Error::NoInputProvided)));

        let result = acquire_ingredients(Some("  ,  ,"), &mut input, &mut prompt);
        assert!(matches!(result, Err(Error::NoInputProvided)));
    }

    #[test]
    fn test_flag_skips_prompt() {
        let mut input = Cursor::new("bread\n");
        let mut prompt = Vec::new();

        let available = acquire_ingredients(Some("eggs"), &mut input, &mut prompt).unwrap();
        assert_eq!(available, vec!["eggs"]);
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_match_json_output() {
        let output = run(Some("bread"), "", OutputFormat::Json).unwrap();
        let parsed: Vec<Recipe> = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed, vec![Recipe::new("Toast", ["Bread"])]);
    }

    #[test]
    fn test_list_rejects_empty_ingredients() {
        let mut out = Vec::new();
        let result = list(&sample_catalog(), Some(" , "), OutputFormat::Text, &mut out);

        assert!(matches!(result, Err(Error::NoInputProvided)));
    }

    #[test]
    fn test_list_json_round_trips_catalog() {
        let mut out = Vec::new();
        list(&sample_catalog(), None, OutputFormat::Json, &mut out).unwrap();

        let parsed: Catalog = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, sample_catalog());
    }

    #[test]
    fn test_validate_colour_only_when_requested() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"recipes": [{"name": "Toast", "ingredients": ["Bread"]}]}"#)
            .unwrap();
        file.flush().unwrap();

        let mut plain = Vec::new();
        validate(file.path(), false, &mut plain).unwrap();
        let plain = String::from_utf8(plain).unwrap();
        assert!(!plain.contains('\x1b'));
        assert!(plain.starts_with("\u{2713} Valid catalog"));

        let mut coloured = Vec::new();
        validate(file.path(), true, &mut coloured).unwrap();
        assert!(String::from_utf8(coloured).unwrap().contains("\x1b[32m"));
    }
}
