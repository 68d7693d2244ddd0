use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Split a comma-separated line into trimmed, non-empty ingredient names
pub fn parse_ingredient_list(line: &str) -> Result<Vec<String>> {
    let ingredients: Vec<String> = line
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if ingredients.is_empty() {
        return Err(Error::NoInputProvided);
    }

    debug!("Parsed {} ingredients from input", ingredients.len());
    Ok(ingredients)
}

/// Prompt for a single line of ingredients and parse it
pub fn prompt_ingredients<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Vec<String>> {
    writeln!(writer, "\nEnter the ingredients you have (separated by commas):")?;
    writeln!(writer, "Example: eggs, flour, milk, sugar")?;
    writeln!(writer, "{}", "-".repeat(60))?;
    write!(writer, "Your ingredients: ")?;
    writer.flush()?;

    // EOF leaves the line empty, which parses as no input
    let mut line = String::new();
    reader.read_line(&mut line)?;

    parse_ingredient_list(&line)
}
