use crate::catalog::{Catalog, Recipe};
use crate::error::Result;
use crate::matcher::{missing_ingredients, AvailableIngredients};
use std::io::Write;

const RULE_WIDTH: usize = 60;

/// Render matched recipes in catalog order, numbered from 1
pub fn render_matches<W: Write>(writer: &mut W, matches: &[&Recipe]) -> Result<()> {
    if matches.is_empty() {
        writeln!(writer, "\n❌ No recipes found with your ingredients.")?;
        writeln!(writer, "Try adding more ingredients!\n")?;
        return Ok(());
    }

    writeln!(
        writer,
        "\n✅ Found {} recipe(s) you can make:\n",
        matches.len()
    )?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;

    for (i, recipe) in matches.iter().enumerate() {
        writeln!(writer, "\n{}. {}", i + 1, recipe.name)?;
        writeln!(
            writer,
            "   Ingredients needed: {}",
            recipe.ingredients.join(", ")
        )?;
        if let Some(instructions) = &recipe.instructions {
            writeln!(writer, "   Instructions: {instructions}")?;
        }
    }

    writeln!(writer, "\n{}\n", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Render matched recipes as a pretty JSON array
pub fn render_matches_json<W: Write>(writer: &mut W, matches: &[&Recipe]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, matches)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the whole catalog. When ingredients are given, each recipe that
/// cannot be made lists what is missing.
pub fn render_catalog<W: Write>(
    writer: &mut W,
    catalog: &Catalog,
    available: Option<&AvailableIngredients>,
) -> Result<()> {
    if catalog.is_empty() {
        writeln!(writer, "The catalog has no recipes.")?;
        return Ok(());
    }

    writeln!(writer, "\n{} recipe(s) in catalog:\n", catalog.len())?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;

    for (i, recipe) in catalog.iter().enumerate() {
        writeln!(writer, "\n{}. {}", i + 1, recipe.name)?;
        writeln!(writer, "   Ingredients: {}", recipe.ingredients.join(", "))?;

        if let Some(available) = available {
            let missing = missing_ingredients(recipe, available);
            if missing.is_empty() {
                writeln!(writer, "   ✓ You can make this")?;
            } else {
                writeln!(writer, "   Missing: {}", missing.join(", "))?;
            }
        }
    }

    writeln!(writer, "\n{}\n", "=".repeat(RULE_WIDTH))?;
    Ok(())
}
