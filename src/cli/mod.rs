// Command-line interface: argument parsing, input acquisition and output rendering

pub mod commands;
pub mod display;
pub mod input;

use crate::catalog::Catalog;
use crate::config::{OutputFormat, Settings};
use crate::error::{Error, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-matcher")]
#[command(about = "Recipe Matcher - find the recipes you can make with what you have", long_about = None)]
pub struct Cli {
    /// Recipe catalog file (.json, .yaml or .yml) [default: $RECIPES_PATH or recipes.json]
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Find recipes you can make (default)
    Match {
        /// Comma-separated ingredients; prompts when omitted
        #[arg(short, long)]
        ingredients: Option<String>,
    },

    /// List every recipe in the catalog
    List {
        /// Comma-separated ingredients to show what each recipe is missing
        #[arg(short, long)]
        ingredients: Option<String>,
    },

    /// Check that the catalog loads
    Validate,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Match { ingredients: None }
    }
}

/// Run one command. Results go to `out`; the prompt goes to `out` for text
/// output and to `err` for JSON so that stdout stays machine-readable.
pub fn run<R: BufRead, W: Write, E: Write>(
    command: Commands,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let format = settings.output.format;
    let path = &settings.catalog.path;

    match command {
        Commands::Match { ingredients } => {
            if ingredients.is_none() && format == OutputFormat::Text {
                commands::print_banner(out)?;
            }

            // The catalog is loaded before any input is read
            let catalog = Catalog::from_file(path)?;
            if format == OutputFormat::Text {
                writeln!(
                    out,
                    "\nLoaded {} recipes from {}",
                    catalog.len(),
                    path.display()
                )?;
            }

            let available = match format {
                OutputFormat::Text => {
                    commands::acquire_ingredients(ingredients.as_deref(), input, out)?
                }
                OutputFormat::Json => {
                    commands::acquire_ingredients(ingredients.as_deref(), input, err)?
                }
            };

            commands::run_match(&catalog, &available, format, out)
        }
        Commands::List { ingredients } => {
            let catalog = Catalog::from_file(path)?;
            commands::list(&catalog, ingredients.as_deref(), format, out)
        }
        Commands::Validate => commands::validate(path, settings.output.color, out),
    }
}

/// Write the user-facing error line and its remediation hint
pub fn report<W: Write>(writer: &mut W, error: &Error) -> io::Result<()> {
    writeln!(writer, "\n❌ Error: {error}")?;
    if let Some(hint) = error.hint() {
        writeln!(writer, "   {hint}")?;
    }
    writeln!(writer)
}
