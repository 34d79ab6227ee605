//! Sectioned text format for recipes
//!
//! A recipe file is a sequence of blocks, each introduced by section
//! marker lines:
//!
//! ```text
//! [Recept]
//! Pannkakor
//! [Ingredienser]
//! 2;dl;mjöl
//! [Instruktioner]
//! Blanda allt.
//! ```
//!
//! Marker lines must match exactly. Every other line is interpreted by the
//! section the parser is currently in.

use std::io::{self, Write};

use thiserror::Error;

use crate::domain::{Ingredient, IngredientError, Recipe};

/// Starts a new recipe; the next line is its name
pub const SECTION_RECIPE: &str = "[Recept]";

/// Starts the ingredient records of the current recipe
pub const SECTION_INGREDIENTS: &str = "[Ingredienser]";

/// Starts the instruction lines of the current recipe
pub const SECTION_INSTRUCTIONS: &str = "[Instruktioner]";

/// Structural problems found while parsing. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: content before the first [Recept] marker")]
    ContentBeforeRecipe { line: usize },

    #[error("line {line}: ingredient must have 3 fields (amount;measure;name), found {found}")]
    IngredientFields { line: usize, found: usize },

    #[error("line {line}: recipe name must not be empty")]
    EmptyRecipeName { line: usize },
}

/// How the next non-marker line is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Indefinite,
    New,
    Ingredient,
    Instruction,
}

/// Parses recipe file content into recipes, in file order
///
/// Accepts both `\n` and `\r\n` line endings and skips a leading UTF-8
/// byte-order mark. Nothing outside the returned vector is touched, so a
/// failed parse leaves no partial state behind.
pub fn parse(content: &str) -> Result<Vec<Recipe>, FormatError> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut section = Section::Indefinite;

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;

        match line {
            SECTION_RECIPE => section = Section::New,
            SECTION_INGREDIENTS => section = Section::Ingredient,
            SECTION_INSTRUCTIONS => section = Section::Instruction,
            _ => match section {
                Section::New => {
                    let recipe = Recipe::new(line)
                        .map_err(|_| FormatError::EmptyRecipeName { line: line_num })?;
                    recipes.push(recipe);
                }
                Section::Ingredient => {
                    let ingredient: Ingredient =
                        line.parse().map_err(|e: IngredientError| {
                            FormatError::IngredientFields {
                                line: line_num,
                                found: e.found,
                            }
                        })?;
                    current(&mut recipes, line_num)?.add_ingredient(ingredient);
                }
                Section::Instruction => {
                    current(&mut recipes, line_num)?.add_instruction(line);
                }
                Section::Indefinite => {
                    return Err(FormatError::ContentBeforeRecipe { line: line_num });
                }
            },
        }
    }

    Ok(recipes)
}

/// The recipe that ingredient and instruction lines attach to
fn current(recipes: &mut [Recipe], line: usize) -> Result<&mut Recipe, FormatError> {
    recipes
        .last_mut()
        .ok_or(FormatError::ContentBeforeRecipe { line })
}

/// Writes recipes in the sectioned format, in the given order
pub fn write<'a, W, I>(writer: &mut W, recipes: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Recipe>,
{
    for recipe in recipes {
        writeln!(writer, "{}", SECTION_RECIPE)?;
        writeln!(writer, "{}", recipe.name())?;
        writeln!(writer, "{}", SECTION_INGREDIENTS)?;
        for ingredient in recipe.ingredients() {
            writeln!(writer, "{}", ingredient.to_record())?;
        }
        writeln!(writer, "{}", SECTION_INSTRUCTIONS)?;
        for instruction in recipe.instructions() {
            writeln!(writer, "{}", instruction)?;
        }
    }

    Ok(())
}

/// Renders recipes to a string in the sectioned format
pub fn render(recipes: &[Recipe]) -> String {
    let mut buf = Vec::new();
    write(&mut buf, recipes).expect("writing to a Vec is infallible");
    String::from_utf8_lossy(&buf).into_owned()
}
