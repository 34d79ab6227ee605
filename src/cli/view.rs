//! Console rendering of recipes

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::domain::Recipe;

/// Narrowest header panel, in characters
const PANEL_MIN_WIDTH: usize = 40;

/// Renders a recipe: header panel, ingredients, instructions
pub fn render_recipe<W: Write>(out: &mut W, recipe: &Recipe) -> io::Result<()> {
    render_header_panel(out, recipe.name())?;

    writeln!(out)?;
    render_heading(out, "Ingredienser")?;
    for ingredient in recipe.ingredients() {
        writeln!(out, "{}", ingredient)?;
    }

    writeln!(out)?;
    render_heading(out, "Instruktioner")?;
    for instruction in recipe.instructions() {
        writeln!(out, "{}", instruction)?;
    }

    Ok(())
}

/// Renders several recipes, optionally waiting for Enter between them
pub fn render_recipes<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    recipes: &[Recipe],
    pause: bool,
) -> io::Result<()> {
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_recipe(out, recipe)?;

        if pause && i + 1 < recipes.len() {
            write!(out, "\nPress Enter to continue...")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // No more input, stop pausing
                return render_rest(out, &recipes[i + 1..]);
            }
        }
    }

    Ok(())
}

fn render_rest<W: Write>(out: &mut W, recipes: &[Recipe]) -> io::Result<()> {
    for recipe in recipes {
        writeln!(out)?;
        render_recipe(out, recipe)?;
    }
    Ok(())
}

/// Boxed panel with the title centered
fn render_header_panel<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let title_width = title.chars().count();
    let inner = PANEL_MIN_WIDTH.max(title_width + 4);
    let left = (inner - title_width) / 2;
    let right = inner - title_width - left;

    writeln!(out, "╔{}╗", "═".repeat(inner))?;
    writeln!(out, "║{}{}{}║", " ".repeat(left), title, " ".repeat(right))?;
    writeln!(out, "╚{}╝", "═".repeat(inner))
}

/// Heading with an `=` underline one column longer than the text
fn render_heading<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", "=".repeat(heading.chars().count() + 1))
}

/// Index and name, as listed by `recipes list`
#[derive(Debug, Serialize)]
pub struct RecipeSummary<'a> {
    pub index: usize,
    pub name: &'a str,
    pub ingredients: usize,
    pub instructions: usize,
}

impl<'a> RecipeSummary<'a> {
    pub fn new(index: usize, recipe: &'a Recipe) -> Self {
        Self {
            index,
            name: recipe.name(),
            ingredients: recipe.ingredients().len(),
            instructions: recipe.instructions().len(),
        }
    }
}
