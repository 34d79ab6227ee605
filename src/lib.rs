//! filed-recipes - A recipe collection kept in a plain text file
//!
//! Recipes live in a sectioned text format (`[Recept]`, `[Ingredienser]`,
//! `[Instruktioner]` blocks). [`RecipeRepository`] loads the file into an
//! owned, name-sorted collection, hands out copies, and saves it back.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Ingredient, Recipe, RecipeError};
pub use storage::{RecipeRepository, RepositoryError};
