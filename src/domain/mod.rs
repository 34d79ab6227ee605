//! Domain models for filed-recipes
//!
//! Contains the recipe records without any I/O concerns.

mod recipe;

pub use recipe::{Ingredient, IngredientError, Recipe, RecipeError, INGREDIENT_DELIMITER};
