//! Recipe domain model
//!
//! A recipe is a name plus two ordered sequences: ingredients and
//! instruction lines. Both sequences keep the order their lines had in
//! the recipe file.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the fields of an ingredient record line
pub const INGREDIENT_DELIMITER: char = ';';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Recipe name must not be empty")]
    EmptyName,
}

/// An ingredient record line with the wrong number of fields
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Ingredient record must have 3 fields (amount;measure;name), got {found}: '{line}'")]
pub struct IngredientError {
    pub line: String,
    pub found: usize,
}

/// A single ingredient line: amount, measure and name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    amount: String,
    measure: String,
    name: String,
}

impl Ingredient {
    pub fn new(
        amount: impl Into<String>,
        measure: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            measure: measure.into(),
            name: name.into(),
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn measure(&self) -> &str {
        &self.measure
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the ingredient as a record line (`amount;measure;name`)
    pub fn to_record(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.amount,
            self.measure,
            self.name,
            d = INGREDIENT_DELIMITER
        )
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.measure, self.name)
    }
}

impl FromStr for Ingredient {
    type Err = IngredientError;

    /// Parses a record line. Fields are taken verbatim, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(INGREDIENT_DELIMITER).collect();
        match fields.as_slice() {
            [amount, measure, name] => Ok(Self::new(*amount, *measure, *name)),
            _ => Err(IngredientError {
                line: s.to_string(),
                found: fields.len(),
            }),
        }
    }
}

/// A recipe with its ingredients and instructions
///
/// Equality is structural: two recipes are equal when name, ingredients
/// and instructions all match. `Clone` produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    instructions: Vec<String>,
}

impl Recipe {
    /// Creates an empty recipe with the given name
    pub fn new(name: impl Into<String>) -> Result<Self, RecipeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecipeError::EmptyName);
        }

        Ok(Self {
            name,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Appends an ingredient after the existing ones
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Appends an instruction line after the existing ones
    pub fn add_instruction(&mut self, instruction: impl Into<String>) {
        self.instructions.push(instruction.into());
    }

    /// Builder-style variant of [`Recipe::add_ingredient`]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.add_ingredient(ingredient);
        self
    }

    /// Builder-style variant of [`Recipe::add_instruction`]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.add_instruction(instruction);
        self
    }
}
