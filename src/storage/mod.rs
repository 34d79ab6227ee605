//! # Storage Layer
//!
//! Persistence for filed-recipes.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Recipes | Sectioned text (`[Recept]` blocks) | any file, `recipes.txt` by default |
//! | Config | TOML | `~/.config/filed-recipes/config.toml` |
//!
//! ## Safety
//!
//! - Saves are atomic (temp file + rename) and write through symlinks
//! - Concurrent saves are serialized by an `fs2` exclusive lock on
//!   `<file>.lock`
//! - A failed load never touches the in-memory collection
//!
//! ## Key Types
//!
//! - [`RecipeRepository`] - Owns the recipes, loads and saves the file
//! - [`format`] - Parser and serializer for the sectioned text format
//! - [`Config`] - User configuration

pub mod format;
mod repository;
mod config;

pub use format::FormatError;
pub use repository::{RecipeRepository, RepositoryError, SubscriptionId};
pub use config::{Config, ConfigError, OutputFormat as DefaultFormat, DEFAULT_RECIPES_FILE};
