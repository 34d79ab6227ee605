//! # Command-Line Interface
//!
//! User-facing commands for the `recipes` binary.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list` | Index and name of every recipe |
//! | `show [INDEX]` | Render one recipe, or all of them |
//! | `delete INDEX` | Remove a recipe and save the file |
//! | `check` | Verify the file parses |
//! | `sort` | Rewrite the file in name order |
//! | `config` | Show the effective configuration |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! `--verbose` (or `-v`) prints progress on stderr and raises the log level
//! to `debug`. `RECIPES_LOG` sets the log filter directly:
//! ```bash
//! RECIPES_LOG=filed_recipes=debug recipes show 0
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod recipe;
mod config_cmd;
mod view;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use view::{render_recipe, render_recipes, RecipeSummary};
