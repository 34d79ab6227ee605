//! Recipe CLI commands

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use super::view::{self, RecipeSummary};
use crate::storage::RecipeRepository;

/// Opens the repository for `path` and loads it
fn open(output: &Output, path: &Path) -> Result<RecipeRepository> {
    let mut repo = RecipeRepository::new(path)?;
    output.verbose_ctx("load", &format!("Reading recipes from: {}", repo.path().display()));

    repo.subscribe(|| log::debug!("Recipe collection changed"));
    repo.load()
        .with_context(|| format!("Failed to load recipes from {}", path.display()))?;

    output.verbose_ctx("load", &format!("Loaded {} recipes", repo.len()));
    Ok(repo)
}

pub fn list(output: &Output, path: &Path) -> Result<()> {
    let repo = open(output, path)?;
    let recipes = repo.get_all();

    if output.is_json() {
        let items: Vec<_> = recipes
            .iter()
            .enumerate()
            .map(|(i, r)| RecipeSummary::new(i, r))
            .collect();
        output.data(&items);
    } else if recipes.is_empty() {
        println!("No recipes in {}", repo.path().display());
    } else {
        println!("{:<6} NAME", "INDEX");
        println!("{}", "-".repeat(40));
        for (i, recipe) in recipes.iter().enumerate() {
            println!("{:<6} {}", i, recipe.name());
        }
    }

    Ok(())
}

pub fn show(output: &Output, path: &Path, index: Option<usize>, pause: bool) -> Result<()> {
    let repo = open(output, path)?;

    let recipes = match index {
        Some(index) => vec![repo.get_at(index)?],
        None => repo.get_all(),
    };

    if output.is_json() {
        match index {
            Some(_) => output.data(&recipes[0]),
            None => output.data(&recipes),
        }
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes in {}", repo.path().display());
        return Ok(());
    }

    let stdout = io::stdout();
    let stdin = io::stdin();
    view::render_recipes(&mut stdout.lock(), &mut stdin.lock(), &recipes, pause)
        .context("Failed to write recipe")?;

    Ok(())
}

pub fn delete(output: &Output, path: &Path, index: usize) -> Result<()> {
    let mut repo = open(output, path)?;

    let recipe = repo.get_at(index)?;
    repo.delete_at(index)?;
    output.verbose_ctx("delete", &format!("Removed '{}', saving", recipe.name()));

    repo.save()
        .with_context(|| format!("Failed to save recipes to {}", path.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": recipe.name(),
            "index": index,
            "remaining": repo.len(),
        }));
    } else {
        output.success(&format!("Deleted recipe: {}", recipe.name()));
    }

    Ok(())
}

pub fn check(output: &Output, path: &Path) -> Result<()> {
    let repo = open(output, path)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "valid": true,
            "path": repo.path().display().to_string(),
            "recipes": repo.len(),
        }));
    } else {
        output.success(&format!(
            "{} is valid ({} recipes)",
            repo.path().display(),
            repo.len()
        ));
    }

    Ok(())
}

pub fn sort(output: &Output, path: &Path) -> Result<()> {
    let mut repo = open(output, path)?;

    repo.save()
        .with_context(|| format!("Failed to save recipes to {}", path.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "sorted": true,
            "recipes": repo.len(),
        }));
    } else {
        output.success(&format!(
            "Sorted {} recipes in {}",
            repo.len(),
            repo.path().display()
        ));
    }

    Ok(())
}
