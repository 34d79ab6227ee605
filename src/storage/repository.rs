//! Recipe repository backed by a single sectioned text file
//!
//! The repository owns the only mutable copy of the recipes. Every read
//! accessor hands out clones, and `delete` resolves a caller's copy back
//! to the owned original by structural equality.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::{debug, warn};
use thiserror::Error;

use super::format::{self, FormatError};
use crate::domain::Recipe;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid recipe file path: '{}'", path.display())]
    InvalidPath { path: PathBuf },

    #[error("I/O error on recipe file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed recipe file {}", path.display())]
    MalformedFormat {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Recipe index {index} is out of range (have {len} recipes)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Handle returned by [`RecipeRepository::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut()>;

/// In-memory recipe collection loaded from and saved to one file
pub struct RecipeRepository {
    /// Absolute path of the recipe file
    path: PathBuf,

    /// Owned recipes, name-sorted after every load
    recipes: Vec<Recipe>,

    /// Set by mutations, cleared by load and save
    modified: bool,

    /// Change listeners, invoked in subscription order
    listeners: Vec<(SubscriptionId, Listener)>,

    next_subscription: u64,
}

impl RecipeRepository {
    /// Creates an empty repository for the given file
    ///
    /// The path is made absolute right away; the file itself does not need
    /// to exist yet.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let raw = path.as_ref();
        let invalid = || RepositoryError::InvalidPath {
            path: raw.to_path_buf(),
        };

        if raw.as_os_str().is_empty() || raw.to_string_lossy().contains('\0') {
            return Err(invalid());
        }

        let path = std::path::absolute(raw).map_err(|_| invalid())?;

        Ok(Self {
            path,
            recipes: Vec::new(),
            modified: false,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Returns the absolute path of the recipe file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if recipes were deleted since the last load or save
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Replaces the in-memory recipes with the contents of the file
    ///
    /// On any error the current collection is left as it was.
    pub fn load(&mut self) -> Result<()> {
        let content = self.read_file()?;

        let mut recipes = format::parse(&content).map_err(|source| {
            warn!("Rejected recipe file {}: {}", self.path.display(), source);
            RepositoryError::MalformedFormat {
                path: self.path.clone(),
                source,
            }
        })?;

        // Stable, so recipes sharing a name keep their file order
        recipes.sort_by(|a, b| a.name().cmp(b.name()));

        debug!(
            "Loaded {} recipes from {}",
            recipes.len(),
            self.path.display()
        );

        self.recipes = recipes;
        self.modified = false;
        self.notify();

        Ok(())
    }

    /// Reads the whole file
    ///
    /// Saves replace the file by rename, so a reader sees either the old
    /// content or the new one and needs no lock.
    fn read_file(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| self.io_error(e))
    }

    /// Writes all recipes to the file in their current order
    ///
    /// The content goes to a temporary sibling file first and is renamed
    /// over the target, so a failed save leaves the previous file intact
    /// and removes the temporary file. When the path is a symlink, the file
    /// it points to is replaced and the link stays in place.
    ///
    /// Concurrent saves to the same file are serialized through an
    /// exclusive `fs2` lock on a `<file>.lock` sidecar.
    pub fn save(&mut self) -> Result<()> {
        let target = self.save_target();

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Held until the end of the save
        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(sibling(&target, "lock"))
            .map_err(|e| self.io_error(e))?;
        FileExt::lock_exclusive(&lock).map_err(|e| self.io_error(e))?;

        let temp_path = sibling(&target, "tmp");
        let written = self
            .write_temp(&temp_path)
            .and_then(|()| fs::rename(&temp_path, &target));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(e));
        }

        debug!(
            "Saved {} recipes to {}",
            self.recipes.len(),
            target.display()
        );

        self.modified = false;
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(temp_path)?);
        format::write(&mut writer, &self.recipes)?;
        writer.flush()
    }

    /// The file a save replaces, with symlinks resolved
    fn save_target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn io_error(&self, source: io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Returns copies of all recipes in their current order
    pub fn get_all(&self) -> Vec<Recipe> {
        self.recipes.to_vec()
    }

    /// Returns a copy of the recipe at `index`
    pub fn get_at(&self, index: usize) -> Result<Recipe> {
        self.recipes
            .get(index)
            .cloned()
            .ok_or(RepositoryError::IndexOutOfRange {
                index,
                len: self.recipes.len(),
            })
    }

    /// Deletes the owned recipe equal to `recipe`
    ///
    /// Returns false, without touching the modification flag or notifying
    /// listeners, when `recipe` is `None` or matches nothing.
    pub fn delete(&mut self, recipe: Option<&Recipe>) -> bool {
        let Some(position) = recipe.and_then(|r| self.recipes.iter().position(|owned| owned == r))
        else {
            return false;
        };

        self.remove(position);
        true
    }

    /// Deletes the recipe at `index`
    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        if index >= self.recipes.len() {
            return Err(RepositoryError::IndexOutOfRange {
                index,
                len: self.recipes.len(),
            });
        }

        self.remove(index);
        Ok(())
    }

    fn remove(&mut self, position: usize) {
        let removed = self.recipes.remove(position);
        debug!("Deleted recipe '{}'", removed.name());

        self.modified = true;
        self.notify();
    }

    /// Registers a callback run after every load and every actual delete
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != len_before
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl std::fmt::Debug for RecipeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeRepository")
            .field("path", &self.path)
            .field("recipes", &self.recipes)
            .field("modified", &self.modified)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// `<file>.<suffix>` in the same directory as `path`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ingredient;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
[Recept]
Pannkakor
[Ingredienser]
2;dl;mjöl
3;st;ägg
[Instruktioner]
Blanda allt.
Stek.
[Recept]
Äppelpaj
[Ingredienser]
4;st;äpplen
[Instruktioner]
Skala äpplena.
";

    const UNSORTED: &str = "\
[Recept]
Våfflor
[Ingredienser]
[Instruktioner]
[Recept]
Gröt
[Ingredienser]
1;dl;havregryn
[Instruktioner]
Koka.
[Recept]
Kanelbullar
[Ingredienser]
[Instruktioner]
";

    fn repo_with(dir: &TempDir, content: &str) -> RecipeRepository {
        let path = dir.path().join("recipes.txt");
        fs::write(&path, content).unwrap();
        RecipeRepository::new(&path).unwrap()
    }

    fn counter(repo: &mut RecipeRepository) -> (Rc<Cell<usize>>, SubscriptionId) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        let id = repo.subscribe(move || handle.set(handle.get() + 1));
        (count, id)
    }

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn new_repository_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = RecipeRepository::new(dir.path().join("recipes.txt")).unwrap();

        assert!(repo.is_empty());
        assert!(!repo.is_modified());
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn relative_path_is_made_absolute() {
        let repo = RecipeRepository::new("recipes.txt").unwrap();
        assert!(repo.path().is_absolute());
        assert!(repo.path().ends_with("recipes.txt"));
    }

    #[test]
    fn invalid_paths_rejected() {
        assert!(matches!(
            RecipeRepository::new(""),
            Err(RepositoryError::InvalidPath { .. })
        ));
        assert!(matches!(
            RecipeRepository::new("bad\0name.txt"),
            Err(RepositoryError::InvalidPath { .. })
        ));
    }

    #[test]
    fn load_sample() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);

        repo.load().unwrap();

        let recipes = repo.get_all();
        assert_eq!(names(&recipes), vec!["Pannkakor", "Äppelpaj"]);
        assert_eq!(
            recipes[0].ingredients(),
            &[
                Ingredient::new("2", "dl", "mjöl"),
                Ingredient::new("3", "st", "ägg")
            ]
        );
        assert_eq!(recipes[0].instructions(), &["Blanda allt.", "Stek."]);
        assert_eq!(recipes[1].ingredients(), &[Ingredient::new("4", "st", "äpplen")]);
        assert_eq!(recipes[1].instructions(), &["Skala äpplena."]);
        assert!(!repo.is_modified());
    }

    #[test]
    fn load_sorts_by_name() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, UNSORTED);

        repo.load().unwrap();

        assert_eq!(
            names(&repo.get_all()),
            vec!["Gröt", "Kanelbullar", "Våfflor"]
        );
    }

    #[test]
    fn load_keeps_file_order_for_equal_names() {
        let dir = TempDir::new().unwrap();
        let content = "\
[Recept]
Soppa
[Ingredienser]
[Instruktioner]
Första.
[Recept]
Gröt
[Ingredienser]
[Instruktioner]
[Recept]
Soppa
[Ingredienser]
[Instruktioner]
Andra.
";
        let mut repo = repo_with(&dir, content);
        repo.load().unwrap();

        let recipes = repo.get_all();
        assert_eq!(names(&recipes), vec!["Gröt", "Soppa", "Soppa"]);
        assert_eq!(recipes[1].instructions(), &["Första."]);
        assert_eq!(recipes[2].instructions(), &["Andra."]);
    }

    #[test]
    fn load_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, UNSORTED);
        repo.load().unwrap();
        assert_eq!(repo.len(), 3);

        fs::write(repo.path(), SAMPLE).unwrap();
        repo.load().unwrap();

        assert_eq!(names(&repo.get_all()), vec!["Pannkakor", "Äppelpaj"]);
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut repo = RecipeRepository::new(dir.path().join("missing.txt")).unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepositoryError::Io { .. }));
        assert!(repo.is_empty());
    }

    #[test]
    fn malformed_ingredient_keeps_previous_collection() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();
        let (count, _) = counter(&mut repo);

        fs::write(
            repo.path(),
            "[Recept]\nPannkakor\n[Ingredienser]\n1;cup\n[Instruktioner]\n",
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        match err {
            RepositoryError::MalformedFormat { source, .. } => {
                assert_eq!(source, FormatError::IngredientFields { line: 4, found: 2 });
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(names(&repo.get_all()), vec!["Pannkakor", "Äppelpaj"]);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn content_before_marker_is_malformed() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, "Pannkakor\n[Recept]\nSoppa\n");

        let err = repo.load().unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::MalformedFormat {
                source: FormatError::ContentBeforeRecipe { line: 1 },
                ..
            }
        ));
    }

    #[test]
    fn malformed_error_mentions_path_and_line() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, "[Recept]\nSoppa\n[Ingredienser]\n1;cup\n");

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("recipes.txt"));

        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("line 4"));
    }

    #[test]
    fn get_at_returns_copy() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        let mut copy = repo.get_at(0).unwrap();
        copy.add_instruction("Servera.");
        copy.add_ingredient(Ingredient::new("1", "nypa", "salt"));

        let fresh = repo.get_at(0).unwrap();
        assert_eq!(fresh.instructions(), &["Blanda allt.", "Stek."]);
        assert_eq!(fresh.ingredients().len(), 2);
    }

    #[test]
    fn get_all_returns_copies() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        let mut all = repo.get_all();
        all[1].add_instruction("Grädda.");
        all.clear();

        let fresh = repo.get_all();
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[1].instructions(), &["Skala äpplena."]);
    }

    #[test]
    fn get_at_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        assert!(matches!(
            repo.get_at(2),
            Err(RepositoryError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            repo.get_at(usize::MAX),
            Err(RepositoryError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn delete_by_copy_removes_original() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();
        let (count, _) = counter(&mut repo);

        let copy = repo.get_at(0).unwrap();
        assert!(repo.delete(Some(&copy)));

        assert_eq!(repo.len(), 1);
        assert_eq!(names(&repo.get_all()), vec!["Äppelpaj"]);
        assert_eq!(count.get(), 1);
        assert!(repo.is_modified());
    }

    #[test]
    fn delete_none_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();
        let (count, _) = counter(&mut repo);

        assert!(!repo.delete(None));

        assert_eq!(repo.len(), 2);
        assert_eq!(count.get(), 0);
        assert!(!repo.is_modified());
    }

    #[test]
    fn delete_unknown_recipe_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        let mut altered = repo.get_at(0).unwrap();
        altered.add_instruction("Servera.");

        assert!(!repo.delete(Some(&altered)));
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_modified());
    }

    #[test]
    fn delete_at_index() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();
        let (count, _) = counter(&mut repo);

        repo.delete_at(1).unwrap();

        assert_eq!(names(&repo.get_all()), vec!["Pannkakor"]);
        assert_eq!(count.get(), 1);
        assert!(repo.is_modified());
    }

    #[test]
    fn delete_at_out_of_range() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        assert!(matches!(
            repo.delete_at(2),
            Err(RepositoryError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_modified());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, UNSORTED);
        repo.load().unwrap();
        let before = repo.get_all();

        repo.save().unwrap();
        repo.load().unwrap();

        assert_eq!(repo.get_all(), before);
    }

    #[test]
    fn save_writes_current_order() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, UNSORTED);
        repo.load().unwrap();

        repo.save().unwrap();

        let content = fs::read_to_string(repo.path()).unwrap();
        let grot = content.find("Gröt").unwrap();
        let kanel = content.find("Kanelbullar").unwrap();
        let vafflor = content.find("Våfflor").unwrap();
        assert!(grot < kanel && kanel < vafflor);
        assert!(content.contains("1;dl;havregryn\n"));
    }

    #[test]
    fn save_after_delete_persists_removal() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        repo.delete_at(0).unwrap();
        repo.save().unwrap();
        assert!(!repo.is_modified());

        let mut reopened = RecipeRepository::new(repo.path()).unwrap();
        reopened.load().unwrap();
        assert_eq!(names(&reopened.get_all()), vec!["Äppelpaj"]);
    }

    #[test]
    fn save_creates_file_and_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("recipes.txt");
        let mut repo = RecipeRepository::new(&path).unwrap();

        repo.save().unwrap();

        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();

        repo.save().unwrap();

        assert!(!dir.path().join("recipes.txt.tmp").exists());
    }

    #[test]
    fn save_to_directory_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("as-dir");
        fs::create_dir_all(target.join("inner")).unwrap();
        let mut repo = RecipeRepository::new(&target).unwrap();

        assert!(matches!(repo.save(), Err(RepositoryError::Io { .. })));
        assert!(!dir.path().join("as-dir.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn save_through_symlink_updates_linked_file() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("recipes.txt");
        fs::write(&real, UNSORTED).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut repo = RecipeRepository::new(&link).unwrap();
        repo.load().unwrap();
        let first = repo.get_at(0).unwrap();
        repo.delete_at(0).unwrap();
        repo.save().unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let reloaded = format::parse(&fs::read_to_string(&real).unwrap()).unwrap();
        assert!(!reloaded.contains(&first));
        assert_eq!(reloaded.len(), repo.len());
        assert!(!dir.path().join("real.txt.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn save_waits_for_lock_holder() {
        use std::thread;
        use std::time::Duration;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.txt");
        let lock = File::create(dir.path().join("recipes.txt.lock")).unwrap();
        FileExt::lock_exclusive(&lock).unwrap();

        let writer_path = path.clone();
        let writer = thread::spawn(move || {
            let mut repo = RecipeRepository::new(&writer_path).unwrap();
            repo.save().unwrap();
        });

        thread::sleep(Duration::from_millis(200));
        assert!(!path.exists());

        FileExt::unlock(&lock).unwrap();
        writer.join().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_accepts_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(
            &dir,
            "\u{FEFF}[Recept]\nSoppa\n[Ingredienser]\n1;l;vatten\n[Instruktioner]\nKoka.\n",
        );

        repo.load().unwrap();

        assert_eq!(names(&repo.get_all()), vec!["Soppa"]);
    }

    #[test]
    fn every_load_notifies() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        let (count, _) = counter(&mut repo);

        repo.load().unwrap();
        repo.load().unwrap();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn all_subscribers_notified() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        let (first, _) = counter(&mut repo);
        let (second, _) = counter(&mut repo);

        repo.load().unwrap();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn subscribers_run_in_order() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            repo.subscribe(move || order.borrow_mut().push(tag));
        }
        repo.load().unwrap();

        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        let (count, id) = counter(&mut repo);

        repo.load().unwrap();
        assert!(repo.unsubscribe(id));
        assert!(!repo.unsubscribe(id));

        repo.load().unwrap();
        repo.delete_at(0).unwrap();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn save_does_not_notify() {
        let dir = TempDir::new().unwrap();
        let mut repo = repo_with(&dir, SAMPLE);
        repo.load().unwrap();
        let (count, _) = counter(&mut repo);

        repo.save().unwrap();

        assert_eq!(count.get(), 0);
    }
}
