use crate::areas::database::Database;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
}

impl Repository {
    /// Open the repository whose metadata lives in `git_dir`
    ///
    /// Objects are looked up in `<git_dir>/objects` unless `objects_dir` says
    /// otherwise. Nothing is read or created on disk here.
    pub fn new(
        git_dir: impl Into<PathBuf>,
        objects_dir: Option<PathBuf>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let path = git_dir.into();
        let objects_dir = objects_dir.unwrap_or_else(|| path.join("objects"));

        tracing::debug!(
            git_dir = %path.display(),
            objects_dir = %objects_dir.display(),
            "opening repository"
        );

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database: Database::new(objects_dir.into_boxed_path()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}
