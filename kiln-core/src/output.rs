//! Staged writing of a complete output set.
//!
//! Every file is first written into a staging directory inside the project
//! root. Only once the whole set is staged are stale files and replaced
//! targets moved aside and the new files moved into place. If any of those
//! moves fails, every change made so far is undone, so the project is either
//! fully updated or left as it was.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use thiserror::Error;

use crate::{File, Overwrite};

const STAGING_PREFIX: &str = ".kiln-staging-";

/// I/O failure while committing an output set.
#[derive(Debug, Error)]
#[error("failed to {action} '{}'", path.display())]
pub struct WriteError {
    pub action: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    fn new(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Outcome of [`OutputWriter::commit`], paths relative to the root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Files written or overwritten.
    pub written: Vec<PathBuf>,
    /// Sample files left alone because they already exist.
    pub skipped: Vec<PathBuf>,
    /// Stale files from a previous run that were deleted.
    pub removed: Vec<PathBuf>,
}

/// Writes a whole set of files below a project root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stage and commit `files`, then delete every path in `stale` that is
    /// not part of the new set.
    ///
    /// # Errors
    ///
    /// Returns the first failure. Files already moved into place are taken
    /// back out and replaced or removed files are restored before returning.
    pub fn commit(&self, files: &[File], stale: &[PathBuf]) -> Result<WriteSummary, WriteError> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| WriteError::new("create directory", &self.root, e))?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.root)
            .map_err(|e| WriteError::new("create staging directory in", &self.root, e))?;
        let incoming = staging.path().join("new");
        let backups = staging.path().join("old");

        let mut summary = WriteSummary::default();
        let mut staged = Vec::new();

        for file in files {
            if file.rules().overwrite == Overwrite::IfMissing && file.exists_in(&self.root) {
                summary.skipped.push(file.path().to_path_buf());
                continue;
            }
            let staged_path = incoming.join(file.path());
            create_parent(&staged_path)?;
            std::fs::write(&staged_path, file.content())
                .map_err(|e| WriteError::new("stage", file.path(), e))?;
            staged.push(file.path());
        }

        let removals: Vec<&PathBuf> = stale
            .iter()
            .filter(|path| is_contained(path) && !files.iter().any(|f| f.path() == path.as_path()))
            .collect();

        let mut tx = Transaction {
            root: &self.root,
            backups: &backups,
            undo: Vec::new(),
        };
        match tx.apply(&incoming, &staged, &removals, &mut summary) {
            Ok(()) => Ok(summary),
            Err(err) => {
                tx.rollback();
                Err(err)
            }
        }
    }

    /// Delete every listed path below the root. Missing files are ignored.
    pub fn remove(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, WriteError> {
        let mut removed = Vec::new();
        for path in paths.iter().filter(|p| is_contained(p)) {
            let target = self.root.join(path);
            match std::fs::remove_file(&target) {
                Ok(()) => removed.push(path.clone()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(WriteError::new("remove", &target, e)),
            }
        }
        Ok(removed)
    }
}

/// A change made to the project root that can be undone.
enum Undo {
    /// A directory that did not exist before.
    CreatedDir(PathBuf),
    /// A file moved into place from staging.
    Written(PathBuf),
    /// A file moved into the backup directory, stale or about to be replaced.
    MovedAside(PathBuf),
}

struct Transaction<'a> {
    root: &'a Path,
    backups: &'a Path,
    undo: Vec<Undo>,
}

impl Transaction<'_> {
    fn apply(
        &mut self,
        incoming: &Path,
        staged: &[&Path],
        removals: &[&PathBuf],
        summary: &mut WriteSummary,
    ) -> Result<(), WriteError> {
        for path in removals {
            let target = self.root.join(path);
            match std::fs::symlink_metadata(&target) {
                Ok(meta) if meta.is_dir() => continue,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(WriteError::new("remove", &target, e)),
            }
            self.move_aside(path, &target)?;
            tracing::debug!(path = %path.display(), "removed stale file");
            summary.removed.push(path.to_path_buf());
        }

        for path in staged {
            let target = self.root.join(path);
            let exists = match std::fs::symlink_metadata(&target) {
                Ok(meta) if meta.is_dir() => {
                    return Err(WriteError::new(
                        "write",
                        &target,
                        io::Error::new(io::ErrorKind::AlreadyExists, "a directory is in the way"),
                    ));
                }
                Ok(_) => true,
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => return Err(WriteError::new("write", &target, e)),
            };

            if exists {
                self.move_aside(path, &target)?;
            } else {
                self.create_dirs_for(&target)?;
            }
            std::fs::rename(incoming.join(path), &target)
                .map_err(|e| WriteError::new("write", &target, e))?;
            self.undo.push(Undo::Written(path.to_path_buf()));
            tracing::debug!(path = %path.display(), "wrote file");
            summary.written.push(path.to_path_buf());
        }

        Ok(())
    }

    /// Move the file at `target` into the backup directory.
    fn move_aside(&mut self, path: &Path, target: &Path) -> Result<(), WriteError> {
        let backup = self.backups.join(path);
        create_parent(&backup)?;
        std::fs::rename(target, &backup).map_err(|e| WriteError::new("back up", target, e))?;
        self.undo.push(Undo::MovedAside(path.to_path_buf()));
        Ok(())
    }

    fn create_dirs_for(&mut self, target: &Path) -> Result<(), WriteError> {
        let Some(parent) = target.parent() else {
            return Ok(());
        };
        let missing: Vec<PathBuf> = parent
            .ancestors()
            .take_while(|dir| !dir.exists())
            .map(Path::to_path_buf)
            .collect();
        create_parent(target)?;
        self.undo
            .extend(missing.into_iter().rev().map(Undo::CreatedDir));
        Ok(())
    }

    /// Undo every recorded change, newest first. Failures are logged and
    /// skipped so the rest can still be restored.
    fn rollback(&mut self) {
        while let Some(step) = self.undo.pop() {
            let result = match &step {
                Undo::CreatedDir(dir) => std::fs::remove_dir(dir),
                Undo::Written(path) => std::fs::remove_file(self.root.join(path)),
                Undo::MovedAside(path) => {
                    std::fs::rename(self.backups.join(path), self.root.join(path))
                }
            };
            if let Err(e) = result {
                tracing::warn!(error = %e, "could not undo a partial write");
            }
        }
    }
}

fn create_parent(path: &Path) -> Result<(), WriteError> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent)
            .map_err(|e| WriteError::new("create directory", parent, e)),
        None => Ok(()),
    }
}

/// Relative paths that stay inside the root.
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
