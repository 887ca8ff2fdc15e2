//! Recursive source walker built on `walkdir`.
//!
//! The root is checked eagerly: a missing or unreadable root aborts the run.
//! Everything below the root is reported per entry so one bad file or
//! directory never stops the walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gocallgraph_core::config::ScanConfig;
use gocallgraph_core::errors::ScanError;
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Lazily enumerates source files under a root directory.
#[derive(Debug, Clone)]
pub struct SourceWalker {
    extensions: Vec<String>,
    ignore_dirs: Vec<String>,
    follow_symlinks: bool,
    max_file_size: Option<u64>,
}

impl SourceWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extensions: config.effective_extensions(),
            ignore_dirs: config.effective_ignore_dirs(),
            follow_symlinks: config.effective_follow_symlinks(),
            max_file_size: config.max_file_size,
        }
    }

    /// Start a pre-order walk of `root`.
    ///
    /// Yields `Ok(path)` for every regular file with a matching extension and
    /// `Err` for entries that could not be read. Directory entries are sorted
    /// by file name.
    pub fn walk<'a>(
        &'a self,
        root: &Path,
    ) -> Result<impl Iterator<Item = Result<PathBuf, ScanError>> + 'a, ScanError> {
        check_root(root)?;

        let iter = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_ignored_dir(entry))
            .filter_map(move |entry| self.classify(entry));

        Ok(iter)
    }

    /// Convenience: walk and split into discovered files and per-entry errors.
    pub fn collect(&self, root: &Path) -> Result<(Vec<PathBuf>, Vec<ScanError>), ScanError> {
        let mut files = Vec::new();
        let mut errors = Vec::new();
        for entry in self.walk(root)? {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => errors.push(e),
            }
        }
        Ok((files, errors))
    }

    fn is_ignored_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.ignore_dirs.iter().any(|d| d == name))
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn classify(&self, entry: walkdir::Result<DirEntry>) -> Option<Result<PathBuf, ScanError>> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                return Some(Err(ScanError::Walk {
                    path,
                    message: e.to_string(),
                }));
            }
        };

        // Without follow_links a symlink reports its own type and is skipped here.
        if !entry.file_type().is_file() || !self.matches_extension(entry.path()) {
            return None;
        }

        if let Some(max) = self.max_file_size {
            match entry.metadata() {
                Ok(meta) if meta.len() > max => {
                    return Some(Err(ScanError::FileTooLarge {
                        path: entry.into_path(),
                        size: meta.len(),
                        max,
                    }));
                }
                Ok(_) => {}
                Err(e) => {
                    return Some(Err(ScanError::Walk {
                        path: entry.into_path(),
                        message: e.to_string(),
                    }));
                }
            }
        }

        trace!(path = %entry.path().display(), "discovered source file");
        Some(Ok(entry.into_path()))
    }
}

impl Default for SourceWalker {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScanError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !meta.is_dir() {
        return Err(ScanError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(())
}
