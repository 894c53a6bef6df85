use ignore::{Walk, WalkBuilder};

use crate::core::error::{HtmlValidatorError, Result};
use crate::discovery::path_utils::{contains_marker, has_extension};

use std::fs;
use std::path::{Path, PathBuf};

/// Finds documents to validate below a root directory
pub trait DocumentFinder {
    fn find(&self, root: &Path) -> Result<HtmlFiles>;
}

/// Recursive, depth-first finder for files with a given extension.
///
/// Directories whose path below the root contains `excluded` are not
/// descended into. `.gitignore` and hidden-file rules are not applied and
/// symlinks are not followed.
#[derive(Debug, Clone)]
pub struct Finder {
    extension: String,
    excluded: String,
}

impl Finder {
    pub fn new(extension: impl Into<String>, excluded: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            excluded: excluded.into(),
        }
    }
}

impl DocumentFinder for Finder {
    fn find(&self, root: &Path) -> Result<HtmlFiles> {
        let metadata = fs::metadata(root)?;
        if !metadata.is_dir() {
            return Err(HtmlValidatorError::InvalidArgument(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }

        let prune_root = root.to_path_buf();
        let prune_marker = self.excluded.clone();

        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && contains_marker(entry.path(), &prune_root, &prune_marker))
            })
            .build();

        Ok(HtmlFiles {
            walk,
            root: root.to_path_buf(),
            extension: self.extension.clone(),
            excluded: self.excluded.clone(),
            done: false,
        })
    }
}

/// Lazy sequence of matching files.
///
/// The first walk error is yielded once and ends the sequence.
pub struct HtmlFiles {
    walk: Walk,
    root: PathBuf,
    extension: String,
    excluded: String,
    done: bool,
}

impl Iterator for HtmlFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if contains_marker(&path, &self.root, &self.excluded) {
                continue;
            }
            if has_extension(&path, &self.extension) {
                return Some(Ok(path));
            }
        }
    }
}
