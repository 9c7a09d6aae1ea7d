//! Recursive discovery of input files.
//!
//! The walker descends from a root directory and yields every regular file
//! with the configured extension, except files whose name is on the exclusion
//! list and anything below a directory whose name is on the directory
//! exclusion list. Traversal order is whatever the file system returns.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::error::{IngestError, Result};

/// Directory conventionally used for files that failed validation.
pub const DEFAULT_EXCLUDED_DIR: &str = "error";

/// Files in the poem corpus that are not poem collections.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["唐诗补录.json", "表面结构字.json"];

/// Configuration for directory traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// File extension to accept, without the leading dot. Case-sensitive.
    pub extension: String,

    /// Exact file names that are never loaded.
    pub exclude_files: BTreeSet<String>,

    /// Directory names whose whole subtree is skipped.
    pub exclude_dirs: BTreeSet<String>,

    /// Whether to follow symbolic links.
    pub follow_links: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            exclude_files: DEFAULT_EXCLUDED_FILES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            exclude_dirs: BTreeSet::from([DEFAULT_EXCLUDED_DIR.to_string()]),
            follow_links: false,
        }
    }
}

impl WalkConfig {
    /// Add a file name to skip.
    pub fn with_excluded_file<S: Into<String>>(mut self, name: S) -> Self {
        self.exclude_files.insert(name.into());
        self
    }

    /// Add a directory name whose subtree is skipped.
    pub fn with_excluded_dir<S: Into<String>>(mut self, name: S) -> Self {
        self.exclude_dirs.insert(name.into());
        self
    }

    /// Set the accepted extension.
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set whether symbolic links are followed.
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

type EntryFilter = Box<dyn FnMut(&DirEntry) -> bool + Send>;

/// Walks a directory tree and yields matching files lazily.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Create a walker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Start walking `root`.
    ///
    /// Unreadable entries are yielded as [`IngestError::Walk`]; callers treat
    /// them as fatal. The root itself is never excluded by name.
    pub fn walk<P: AsRef<Path>>(&self, root: P) -> FileWalk {
        let exclude_files = self.config.exclude_files.clone();
        let exclude_dirs = self.config.exclude_dirs.clone();

        let filter: EntryFilter = Box::new(move |entry: &DirEntry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_dir() {
                if exclude_dirs.contains(name.as_ref()) {
                    log::debug!("Skipping excluded directory: {}", entry.path().display());
                    return false;
                }
            } else if exclude_files.contains(name.as_ref()) {
                log::debug!("Skipping excluded file: {}", entry.path().display());
                return false;
            }
            true
        });

        let inner = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .into_iter()
            .filter_entry(filter);

        FileWalk {
            inner,
            extension: self.config.extension.clone(),
        }
    }
}

/// Lazy iterator over the files accepted by a [`DirectoryWalker`].
pub struct FileWalk {
    inner: FilterEntry<walkdir::IntoIter, EntryFilter>,
    extension: String,
}

impl FileWalk {
    fn accepts(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.to_str() == Some(self.extension.as_str()))
    }
}

impl Iterator for FileWalk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if self.accepts(&entry) {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(e) => {
                    let location = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "<unknown>".to_string());
                    return Some(Err(IngestError::walk(format!("{location}: {e}"))));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "[]").unwrap();
    }

    fn collect_names(walker: &DirectoryWalker, root: &Path) -> Vec<String> {
        let mut names: Vec<String> = walker
            .walk(root)
            .map(|p| {
                p.unwrap()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "tang/poet.tang.0.json");
        touch(dir.path(), "tang/README.md");
        touch(dir.path(), "song/ci.song.0.JSON");
        touch(dir.path(), "song/ci.song.1.json");

        let walker = DirectoryWalker::default();
        assert_eq!(
            collect_names(&walker, dir.path()),
            vec!["song/ci.song.1.json", "tang/poet.tang.0.json"]
        );
    }

    #[test]
    fn test_excluded_dir_skips_subtree() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ok.json");
        touch(dir.path(), "error/bad.json");
        touch(dir.path(), "error/nested/deeper.json");
        touch(dir.path(), "sub/error/also_bad.json");

        let walker = DirectoryWalker::default();
        assert_eq!(collect_names(&walker, dir.path()), vec!["ok.json"]);
    }

    #[test]
    fn test_excluded_file_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "authors.tang.json");
        touch(dir.path(), "poet.tang.0.json");
        touch(dir.path(), "nested/authors.tang.json");

        let walker =
            DirectoryWalker::new(WalkConfig::default().with_excluded_file("authors.tang.json"));
        assert_eq!(collect_names(&walker, dir.path()), vec!["poet.tang.0.json"]);
    }

    #[test]
    fn test_default_excluded_files() {
        let config = WalkConfig::default();
        assert!(config.exclude_files.contains("唐诗补录.json"));
        assert!(config.exclude_files.contains("表面结构字.json"));

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "唐诗补录.json");
        touch(dir.path(), "strains/表面结构字.json");
        touch(dir.path(), "poet.tang.0.json");

        let walker = DirectoryWalker::new(config);
        assert_eq!(collect_names(&walker, dir.path()), vec!["poet.tang.0.json"]);
    }

    #[test]
    fn test_excluded_name_only_applies_to_matching_kind() {
        let dir = TempDir::new().unwrap();
        // A directory named like an excluded file is still walked.
        touch(dir.path(), "skip.json/inner.json");

        let walker = DirectoryWalker::new(WalkConfig::default().with_excluded_file("skip.json"));
        assert_eq!(collect_names(&walker, dir.path()), vec!["skip.json/inner.json"]);
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_walked() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "error/a.json");

        let walker = DirectoryWalker::default();
        let root = dir.path().join("error");
        assert_eq!(collect_names(&walker, &root), vec!["a.json"]);
    }

    #[test]
    fn test_missing_root_is_walk_error() {
        let dir = TempDir::new().unwrap();
        let walker = DirectoryWalker::default();
        let results: Vec<_> = walker.walk(dir.path().join("does-not-exist")).collect();

        assert_eq!(results.len(), 1);
        match &results[0] {
            Err(e) => {
                assert!(matches!(e, IngestError::Walk(_)));
                assert!(e.is_fatal());
            }
            Ok(p) => panic!("Expected walk error, got {}", p.display()),
        }
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.json");
        touch(dir.path(), "b.ndjson");

        let walker = DirectoryWalker::new(WalkConfig::default().with_extension("ndjson"));
        assert_eq!(collect_names(&walker, dir.path()), vec!["b.ndjson"]);
    }
}
