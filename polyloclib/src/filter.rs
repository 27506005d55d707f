//! File filtering and discovery with glob pattern support.
//!
//! Discovery is language-agnostic: the walk returns every regular file
//! that passes the include/exclude patterns, and language identification
//! happens later, per file. Hidden directories and common build output
//! directories are skipped during traversal.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::PolylocError;
use crate::Result;

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes all files).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| PolylocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.include.push(pat);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| PolylocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It matches at least one include pattern (or include is empty)
    /// 2. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        // Check excludes first
        for pattern in &self.exclude {
            if pattern.matches(&path_str) {
                return false;
            }
        }

        // If no include patterns, include all
        if self.include.is_empty() {
            return true;
        }

        // Must match at least one include pattern
        for pattern in &self.include {
            if pattern.matches(&path_str) {
                return true;
            }
        }

        false
    }
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    // Hidden directories and the usual build/dependency output.
    name.starts_with('.') || name == "target" || name == "node_modules"
}

/// Discover countable files in a directory.
///
/// Walks the directory tree and returns all regular files that match the
/// filter. An explicit file path bypasses the directory skip rules.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(PolylocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        // For non-root entries, skip hidden and build output dirs
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        // Include files
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}

/// Discover countable files in multiple directories.
pub fn discover_files_in_dirs(dirs: &[&Path], filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut all_files = Vec::new();

    for dir in dirs {
        let files = discover_files(dir, filter)?;
        all_files.extend(files);
    }

    // Remove duplicates and sort
    all_files.sort();
    all_files.dedup();

    Ok(all_files)
}
