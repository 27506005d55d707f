//! Core line-count data structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

/// Line counts for a single language within a single file or an aggregate.
///
/// Every physical line of a classified file lands in exactly one of these
/// buckets, so `total()` always equals the physical line count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Lines containing code. A line with both code and a trailing comment
    /// counts as code.
    pub code: u64,
    /// Lines containing only ordinary comments.
    pub comments: u64,
    /// Lines containing only documentation comments (`///`, docstrings).
    pub docs: u64,
    /// Whitespace-only lines outside any open comment or string construct.
    pub blank: u64,
}

impl Counts {
    /// Create a new Counts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of lines (code + comments + docs + blank).
    pub fn total(&self) -> u64 {
        self.code + self.comments + self.docs + self.blank
    }

    /// All comment lines, documentation included.
    ///
    /// Consumers that do not care about the doc sub-category should use this
    /// instead of reading `comments` and `docs` separately.
    pub fn comment_total(&self) -> u64 {
        self.comments + self.docs
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            docs: self.docs + other.docs,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.docs += other.docs;
        self.blank += other.blank;
    }
}

/// Per-file classification result.
///
/// A file normally contributes to a single language, but a file with
/// embedded regions (e.g. JavaScript inside HTML) carries one entry per
/// language found. Each physical line is attributed to exactly one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    /// Counts per language name. A `BTreeMap` keeps iteration deterministic.
    pub languages: BTreeMap<String, Counts>,
}

impl FileCount {
    /// Create an empty file count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file count for a single language.
    pub fn single(language: impl Into<String>, counts: Counts) -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(language.into(), counts);
        Self { languages }
    }

    /// Add counts for a language, merging with any existing entry.
    pub fn add(&mut self, language: impl Into<String>, counts: Counts) {
        *self.languages.entry(language.into()).or_default() += counts;
    }

    /// Merge another file count into this one.
    pub fn merge(&mut self, other: FileCount) {
        for (language, counts) in other.languages {
            *self.languages.entry(language).or_default() += counts;
        }
    }

    /// Total lines across all languages in the file.
    pub fn total_lines(&self) -> u64 {
        self.languages.values().map(Counts::total).sum()
    }
}
