//! # polyloclib
//!
//! A multi-language lines of code counter library that separates code,
//! comments, documentation, and blank lines.
//!
//! ## Overview
//!
//! Classification is table-driven: every supported language is a data
//! record of comment, string and embedding delimiters, and one generic
//! state machine classifies every physical line. This keeps counts
//! resistant to the classic traps:
//!
//! - **Strings are opaque**: `"http://example.com"` is code, not a comment
//! - **Nested block comments**: languages that nest (Rust, Haskell) track
//!   a depth counter
//! - **Doc comments**: `///` and docstrings are counted separately from
//!   plain comments
//! - **Embedded languages**: JavaScript inside `<script>` tags is counted
//!   as JavaScript, line by line
//!
//! Files are identified by exact filename, shebang line, or longest
//! matching extension, in that order. Directory counts run in parallel
//! and merge deterministically.
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::{count_directory, CountOptions, LanguageRegistry, Ordering, RunStatus};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("hello.py"), "# greet\nprint(\"hi\")\n").unwrap();
//!
//! let registry = LanguageRegistry::builtin();
//! let aggregator = count_directory(registry, dir.path(), &CountOptions::new()).unwrap();
//! let report = aggregator.into_report(Ordering::default(), RunStatus::Complete);
//!
//! assert_eq!(report.rows[0].language, "Python");
//! assert_eq!(report.total.code, 1);
//! assert_eq!(report.total.comments, 1);
//! ```

pub mod aggregate;
pub mod classifier;
pub mod counter;
pub mod counts;
pub mod embedding;
pub mod error;
pub mod filter;
pub mod language;
pub mod languages;
pub mod options;
pub mod registry;

pub use aggregate::{Aggregator, LanguageRow, LanguageStats, Report, RunStatus};
pub use classifier::{EmbeddedSpan, LineClassifier};
pub use counter::{
    count_directory, count_file, count_files, count_files_cancellable, CancelFlag, CountOptions,
};
pub use counts::{Counts, FileCount};
pub use embedding::count_text;
pub use error::PolylocError;
pub use filter::{discover_files, discover_files_in_dirs, FilterConfig};
pub use language::{BlockDelim, EmbedDelim, LanguageSpec, QuoteDelim};
pub use languages::builtin_languages;
pub use options::{CountConfig, OrderBy, OrderDirection, Ordering};
pub use registry::LanguageRegistry;

/// Result type for polyloclib operations
pub type Result<T> = std::result::Result<T, PolylocError>;
