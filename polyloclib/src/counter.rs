//! Counting orchestration: reading files, resolving languages and running
//! the classification in parallel.
//!
//! Workers share the read-only registry and fold their files into private
//! [`Aggregator`]s, which are merged at the end. No locks are held during
//! classification.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::aggregate::{Aggregator, RunStatus};
use crate::counts::FileCount;
use crate::embedding::count_text;
use crate::error::PolylocError;
use crate::filter::{discover_files, FilterConfig};
use crate::options::CountConfig;
use crate::registry::LanguageRegistry;
use crate::Result;

/// Options for a counting run.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File discovery filter.
    pub filter: FilterConfig,
    /// Classification configuration.
    pub config: CountConfig,
}

impl CountOptions {
    /// Create options with default filter and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Builder: set the classification configuration.
    pub fn config(mut self, config: CountConfig) -> Self {
        self.config = config;
        self
    }
}

/// Cooperative cancellation handle for a counting run.
///
/// Cloning shares the flag. Workers observe it between files, so a
/// cancelled run still finishes the files already being classified.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a new, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Count a single file.
///
/// Returns `Ok(None)` when no language definition matches the file.
/// Content is decoded lossily, so invalid UTF-8 never fails a count;
/// only the read itself can error.
pub fn count_file(
    registry: &LanguageRegistry,
    path: &Path,
    config: CountConfig,
) -> Result<Option<FileCount>> {
    let bytes = fs::read(path).map_err(|source| PolylocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let first_line = text.lines().next();

    Ok(registry
        .resolve(path, first_line)
        .map(|language| count_text(registry, language, &text, config)))
}

/// Count a list of files in parallel.
pub fn count_files(
    registry: &LanguageRegistry,
    files: &[PathBuf],
    config: CountConfig,
) -> Aggregator {
    files
        .par_iter()
        .fold(Aggregator::new, |mut agg, path| {
            process_file(registry, path, config, &mut agg);
            agg
        })
        .reduce(Aggregator::new, |mut a, b| {
            a.merge(b);
            a
        })
}

/// Count a list of files in parallel with cooperative cancellation.
///
/// Returns [`RunStatus::Partial`] when the flag was set before every file
/// was processed; the aggregator then covers only the processed files.
pub fn count_files_cancellable(
    registry: &LanguageRegistry,
    files: &[PathBuf],
    config: CountConfig,
    cancel: &CancelFlag,
) -> (Aggregator, RunStatus) {
    let aggregator = files
        .par_iter()
        .fold(Aggregator::new, |mut agg, path| {
            if !cancel.is_cancelled() {
                process_file(registry, path, config, &mut agg);
            }
            agg
        })
        .reduce(Aggregator::new, |mut a, b| {
            a.merge(b);
            a
        });

    let status = if cancel.is_cancelled() {
        RunStatus::Partial
    } else {
        RunStatus::Complete
    };
    (aggregator, status)
}

/// Discover and count every matching file under `root`.
pub fn count_directory(
    registry: &LanguageRegistry,
    root: impl AsRef<Path>,
    options: &CountOptions,
) -> Result<Aggregator> {
    let files = discover_files(root, &options.filter)?;
    Ok(count_files(registry, &files, options.config))
}

/// Classify one file into the aggregator. Read failures and unrecognized
/// files are recorded, never propagated; a bad file must not abort the run.
fn process_file(
    registry: &LanguageRegistry,
    path: &Path,
    config: CountConfig,
    aggregator: &mut Aggregator,
) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => {
            aggregator.add_read_error(path.to_path_buf());
            return;
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    let first_line = text.lines().next();

    match registry.resolve(path, first_line) {
        Some(language) => aggregator.add_file(count_text(registry, language, &text, config)),
        None => aggregator.add_unrecognized(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Ordering;
    use std::fs;
    use tempfile::tempdir;

    fn create_project(dir: &Path) {
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::create_dir_all(dir.join("web")).unwrap();

        fs::write(
            dir.join("src/main.rs"),
            "/// Entry point.\nfn main() {\n    println!(\"hi\");\n}\n",
        )
        .unwrap();
        fs::write(dir.join("src/tool.py"), "# tool\nx = 1\n\ny = 2\n").unwrap();
        fs::write(
            dir.join("web/index.html"),
            "<body>\n<script>\nvar x = 1;\n</script>\n</body>\n",
        )
        .unwrap();
        fs::write(dir.join("run"), "#!/usr/bin/env bash\necho hi\n").unwrap();
        fs::write(dir.join("data.bin"), [0u8, 159, 146, 150]).unwrap();
    }

    #[test]
    fn test_count_file_recognized() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("lib.rs");
        fs::write(&path, "// comment\nfn f() {}\n").unwrap();

        let file = count_file(LanguageRegistry::builtin(), &path, CountConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(file.languages["Rust"].code, 1);
        assert_eq!(file.languages["Rust"].comments, 1);
    }

    #[test]
    fn test_count_file_unrecognized() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data.xyz");
        fs::write(&path, "whatever\n").unwrap();

        let file = count_file(LanguageRegistry::builtin(), &path, CountConfig::default()).unwrap();
        assert!(file.is_none());
    }

    #[test]
    fn test_count_file_missing() {
        let result = count_file(
            LanguageRegistry::builtin(),
            Path::new("/nonexistent/file.rs"),
            CountConfig::default(),
        );
        assert!(matches!(result, Err(PolylocError::FileRead { .. })));
    }

    #[test]
    fn test_count_directory() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let registry = LanguageRegistry::builtin();
        let aggregator =
            count_directory(registry, temp.path(), &CountOptions::new()).unwrap();
        let report = aggregator.into_report(Ordering::by_name(), RunStatus::Complete);

        assert_eq!(report.files, 5);
        assert_eq!(report.unrecognized, 1); // data.bin

        let names: Vec<&str> = report.rows.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(
            names,
            vec!["HTML", "JavaScript", "Python", "Rust", "Shell"]
        );

        let rust = report.rows.iter().find(|r| r.language == "Rust").unwrap();
        assert_eq!(rust.counts.code, 3);
        assert_eq!(rust.counts.docs, 1);

        // Shell resolved by shebang, no extension on the file.
        let shell = report.rows.iter().find(|r| r.language == "Shell").unwrap();
        assert_eq!(shell.counts.comments, 1);
        assert_eq!(shell.counts.code, 1);
    }

    #[test]
    fn test_count_directory_with_filter() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let options = CountOptions::new()
            .filter(FilterConfig::new().exclude("**/web/**").unwrap());
        let registry = LanguageRegistry::builtin();
        let aggregator = count_directory(registry, temp.path(), &options).unwrap();
        let report = aggregator.into_report(Ordering::by_name(), RunStatus::Complete);

        assert!(!report.rows.iter().any(|r| r.language == "HTML"));
        assert!(report.rows.iter().any(|r| r.language == "Rust"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let registry = LanguageRegistry::builtin();
        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        let parallel = count_files(registry, &files, CountConfig::default());

        let mut sequential = Aggregator::new();
        for path in &files {
            process_file(registry, path, CountConfig::default(), &mut sequential);
        }

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_cancelled_run_is_partial() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let registry = LanguageRegistry::builtin();
        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        let cancel = CancelFlag::new();
        cancel.cancel();
        let (aggregator, status) =
            count_files_cancellable(registry, &files, CountConfig::default(), &cancel);

        assert_eq!(status, RunStatus::Partial);
        let report = aggregator.into_report(Ordering::default(), status);
        assert_eq!(report.files, 0);
    }

    #[test]
    fn test_uncancelled_run_is_complete() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let registry = LanguageRegistry::builtin();
        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        let (aggregator, status) = count_files_cancellable(
            registry,
            &files,
            CountConfig::default(),
            &CancelFlag::new(),
        );

        assert_eq!(status, RunStatus::Complete);
        assert_eq!(aggregator, count_files(registry, &files, CountConfig::default()));
    }
}
