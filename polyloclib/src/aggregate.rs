//! Aggregation of per-file results into a run report.
//!
//! The [`Aggregator`] is the merge half of the parallel count: each worker
//! folds its files into a private aggregator and the per-worker results
//! are combined with [`Aggregator::merge`], which is commutative and
//! associative, so the final report does not depend on scheduling order.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::counts::{Counts, FileCount};
use crate::options::{OrderBy, OrderDirection, Ordering};

/// Accumulated statistics for one language across many files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    /// Summed line counts.
    pub counts: Counts,
    /// Number of files that contributed to this language. A file with
    /// embedded regions contributes to every language it contains.
    pub files: u64,
}

/// Whether a run processed everything it discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    /// Every discovered file was processed.
    Complete,
    /// The run was cancelled; results cover only the files processed
    /// before the cancellation was observed.
    Partial,
}

/// Mutable accumulator for a counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    languages: BTreeMap<String, LanguageStats>,
    files: u64,
    unrecognized: u64,
    read_errors: Vec<PathBuf>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified file into the accumulator.
    pub fn add_file(&mut self, file: FileCount) {
        self.files += 1;
        for (language, counts) in file.languages {
            let entry = self.languages.entry(language).or_default();
            entry.counts += counts;
            entry.files += 1;
        }
    }

    /// Record a file no language definition matched.
    pub fn add_unrecognized(&mut self) {
        self.files += 1;
        self.unrecognized += 1;
    }

    /// Record a file that could not be read.
    pub fn add_read_error(&mut self, path: PathBuf) {
        self.files += 1;
        self.read_errors.push(path);
    }

    /// Merge another aggregator into this one.
    pub fn merge(&mut self, other: Aggregator) {
        for (language, stats) in other.languages {
            let entry = self.languages.entry(language).or_default();
            entry.counts += stats.counts;
            entry.files += stats.files;
        }
        self.files += other.files;
        self.unrecognized += other.unrecognized;
        self.read_errors.extend(other.read_errors);
    }

    /// Finish the run and produce a report with the requested row order.
    pub fn into_report(self, ordering: Ordering, status: RunStatus) -> Report {
        let mut rows: Vec<LanguageRow> = self
            .languages
            .into_iter()
            .map(|(language, stats)| LanguageRow {
                language,
                files: stats.files,
                counts: stats.counts,
            })
            .collect();

        sort_rows(&mut rows, ordering);

        let total = rows
            .iter()
            .fold(Counts::new(), |acc, row| acc + row.counts);

        let mut read_errors = self.read_errors;
        read_errors.sort();

        Report {
            rows,
            total,
            files: self.files,
            unrecognized: self.unrecognized,
            read_errors,
            status,
        }
    }
}

/// One language's line in the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    /// Language name.
    pub language: String,
    /// Number of contributing files.
    pub files: u64,
    /// Summed counts.
    #[serde(flatten)]
    pub counts: Counts,
}

/// Final result of a counting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Per-language rows, in the requested order.
    pub rows: Vec<LanguageRow>,
    /// Grand total across all languages.
    pub total: Counts,
    /// Number of files discovered, recognized or not.
    pub files: u64,
    /// Files no language definition matched.
    pub unrecognized: u64,
    /// Files that could not be read. The run continues past them; they
    /// are reported rather than aborting the count.
    pub read_errors: Vec<PathBuf>,
    /// Whether the run covered everything it discovered.
    pub status: RunStatus,
}

fn sort_rows(rows: &mut [LanguageRow], ordering: Ordering) {
    rows.sort_by(|a, b| {
        let primary = match ordering.by {
            OrderBy::Code => a.counts.code.cmp(&b.counts.code),
            OrderBy::Name => a.language.cmp(&b.language),
            OrderBy::Total => a.counts.total().cmp(&b.counts.total()),
            OrderBy::Files => a.files.cmp(&b.files),
        };
        let primary = match ordering.direction {
            OrderDirection::Ascending => primary,
            OrderDirection::Descending => primary.reverse(),
        };
        // Ties always break on the name, ascending, for stable output.
        primary.then_with(|| a.language.cmp(&b.language))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(code: u64, comments: u64, blank: u64) -> Counts {
        Counts {
            code,
            comments,
            blank,
            ..Counts::default()
        }
    }

    fn file(language: &str, c: Counts) -> FileCount {
        FileCount::single(language, c)
    }

    #[test]
    fn test_add_file_accumulates() {
        let mut agg = Aggregator::new();
        agg.add_file(file("Rust", counts(10, 2, 1)));
        agg.add_file(file("Rust", counts(5, 0, 0)));
        agg.add_file(file("Python", counts(3, 1, 1)));

        let report = agg.into_report(Ordering::default(), RunStatus::Complete);
        assert_eq!(report.files, 3);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].language, "Rust");
        assert_eq!(report.rows[0].files, 2);
        assert_eq!(report.rows[0].counts.code, 15);
        assert_eq!(report.total.code, 18);
    }

    #[test]
    fn test_multi_language_file_counts_once_per_language() {
        let mut html = FileCount::single("HTML", counts(4, 0, 0));
        html.add("JavaScript", counts(2, 1, 0));

        let mut agg = Aggregator::new();
        agg.add_file(html);

        let report = agg.into_report(Ordering::by_name(), RunStatus::Complete);
        assert_eq!(report.files, 1);
        assert_eq!(report.rows[0].files, 1);
        assert_eq!(report.rows[1].files, 1);
    }

    #[test]
    fn test_merge_is_commutative() {
        let mut a1 = Aggregator::new();
        a1.add_file(file("Rust", counts(10, 2, 1)));
        a1.add_unrecognized();
        let mut b1 = Aggregator::new();
        b1.add_file(file("Rust", counts(1, 1, 1)));
        b1.add_file(file("Go", counts(7, 0, 2)));

        let a2 = a1.clone();
        let b2 = b1.clone();

        a1.merge(b1);
        let mut ba = Aggregator::new();
        ba.merge(b2);
        ba.merge(a2);

        assert_eq!(a1, ba);
    }

    #[test]
    fn test_unrecognized_and_read_errors_in_report() {
        let mut agg = Aggregator::new();
        agg.add_file(file("Rust", counts(1, 0, 0)));
        agg.add_unrecognized();
        agg.add_read_error(PathBuf::from("b.rs"));
        agg.add_read_error(PathBuf::from("a.rs"));

        let report = agg.into_report(Ordering::default(), RunStatus::Complete);
        assert_eq!(report.files, 4);
        assert_eq!(report.unrecognized, 1);
        assert_eq!(
            report.read_errors,
            vec![PathBuf::from("a.rs"), PathBuf::from("b.rs")]
        );
    }

    #[test]
    fn test_default_order_code_descending_name_tiebreak() {
        let mut agg = Aggregator::new();
        agg.add_file(file("B", counts(5, 0, 0)));
        agg.add_file(file("A", counts(5, 0, 0)));
        agg.add_file(file("C", counts(9, 0, 0)));

        let report = agg.into_report(Ordering::default(), RunStatus::Complete);
        let names: Vec<&str> = report.rows.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_order_by_name_ascending() {
        let mut agg = Aggregator::new();
        agg.add_file(file("Zig", counts(1, 0, 0)));
        agg.add_file(file("Ada", counts(9, 0, 0)));

        let report = agg.into_report(Ordering::by_name(), RunStatus::Complete);
        assert_eq!(report.rows[0].language, "Ada");
    }

    #[test]
    fn test_partial_status_preserved() {
        let report = Aggregator::new().into_report(Ordering::default(), RunStatus::Partial);
        assert_eq!(report.status, RunStatus::Partial);
    }
}
