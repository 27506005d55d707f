//! # polyloc
//!
//! A CLI tool for counting lines of code across many languages.
//!
//! ## Overview
//!
//! polyloc is built on top of polyloclib and provides a command-line
//! interface for analyzing codebases. Files are identified by filename,
//! shebang or extension; each line is classified as code, comment,
//! documentation or blank; embedded languages (JavaScript in HTML,
//! CSS in Vue) are counted under their own name.
//!
//! ## Usage
//!
//! ```bash
//! # Count LOC in the current directory
//! polyloc .
//!
//! # Output as JSON or CSV
//! polyloc . --output json
//! polyloc . --output csv
//!
//! # Filter files with glob patterns
//! polyloc . --include "src/**" --exclude "**/generated/**"
//!
//! # Sort rows
//! polyloc . --sort name
//! polyloc . --sort total --ascending
//!
//! # Count docstrings as code instead of documentation
//! polyloc . --no-doc-strings
//! ```

mod render;

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use polyloclib::{
    count_directory, CountConfig, CountOptions, FilterConfig, LanguageRegistry, OrderBy, Ordering,
    RunStatus,
};

use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("polyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Multi-language lines of code counter")
        .arg(
            Arg::new("path")
                .help("Path to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json", "csv"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_parser(["code", "name", "total", "files"])
                .default_value("code")
                .help("Field to sort rows by"),
        )
        .arg(
            Arg::new("ascending")
                .long("ascending")
                .action(ArgAction::SetTrue)
                .help("Sort smallest first (default is largest first, names A-Z)"),
        )
        .arg(
            Arg::new("no-doc-strings")
                .long("no-doc-strings")
                .action(ArgAction::SetTrue)
                .help("Count docstrings as code instead of documentation"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Build the row ordering from matches
fn build_ordering(matches: &ArgMatches) -> Ordering {
    let by = matches
        .get_one::<String>("sort")
        .and_then(|s| OrderBy::from_str(s).ok())
        .unwrap_or_default();

    // Names default to A-Z; counts default to largest first.
    let ordering = match by {
        OrderBy::Code => Ordering::by_code(),
        OrderBy::Name => Ordering::by_name(),
        OrderBy::Total => Ordering::by_total(),
        OrderBy::Files => Ordering::by_files(),
    };

    if matches.get_flag("ascending") {
        ordering.ascending()
    } else {
        ordering
    }
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let format = matches
        .get_one::<String>("output")
        .map(|s| OutputFormat::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let filter = build_filter(matches)?;
    let config =
        CountConfig::new().with_doc_strings(!matches.get_flag("no-doc-strings"));
    let options = CountOptions::new().filter(filter).config(config);

    let registry = LanguageRegistry::builtin();
    let aggregator = count_directory(registry, path, &options)
        .with_context(|| format!("failed to count '{}'", path))?;
    let report = aggregator.into_report(build_ordering(matches), RunStatus::Complete);

    Ok(render::render(&report, format)?)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
