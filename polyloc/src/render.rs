//! Table, JSON and CSV rendering of count reports.

use console::Style;
use polyloclib::{Report, RunStatus};
use std::str::FromStr;

const NAME_WIDTH: usize = 18;
const CELL_WIDTH: usize = 10;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => Ok(render_csv(report)),
    }
}

/// Render the report as a pretty-printed JSON document.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

/// Render the report as an aligned text table.
pub fn render_table(report: &Report) -> String {
    let bold = Style::new().bold();

    let header = format!(
        "{:<name$} {:>cell$} {:>cell$} {:>cell$} {:>cell$} {:>cell$} {:>cell$}",
        "Language",
        "Files",
        "Code",
        "Comments",
        "Docs",
        "Blank",
        "Total",
        name = NAME_WIDTH,
        cell = CELL_WIDTH,
    );
    let separator = "-".repeat(NAME_WIDTH + (CELL_WIDTH + 1) * 6);

    let mut output = format!("{}\n{}\n", bold.apply_to(&header), separator);

    for row in &report.rows {
        output.push_str(&format!(
            "{:<name$} {:>cell$} {:>cell$} {:>cell$} {:>cell$} {:>cell$} {:>cell$}\n",
            truncate_name(&row.language, NAME_WIDTH),
            row.files,
            row.counts.code,
            row.counts.comments,
            row.counts.docs,
            row.counts.blank,
            row.counts.total(),
            name = NAME_WIDTH,
            cell = CELL_WIDTH,
        ));
    }

    let total_label = format!("Total ({} files)", report.files);
    let total_line = format!(
        "{:<name$} {:>cell$} {:>cell$} {:>cell$} {:>cell$} {:>cell$} {:>cell$}",
        truncate_name(&total_label, NAME_WIDTH),
        report.files - report.unrecognized - report.read_errors.len() as u64,
        report.total.code,
        report.total.comments,
        report.total.docs,
        report.total.blank,
        report.total.total(),
        name = NAME_WIDTH,
        cell = CELL_WIDTH,
    );
    output.push_str(&separator);
    output.push('\n');
    output.push_str(&bold.apply_to(&total_line).to_string());
    output.push('\n');

    if report.unrecognized > 0 {
        output.push_str(&format!("\n{} file(s) not recognized\n", report.unrecognized));
    }
    for path in &report.read_errors {
        output.push_str(&format!("failed to read: {}\n", path.display()));
    }
    if report.status == RunStatus::Partial {
        output.push_str("\nrun cancelled; results are partial\n");
    }

    output
}

/// Render the report as CSV.
pub fn render_csv(report: &Report) -> String {
    let mut output = String::from("language,files,code,comments,docs,blank,total\n");

    for row in &report.rows {
        output.push_str(&format!(
            "\"{}\",{},{},{},{},{},{}\n",
            row.language,
            row.files,
            row.counts.code,
            row.counts.comments,
            row.counts.docs,
            row.counts.blank,
            row.counts.total(),
        ));
    }

    output.push_str(&format!(
        "\"total\",{},{},{},{},{},{}\n",
        report.files,
        report.total.code,
        report.total.comments,
        report.total.docs,
        report.total.blank,
        report.total.total(),
    ));
    output
}

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.len() > max_len {
        format!("..{}", &name[name.len() - max_len + 2..])
    } else {
        name.to_string()
    }
}
