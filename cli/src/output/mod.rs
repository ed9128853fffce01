use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

mod rows;
pub mod table;

/// A resource that can be listed as one table row with fixed columns.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Column widths follow `COLUMNS` when the shell exports it.
fn table_options() -> table::TableOptions {
    table::TableOptions {
        max_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse().ok()),
    }
}

pub fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Print a list either as a titled table or as a JSON array.
pub fn print_list<T: TableRow + Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    items: &[T],
    title: &str,
    empty: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(out, &items),
        OutputFormat::Table if items.is_empty() => {
            writeln!(out, "{empty}")?;
            Ok(())
        }
        OutputFormat::Table => {
            let rows = items.iter().map(TableRow::row).collect::<Vec<_>>();
            writeln!(out, "{title}")?;
            writeln!(out, "{}", table::render_table(T::HEADERS, &rows, table_options()))?;
            Ok(())
        }
    }
}

/// Print a single resource under a heading. JSON output omits the heading so
/// it stays machine readable.
pub fn print_described<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    heading: &str,
    value: &T,
) -> Result<(), CliError> {
    if format == OutputFormat::Table {
        writeln!(out, "{heading}")?;
    }
    print_json(out, value)
}

pub fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), CliError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Print the confirmation of a write command.
pub fn print_done(
    out: &mut dyn Write,
    format: OutputFormat,
    message: &str,
    outcome: &crate::session::Outcome<'_>,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(out, outcome),
        OutputFormat::Table => {
            writeln!(out, "{message}")?;
            Ok(())
        }
    }
}
