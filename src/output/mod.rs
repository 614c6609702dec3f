//
//  zenhub-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders command results either for a person at a terminal or for a script:
//!
//! - **Table format**: Styled sections and `comfy_table` tables
//! - **JSON format**: Pretty-printed `serde_json`, selected with `--json`
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: Which of the two renderings to use
//! - [`OutputWriter`]: Writes values and status lines in that format
//! - [`TableOutput`]: Implemented by every display type the commands print
//!
//! ## Example
//!
//! ```rust,ignore
//! use zenhub_cli::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&issue_view)?;
//! writer.write_success("Estimate set to 5");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
///
/// # Variants
///
/// * `Table` - Human-readable output with optional color
/// * `Json` - Machine-readable output for piping into `jq` and friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Sections and tables, colored when the terminal supports it.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Picks the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes values and status messages in one [`OutputFormat`].
///
/// Color support is detected once on construction. Colors are off when
/// stdout is not a terminal or `NO_COLOR` is set.
///
/// # Example
///
/// ```rust,ignore
/// use zenhub_cli::output::{OutputFormat, OutputWriter};
///
/// let writer = OutputWriter::new(OutputFormat::Table);
/// writer.write_list(&epics, "No epics in this repository")?;
/// ```
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer for `format`.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Whether status lines should be suppressed in favour of JSON on stdout.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes one value.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a list of values.
    ///
    /// JSON output is a single array. Table output renders the items as rows
    /// of one table via [`TableOutput::table_headers`] and
    /// [`TableOutput::table_row`]; an empty list prints `empty_message`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write_list<T: Serialize + TableOutput>(
        &self,
        values: &[T],
        empty_message: &str,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values)?,
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info(empty_message);
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::table_headers().iter().copied())
                    .rows(values.iter().map(|v| v.table_row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    /// Writes an informational message to stdout.
    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Writes a success message.
    ///
    /// In JSON mode this goes to stderr so stdout stays parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        let line = if self.color {
            format!("{} {}", style("✓").green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        };
        if self.is_json() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Implemented by the display types that commands print.
///
/// `print_table` renders one value as a detail section. Types that also
/// appear in lists override [`table_headers`](TableOutput::table_headers)
/// and [`table_row`](TableOutput::table_row).
///
/// # Example
///
/// ```rust,ignore
/// use zenhub_cli::output::{print_field, print_header, TableOutput};
///
/// impl TableOutput for EpicView {
///     fn print_table(&self, color: bool) {
///         print_header(&format!("Epic #{}", self.issue_number));
///         print_field("Issues", &self.issues.len().to_string(), color);
///     }
/// }
/// ```
pub trait TableOutput {
    /// Renders the value as a detail section.
    fn print_table(&self, color: bool);

    /// Column headers used when a list of this type is rendered as a table.
    fn table_headers() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }

    /// One table row; must line up with [`table_headers`](TableOutput::table_headers).
    fn table_row(&self, _color: bool) -> Vec<String> {
        Vec::new()
    }
}

/// Prints a bold header with a dashed underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a `key: value` line, dimming the key when color is on.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

/// Renders an optional value, using `-` for `None`.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
