//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde_json::Value;

use crate::cli::OutputFormat;

/// Format an API response for output.
pub fn format_output(value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty::format_value(value),
    }
}
