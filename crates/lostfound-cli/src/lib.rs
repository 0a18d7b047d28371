use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub mod commands;

/// How command results are written to stdout
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Styled, human readable output
    #[default]
    Pretty,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated rows with a header line
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `value` as pretty JSON followed by a newline
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    print!("{}", to_json(value)?);
    Ok(())
}
