//! Output formatting utilities

use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    #[default]
    Pretty,
    /// One JSON document per line
    Json,
}

/// Print `data` to stdout in the given format.
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(data)?,
        OutputFormat::Json => serde_json::to_string(data)?,
    };
    println!("{}", rendered);
    Ok(())
}
