//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{export::ExportCommands, import::ImportArgs};
use crate::core::Config;

#[derive(Parser)]
#[command(name = "srph")]
#[command(author, version, about = "SRPH-MIS import and export toolkit")]
#[command(long_about = "Normalize CSV files of IT assets, components, accessories and virtual machines into SRPH-MIS import payloads, and export virtual machine inventories back to CSV.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format [default: config `default_format`, else auto]
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Format from the command line, else the configured default
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        match config.default_format.as_deref() {
            Some(name) => OutputFormat::from_str(name, true).unwrap_or_else(|_| {
                tracing::warn!(default_format = name, "unknown default_format in config, using auto");
                OutputFormat::Auto
            }),
            None => OutputFormat::Auto,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import entities from a CSV file
    Import(ImportArgs),

    /// Export entities to CSV
    #[command(subcommand)]
    Export(ExportCommands),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress lines and a summary for humans
    #[default]
    Auto,
    /// JSON (the submission payload)
    Json,
    /// Preview table of normalized records
    Table,
    /// Normalized records as CSV
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(format: Option<OutputFormat>) -> GlobalOpts {
        GlobalOpts {
            format,
            quiet: false,
            verbose: false,
        }
    }

    fn config(default_format: Option<&str>) -> Config {
        Config {
            default_format: default_format.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_output_format_prefers_flag() {
        let global = opts(Some(OutputFormat::Table));
        assert_eq!(global.output_format(&config(Some("json"))), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_uses_config_default() {
        let global = opts(None);
        assert_eq!(global.output_format(&config(Some("JSON"))), OutputFormat::Json);
        assert_eq!(global.output_format(&config(Some("csv"))), OutputFormat::Csv);
        assert_eq!(global.output_format(&config(None)), OutputFormat::Auto);
        assert_eq!(global.output_format(&config(Some("yaml"))), OutputFormat::Auto);
    }
}
