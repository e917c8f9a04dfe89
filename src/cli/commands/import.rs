//! `srph import` command - Normalize entities from CSV files

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::helpers::render_table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, EntityKind, SystemClock};
use crate::import::{self, read_import_file, template::template_file_name, ImportOptions, ImportSummary};

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Entity type to import (asset, component, accessory, vm)
    #[arg(value_parser = parse_entity_kind)]
    pub entity_type: Option<EntityKind>,

    /// CSV file to import
    pub file: Option<PathBuf>,

    /// Print the CSV template for the entity type
    #[arg(long)]
    pub template: bool,

    /// Validate and preview the CSV without writing a payload
    #[arg(long)]
    pub dry_run: bool,

    /// Write the submission payload (JSON) to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

fn parse_entity_kind(s: &str) -> Result<EntityKind, String> {
    s.parse::<EntityKind>().map_err(|e| e.to_string())
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    // Handle template generation
    if args.template {
        let kind = args.entity_type.ok_or_else(|| {
            miette::miette!(
                "Entity type required for template generation. Usage: srph import --template asset"
            )
        })?;
        print!("{}", import::template(kind));

        // Usage hint goes to stderr so redirected output stays clean
        if !global.quiet {
            eprintln!();
            eprintln!(
                "{} Template generated. Redirect to file: srph import --template {} > {}",
                style("→").blue(),
                kind,
                template_file_name(kind)
            );
        }
        return Ok(());
    }

    let kind = args
        .entity_type
        .ok_or_else(|| miette::miette!("Entity type required. Usage: srph import asset assets.csv"))?;

    let file_path = args
        .file
        .clone()
        .ok_or_else(|| miette::miette!("CSV file required. Usage: srph import asset assets.csv"))?;

    if !file_path.exists() {
        return Err(miette::miette!("File not found: {}", file_path.display()));
    }

    let text = read_import_file(&file_path)?;
    let config = Config::load();
    let clock = SystemClock;
    let options = ImportOptions::new(&clock).with_tag_prefix(config.tag_prefix());

    let format = global.output_format(&config);
    let human = format == OutputFormat::Auto && !global.quiet;
    if human {
        eprintln!(
            "{} Importing {} from {}{}",
            style("→").blue(),
            style(kind.display_plural()).cyan(),
            style(file_path.display()).yellow(),
            if args.dry_run {
                style(" (dry run)").dim().to_string()
            } else {
                String::new()
            }
        );
    }

    let batch = import::import(kind, &text, &options)?;
    let payload = batch.payload().into_diagnostic()?;
    let payload_json = serde_json::to_string_pretty(&payload).into_diagnostic()?;

    let (headers, rows) = batch.preview();

    match format {
        OutputFormat::Json => println!("{}", payload_json),
        OutputFormat::Csv => {
            let csv = batch.to_csv().into_diagnostic()?;
            println!("{}", csv);
        }
        OutputFormat::Table => println!("{}", render_table(&headers, &rows, 32)),
        OutputFormat::Auto => {
            if args.dry_run {
                println!("{}", render_table(&headers, &rows, 32));
            } else if !global.quiet {
                for row in &rows {
                    // row[0] is the record number, row[1] the identifying column
                    println!(
                        "{} Record {}: {} - {}",
                        style("✓").green(),
                        row[0],
                        style(&row[1]).cyan(),
                        row[2]
                    );
                }
            }
        }
    }

    if !args.dry_run {
        if let Some(out) = &args.output {
            fs::write(out, &payload_json).into_diagnostic()?;
            tracing::info!(path = %out.display(), "wrote import payload");
        }
    }

    if human {
        let summary = ImportSummary::all_successful(batch.len());
        eprintln!();
        eprintln!("{}", style("─".repeat(50)).dim());
        eprintln!("{}", style("Import Summary").bold());
        eprintln!("{}", style("─".repeat(50)).dim());
        eprintln!("  Rows processed:     {}", style(summary.total).cyan());
        eprintln!("  Records normalized: {}", style(summary.successful).green());

        let endpoint = kind.import_endpoint();
        let target = config.endpoint_url(&endpoint).unwrap_or(endpoint);
        if args.dry_run {
            eprintln!();
            eprintln!("{}", style("Dry run complete. No payload was written.").yellow());
        } else if let Some(out) = &args.output {
            eprintln!(
                "  Payload written:    {} (POST to {})",
                style(out.display()).yellow(),
                target
            );
        } else {
            eprintln!("  Submit with --output <file> and POST it to {}", target);
        }
    }

    Ok(())
}
