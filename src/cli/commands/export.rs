//! `srph export` command - Write entity inventories as CSV

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::entities::VirtualMachine;
use crate::export::{encode_vms, export_file_name};

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export virtual machines to CSV
    Vm(ExportVmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExportVmArgs {
    /// JSON file with the VM list (as returned by GET /api/vms)
    pub input: PathBuf,

    /// Write the CSV to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write to vm_inventory_<date>.csv in the current directory
    #[arg(long, conflicts_with = "output")]
    pub dated: bool,
}

pub fn run(cmd: ExportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ExportCommands::Vm(args) => run_vm(args, global),
    }
}

fn run_vm(args: ExportVmArgs, global: &GlobalOpts) -> Result<()> {
    let contents = fs::read_to_string(&args.input)
        .map_err(|e| miette::miette!("Failed to read {}: {}", args.input.display(), e))?;
    let vms: Vec<VirtualMachine> = serde_json::from_str(&contents)
        .map_err(|e| miette::miette!("Invalid VM list in {}: {}", args.input.display(), e))?;

    // Soft-deleted VMs are not part of the inventory
    let live: Vec<VirtualMachine> = vms.into_iter().filter(|vm| vm.date_deleted.is_none()).collect();
    tracing::debug!(count = live.len(), "exporting virtual machines");

    let csv = encode_vms(&live).into_diagnostic()?;

    let target = if args.dated {
        Some(PathBuf::from(export_file_name(chrono::Local::now().date_naive())))
    } else {
        args.output.clone()
    };

    match target {
        Some(path) => {
            fs::write(&path, &csv).into_diagnostic()?;
            if !global.quiet {
                eprintln!(
                    "{} Exported {} virtual machine(s) to {}",
                    style("✓").green(),
                    style(live.len()).cyan(),
                    style(path.display()).yellow()
                );
            }
        }
        None => {
            if !csv.is_empty() {
                println!("{}", csv);
            }
        }
    }

    if live.is_empty() && !global.quiet {
        eprintln!("{} No virtual machines to export", style("!").yellow());
    }

    Ok(())
}
