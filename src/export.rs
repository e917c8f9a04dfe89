//! CSV export for virtual machines and import previews

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::entities::VirtualMachine;

/// Column order of the VM export
pub const VM_COLUMNS: [&str; 20] = [
    "vmId",
    "vmName",
    "vmStatus",
    "vmIp",
    "internetAccess",
    "vmOs",
    "vmOsVersion",
    "hypervisor",
    "hostname",
    "hostModel",
    "hostIp",
    "hostOs",
    "rack",
    "deployedBy",
    "user",
    "department",
    "startDate",
    "endDate",
    "jiraTicket",
    "remarks",
];

/// Errors writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export buffer error: {0}")]
    Buffer(String),
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Cells of one VM, in [`VM_COLUMNS`] order
pub fn vm_row(vm: &VirtualMachine) -> [&str; 20] {
    [
        &vm.vm_id,
        &vm.vm_name,
        text(&vm.vm_status),
        text(&vm.vm_ip),
        if vm.internet_access { "true" } else { "false" },
        text(&vm.vm_os),
        text(&vm.vm_os_version),
        &vm.hypervisor,
        text(&vm.hostname),
        text(&vm.host_model),
        text(&vm.host_ip),
        text(&vm.host_os),
        text(&vm.rack),
        text(&vm.deployed_by),
        text(&vm.user),
        text(&vm.department),
        text(&vm.start_date),
        text(&vm.end_date),
        text(&vm.jira_ticket),
        text(&vm.remarks),
    ]
}

/// Encode VMs as CSV text
///
/// Values containing a comma, double quote or line break are quoted with
/// inner quotes doubled. Lines are joined with `\n` without a trailing
/// newline. No VMs yields an empty string, header included.
pub fn encode_vms(vms: &[VirtualMachine]) -> Result<String, ExportError> {
    let rows: Vec<[&str; 20]> = vms.iter().map(vm_row).collect();
    encode_rows(&VM_COLUMNS, &rows)
}

/// Encode a header and rows with the same quoting and line rules as
/// [`encode_vms`]
pub fn encode_rows<R, S>(headers: &[&str], rows: &[R]) -> Result<String, ExportError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if rows.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row.as_ref().iter().map(|cell| cell.as_ref()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let out = String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))?;

    Ok(out.strip_suffix('\n').map(str::to_string).unwrap_or(out))
}

/// Suggested file name for a VM export taken on the given date
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("vm_inventory_{}.csv", date.format("%Y-%m-%d"))
}
