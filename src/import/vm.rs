//! Import virtual machines from CSV

use crate::core::EntityKind;
use crate::entities::VirtualMachine;

use super::common::{ImportSchema, RawRecord};

/// Placeholder for optional VM fields the import leaves empty
pub const NOT_AVAILABLE: &str = "N/A";

/// Status given to imported VMs without one
pub const DEFAULT_VM_STATUS: &str = "Provisioning";

pub const SCHEMA: ImportSchema = ImportSchema {
    kind: EntityKind::Vm,
    aliases: ALIASES,
    required: &["vmId", "vmName", "hypervisor"],
    keep_unknown: false,
    reject_empty: true,
};

const ALIASES: &[(&str, &str)] = &[
    ("vmid", "vmId"),
    ("vm_id", "vmId"),
    ("vm id", "vmId"),
    ("vmname", "vmName"),
    ("vm_name", "vmName"),
    ("vm name", "vmName"),
    ("name", "vmName"),
    ("hypervisor", "hypervisor"),
    ("vmstatus", "vmStatus"),
    ("vm_status", "vmStatus"),
    ("vm status", "vmStatus"),
    ("status", "vmStatus"),
    ("vmip", "vmIp"),
    ("vm_ip", "vmIp"),
    ("vm ip", "vmIp"),
    ("ip", "vmIp"),
    ("internetaccess", "internetAccess"),
    ("internet_access", "internetAccess"),
    ("internet access", "internetAccess"),
    ("internet", "internetAccess"),
    ("vmos", "vmOs"),
    ("vm_os", "vmOs"),
    ("vm os", "vmOs"),
    ("os", "vmOs"),
    ("vmosversion", "vmOsVersion"),
    ("vm_os_version", "vmOsVersion"),
    ("vm os version", "vmOsVersion"),
    ("os version", "vmOsVersion"),
    ("hostname", "hostname"),
    ("host name", "hostname"),
    ("host_name", "hostname"),
    ("hostmodel", "hostModel"),
    ("host model", "hostModel"),
    ("host_model", "hostModel"),
    ("hostip", "hostIp"),
    ("host ip", "hostIp"),
    ("host_ip", "hostIp"),
    ("hostos", "hostOs"),
    ("host os", "hostOs"),
    ("host_os", "hostOs"),
    ("rack", "rack"),
    ("deployedby", "deployedBy"),
    ("deployed_by", "deployedBy"),
    ("deployed by", "deployedBy"),
    ("user", "user"),
    ("assigned user", "user"),
    ("username", "user"),
    ("department", "department"),
    ("dept", "department"),
    ("startdate", "startDate"),
    ("start_date", "startDate"),
    ("start date", "startDate"),
    ("enddate", "endDate"),
    ("end_date", "endDate"),
    ("end date", "endDate"),
    ("jiraticket", "jiraTicket"),
    ("jira_ticket", "jiraTicket"),
    ("jira ticket", "jiraTicket"),
    ("jira", "jiraTicket"),
    ("remarks", "remarks"),
    ("notes", "remarks"),
    ("comments", "remarks"),
];

/// Interpret free text as a yes/no flag
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") || v == "1"
    })
}

/// Normalize one raw record into a virtual machine
pub fn normalize_record(record: RawRecord) -> VirtualMachine {
    let or_na = |field: &str| Some(record.field_or(field, NOT_AVAILABLE));

    VirtualMachine {
        vm_id: record.field("vmId").unwrap_or_default(),
        vm_name: record.field("vmName").unwrap_or_default(),
        vm_status: Some(record.field_or("vmStatus", DEFAULT_VM_STATUS)),
        vm_ip: or_na("vmIp"),
        internet_access: parse_flag(record.get("internetAccess")),
        vm_os: or_na("vmOs"),
        vm_os_version: or_na("vmOsVersion"),
        hypervisor: record.field("hypervisor").unwrap_or_default(),
        hostname: or_na("hostname"),
        host_model: or_na("hostModel"),
        host_ip: or_na("hostIp"),
        host_os: or_na("hostOs"),
        rack: or_na("rack"),
        deployed_by: or_na("deployedBy"),
        user: or_na("user"),
        department: or_na("department"),
        start_date: or_na("startDate"),
        end_date: or_na("endDate"),
        jira_ticket: or_na("jiraTicket"),
        remarks: or_na("remarks"),
        date_deleted: None,
    }
}

/// Normalize every record, in order
pub fn normalize(records: Vec<RawRecord>) -> Vec<VirtualMachine> {
    records.into_iter().map(normalize_record).collect()
}
