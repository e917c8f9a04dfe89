//! Virtual machine entity type

use serde::{Deserialize, Serialize};

/// A virtual machine record
///
/// Used both as the import payload and as the shape read back from the API
/// for export, so every non-required text field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    pub vm_id: String,

    pub vm_name: String,

    #[serde(default)]
    pub vm_status: Option<String>,

    #[serde(default)]
    pub vm_ip: Option<String>,

    #[serde(default)]
    pub internet_access: bool,

    #[serde(default)]
    pub vm_os: Option<String>,

    #[serde(default)]
    pub vm_os_version: Option<String>,

    pub hypervisor: String,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub host_model: Option<String>,

    #[serde(default)]
    pub host_ip: Option<String>,

    #[serde(default)]
    pub host_os: Option<String>,

    #[serde(default)]
    pub rack: Option<String>,

    #[serde(default)]
    pub deployed_by: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub jira_ticket: Option<String>,

    #[serde(default)]
    pub remarks: Option<String>,

    /// Soft-delete marker; never set by imports
    #[serde(default)]
    pub date_deleted: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": 7,
            "vmId": "VM-001",
            "vmName": "build-agent",
            "hypervisor": "ESXi",
            "internetAccess": true,
            "vmOs": null
        }"#;
        let vm: VirtualMachine = serde_json::from_str(json).unwrap();
        assert_eq!(vm.vm_id, "VM-001");
        assert!(vm.internet_access);
        assert_eq!(vm.vm_os, None);
        assert_eq!(vm.remarks, None);
    }
}
