//! CSV templates offered to users before an import

use crate::core::EntityKind;

/// Downloadable asset template: every supported column plus three examples
pub const ASSET_TEMPLATE: &str = "\
Serial Number,Asset Tag,Knox ID,Name,Category,Manufacturer,Model,Status,Purchase Date,Purchase Cost,Location,Department,IP Address,MAC Address,OS Type,Warranty,Supplier,Notes
5CG1234XYZ,SRPH-LAP-001,KNX-100234,Finance Laptop 01,Laptop,HP,EliteBook 840 G8,available,2024-01-15,1250.00,Head Office,Finance,192.168.1.101,00:1A:2B:3C:4D:5E,Windows 11 Pro,2027-01-15,TechSource Inc,Assigned to new hire
MXL9876ABC,SRPH-DES-002,,Reception Desktop,Desktop,Dell,OptiPlex 7090,deployed,2023-06-20,980.50,Front Desk,Administration,192.168.1.55,00:1A:2B:3C:4D:6F,Windows 10 Pro,2026-06-20,Dell Direct,
SGH4567DEF,SRPH-SER-003,,File Server,Server,Lenovo,ThinkSystem SR650,available,2022-11-02,7450.00,Server Room,IT,10.0.0.10,00:1A:2B:3C:4D:7A,Ubuntu Server 22.04,2025-11-02,Lenovo Partner,Rack A2
";

const COMPONENT_TEMPLATE: &str = "\
Name,Category,Serial Number,Manufacturer,Model,Specifications,Status,Location,Assigned To,Purchase Date,Purchase Cost,Warranty,Quantity,Notes
Kingston 16GB DDR4,RAM,KF432C16BB,Kingston,KF432C16BB/16,16GB 3200MHz,available,IT Storage,,2024-02-10,55.00,2029-02-10,4,Spare memory
";

const ACCESSORY_TEMPLATE: &str = "\
Name,Category,Status,Quantity,Serial Number,Model,Manufacturer,Purchase Date,Purchase Cost,Assigned To,Knox ID,Location,Department,Notes
Wireless Mouse,Peripheral,available,10,,M720,Logitech,2024-03-05,29.99,,,IT Storage,IT,
";

const VM_TEMPLATE: &str = "\
vmId,vmName,vmStatus,vmIp,internetAccess,vmOs,vmOsVersion,hypervisor,hostname,hostModel,hostIp,hostOs,rack,deployedBy,user,department,startDate,endDate,jiraTicket,remarks
VM-001,build-agent-01,Running,10.10.0.21,true,Ubuntu,22.04,VMware ESXi,esx-host-01,Dell PowerEdge R740,10.10.0.2,ESXi 8.0,R1-U12,jdoe,asmith,Engineering,2024-01-08,2025-01-08,INFRA-1024,CI runner
";

/// Template CSV for an entity kind
pub fn template(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Asset => ASSET_TEMPLATE,
        EntityKind::Component => COMPONENT_TEMPLATE,
        EntityKind::Accessory => ACCESSORY_TEMPLATE,
        EntityKind::Vm => VM_TEMPLATE,
    }
}

/// Suggested file name for a downloaded template
pub fn template_file_name(kind: EntityKind) -> String {
    format!("{}_import_template.csv", kind.as_str())
}
