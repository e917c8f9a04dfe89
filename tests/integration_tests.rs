//! Integration tests for the srph CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a srph command isolated from user config
fn srph(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("srph").unwrap();
    cmd.current_dir(tmp.path())
        .env_remove("SRPH_TAG_PREFIX")
        .env_remove("SRPH_API_URL")
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join(".config"));
    cmd
}

/// Helper to write a file into the temp directory
fn write_file(tmp: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    srph(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_unknown_entity_type_fails() {
    let tmp = TempDir::new().unwrap();
    srph(&tmp)
        .args(["import", "license", "x.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported entity type"));
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn test_asset_template_output() {
    let tmp = TempDir::new().unwrap();
    let output = srph(&tmp)
        .args(["import", "--template", "asset"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Serial Number,Asset Tag,Knox ID"));
}

#[test]
fn test_template_requires_entity_type() {
    let tmp = TempDir::new().unwrap();
    srph(&tmp)
        .args(["import", "--template"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entity type required"));
}

// ============================================================================
// Import Tests
// ============================================================================

#[test]
fn test_import_assets_json_payload() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "assets.csv",
        "serialNumber,name,category\nSN123,Test Laptop,Laptop\nSN456,,Desktop\n",
    );

    let output = srph(&tmp)
        .args(["--format", "json", "import", "asset"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let assets = payload["assets"].as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0]["name"], "Test Laptop");
    assert_eq!(assets[0]["status"], "available");

    let tag_re = regex::Regex::new(r"^SRPH-LAP-\d{6}-001$").unwrap();
    assert!(tag_re.is_match(assets[0]["assetTag"].as_str().unwrap()));
    let tag_re = regex::Regex::new(r"^SRPH-DES-\d{6}-002$").unwrap();
    assert!(tag_re.is_match(assets[1]["assetTag"].as_str().unwrap()));
}

#[test]
fn test_import_uses_configured_tag_prefix() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp, ".srph.yaml", "tag_prefix: ACME\n");
    let file = write_file(&tmp, "assets.csv", "serial,type\nSN1,Server\n");

    let output = srph(&tmp)
        .args(["-f", "json", "import", "asset"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tag = payload["assets"][0]["assetTag"].as_str().unwrap();
    assert!(tag.starts_with("ACME-SER-"), "tag was {tag}");
}

#[test]
fn test_import_env_overrides_tag_prefix() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "assets.csv", "serial\nSN1\n");

    let output = srph(&tmp)
        .env("SRPH_TAG_PREFIX", "ENV")
        .args(["-f", "json", "import", "asset"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tag = payload["assets"][0]["assetTag"].as_str().unwrap();
    assert!(tag.starts_with("ENV-AST-"), "tag was {tag}");
}

#[test]
fn test_import_uses_configured_default_format() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp, ".srph.yaml", "default_format: json\n");
    let file = write_file(&tmp, "assets.csv", "serial,type\nSN1,Server\n");

    let output = srph(&tmp)
        .args(["import", "asset"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["assets"][0]["serialNumber"], "SN1");
}

#[test]
fn test_format_flag_overrides_configured_default() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp, ".srph.yaml", "default_format: json\n");
    let file = write_file(&tmp, "components.csv", "name,category\nRAM,Memory\n");

    srph(&tmp)
        .args(["--format", "table", "import", "component"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("RAM"))
        .stdout(predicate::str::contains("\"components\"").not());
}

#[test]
fn test_import_csv_format() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "components.csv",
        "name,category,qty\nRAM,Memory,4\nSSD,Storage,\n",
    );

    srph(&tmp)
        .args(["--format", "csv", "import", "component"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            "#,Name,Category,Qty,Notes\n1,RAM,Memory,4,Imported via CSV\n2,SSD,Storage,1,Imported via CSV\n",
        );
}

#[test]
fn test_import_writes_payload_file() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "vms.csv",
        "vm_id,vm_name,hypervisor,internet access\nVM-1,db-01,KVM,yes\n",
    );
    let out = tmp.path().join("payload.json");

    srph(&tmp)
        .args(["import", "vm"])
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("VM-1"))
        .stderr(predicate::str::contains("Import Summary"));

    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(payload["vms"][0]["vmStatus"], "Provisioning");
    assert_eq!(payload["vms"][0]["internetAccess"], true);
    assert!(payload["vms"][0]["dateDeleted"].is_null());
}

#[test]
fn test_import_dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "accessories.csv",
        "name,category,status\nMouse,Peripheral,Borrowed by IT\n",
    );
    let out = tmp.path().join("payload.json");

    srph(&tmp)
        .args(["import", "accessory"])
        .arg(&file)
        .args(["--dry-run", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("borrowed"))
        .stderr(predicate::str::contains("Dry run complete"));

    assert!(!out.exists());
}

#[test]
fn test_import_column_mismatch_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "components.csv",
        "name,category,qty\nRAM,Memory,2\nSSD,Storage\n",
    );

    srph(&tmp)
        .args(["import", "component"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3: found 2 columns, expected 3"));
}

#[test]
fn test_import_missing_required_field_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "vms.csv", "vm_id,hypervisor\nVM-1,KVM\n");

    srph(&tmp)
        .args(["import", "vm"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("vmName"));
}

#[test]
fn test_import_header_only_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "assets.csv", "serialNumber,name\n\n");

    srph(&tmp)
        .args(["import", "asset"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least a header row and one data row"));
}

#[test]
fn test_import_rejects_spreadsheet() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "assets.xlsx", "not really a workbook");

    srph(&tmp)
        .args(["import", "asset"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Excel files are not supported"));
}

#[test]
fn test_import_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    srph(&tmp)
        .args(["import", "asset", "nope.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_export_vms_to_file() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(
        &tmp,
        "vms.json",
        r#"[
            {"id": 1, "vmId": "VM-1", "vmName": "web, primary", "hypervisor": "KVM", "internetAccess": true},
            {"id": 2, "vmId": "VM-2", "vmName": "old", "hypervisor": "KVM", "dateDeleted": "2024-05-01"}
        ]"#,
    );
    let out = tmp.path().join("vms.csv");

    srph(&tmp)
        .args(["export", "vm"])
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("vmId,vmName,vmStatus,vmIp,internetAccess"));
    assert!(lines[1].starts_with("VM-1,\"web, primary\",,,true,"));
}

#[test]
fn test_export_empty_list_is_empty() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(&tmp, "vms.json", "[]");

    srph(&tmp)
        .args(["export", "vm"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_export_then_import_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(
        &tmp,
        "vms.json",
        r#"[{"vmId": "VM-3", "vmName": "ci", "hypervisor": "ESXi", "rack": "R2", "internetAccess": false}]"#,
    );
    let csv_path = tmp.path().join("vms.csv");

    srph(&tmp)
        .args(["export", "vm"])
        .arg(&input)
        .arg("-o")
        .arg(&csv_path)
        .assert()
        .success();

    let output = srph(&tmp)
        .args(["-f", "json", "import", "vm"])
        .arg(&csv_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let vm = &payload["vms"][0];
    assert_eq!(vm["vmId"], "VM-3");
    assert_eq!(vm["rack"], "R2");
    assert_eq!(vm["hostname"], "N/A");
    assert_eq!(vm["internetAccess"], false);
}
