//! CSV import pipeline
//!
//! Text goes through three stages per entity kind:
//! tokenizing ([`common::tokenize`]), header alias resolution and record
//! building ([`common::build_records`]), and normalization into the
//! entity's insert shape (per-kind modules). Any error aborts the whole
//! batch.

pub mod accessory;
pub mod asset;
pub mod common;
pub mod component;
mod error;
pub mod template;
pub mod vm;

use serde_json::{Map, Value};

use crate::core::config::DEFAULT_TAG_PREFIX;
use crate::core::{Clock, EntityKind};
use crate::entities::{InsertAccessory, InsertAsset, InsertComponent, VirtualMachine};
use crate::export::{encode_rows, encode_vms, ExportError};

pub use common::{read_import_file, ImportSummary, RawRecord};
pub use error::ImportError;
pub use template::template;

/// Inputs an import needs besides the text itself
pub struct ImportOptions<'a> {
    /// Prefix for synthesized asset tags
    pub tag_prefix: &'a str,
    /// Time source for synthesized asset tags
    pub clock: &'a dyn Clock,
}

impl<'a> ImportOptions<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self {
            tag_prefix: DEFAULT_TAG_PREFIX,
            clock,
        }
    }

    pub fn with_tag_prefix(mut self, prefix: &'a str) -> Self {
        self.tag_prefix = prefix;
        self
    }
}

/// Parse and normalize assets
pub fn import_assets(text: &str, options: &ImportOptions<'_>) -> Result<Vec<InsertAsset>, ImportError> {
    let records = common::build_records(text, &asset::SCHEMA)?;
    let tags = asset::AssetTagGenerator::new(options.tag_prefix, options.clock);
    Ok(asset::normalize(records, &tags))
}

/// Parse and normalize components
pub fn import_components(text: &str) -> Result<Vec<InsertComponent>, ImportError> {
    component::normalize(common::build_records(text, &component::SCHEMA)?)
}

/// Parse and normalize accessories
pub fn import_accessories(text: &str) -> Result<Vec<InsertAccessory>, ImportError> {
    accessory::normalize(common::build_records(text, &accessory::SCHEMA)?)
}

/// Parse and normalize virtual machines
pub fn import_vms(text: &str) -> Result<Vec<VirtualMachine>, ImportError> {
    Ok(vm::normalize(common::build_records(text, &vm::SCHEMA)?))
}

/// Normalized records of one kind, ready for submission
#[derive(Debug, Clone, PartialEq)]
pub enum ImportBatch {
    Assets(Vec<InsertAsset>),
    Components(Vec<InsertComponent>),
    Accessories(Vec<InsertAccessory>),
    Vms(Vec<VirtualMachine>),
}

impl ImportBatch {
    pub fn kind(&self) -> EntityKind {
        match self {
            ImportBatch::Assets(_) => EntityKind::Asset,
            ImportBatch::Components(_) => EntityKind::Component,
            ImportBatch::Accessories(_) => EntityKind::Accessory,
            ImportBatch::Vms(_) => EntityKind::Vm,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ImportBatch::Assets(v) => v.len(),
            ImportBatch::Components(v) => v.len(),
            ImportBatch::Accessories(v) => v.len(),
            ImportBatch::Vms(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Request body for the kind's import endpoint: `{ "<key>": [...] }`
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        let records = match self {
            ImportBatch::Assets(v) => serde_json::to_value(v)?,
            ImportBatch::Components(v) => serde_json::to_value(v)?,
            ImportBatch::Accessories(v) => serde_json::to_value(v)?,
            ImportBatch::Vms(v) => serde_json::to_value(v)?,
        };
        let mut body = Map::new();
        body.insert(self.kind().payload_key().to_string(), records);
        Ok(Value::Object(body))
    }

    /// Column headers and one row of display cells per record
    pub fn preview(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        match self {
            ImportBatch::Assets(v) => (
                vec!["#", "Asset Tag", "Name", "Category", "Serial", "Status"],
                v.iter()
                    .enumerate()
                    .map(|(i, a)| {
                        vec![
                            (i + 1).to_string(),
                            a.asset_tag.clone(),
                            a.name.clone(),
                            a.category.clone(),
                            a.serial_number.clone(),
                            a.status.to_string(),
                        ]
                    })
                    .collect(),
            ),
            ImportBatch::Components(v) => (
                vec!["#", "Name", "Category", "Qty", "Notes"],
                v.iter()
                    .enumerate()
                    .map(|(i, c)| {
                        vec![
                            (i + 1).to_string(),
                            c.name.clone(),
                            c.category.clone(),
                            c.quantity.to_string(),
                            c.notes.clone(),
                        ]
                    })
                    .collect(),
            ),
            ImportBatch::Accessories(v) => (
                vec!["#", "Name", "Category", "Qty", "Status"],
                v.iter()
                    .enumerate()
                    .map(|(i, a)| {
                        vec![
                            (i + 1).to_string(),
                            a.name.clone(),
                            a.category.clone(),
                            a.quantity.to_string(),
                            a.status.to_string(),
                        ]
                    })
                    .collect(),
            ),
            ImportBatch::Vms(v) => (
                vec!["#", "VM ID", "Name", "Hypervisor", "Status", "Internet"],
                v.iter()
                    .enumerate()
                    .map(|(i, vm)| {
                        vec![
                            (i + 1).to_string(),
                            vm.vm_id.clone(),
                            vm.vm_name.clone(),
                            vm.hypervisor.clone(),
                            vm.vm_status.clone().unwrap_or_default(),
                            vm.internet_access.to_string(),
                        ]
                    })
                    .collect(),
            ),
        }
    }

    /// Records as CSV text
    ///
    /// VMs use the full export layout so the output imports back cleanly;
    /// other kinds use the preview columns.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        match self {
            ImportBatch::Vms(v) => encode_vms(v),
            _ => {
                let (headers, rows) = self.preview();
                encode_rows(&headers, &rows)
            }
        }
    }
}

/// Run the full pipeline for one entity kind
pub fn import(kind: EntityKind, text: &str, options: &ImportOptions<'_>) -> Result<ImportBatch, ImportError> {
    tracing::debug!(kind = %kind, bytes = text.len(), "starting import");

    let batch = match kind {
        EntityKind::Asset => ImportBatch::Assets(import_assets(text, options)?),
        EntityKind::Component => ImportBatch::Components(import_components(text)?),
        EntityKind::Accessory => ImportBatch::Accessories(import_accessories(text)?),
        EntityKind::Vm => ImportBatch::Vms(import_vms(text)?),
    };

    tracing::info!(kind = %kind, records = batch.len(), "normalized import batch");
    Ok(batch)
}
