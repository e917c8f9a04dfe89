//! Import accessories from CSV

use crate::core::EntityKind;
use crate::entities::{AccessoryStatus, InsertAccessory};

use super::common::{parse_quantity, ImportSchema, RawRecord};
use super::component::DEFAULT_NOTES;
use super::error::ImportError;

pub const SCHEMA: ImportSchema = ImportSchema {
    kind: EntityKind::Accessory,
    aliases: ALIASES,
    required: &["name", "category"],
    keep_unknown: false,
    reject_empty: false,
};

const ALIASES: &[(&str, &str)] = &[
    ("name", "name"),
    ("accessory name", "name"),
    ("accessory_name", "name"),
    ("accessoryname", "name"),
    ("item", "name"),
    ("category", "category"),
    ("type", "category"),
    ("status", "status"),
    ("state", "status"),
    ("quantity", "quantity"),
    ("qty", "quantity"),
    ("count", "quantity"),
    ("serialnumber", "serialNumber"),
    ("serial_number", "serialNumber"),
    ("serial number", "serialNumber"),
    ("serial", "serialNumber"),
    ("model", "model"),
    ("manufacturer", "manufacturer"),
    ("brand", "manufacturer"),
    ("make", "manufacturer"),
    ("purchasedate", "purchaseDate"),
    ("purchase_date", "purchaseDate"),
    ("purchase date", "purchaseDate"),
    ("purchasecost", "purchaseCost"),
    ("purchase_cost", "purchaseCost"),
    ("purchase cost", "purchaseCost"),
    ("cost", "purchaseCost"),
    ("price", "purchaseCost"),
    ("assignedto", "assignedTo"),
    ("assigned_to", "assignedTo"),
    ("assigned to", "assignedTo"),
    ("user", "assignedTo"),
    ("knoxid", "knoxId"),
    ("knox_id", "knoxId"),
    ("knox id", "knoxId"),
    ("location", "location"),
    ("site", "location"),
    ("department", "department"),
    ("dept", "department"),
    ("notes", "notes"),
    ("comments", "notes"),
    ("remarks", "notes"),
];

/// Normalize one raw record into an accessory
pub fn normalize_record(record: RawRecord) -> Result<InsertAccessory, ImportError> {
    let quantity = parse_quantity(&record)?;
    let status = record
        .get("status")
        .map(AccessoryStatus::from_free_text)
        .unwrap_or_default();

    Ok(InsertAccessory {
        name: record.field("name").unwrap_or_default(),
        category: record.field("category").unwrap_or_default(),
        status,
        quantity,
        serial_number: record.field("serialNumber"),
        model: record.field("model"),
        manufacturer: record.field("manufacturer"),
        purchase_date: record.field("purchaseDate"),
        purchase_cost: record.field("purchaseCost"),
        assigned_to: record.field("assignedTo"),
        knox_id: record.field("knoxId"),
        location: record.field("location"),
        department: record.field("department"),
        notes: record.field_or("notes", DEFAULT_NOTES),
    })
}

/// Normalize every record, stopping at the first invalid one
pub fn normalize(records: Vec<RawRecord>) -> Result<Vec<InsertAccessory>, ImportError> {
    records.into_iter().map(normalize_record).collect()
}
