//! Import assets from CSV

use crate::core::{Clock, EntityKind};
use crate::entities::{AssetStatus, InsertAsset};

use super::common::{ImportSchema, RawRecord};

/// Category used when the import leaves it empty
pub const DEFAULT_CATEGORY: &str = "Laptop";

/// Description used when no descriptive fragments are available
pub const DEFAULT_DESCRIPTION: &str = "Imported from CSV";

pub const SCHEMA: ImportSchema = ImportSchema {
    kind: EntityKind::Asset,
    aliases: ALIASES,
    required: &["serialNumber"],
    keep_unknown: true,
    reject_empty: false,
};

const ALIASES: &[(&str, &str)] = &[
    ("serialnumber", "serialNumber"),
    ("serial_number", "serialNumber"),
    ("serial number", "serialNumber"),
    ("serial", "serialNumber"),
    ("serial no", "serialNumber"),
    ("s/n", "serialNumber"),
    ("assettag", "assetTag"),
    ("asset tag", "assetTag"),
    ("asset_tag", "assetTag"),
    ("tag", "assetTag"),
    ("knoxid", "knoxId"),
    ("knox_id", "knoxId"),
    ("knox id", "knoxId"),
    ("knox", "knoxId"),
    ("name", "name"),
    ("asset name", "name"),
    ("asset_name", "name"),
    ("assetname", "name"),
    ("device name", "name"),
    ("model", "model"),
    ("model number", "model"),
    ("model_number", "model"),
    ("modelnumber", "model"),
    ("model no", "model"),
    ("purchasedate", "purchaseDate"),
    ("purchase_date", "purchaseDate"),
    ("purchase date", "purchaseDate"),
    ("acquired_date", "purchaseDate"),
    ("acquired date", "purchaseDate"),
    ("dateacquired", "purchaseDate"),
    ("date_acquired", "purchaseDate"),
    ("purchasecost", "purchaseCost"),
    ("purchase_cost", "purchaseCost"),
    ("purchase cost", "purchaseCost"),
    ("cost", "purchaseCost"),
    ("price", "purchaseCost"),
    ("value", "purchaseCost"),
    ("manufacturer", "manufacturer"),
    ("brand", "manufacturer"),
    ("make", "manufacturer"),
    ("vendor", "manufacturer"),
    ("category", "category"),
    ("type", "category"),
    ("device type", "category"),
    ("device_type", "category"),
    ("asset type", "category"),
    ("asset_type", "category"),
    ("status", "status"),
    ("state", "status"),
    ("location", "location"),
    ("site", "location"),
    ("office", "location"),
    ("building", "location"),
    ("room", "location"),
    ("ipaddress", "ipAddress"),
    ("ip address", "ipAddress"),
    ("ip_address", "ipAddress"),
    ("ip", "ipAddress"),
    ("macaddress", "macAddress"),
    ("mac address", "macAddress"),
    ("mac_address", "macAddress"),
    ("mac", "macAddress"),
    ("ostype", "osType"),
    ("os type", "osType"),
    ("os_type", "osType"),
    ("os", "osType"),
    ("operating system", "osType"),
    ("operating_system", "osType"),
    ("department", "department"),
    ("dept", "department"),
    ("division", "department"),
    ("unit", "department"),
    ("description", "description"),
    ("desc", "description"),
    ("notes", "notes"),
    ("comments", "notes"),
    ("remarks", "notes"),
    ("warranty", "warranty"),
    ("warranty expiration", "warranty"),
    ("warranty_expiration", "warranty"),
    ("warrantyexpiration", "warranty"),
    ("warranty date", "warranty"),
    ("warranty_date", "warranty"),
    ("warranty expiry", "warranty"),
    ("supplier", "supplier"),
    ("vendor_name", "supplier"),
    ("vendor name", "supplier"),
];

/// Synthesizes asset tags for rows that lack one
///
/// Tags look like `SRPH-LAP-123456-001`: prefix, first three letters of the
/// category, last six digits of the epoch-millisecond timestamp, and the
/// 1-based record index. The clock is read once, so every tag in a batch
/// shares the timestamp part and differs by index. Tags are not
/// reproducible across runs unless the clock is fixed.
#[derive(Debug, Clone)]
pub struct AssetTagGenerator {
    prefix: String,
    stamp: i64,
}

impl AssetTagGenerator {
    pub fn new(prefix: &str, clock: &dyn Clock) -> Self {
        Self {
            prefix: prefix.to_string(),
            stamp: clock.now().timestamp_millis().rem_euclid(1_000_000),
        }
    }

    /// Tag for the record at `index` (1-based)
    pub fn generate(&self, category: Option<&str>, index: usize) -> String {
        let code: String = match category {
            Some(c) => c.chars().take(3).collect::<String>().to_uppercase(),
            None => "AST".to_string(),
        };
        format!("{}-{}-{:06}-{:03}", self.prefix, code, self.stamp, index)
    }
}

/// Derive a display name from manufacturer and model (or category)
fn default_name(record: &RawRecord) -> String {
    let manufacturer = record.get("manufacturer").unwrap_or_default();
    let model = record
        .get("model")
        .or_else(|| record.get("category"))
        .unwrap_or_default();
    let joined = format!("{} {}", manufacturer, model).trim().to_string();

    if joined.is_empty() {
        format!("Asset-{}", record.get("serialNumber").unwrap_or_default())
    } else {
        joined
    }
}

/// Build a description from Knox ID, supplier and warranty
fn default_description(record: &RawRecord) -> String {
    let fragments: Vec<String> = [
        ("knoxId", "Knox ID"),
        ("supplier", "Supplier"),
        ("warranty", "Warranty"),
    ]
    .iter()
    .filter_map(|(field, label)| record.get(field).map(|v| format!("{}: {}", label, v)))
    .collect();

    if fragments.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        fragments.join(". ")
    }
}

fn normalize_status(record: &RawRecord) -> AssetStatus {
    match record.get("status") {
        None => AssetStatus::Available,
        Some(raw) => AssetStatus::from_free_text(raw).unwrap_or_else(|| {
            tracing::warn!(
                line = record.line,
                status = raw,
                "unrecognised asset status, using 'available'"
            );
            AssetStatus::Available
        }),
    }
}

/// Normalize one raw record into an asset
pub fn normalize_record(record: RawRecord, tags: &AssetTagGenerator) -> InsertAsset {
    let asset_tag = record
        .field("assetTag")
        .unwrap_or_else(|| tags.generate(record.get("category"), record.index));

    InsertAsset {
        asset_tag,
        name: record.field("name").unwrap_or_else(|| default_name(&record)),
        description: record
            .field("description")
            .unwrap_or_else(|| default_description(&record)),
        category: record.field_or("category", DEFAULT_CATEGORY),
        status: normalize_status(&record),
        serial_number: record.field("serialNumber").unwrap_or_default(),
        model: record.field("model"),
        purchase_date: record.field("purchaseDate"),
        manufacturer: record.field("manufacturer"),
        purchase_cost: record.field("purchaseCost"),
        location: record.field("location"),
        knox_id: record.field("knoxId"),
        ip_address: record.field("ipAddress"),
        mac_address: record.field("macAddress"),
        os_type: record.field("osType"),
        department: record.field("department"),
        notes: record.field("notes"),
        additional_fields: record.custom,
    }
}

/// Normalize every record, in order
pub fn normalize(records: Vec<RawRecord>, tags: &AssetTagGenerator) -> Vec<InsertAsset> {
    records
        .into_iter()
        .map(|r| normalize_record(r, tags))
        .collect()
}
