//! Import components from CSV

use crate::core::EntityKind;
use crate::entities::InsertComponent;

use super::common::{parse_quantity, ImportSchema, RawRecord};
use super::error::ImportError;

/// Notes used when the import leaves them empty
pub const DEFAULT_NOTES: &str = "Imported via CSV";

pub const SCHEMA: ImportSchema = ImportSchema {
    kind: EntityKind::Component,
    aliases: ALIASES,
    required: &["name", "category"],
    keep_unknown: false,
    reject_empty: false,
};

const ALIASES: &[(&str, &str)] = &[
    ("name", "name"),
    ("component name", "name"),
    ("component_name", "name"),
    ("componentname", "name"),
    ("category", "category"),
    ("type", "category"),
    ("component type", "category"),
    ("component_type", "category"),
    ("serialnumber", "serialNumber"),
    ("serial_number", "serialNumber"),
    ("serial number", "serialNumber"),
    ("serial", "serialNumber"),
    ("manufacturer", "manufacturer"),
    ("brand", "manufacturer"),
    ("make", "manufacturer"),
    ("model", "model"),
    ("model number", "model"),
    ("specifications", "specifications"),
    ("specification", "specifications"),
    ("specs", "specifications"),
    ("status", "status"),
    ("state", "status"),
    ("location", "location"),
    ("site", "location"),
    ("assignedto", "assignedTo"),
    ("assigned_to", "assignedTo"),
    ("assigned to", "assignedTo"),
    ("purchasedate", "purchaseDate"),
    ("purchase_date", "purchaseDate"),
    ("purchase date", "purchaseDate"),
    ("purchasecost", "purchaseCost"),
    ("purchase_cost", "purchaseCost"),
    ("purchase cost", "purchaseCost"),
    ("cost", "purchaseCost"),
    ("price", "purchaseCost"),
    ("warranty", "warrantyExpiration"),
    ("warrantyexpiration", "warrantyExpiration"),
    ("warranty_expiration", "warrantyExpiration"),
    ("warranty expiration", "warrantyExpiration"),
    ("quantity", "quantity"),
    ("qty", "quantity"),
    ("count", "quantity"),
    ("notes", "notes"),
    ("comments", "notes"),
    ("remarks", "notes"),
];

/// Normalize one raw record into a component
pub fn normalize_record(record: RawRecord) -> Result<InsertComponent, ImportError> {
    let quantity = parse_quantity(&record)?;

    Ok(InsertComponent {
        name: record.field("name").unwrap_or_default(),
        category: record.field("category").unwrap_or_default(),
        serial_number: record.field("serialNumber"),
        manufacturer: record.field("manufacturer"),
        model: record.field("model"),
        specifications: record.field("specifications"),
        status: record.field("status"),
        location: record.field("location"),
        assigned_to: record.field("assignedTo"),
        purchase_date: record.field("purchaseDate"),
        purchase_cost: record.field("purchaseCost"),
        warranty_expiration: record.field("warrantyExpiration"),
        quantity,
        notes: record.field_or("notes", DEFAULT_NOTES),
    })
}

/// Normalize every record, stopping at the first invalid one
pub fn normalize(records: Vec<RawRecord>) -> Result<Vec<InsertComponent>, ImportError> {
    records.into_iter().map(normalize_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::common::build_records;

    fn import(text: &str) -> Result<Vec<InsertComponent>, ImportError> {
        normalize(build_records(text, &SCHEMA)?)
    }

    #[test]
    fn test_defaults() {
        let components = import("name,category\n16GB DDR4,RAM\n").unwrap();
        assert_eq!(components[0].name, "16GB DDR4");
        assert_eq!(components[0].category, "RAM");
        assert_eq!(components[0].quantity, 1);
        assert_eq!(components[0].notes, "Imported via CSV");
        assert_eq!(components[0].serial_number, None);
    }

    #[test]
    fn test_aliases_and_quantity() {
        let components = import(
            "Component Name,Type,Qty,Specs,Brand,Remarks,Colour\n\
             Samsung 980,SSD,4,1TB NVMe,Samsung,rack 2,blue\n",
        )
        .unwrap();
        let c = &components[0];
        assert_eq!(c.name, "Samsung 980");
        assert_eq!(c.category, "SSD");
        assert_eq!(c.quantity, 4);
        assert_eq!(c.specifications.as_deref(), Some("1TB NVMe"));
        assert_eq!(c.manufacturer.as_deref(), Some("Samsung"));
        assert_eq!(c.notes, "rack 2");
    }

    #[test]
    fn test_missing_name_or_category() {
        let err = import("category,qty\nRAM,2\n").unwrap_err();
        assert!(matches!(err, ImportError::MissingRequiredField { ref fields, .. } if fields == &vec!["name"]));

        let err = import("name,qty\nDIMM,2\n").unwrap_err();
        assert!(matches!(err, ImportError::MissingRequiredField { ref fields, .. } if fields == &vec!["category"]));
    }

    #[test]
    fn test_non_numeric_quantity_fails() {
        let err = import("name,category,quantity\nDIMM,RAM,2\nDIMM,RAM,two\n").unwrap_err();
        assert!(matches!(err, ImportError::InvalidQuantity { line: 3, .. }));

        let err = import("name,category,quantity\nDIMM,RAM,-1\n").unwrap_err();
        assert!(matches!(err, ImportError::InvalidQuantity { line: 2, .. }));
    }
}
