//! Accessory entity type - Loanable peripherals

use serde::{Deserialize, Serialize};

/// Loan status of an accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryStatus {
    #[default]
    Available,
    Borrowed,
    Returned,
    Defective,
}

impl AccessoryStatus {
    /// Map free text onto a status by case-insensitive substring match
    ///
    /// The first of `borrowed`, `returned`, `defective` found anywhere in the
    /// text wins, so "not borrowed" maps to `Borrowed`.
    pub fn from_free_text(s: &str) -> Self {
        let lower = s.to_lowercase();
        if lower.contains("borrowed") {
            AccessoryStatus::Borrowed
        } else if lower.contains("returned") {
            AccessoryStatus::Returned
        } else if lower.contains("defective") {
            AccessoryStatus::Defective
        } else {
            AccessoryStatus::Available
        }
    }
}

impl std::fmt::Display for AccessoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessoryStatus::Available => write!(f, "available"),
            AccessoryStatus::Borrowed => write!(f, "borrowed"),
            AccessoryStatus::Returned => write!(f, "returned"),
            AccessoryStatus::Defective => write!(f, "defective"),
        }
    }
}

/// An accessory ready for submission to the accessory import endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAccessory {
    pub name: String,

    pub category: String,

    pub status: AccessoryStatus,

    pub quantity: u32,

    pub serial_number: Option<String>,

    pub model: Option<String>,

    pub manufacturer: Option<String>,

    pub purchase_date: Option<String>,

    pub purchase_cost: Option<String>,

    pub assigned_to: Option<String>,

    pub knox_id: Option<String>,

    pub location: Option<String>,

    pub department: Option<String>,

    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_substring_mapping() {
        assert_eq!(AccessoryStatus::from_free_text("Borrowed by IT"), AccessoryStatus::Borrowed);
        assert_eq!(AccessoryStatus::from_free_text("Returned to stock"), AccessoryStatus::Returned);
        assert_eq!(AccessoryStatus::from_free_text("Defective unit"), AccessoryStatus::Defective);
        assert_eq!(AccessoryStatus::from_free_text("In Storage"), AccessoryStatus::Available);
    }

    #[test]
    fn test_status_substring_is_not_negation_aware() {
        assert_eq!(AccessoryStatus::from_free_text("not borrowed"), AccessoryStatus::Borrowed);
        assert_eq!(AccessoryStatus::from_free_text("BORROWED"), AccessoryStatus::Borrowed);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&AccessoryStatus::Defective).unwrap();
        assert_eq!(json, "\"defective\"");
    }
}
