//! Component entity type - Internal parts installed in assets

use serde::{Deserialize, Serialize};

/// A component ready for submission to the component import endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertComponent {
    pub name: String,

    /// Component category (e.g., "RAM", "SSD", "GPU")
    pub category: String,

    pub serial_number: Option<String>,

    pub manufacturer: Option<String>,

    pub model: Option<String>,

    pub specifications: Option<String>,

    pub status: Option<String>,

    pub location: Option<String>,

    pub assigned_to: Option<String>,

    pub purchase_date: Option<String>,

    pub purchase_cost: Option<String>,

    pub warranty_expiration: Option<String>,

    pub quantity: u32,

    pub notes: String,
}
