//! Asset entity type - Tracked hardware (laptops, desktops, servers)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Asset lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Available,
    Deployed,
    Pending,
    Overdue,
    Archived,
}

impl AssetStatus {
    /// Map free text onto a canonical status
    ///
    /// Matching ignores case, spaces, hyphens and underscores. Returns `None`
    /// when nothing matches.
    pub fn from_free_text(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "available" | "instock" | "ready" => Some(AssetStatus::Available),
            "deployed" | "inuse" | "assigned" | "checkedout" => Some(AssetStatus::Deployed),
            "pending" => Some(AssetStatus::Pending),
            "overdue" => Some(AssetStatus::Overdue),
            "archived" | "retired" | "disposed" => Some(AssetStatus::Archived),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetStatus::Available => write!(f, "available"),
            AssetStatus::Deployed => write!(f, "deployed"),
            AssetStatus::Pending => write!(f, "pending"),
            AssetStatus::Overdue => write!(f, "overdue"),
            AssetStatus::Archived => write!(f, "archived"),
        }
    }
}

/// An asset ready for submission to the asset import endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAsset {
    /// Inventory tag, synthesized when the import omits it
    pub asset_tag: String,

    pub name: String,

    pub description: String,

    pub category: String,

    pub status: AssetStatus,

    pub serial_number: String,

    pub model: Option<String>,

    pub purchase_date: Option<String>,

    pub manufacturer: Option<String>,

    /// Cost as written in the source; the API parses it
    pub purchase_cost: Option<String>,

    pub location: Option<String>,

    pub knox_id: Option<String>,

    pub ip_address: Option<String>,

    pub mac_address: Option<String>,

    pub os_type: Option<String>,

    pub department: Option<String>,

    pub notes: Option<String>,

    /// Columns with no known alias, keyed by their lower-cased header
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_fields: BTreeMap<String, String>,
}
