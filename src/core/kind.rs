//! Entity kinds supported by the import/export pipeline

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The record types the import pipeline understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Hardware asset (laptop, desktop, server, ...)
    Asset,
    /// Internal component (RAM, SSD, ...)
    Component,
    /// Loanable accessory (mouse, headset, ...)
    Accessory,
    /// Virtual machine
    Vm,
}

impl EntityKind {
    /// Short name used on the command line and in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Asset => "asset",
            EntityKind::Component => "component",
            EntityKind::Accessory => "accessory",
            EntityKind::Vm => "vm",
        }
    }

    /// Key of the record array in the submission payload, also the
    /// endpoint segment (`/api/<key>/import`)
    pub fn payload_key(&self) -> &'static str {
        match self {
            EntityKind::Asset => "assets",
            EntityKind::Component => "components",
            EntityKind::Accessory => "accessories",
            EntityKind::Vm => "vms",
        }
    }

    /// Human-readable plural for summaries
    pub fn display_plural(&self) -> &'static str {
        match self {
            EntityKind::Asset => "assets",
            EntityKind::Component => "components",
            EntityKind::Accessory => "accessories",
            EntityKind::Vm => "virtual machines",
        }
    }

    /// Relative import endpoint for this kind
    pub fn import_endpoint(&self) -> String {
        format!("/api/{}/import", self.payload_key())
    }

    /// All kinds, in menu order
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Asset,
            EntityKind::Component,
            EntityKind::Accessory,
            EntityKind::Vm,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asset" | "assets" => Ok(EntityKind::Asset),
            "component" | "components" | "cmp" => Ok(EntityKind::Component),
            "accessory" | "accessories" | "acc" => Ok(EntityKind::Accessory),
            "vm" | "vms" | "virtual-machine" | "virtual-machines" => Ok(EntityKind::Vm),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// Unknown entity kind name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported entity type: '{0}'. Supported: asset, component, accessory, vm")]
pub struct KindParseError(pub String);
