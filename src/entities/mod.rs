//! Entity types - the normalized records handed to the SRPH-MIS API

pub mod accessory;
pub mod asset;
pub mod component;
pub mod vm;

pub use accessory::{AccessoryStatus, InsertAccessory};
pub use asset::{AssetStatus, InsertAsset};
pub use component::InsertComponent;
pub use vm::VirtualMachine;
