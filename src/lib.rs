//! SRPH-MIS: CSV import and export for IT asset management
//!
//! Normalizes CSV files of assets, components, accessories and virtual
//! machines into the records the SRPH-MIS import endpoints accept, and
//! encodes virtual machine inventories back to CSV.

pub mod cli;
pub mod core;
pub mod entities;
pub mod export;
pub mod import;
