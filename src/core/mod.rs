//! Core module - fundamental types and utilities

pub mod clock;
pub mod config;
pub mod kind;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use kind::{EntityKind, KindParseError};
