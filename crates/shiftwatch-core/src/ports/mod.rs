//! Port definitions (hexagonal architecture interfaces)
//!
//! Ports are the interfaces the core depends on but whose implementations
//! live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IShiftSource`] - Read access to the current shift collection

pub mod shift_source;

pub use shift_source::{IShiftSource, InMemoryShiftSource};
