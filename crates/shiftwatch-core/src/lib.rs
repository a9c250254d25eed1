//! ShiftWatch Core - Domain types and configuration
//!
//! This crate contains the hexagonal core shared by the other crates:
//! - **Domain entities** - `Shift`, `StaffingRequirement`, `ConflictAlert`
//! - **Configuration** - YAML-backed staffing table, break policy and logging settings
//! - **Port definitions** - `IShiftSource`, the boundary to whatever stores shifts
//!
//! # Architecture
//!
//! The domain module is pure data with validation helpers and no I/O.
//! Detection logic lives in `shiftwatch-conflict`; adapters (files, the
//! hosted backend) implement the ports in their own crates.

pub mod config;
pub mod domain;
pub mod ports;
