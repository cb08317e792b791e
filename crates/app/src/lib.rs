//! # bayanchor-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ShipmentRepository`: store and look up shipment records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ShipmentService`: register, look up, list, and present shipments
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `bayanchor-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
