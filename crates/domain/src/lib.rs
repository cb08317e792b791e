//! # bayanchor-domain
//!
//! Pure domain model for the bayanchor shipment tracking site.
//!
//! ## Responsibilities
//! - Foundational types: tracking numbers, error conventions, timestamps
//! - Define **shipment records** (`TrackingData`: sender, receiver, package, carrier)
//! - Define **statistics** shown on the homepage (`Stat`) and the counting
//!   animation they are driven by (`Counter`)
//! - Define the **shipment details presenter**: total functions turning every
//!   optional field into a display string, plus the expand/collapse toggle
//! - Contain all invariant enforcement and formatting logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod counter;
pub mod disclosure;
pub mod money;
pub mod presenter;
pub mod shipment;
pub mod stat;
