//! Domain model for the car-sharing manager.
//!
//! # Invariants
//! - Every persisted company has a store-assigned id and a unique name.

pub mod company;
