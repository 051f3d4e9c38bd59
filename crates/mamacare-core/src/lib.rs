//! mamacare-core
//!
//! Pure domain types and the weekly check-in risk rules.
//! No storage or HTTP dependency — this is the shared vocabulary of the MamaCare system.

pub mod error;
pub mod models;
pub mod risk;
pub mod summary;
pub mod symptoms;
