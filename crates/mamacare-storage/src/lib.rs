//! mamacare-storage
//!
//! SQLite persistence for mothers, pregnancies and weekly check-ins, plus the
//! check-in lifecycle that runs the risk rules inside a single transaction.

pub mod checkins;
pub mod db;
pub mod error;
pub mod mothers;
pub mod pregnancies;
pub mod service;

mod row;
