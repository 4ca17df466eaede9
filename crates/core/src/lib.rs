//! # SalonSlot Core
//!
//! Domain models, the error taxonomy, and the walk-in availability engine.
//!
//! Nothing in this crate performs I/O. The engine is a set of pure functions over
//! data fetched once per booking session, with "now" passed in explicitly.

pub mod availability;
pub mod clock;
pub mod errors;
pub mod models;
