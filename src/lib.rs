//! Farm registry: the `Farm` aggregate with its lifecycle rules, and a
//! Postgres-backed service that persists it.

pub mod core;
pub mod features;
pub mod shared;
