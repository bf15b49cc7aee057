//! Domain types and rules for the order intake backend.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these definitions.

pub mod error;
pub mod order;
pub mod types;
