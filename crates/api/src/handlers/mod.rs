//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the repository in `orderdesk_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod order;
