//! Domain model structs and DTOs.
//!
//! - [`order`]: the `orders` row plus create/update DTOs
//! - [`status`]: the order lifecycle enum stored as lowercase text

pub mod order;
pub mod status;
