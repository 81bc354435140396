//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO bound from query parameters for inserts
//! - An update DTO bound from the JSON body for full replacement
//!
//! Entities serialize with camelCase keys in declaration order.

pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
pub mod user;
