//! Domain primitives shared by the database and API crates.
//!
//! Nothing here touches the network or the database: error taxonomy, id and
//! timestamp aliases, role names and input validation helpers.

pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
