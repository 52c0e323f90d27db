//! Domain types shared by the catalog database and API crates.
//!
//! Free of web and database framework dependencies.

pub mod error;
pub mod product;
pub mod types;
