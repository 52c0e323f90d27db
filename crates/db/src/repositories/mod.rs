//! Repositories, one per table.

pub mod product_repo;

pub use product_repo::ProductRepo;
