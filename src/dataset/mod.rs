/// Dataset module for course-analyzer
///
/// Handles loading the course CSV into typed records and holding them in an
/// immutable catalog that every query reads from.

pub mod catalog;
pub mod loader;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{Catalog, CatalogStats};
pub use models::*;
