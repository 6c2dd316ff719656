/// course-analyzer library
///
/// Participation, portfolio, ranking, search and recommendation queries over
/// an online course dataset.

pub mod analyzer;
pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod intelligence;

// Re-exports for convenience
pub use analyzer::CourseAnalyzer;
pub use dataset::Catalog;
pub use error::{AnalyzerError, Result};
