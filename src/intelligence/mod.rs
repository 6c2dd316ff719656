/// Intelligence module
///
/// Handles similarity scoring and demographic course recommendations.

pub mod recommender;
pub mod scorer;

pub use recommender::{Recommendation, Recommender, RECOMMENDATION_LIMIT};
pub use scorer::{DemographicAverages, Scorer};
