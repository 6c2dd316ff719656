/// Top-K course ranking
///
/// Ranks records by total course hours or participant count and returns the
/// first K distinct titles.

use crate::dataset::{Catalog, Course, RankBy};
use crate::error::{AnalyzerError, Result};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Handles top-K queries
pub struct Ranker {
    catalog: Arc<Catalog>,
}

impl Ranker {
    /// Create a new ranker instance
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Top K course titles by the given criterion
    ///
    /// # Arguments
    /// * `top_k` - Number of titles to return, must be positive
    /// * `by` - Ranking criterion
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - At most `top_k` titles, best first, each title once
    /// * `Err(AnalyzerError::InvalidArgument)` - If `top_k` is zero
    pub fn top_courses(&self, top_k: usize, by: RankBy) -> Result<Vec<String>> {
        if top_k == 0 {
            return Err(AnalyzerError::InvalidArgument(
                "top K must be a positive integer".to_string(),
            ));
        }

        let mut ranked = distinct_records(self.catalog.courses());
        ranked.sort_by(|a, b| compare_by(by, a, b));

        let mut seen: HashSet<&str> = HashSet::new();
        let mut titles = Vec::with_capacity(top_k);
        for course in ranked {
            if titles.len() >= top_k {
                break;
            }
            if seen.insert(course.title.as_str()) {
                titles.push(course.title.clone());
            }
        }

        debug!(%by, top_k, returned = titles.len(), "ranked courses");
        Ok(titles)
    }
}

/// Collapse records that are equal in every field
///
/// Keeps the first copy, preserving file order.
fn distinct_records(courses: &[Course]) -> Vec<&Course> {
    let mut distinct: Vec<&Course> = Vec::with_capacity(courses.len());

    for course in courses {
        if !distinct.contains(&course) {
            distinct.push(course);
        }
    }

    distinct
}

/// Criterion descending, then title ascending
fn compare_by(by: RankBy, a: &Course, b: &Course) -> Ordering {
    let primary = match by {
        RankBy::Hours => b.total_hours.total_cmp(&a.total_hours),
        RankBy::Participants => b.participants.cmp(&a.participants),
    };

    primary.then_with(|| a.title.cmp(&b.title))
}
