/// Course searcher with fuzzy subject matching
///
/// Filters courses by a case-insensitive subject fragment, a minimum audited
/// percentage and a maximum course length.

use crate::dataset::{Catalog, Course, SearchQuery};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handles course searching
pub struct Searcher {
    catalog: Arc<Catalog>,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Search courses
    ///
    /// # Arguments
    /// * `query` - Subject fragment plus audited and hours thresholds
    ///
    /// # Returns
    /// * Matching titles, each once, in ascending order
    pub fn search(&self, query: &SearchQuery) -> Vec<String> {
        let needle = query.subject.to_lowercase();

        let titles: BTreeSet<&str> = self
            .catalog
            .courses()
            .iter()
            .filter(|course| self.matches(course, &needle, query))
            .map(|course| course.title.as_str())
            .collect();

        debug!(
            subject = %query.subject,
            min_audited = query.min_audited_percent,
            max_hours = query.max_total_hours,
            matches = titles.len(),
            "searched courses"
        );

        titles.into_iter().map(String::from).collect()
    }

    /// Check one record against the query
    ///
    /// `needle` is the query subject already lowercased.
    fn matches(&self, course: &Course, needle: &str, query: &SearchQuery) -> bool {
        if !course.subject.to_lowercase().contains(needle) {
            return false;
        }

        let audited = match course.audited_percent() {
            Some(percent) => percent,
            None => {
                // No participants means no audited share to compare
                warn!(
                    title = %course.title,
                    number = %course.number,
                    "skipping course with zero participants"
                );
                return false;
            }
        };

        audited >= query.min_audited_percent && course.total_hours <= query.max_total_hours
    }
}
