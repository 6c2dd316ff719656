/// Main analyzer orchestrator
///
/// Owns the catalog and exposes every query as a read-only method. Nothing
/// here mutates the records, so repeated calls return identical results.

use crate::core::{Participation, Portfolios, Ranker, Searcher};
use crate::dataset::{
    Catalog, CatalogStats, InstructorPortfolio, RankBy, SearchQuery, SubjectParticipation,
    UserProfile,
};
use crate::error::Result;
use crate::intelligence::{Recommendation, Recommender};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Main analyzer
pub struct CourseAnalyzer {
    catalog: Arc<Catalog>,
    participation: Participation,
    portfolios: Portfolios,
    ranker: Ranker,
    searcher: Searcher,
    recommender: Recommender,
}

impl CourseAnalyzer {
    /// Create a new analyzer over an already loaded catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            participation: Participation::new(Arc::clone(&catalog)),
            portfolios: Portfolios::new(Arc::clone(&catalog)),
            ranker: Ranker::new(Arc::clone(&catalog)),
            searcher: Searcher::new(Arc::clone(&catalog)),
            recommender: Recommender::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// Load a dataset file and build an analyzer over it
    ///
    /// # Errors
    /// Fails if the file can't be read or any row is malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let catalog = Catalog::open(path)?;
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    /// Participants per institution, ascending by institution
    pub fn participants_by_institution(&self) -> BTreeMap<String, u64> {
        self.participation.by_institution()
    }

    /// Participants per institution + subject, most participants first
    pub fn participants_by_institution_and_subject(&self) -> Vec<SubjectParticipation> {
        self.participation.by_institution_and_subject()
    }

    /// Independent and co-developed titles for every instructor
    pub fn instructor_portfolios(&self) -> BTreeMap<String, InstructorPortfolio> {
        self.portfolios.by_instructor()
    }

    pub fn instructor_portfolio(&self, name: &str) -> Option<InstructorPortfolio> {
        self.portfolios.for_instructor(name)
    }

    /// Top K titles by `"hours"` or `"participants"`
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown criterion or a K of zero.
    pub fn top_courses(&self, top_k: usize, by: &str) -> Result<Vec<String>> {
        let by: RankBy = by.parse()?;
        self.ranker.top_courses(top_k, by)
    }

    /// Titles matching a subject fragment and the audited/hours thresholds
    pub fn search_courses(
        &self,
        course_subject: &str,
        percent_audited: f64,
        total_course_hours: f64,
    ) -> Vec<String> {
        self.searcher.search(&SearchQuery {
            subject: course_subject.to_string(),
            min_audited_percent: percent_audited,
            max_total_hours: total_course_hours,
        })
    }

    /// Ten most similar course titles for the given demographics
    ///
    /// # Arguments
    /// * `age` - Age of the user
    /// * `gender` - 0 for female, 1 for male
    /// * `is_bachelor_or_higher` - 1 if the user holds a bachelor's degree or higher, else 0
    ///
    /// # Errors
    /// `InvalidArgument` if a code is outside 0/1.
    pub fn recommend_courses(
        &self,
        age: i32,
        gender: i64,
        is_bachelor_or_higher: i64,
    ) -> Result<Vec<String>> {
        let profile = UserProfile::from_codes(age, gender, is_bachelor_or_higher)?;
        Ok(self.recommender.recommend(&profile))
    }

    /// Same as `recommend_courses`, with similarity values attached
    pub fn recommend_scored(&self, profile: &UserProfile) -> Vec<Recommendation> {
        self.recommender.recommend_scored(profile)
    }
}
