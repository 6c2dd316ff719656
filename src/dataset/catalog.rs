/// Immutable in-memory course catalog
///
/// Owns the loaded records for the lifetime of the analyzer. Query components
/// share it through an `Arc` and only ever read from it.

use crate::dataset::loader;
use crate::dataset::Course;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Catalog wrapper around the loaded record sequence
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Load a catalog from a dataset file
    ///
    /// # Arguments
    /// * `path` - Path to the comma-separated dataset (first line is a header)
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Every row parsed successfully
    /// * `Err(AnalyzerError)` - The file is unreadable or any row is malformed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let courses = loader::load_courses(path)?;

        Ok(Self {
            courses,
            source: Some(path.to_path_buf()),
        })
    }

    /// Build a catalog from records that are already parsed
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            source: None,
        }
    }

    /// All records in file order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Dataset the records came from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Summary numbers for the status view
    pub fn stats(&self) -> CatalogStats {
        let institutions: HashSet<&str> =
            self.courses.iter().map(|c| c.institution.as_str()).collect();
        let numbers: HashSet<&str> = self.courses.iter().map(|c| c.number.as_str()).collect();
        let subjects: HashSet<&str> = self.courses.iter().map(|c| c.subject.as_str()).collect();
        let titles: HashSet<&str> = self.courses.iter().map(|c| c.title.as_str()).collect();

        CatalogStats {
            total_records: self.courses.len(),
            institutions: institutions.len(),
            course_numbers: numbers.len(),
            subjects: subjects.len(),
            titles: titles.len(),
            earliest_launch: self.courses.iter().map(|c| c.launch_date).min(),
            latest_launch: self.courses.iter().map(|c| c.launch_date).max(),
            total_participants: self.courses.iter().map(|c| c.participants as u64).sum(),
        }
    }
}

/// Catalog statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_records: usize,
    pub institutions: usize,
    pub course_numbers: usize,
    pub subjects: usize,
    pub titles: usize,
    pub earliest_launch: Option<NaiveDate>,
    pub latest_launch: Option<NaiveDate>,
    pub total_participants: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::CourseBuilder;

    #[test]
    fn test_empty_catalog_stats() {
        let catalog = Catalog::from_courses(Vec::new());
        let stats = catalog.stats();

        assert!(catalog.is_empty());
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.earliest_launch, None);
        assert_eq!(stats.latest_launch, None);
        assert_eq!(stats.total_participants, 0);
    }

    #[test]
    fn test_catalog_stats() {
        let catalog = Catalog::from_courses(vec![
            CourseBuilder::new("Justice")
                .institution("HarvardX")
                .number("ER22x")
                .launched(2013, 3, 2)
                .participants(100)
                .build(),
            CourseBuilder::new("Justice")
                .institution("HarvardX")
                .number("ER22x")
                .launched(2014, 3, 2)
                .participants(50)
                .build(),
            CourseBuilder::new("Circuits")
                .institution("MITx")
                .number("6.002x")
                .subject("Engineering")
                .launched(2012, 9, 5)
                .participants(25)
                .build(),
        ]);

        let stats = catalog.stats();
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.institutions, 2);
        assert_eq!(stats.course_numbers, 2);
        assert_eq!(stats.subjects, 2);
        assert_eq!(stats.titles, 2);
        assert_eq!(stats.earliest_launch, NaiveDate::from_ymd_opt(2012, 9, 5));
        assert_eq!(stats.latest_launch, NaiveDate::from_ymd_opt(2014, 3, 2));
        assert_eq!(stats.total_participants, 175);
        assert!(catalog.source().is_none());
    }
}
