// Recommends courses whose audience looks like the user
//
// Runs as three stages over the catalog:
//   group     - offerings that share a course number are the same course
//   aggregate - plain mean of median age, % male and % degree per course,
//               plus the title of its most recently launched offering
//   rank      - similarity ascending, then title ascending

use crate::dataset::{Catalog, Course, UserProfile};
use crate::intelligence::scorer::{DemographicAverages, Scorer};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

pub const RECOMMENDATION_LIMIT: usize = 10;

/// All offerings of one course number, in file order
#[derive(Debug)]
pub struct CourseGroup<'a> {
    pub number: &'a str,
    pub offerings: Vec<&'a Course>,
}

/// One course number reduced to what ranking needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub number: String,
    pub title: String,
    pub averages: DemographicAverages,
}

/// A ranked recommendation with its similarity value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub number: String,
    pub similarity: f64,
}

pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    // Titles only, best match first
    pub fn recommend(&self, profile: &UserProfile) -> Vec<String> {
        self.recommend_scored(profile)
            .into_iter()
            .map(|r| r.title)
            .collect()
    }

    pub fn recommend_scored(&self, profile: &UserProfile) -> Vec<Recommendation> {
        let groups = group_by_number(self.catalog.courses());
        let summaries: Vec<CourseSummary> = groups.iter().map(aggregate).collect();
        let ranked = rank(&summaries, profile, RECOMMENDATION_LIMIT);

        debug!(
            age = profile.age,
            gender = ?profile.gender,
            bachelor_or_higher = profile.bachelor_or_higher,
            courses = summaries.len(),
            returned = ranked.len(),
            "recommended courses"
        );

        ranked
    }
}

/// Group offerings by course number, groups ordered by first appearance
pub fn group_by_number(courses: &[Course]) -> Vec<CourseGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CourseGroup<'_>> = Vec::new();

    for course in courses {
        let slot = *index.entry(course.number.as_str()).or_insert_with(|| {
            groups.push(CourseGroup {
                number: course.number.as_str(),
                offerings: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].offerings.push(course);
    }

    groups
}

/// Average the demographics of a group and pick its display title
///
/// The display title comes from the latest launch. On equal launch dates the
/// earliest offering in file order wins.
pub fn aggregate(group: &CourseGroup<'_>) -> CourseSummary {
    let count = group.offerings.len() as f64;

    let mut age = 0.0;
    let mut male = 0.0;
    let mut degree = 0.0;
    let mut latest: Option<&Course> = None;

    for &course in &group.offerings {
        age += course.median_age;
        male += course.percent_male;
        degree += course.percent_degree;

        // Strictly later only, so ties keep the first one seen
        if latest.map_or(true, |l| course.launch_date > l.launch_date) {
            latest = Some(course);
        }
    }

    CourseSummary {
        number: group.number.to_string(),
        title: latest.map(|c| c.title.clone()).unwrap_or_default(),
        averages: DemographicAverages {
            median_age: age / count,
            percent_male: male / count,
            percent_degree: degree / count,
        },
    }
}

/// Score every summary and keep the `limit` most similar
///
/// A title shared by several course numbers is listed once, at its best rank.
pub fn rank(summaries: &[CourseSummary], profile: &UserProfile, limit: usize) -> Vec<Recommendation> {
    let mut scored: Vec<Recommendation> = summaries
        .iter()
        .map(|summary| Recommendation {
            title: summary.title.clone(),
            number: summary.number.clone(),
            similarity: Scorer::similarity(profile, &summary.averages),
        })
        .collect();

    scored.sort_by(|a, b| {
        a.similarity
            .total_cmp(&b.similarity)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.number.cmp(&b.number))
    });

    let mut seen: HashSet<String> = HashSet::new();
    scored
        .into_iter()
        .filter(|r| seen.insert(r.title.clone()))
        .take(limit)
        .collect()
}
