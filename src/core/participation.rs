/// Participation totals
///
/// Sums participant counts per institution and per institution + subject.

use crate::dataset::{Catalog, SubjectParticipation};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Handles participant aggregation queries
pub struct Participation {
    catalog: Arc<Catalog>,
}

impl Participation {
    /// Create a new participation query instance
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Total participants per institution, keyed in ascending name order
    pub fn by_institution(&self) -> BTreeMap<String, u64> {
        let mut totals: BTreeMap<String, u64> = BTreeMap::new();

        for course in self.catalog.courses() {
            *totals.entry(course.institution.clone()).or_insert(0) += course.participants as u64;
        }

        debug!(groups = totals.len(), "participants by institution");
        totals
    }

    /// Total participants per institution + subject pair
    ///
    /// # Returns
    /// Rows ordered by descending total. Equal totals are ordered by the
    /// rendered `institution-subject` key, with a key that is a prefix of
    /// another sorting first.
    pub fn by_institution_and_subject(&self) -> Vec<SubjectParticipation> {
        // Group on the pair, not the rendered string, so hyphens in either
        // field can't merge unrelated groups
        let mut totals: HashMap<(&str, &str), u64> = HashMap::new();
        for course in self.catalog.courses() {
            *totals
                .entry((course.institution.as_str(), course.subject.as_str()))
                .or_insert(0) += course.participants as u64;
        }

        let mut rows: Vec<(String, SubjectParticipation)> = totals
            .into_iter()
            .map(|((institution, subject), participants)| {
                let row = SubjectParticipation {
                    institution: institution.to_string(),
                    subject: subject.to_string(),
                    participants,
                };
                (row.key(), row)
            })
            .collect();

        rows.sort_by(|(key_a, a), (key_b, b)| {
            b.participants
                .cmp(&a.participants)
                .then_with(|| prefix_alphabetical(key_a, key_b))
                .then_with(|| (&a.institution, &a.subject).cmp(&(&b.institution, &b.subject)))
        });

        debug!(groups = rows.len(), "participants by institution and subject");
        rows.into_iter().map(|(_, row)| row).collect()
    }
}

/// Character-by-character comparison over the shorter length
///
/// The first differing character decides. When every compared character
/// matches, the shorter string sorts first.
pub fn prefix_alphabetical(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x != y => return x.cmp(&y),
            (Some(_), Some(_)) => continue,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}
