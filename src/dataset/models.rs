/// Data models for course records and query inputs/outputs
///
/// Records are built once by the loader and never mutated afterwards.

use crate::error::{AnalyzerError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between names in the instructors field
pub const INSTRUCTOR_SEPARATOR: &str = ", ";

/// One run of a course at an institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub institution: String,
    pub number: String, // stable across re-offerings
    pub launch_date: NaiveDate,
    pub title: String,
    pub instructors: String,
    pub subject: String,
    pub year: i32,
    pub honor_code: bool,
    pub participants: u32,
    pub audited: u32,
    pub certified: u32,
    pub percent_audited: f64,
    pub percent_certified: f64,
    pub percent_certified_50: f64,
    pub percent_video: f64,
    pub percent_forum: f64,
    pub grade_higher_zero: f64,
    pub total_hours: f64, // thousands
    pub median_hours_certification: f64,
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_female: f64,
    pub percent_degree: f64,
}

impl Course {
    /// Names listed in the instructors field, in listing order
    ///
    /// Empty fragments (an empty field, a trailing separator) are dropped.
    pub fn instructor_names(&self) -> Vec<&str> {
        self.instructors
            .split(INSTRUCTOR_SEPARATOR)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Audited share of participants as a percentage
    ///
    /// Returns `None` for a run with no participants.
    pub fn audited_percent(&self) -> Option<f64> {
        if self.participants == 0 {
            return None;
        }

        Some(self.audited as f64 / self.participants as f64 * 100.0)
    }
}

/// Ranking criterion for top-K queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    Hours,
    Participants,
}

impl FromStr for RankBy {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hours" => Ok(RankBy::Hours),
            "participants" => Ok(RankBy::Participants),
            other => Err(AnalyzerError::InvalidArgument(format!(
                "Invalid criterion: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankBy::Hours => "hours",
            RankBy::Participants => "participants",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Decode the 0 (female) / 1 (male) convention
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Gender::Female),
            1 => Ok(Gender::Male),
            other => Err(AnalyzerError::InvalidArgument(format!(
                "gender must be 0 (female) or 1 (male), got {}",
                other
            ))),
        }
    }

    /// Target value on the % male scale
    pub fn percent_male(self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 100.0,
        }
    }
}

/// Demographics of the person asking for recommendations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: i32,
    pub gender: Gender,
    pub bachelor_or_higher: bool,
}

impl UserProfile {
    /// Build a profile from the raw integer codes used on the command line
    pub fn from_codes(age: i32, gender: i64, bachelor_or_higher: i64) -> Result<Self> {
        let gender = Gender::from_code(gender)?;
        let bachelor_or_higher = match bachelor_or_higher {
            0 => false,
            1 => true,
            other => {
                return Err(AnalyzerError::InvalidArgument(format!(
                    "isBachelorOrHigher must be 0 or 1, got {}",
                    other
                )))
            }
        };

        Ok(Self {
            age,
            gender,
            bachelor_or_higher,
        })
    }

    /// Target value on the % degree-holding scale
    pub fn percent_degree(&self) -> f64 {
        if self.bachelor_or_higher {
            100.0
        } else {
            0.0
        }
    }
}

/// Filters for a course search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring of the subject
    pub subject: String,
    /// Minimum audited / participants * 100
    pub min_audited_percent: f64,
    /// Maximum total course hours (thousands)
    pub max_total_hours: f64,
}

/// Participant total for one institution + subject pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectParticipation {
    pub institution: String,
    pub subject: String,
    pub participants: u64,
}

impl SubjectParticipation {
    /// Rendered `institution-subject` key
    pub fn key(&self) -> String {
        format!("{}-{}", self.institution, self.subject)
    }
}

/// Courses an instructor teaches alone and with others
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorPortfolio {
    /// Sorted, unique titles taught as the only listed instructor
    pub independent: Vec<String>,
    /// Sorted, unique titles taught alongside other instructors
    pub co_developed: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::CourseBuilder;

    #[test]
    fn test_instructor_names() {
        let course = CourseBuilder::new("Circuits")
            .instructors("Anant Agarwal, Gerald Sussman")
            .build();
        assert_eq!(
            course.instructor_names(),
            vec!["Anant Agarwal", "Gerald Sussman"]
        );

        let nobody = CourseBuilder::new("Ghost Course").instructors("").build();
        assert!(nobody.instructor_names().is_empty());
    }

    #[test]
    fn test_audited_percent() {
        let course = CourseBuilder::new("A").participants(200).audited(50).build();
        assert_eq!(course.audited_percent(), Some(25.0));

        let empty = CourseBuilder::new("B").participants(0).audited(0).build();
        assert_eq!(empty.audited_percent(), None);
    }

    #[test]
    fn test_rank_by_parse() {
        assert_eq!("hours".parse::<RankBy>().unwrap(), RankBy::Hours);
        assert_eq!(
            "participants".parse::<RankBy>().unwrap(),
            RankBy::Participants
        );

        match "Hours".parse::<RankBy>() {
            Err(AnalyzerError::InvalidArgument(msg)) => assert!(msg.contains("Hours")),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_user_profile_codes() {
        let profile = UserProfile::from_codes(30, 1, 0).unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.gender.percent_male(), 100.0);
        assert_eq!(profile.percent_degree(), 0.0);

        assert!(UserProfile::from_codes(30, 2, 0).is_err());
        assert!(UserProfile::from_codes(30, 0, -1).is_err());
    }

    #[test]
    fn test_subject_key() {
        let row = SubjectParticipation {
            institution: "MITx".to_string(),
            subject: "Computer Science".to_string(),
            participants: 10,
        };
        assert_eq!(row.key(), "MITx-Computer Science");
    }
}
