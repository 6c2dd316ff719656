/// Scoring algorithms for recommendations
///
/// Measures how far a user's demographics sit from a course's audience.

use crate::dataset::UserProfile;
use serde::Serialize;

/// Averaged audience demographics for one course
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemographicAverages {
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_degree: f64,
}

/// Scorer for calculating similarity values
pub struct Scorer;

impl Scorer {
    /// Calculate the similarity value for a user against a course audience
    ///
    /// # Arguments
    /// * `profile` - Age, gender and degree of the user
    /// * `averages` - Mean median age, % male and % degree across offerings
    ///
    /// # Returns
    /// * Sum of squared differences. Lower means more similar, 0.0 is exact.
    pub fn similarity(profile: &UserProfile, averages: &DemographicAverages) -> f64 {
        Self::squared_difference(profile.age as f64, averages.median_age)
            + Self::squared_difference(profile.gender.percent_male(), averages.percent_male)
            + Self::squared_difference(profile.percent_degree(), averages.percent_degree)
    }

    fn squared_difference(target: f64, actual: f64) -> f64 {
        (target - actual).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Gender;

    #[test]
    fn test_exact_match_scores_zero() {
        let profile = UserProfile {
            age: 25,
            gender: Gender::Male,
            bachelor_or_higher: true,
        };
        let averages = DemographicAverages {
            median_age: 25.0,
            percent_male: 100.0,
            percent_degree: 100.0,
        };

        assert_eq!(Scorer::similarity(&profile, &averages), 0.0);
    }

    #[test]
    fn test_similarity_formula() {
        let profile = UserProfile {
            age: 30,
            gender: Gender::Female,
            bachelor_or_higher: false,
        };
        let averages = DemographicAverages {
            median_age: 27.0,
            percent_male: 60.0,
            percent_degree: 50.0,
        };

        // 3^2 + 60^2 + 50^2
        assert_eq!(Scorer::similarity(&profile, &averages), 9.0 + 3600.0 + 2500.0);
    }

    #[test]
    fn test_closer_audience_scores_lower() {
        let profile = UserProfile {
            age: 40,
            gender: Gender::Male,
            bachelor_or_higher: true,
        };
        let near = DemographicAverages {
            median_age: 38.0,
            percent_male: 90.0,
            percent_degree: 85.0,
        };
        let far = DemographicAverages {
            median_age: 22.0,
            percent_male: 40.0,
            percent_degree: 30.0,
        };

        assert!(Scorer::similarity(&profile, &near) < Scorer::similarity(&profile, &far));
    }
}
