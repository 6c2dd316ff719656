// Builder for course fixtures used across the unit tests

use crate::dataset::Course;
use chrono::NaiveDate;

pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            course: Course {
                institution: "HarvardX".to_string(),
                number: format!("{}-num", title),
                launch_date: NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
                title: title.to_string(),
                instructors: "Jane Doe".to_string(),
                subject: "Science".to_string(),
                year: 1,
                honor_code: true,
                participants: 100,
                audited: 10,
                certified: 5,
                percent_audited: 10.0,
                percent_certified: 5.0,
                percent_certified_50: 50.0,
                percent_video: 80.0,
                percent_forum: 5.0,
                grade_higher_zero: 20.0,
                total_hours: 10.0,
                median_hours_certification: 30.0,
                median_age: 28.0,
                percent_male: 60.0,
                percent_female: 40.0,
                percent_degree: 70.0,
            },
        }
    }

    pub fn institution(mut self, institution: &str) -> Self {
        self.course.institution = institution.to_string();
        self
    }

    pub fn number(mut self, number: &str) -> Self {
        self.course.number = number.to_string();
        self
    }

    pub fn launched(mut self, year: i32, month: u32, day: u32) -> Self {
        self.course.launch_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn instructors(mut self, instructors: &str) -> Self {
        self.course.instructors = instructors.to_string();
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.course.subject = subject.to_string();
        self
    }

    pub fn participants(mut self, participants: u32) -> Self {
        self.course.participants = participants;
        self
    }

    pub fn audited(mut self, audited: u32) -> Self {
        self.course.audited = audited;
        self
    }

    pub fn total_hours(mut self, hours: f64) -> Self {
        self.course.total_hours = hours;
        self
    }

    pub fn demographics(mut self, median_age: f64, percent_male: f64, percent_degree: f64) -> Self {
        self.course.median_age = median_age;
        self.course.percent_male = percent_male;
        self.course.percent_female = 100.0 - percent_male;
        self.course.percent_degree = percent_degree;
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}
