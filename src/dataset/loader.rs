// Reads the course dataset into typed records
//
// First line is a header and gets skipped. Every other line must have exactly
// FIELD_COUNT comma-separated fields; commas inside a quoted segment belong to
// the field. Any bad row fails the whole load, nothing gets defaulted.
//
// The csv reader removes a field's enclosing quotes and unescapes doubled
// ones. That is the only quote stripping title, instructors and subject get.

use crate::dataset::models::Course;
use crate::error::{AnalyzerError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub const FIELD_COUNT: usize = 23;

// Dataset files use US dates. ISO shows up in hand-edited copies.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "institution",
    "course number",
    "launch date",
    "title",
    "instructors",
    "subject",
    "year",
    "honor code",
    "participants",
    "audited",
    "certified",
    "% audited",
    "% certified",
    "% certified of > 50%",
    "% played video",
    "% posted in forum",
    "% grade higher than zero",
    "total course hours",
    "median hours for certification",
    "median age",
    "% male",
    "% female",
    "% bachelor's degree or higher",
];

/// Load every course from a dataset file
pub fn load_courses<P: AsRef<Path>>(path: P) -> Result<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let courses = read_courses(file)?;

    info!(
        path = %path.display(),
        records = courses.len(),
        "loaded course dataset"
    );

    Ok(courses)
}

/// Parse courses from any reader holding the dataset text
pub fn read_courses<R: Read>(reader: R) -> Result<Vec<Course>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut courses = Vec::new();
    for row in reader.records() {
        let row = row?;
        courses.push(parse_row(&row)?);
    }

    debug!(records = courses.len(), "parsed course rows");
    Ok(courses)
}

fn parse_row(row: &StringRecord) -> Result<Course> {
    // Header is line 1, so the first data row is line 2
    let line = row.position().map(|p| p.line()).unwrap_or(0);

    if row.len() != FIELD_COUNT {
        return Err(AnalyzerError::MalformedRow {
            line,
            expected: FIELD_COUNT,
            found: row.len(),
        });
    }

    let field = |i: usize| FieldRef::new(row, line, i);

    Ok(Course {
        institution: row[0].to_string(),
        number: row[1].to_string(),
        launch_date: field(2).date()?,
        title: row[3].to_string(),
        instructors: row[4].to_string(),
        subject: row[5].to_string(),
        year: field(6).number()?,
        honor_code: field(7).flag()?,
        participants: field(8).number()?,
        audited: field(9).number()?,
        certified: field(10).number()?,
        percent_audited: field(11).float()?,
        percent_certified: field(12).float()?,
        percent_certified_50: field(13).float()?,
        percent_video: field(14).float()?,
        percent_forum: field(15).float()?,
        grade_higher_zero: field(16).float()?,
        total_hours: field(17).float()?,
        median_hours_certification: field(18).float()?,
        median_age: field(19).float()?,
        percent_male: field(20).float()?,
        percent_female: field(21).float()?,
        percent_degree: field(22).float()?,
    })
}

/// One raw field plus what's needed to report it
struct FieldRef<'a> {
    line: u64,
    name: &'static str,
    raw: &'a str,
}

impl<'a> FieldRef<'a> {
    fn new(row: &'a StringRecord, line: u64, index: usize) -> Self {
        Self {
            line,
            name: FIELD_NAMES[index],
            raw: &row[index],
        }
    }

    fn error(&self, reason: impl ToString) -> AnalyzerError {
        AnalyzerError::invalid_field(self.line, self.name, self.raw, reason)
    }

    fn number<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.raw.trim().parse::<T>().map_err(|e| self.error(e))
    }

    fn float(&self) -> Result<f64> {
        let value: f64 = self.number()?;

        // NaN would poison every sort comparator downstream
        if !value.is_finite() {
            return Err(self.error("value must be finite"));
        }

        Ok(value)
    }

    fn flag(&self) -> Result<bool> {
        match self.number::<i64>()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(self.error("expected 0 or 1")),
        }
    }

    fn date(&self) -> Result<NaiveDate> {
        let raw = self.raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .ok_or_else(|| self.error("expected MM/DD/YYYY"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Institution,Course Number,Launch Date,Course Title,Instructors,Course Subject,Year,Honor Code Certificates,Participants (Course Content Accessed),Audited (> 50% Course Content Accessed),Certified,% Audited,% Certified,% Certified of > 50% Course Content Accessed,% Played Video,% Posted in Forum,% Grade Higher Than Zero,Total Course Hours (Thousands),Median Hours for Certification,Median Age,% Male,% Female,% Bachelor's Degree or Higher";

    const ROW_CIRCUITS: &str = "MITx,6.002x,09/05/2012,Circuits and Electronics,Khurram Afridi,\"Science, Technology, Engineering, and Mathematics\",1,1,36105,5431,3003,15.04,8.32,55.29,83.2,8.17,28.97,418.94,64.45,26,88.28,11.72,60.68";

    const ROW_JUSTICE: &str = "HarvardX,ER22x,03/02/2013,Justice,\"Michael Sandel, Jane Doe\",\"Humanities, History, Design, Religion, and Education\",1,0,79750,7286,3600,9.14,4.51,47.31,0,15.25,6.95,58.33,4.83,31,58.5,41.5,76.23";

    fn write_dataset(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_load_courses() {
        let file = write_dataset(&[ROW_CIRCUITS, ROW_JUSTICE]);

        let courses = load_courses(file.path()).unwrap();
        assert_eq!(courses.len(), 2);

        let circuits = &courses[0];
        assert_eq!(circuits.institution, "MITx");
        assert_eq!(circuits.number, "6.002x");
        assert_eq!(
            circuits.launch_date,
            NaiveDate::from_ymd_opt(2012, 9, 5).unwrap()
        );
        assert_eq!(
            circuits.subject,
            "Science, Technology, Engineering, and Mathematics"
        );
        assert!(circuits.honor_code);
        assert_eq!(circuits.participants, 36105);
        assert_eq!(circuits.total_hours, 418.94);
        assert_eq!(circuits.percent_degree, 60.68);

        let justice = &courses[1];
        assert_eq!(justice.instructors, "Michael Sandel, Jane Doe");
        assert_eq!(justice.instructor_names().len(), 2);
        assert!(!justice.honor_code);
    }

    #[test]
    fn test_quotes_stripped_once() {
        let row = ROW_CIRCUITS.replace(",Circuits and Electronics,", ",\"\"\"Hello\"\"\",");
        let courses = read_courses(format!("{}\n{}\n", HEADER, row).as_bytes()).unwrap();

        assert_eq!(courses[0].title, "\"Hello\"");
        assert_eq!(courses[0].instructors, "Khurram Afridi");
    }

    #[test]
    fn test_header_only() {
        let file = write_dataset(&[]);
        let courses = load_courses(file.path()).unwrap();
        assert!(courses.is_empty());
    }

    #[test]
    fn test_wrong_field_count() {
        let file = write_dataset(&[ROW_CIRCUITS, "MITx,6.00x,09/05/2012"]);

        match load_courses(file.path()) {
            Err(AnalyzerError::MalformedRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, FIELD_COUNT);
                assert_eq!(found, 3);
            }
            other => panic!("Expected MalformedRow error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_number() {
        let row = ROW_CIRCUITS.replace(",36105,", ",lots,");
        let file = write_dataset(&[&row]);

        match load_courses(file.path()) {
            Err(AnalyzerError::InvalidField { field, value, .. }) => {
                assert_eq!(field, "participants");
                assert_eq!(value, "lots");
            }
            other => panic!("Expected InvalidField error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_date() {
        let row = ROW_CIRCUITS.replace("09/05/2012", "sometime");
        let result = read_courses(format!("{}\n{}\n", HEADER, row).as_bytes());
        assert!(matches!(
            result,
            Err(AnalyzerError::InvalidField {
                field: "launch date",
                ..
            })
        ));
    }

    #[test]
    fn test_iso_date_accepted() {
        let row = ROW_CIRCUITS.replace("09/05/2012", "2012-09-05");
        let courses = read_courses(format!("{}\n{}\n", HEADER, row).as_bytes()).unwrap();
        assert_eq!(
            courses[0].launch_date,
            NaiveDate::from_ymd_opt(2012, 9, 5).unwrap()
        );
    }

    #[test]
    fn test_non_finite_float_rejected() {
        let row = ROW_CIRCUITS.replace(",418.94,", ",NaN,");
        let result = read_courses(format!("{}\n{}\n", HEADER, row).as_bytes());
        assert!(matches!(
            result,
            Err(AnalyzerError::InvalidField {
                field: "total course hours",
                ..
            })
        ));
    }

    #[test]
    fn test_honor_code_must_be_flag() {
        let row = ROW_CIRCUITS.replace(",1,1,36105,", ",1,7,36105,");
        let result = read_courses(format!("{}\n{}\n", HEADER, row).as_bytes());
        assert!(matches!(
            result,
            Err(AnalyzerError::InvalidField {
                field: "honor code",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_courses("/definitely/not/here.csv");
        assert!(matches!(result, Err(AnalyzerError::Io(_))));
    }
}
