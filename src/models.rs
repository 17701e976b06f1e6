use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// One (student, subject, grade) row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct GradeRecord {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Student")]
    pub student: String,
    #[tabled(rename = "Subject")]
    pub subject: String,
    #[tabled(rename = "Grade")]
    pub grade: f64,
}

impl fmt::Display for GradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} / {}: {}",
            self.id, self.student, self.subject, self.grade
        )
    }
}

/// Partial update of a record; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeUpdate {
    pub student: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<f64>,
}

impl GradeUpdate {
    pub fn is_empty(&self) -> bool {
        self.student.is_none() && self.subject.is_none() && self.grade.is_none()
    }
}

/// Average grade of one subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAverage {
    pub subject: String,
    pub count: usize,
    pub average: f64,
}

/// Aggregate figures over the whole table
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// In order of first appearance
    pub subjects: Vec<SubjectAverage>,
}
