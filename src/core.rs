use crate::db::Database;
use crate::error::{GradeError, Result};
use crate::models::{GradeRecord, GradeSummary, GradeUpdate, SubjectAverage};
use std::path::Path;
use tracing::{info, warn};

/// Core business logic
pub struct GradeBook {
    db: Database,
}

impl GradeBook {
    /// Open the grade book stored at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Database::open(path)?;
        Ok(GradeBook { db })
    }

    pub fn in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(GradeBook { db })
    }

    /// Add a record from raw form input
    pub fn add(&self, student: &str, subject: &str, grade: &str) -> Result<GradeRecord> {
        let student = require_field("student", student)?;
        let subject = require_field("subject", subject)?;
        let grade = parse_grade(require_field("grade", grade)?)?;

        let record = self.db.insert_grade(student, subject, grade)?;
        info!(id = record.id, "added grade");
        Ok(record)
    }

    pub fn get(&self, id: i64) -> Result<GradeRecord> {
        self.db.get_grade(id)?.ok_or(GradeError::GradeNotFound(id))
    }

    pub fn list(&self) -> Result<Vec<GradeRecord>> {
        self.db.list_grades()
    }

    /// Change any of the three fields of an existing record
    pub fn update(
        &self,
        id: i64,
        student: Option<&str>,
        subject: Option<&str>,
        grade: Option<&str>,
    ) -> Result<GradeRecord> {
        let update = GradeUpdate {
            student: student
                .map(|s| require_field("student", s).map(str::to_string))
                .transpose()?,
            subject: subject
                .map(|s| require_field("subject", s).map(str::to_string))
                .transpose()?,
            grade: grade.map(parse_grade).transpose()?,
        };

        if update.is_empty() {
            return Err(GradeError::NothingToUpdate);
        }

        let record = self
            .db
            .update_grade(id, &update)?
            .ok_or(GradeError::GradeNotFound(id))?;
        info!(id, "updated grade");
        Ok(record)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        if !self.db.delete_grade(id)? {
            return Err(GradeError::GradeNotFound(id));
        }
        info!(id, "deleted grade");
        Ok(())
    }

    /// Aggregate the whole table. Fails with `NoGrades` when it is empty.
    pub fn summary(&self) -> Result<GradeSummary> {
        summarize(&self.list()?)
    }
}

/// Parse a grade the way the entry form does: surrounding whitespace is
/// ignored and the value must be a finite number.
pub fn parse_grade(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            warn!(input, "rejected grade");
            Err(GradeError::InvalidGrade(input.to_string()))
        }
    }
}

fn require_field<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        warn!(field = name, "empty field");
        return Err(GradeError::MissingField(name));
    }
    Ok(value)
}

pub fn summarize(records: &[GradeRecord]) -> Result<GradeSummary> {
    if records.is_empty() {
        return Err(GradeError::NoGrades);
    }

    // Running means stay finite for any finite grades
    let mut subjects: Vec<(String, usize, f64)> = Vec::new();
    for record in records {
        match subjects.iter_mut().find(|(s, _, _)| *s == record.subject) {
            Some((_, count, mean)) => {
                *count += 1;
                *mean += (record.grade - *mean) / *count as f64;
            }
            None => subjects.push((record.subject.clone(), 1, record.grade)),
        }
    }

    let mut mean = 0.0;
    for (n, record) in records.iter().enumerate() {
        mean += (record.grade - mean) / (n + 1) as f64;
    }
    let min = records.iter().map(|r| r.grade).fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(|r| r.grade)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(GradeSummary {
        count: records.len(),
        mean,
        min,
        max,
        subjects: subjects
            .into_iter()
            .map(|(subject, count, average)| SubjectAverage {
                subject,
                count,
                average,
            })
            .collect(),
    })
}
