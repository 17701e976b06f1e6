use thiserror::Error;

/// All possible errors in the grade book
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("Grade #{0} not found")]
    GradeNotFound(i64),

    #[error("Fill in all fields: {0} is empty")]
    MissingField(&'static str),

    #[error("Invalid grade: {0:?}")]
    InvalidGrade(String),

    #[error("Nothing to update. Pass at least one of --student, --subject or --grade")]
    NothingToUpdate,

    #[error("No grades recorded")]
    NoGrades,

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GradeError>;
