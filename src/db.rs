use crate::error::Result;
use crate::models::{GradeRecord, GradeUpdate};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

/// Default database file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "grades.db";

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = %path.as_ref().display(), "opening database");
        let conn = Connection::open(path)?;
        let db = Database { conn };
        db.init()?;
        Ok(db)
    }

    /// Open a throwaway database held in memory
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS grades (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                student TEXT NOT NULL,
                subject TEXT NOT NULL,
                grade REAL NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn insert_grade(&self, student: &str, subject: &str, grade: f64) -> Result<GradeRecord> {
        self.conn.execute(
            "INSERT INTO grades (student, subject, grade) VALUES (?1, ?2, ?3)",
            (student, subject, grade),
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted grade");
        Ok(GradeRecord {
            id,
            student: student.to_string(),
            subject: subject.to_string(),
            grade,
        })
    }

    pub fn get_grade(&self, id: i64) -> Result<Option<GradeRecord>> {
        self.conn
            .query_row(
                "SELECT id, student, subject, grade FROM grades WHERE id = ?1",
                [id],
                grade_from_row,
            )
            .optional()
            .map_err(|e| e.into())
    }

    pub fn list_grades(&self) -> Result<Vec<GradeRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, student, subject, grade FROM grades ORDER BY id")?;

        let grades = stmt.query_map([], grade_from_row)?;
        grades
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }

    /// Apply the set fields of `update` in one statement. Returns `None` if
    /// no row has that id.
    pub fn update_grade(&self, id: i64, update: &GradeUpdate) -> Result<Option<GradeRecord>> {
        let rows = self.conn.execute(
            "UPDATE grades SET
                student = COALESCE(?1, student),
                subject = COALESCE(?2, subject),
                grade = COALESCE(?3, grade)
             WHERE id = ?4",
            (
                update.student.as_deref(),
                update.subject.as_deref(),
                update.grade,
                id,
            ),
        )?;
        if rows == 0 {
            return Ok(None);
        }

        debug!(id, "updated grade");
        self.get_grade(id)
    }

    /// Returns whether a row was removed
    pub fn delete_grade(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM grades WHERE id = ?1", [id])?;
        debug!(id, rows, "deleted grade");
        Ok(rows > 0)
    }
}

fn grade_from_row(row: &Row) -> std::result::Result<GradeRecord, rusqlite::Error> {
    Ok(GradeRecord {
        id: row.get(0)?,
        student: row.get(1)?,
        subject: row.get(2)?,
        grade: row.get(3)?,
    })
}
