//! One-shot dumps of the grade table to flat files.

use crate::error::Result;
use crate::models::GradeRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_CSV_PATH: &str = "grades.csv";
pub const DEFAULT_JSON_PATH: &str = "grades.json";

const CSV_HEADER: [&str; 4] = ["ID", "Student", "Subject", "Grade"];

/// Write `records` as CSV with a fixed header row
pub fn write_csv<W: Write>(records: &[GradeRecord], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for record in records {
        csv.write_record([
            record.id.to_string(),
            record.student.clone(),
            record.subject.clone(),
            record.grade.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `records` as a pretty-printed JSON array
pub fn write_json<W: Write>(records: &[GradeRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(records: &[GradeRecord], path: P) -> Result<()> {
    let file = BufWriter::new(File::create(path.as_ref())?);
    write_csv(records, file)?;
    info!(path = %path.as_ref().display(), rows = records.len(), "exported csv");
    Ok(())
}

pub fn export_json<P: AsRef<Path>>(records: &[GradeRecord], path: P) -> Result<()> {
    let file = BufWriter::new(File::create(path.as_ref())?);
    write_json(records, file)?;
    info!(path = %path.as_ref().display(), rows = records.len(), "exported json");
    Ok(())
}
