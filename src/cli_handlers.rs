use crate::chart;
use crate::cli::ExportFormat;
use crate::core::GradeBook;
use crate::error::GradeError;
use crate::export;
use std::path::{Path, PathBuf};
use tabled::Table;
use tabled::settings::Style;

/// Handle the add command
pub fn handle_add(db: &Path, student: &str, subject: &str, grade: &str) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let record = book.add(student, subject, grade)?;

    println!("Added grade {record}");

    Ok(())
}

/// Handle the list command
pub fn handle_list(db: &Path, json: bool) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let records = book.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No grades recorded.");
        return Ok(());
    }

    println!("{}", Table::new(&records).with(Style::modern()));

    Ok(())
}

/// Handle the show command
pub fn handle_show(db: &Path, id: i64) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let record = book.get(id)?;

    println!("[#{}]", record.id);
    println!("Student: {}", record.student);
    println!("Subject: {}", record.subject);
    println!("Grade:   {}", record.grade);

    Ok(())
}

/// Handle the update command
pub fn handle_update(
    db: &Path,
    id: i64,
    student: Option<&str>,
    subject: Option<&str>,
    grade: Option<&str>,
) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let record = book.update(id, student, subject, grade)?;

    println!("Updated grade {record}");

    Ok(())
}

/// Handle the delete command
pub fn handle_delete(db: &Path, id: i64) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    book.delete(id)?;

    println!("Deleted grade #{id}");

    Ok(())
}

/// Handle the export command
pub fn handle_export(
    db: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let records = book.list()?;

    let path = match format {
        ExportFormat::Csv => {
            let path = output.unwrap_or_else(|| PathBuf::from(export::DEFAULT_CSV_PATH));
            export::export_csv(&records, &path)?;
            path
        }
        ExportFormat::Json => {
            let path = output.unwrap_or_else(|| PathBuf::from(export::DEFAULT_JSON_PATH));
            export::export_json(&records, &path)?;
            path
        }
    };

    println!("Exported {} grades to {}", records.len(), path.display());

    Ok(())
}

/// Handle the chart command
pub fn handle_chart(
    db: &Path,
    average: bool,
    svg: Option<&Path>,
    width: u16,
) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let records = book.list()?;

    let bars = if average {
        chart::bars_per_subject(&records)?
    } else {
        chart::bars_per_record(&records)?
    };

    print!("{}", chart::render_text(&bars, usize::from(width)));

    if let Some(path) = svg {
        chart::render_svg(&bars, path)?;
        println!("Chart written to {}", path.display());
    }

    Ok(())
}

/// Handle the stats command
pub fn handle_stats(db: &Path) -> Result<(), GradeError> {
    let book = GradeBook::open(db)?;
    let summary = book.summary()?;

    println!("Grades:  {}", summary.count);
    println!("Mean:    {:.2}", summary.mean);
    println!("Min:     {}", summary.min);
    println!("Max:     {}", summary.max);
    println!("By subject:");
    for subject in &summary.subjects {
        println!(
            "  - {}: {:.2} ({} grades)",
            subject.subject, subject.average, subject.count
        );
    }

    Ok(())
}
