use crate::db::DEFAULT_DB_PATH;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grades")]
#[command(about = "Student grade book")]
#[command(version)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "GRADES_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a grade
    Add {
        /// Student name
        student: String,
        /// Subject name
        subject: String,
        /// Numeric grade
        #[arg(allow_hyphen_values = true)]
        grade: String,
    },

    /// List all recorded grades
    List {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one record
    Show {
        /// Record ID
        id: i64,
    },

    /// Edit an existing record
    Update {
        /// Record ID
        id: i64,
        /// New student name
        #[arg(long)]
        student: Option<String>,
        /// New subject name
        #[arg(long)]
        subject: Option<String>,
        /// New grade
        #[arg(long, allow_hyphen_values = true)]
        grade: Option<String>,
    },

    /// Delete a record
    Delete {
        /// Record ID
        id: i64,
    },

    /// Export every record to a file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output path (defaults to grades.csv / grades.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Draw a bar chart of grades by subject
    Chart {
        /// One bar per subject with its average instead of one bar per record
        #[arg(long)]
        average: bool,
        /// Also write the chart as an SVG image
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Width of the longest bar in terminal cells
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..=1000))]
        width: u16,
    },

    /// Show count, mean, min, max and per-subject averages
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
