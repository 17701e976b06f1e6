pub mod chart;
pub mod cli;
pub mod cli_handlers;
pub mod core;
pub mod db;
pub mod error;
pub mod export;
pub mod models;

pub use error::{GradeError, Result};
pub use models::*;
