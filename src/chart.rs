//! Bar charts of grades keyed by subject.
//!
//! Charts are transient: the text form goes to stdout and the SVG form is
//! written only when a path is given.

use crate::core::summarize;
use crate::error::{GradeError, Result};
use crate::models::GradeRecord;
use plotters::prelude::*;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

pub const CHART_TITLE: &str = "Grades by Subject";

const BAR_GLYPH: char = '█';
const SVG_SIZE: (u32, u32) = (800, 400);

/// One labeled bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// One bar per record, in table order
pub fn bars_per_record(records: &[GradeRecord]) -> Result<Vec<Bar>> {
    if records.is_empty() {
        return Err(GradeError::NoGrades);
    }
    Ok(records
        .iter()
        .map(|r| Bar {
            label: r.subject.clone(),
            value: r.grade,
        })
        .collect())
}

/// One bar per subject holding its average grade
pub fn bars_per_subject(records: &[GradeRecord]) -> Result<Vec<Bar>> {
    let summary = summarize(records)?;
    Ok(summary
        .subjects
        .into_iter()
        .map(|s| Bar {
            label: s.subject,
            value: s.average,
        })
        .collect())
}

/// Horizontal bars scaled so the largest magnitude spans `width` cells
pub fn render_text(bars: &[Bar], width: usize) -> String {
    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    let peak = bars.iter().map(|b| b.value.abs()).fold(0.0, f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    for bar in bars {
        let len = if peak > 0.0 {
            (bar.value.abs() / peak * width as f64).round() as usize
        } else {
            0
        };
        let pad = label_width - bar.label.chars().count();
        let _ = writeln!(
            out,
            "{}{} | {} {}",
            bar.label,
            " ".repeat(pad),
            BAR_GLYPH.to_string().repeat(len),
            bar.value
        );
    }
    out
}

/// Draw a vertical bar chart into an SVG file
pub fn render_svg<P: AsRef<Path>>(bars: &[Bar], path: P) -> Result<()> {
    if bars.is_empty() {
        return Err(GradeError::NoGrades);
    }

    let top = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let bottom = bars.iter().map(|b| b.value).fold(0.0, f64::min);
    let headroom = ((top - bottom) * 0.1).max(1.0);
    let floor = if bottom < 0.0 { bottom - headroom } else { 0.0 };
    let ceiling = top + headroom;
    if !floor.is_finite() || !ceiling.is_finite() {
        return Err(GradeError::Chart(format!(
            "grade range {bottom}..{top} is too wide to plot"
        )));
    }

    let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    let root = SVGBackend::new(path.as_ref(), SVG_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(48)
        .build_cartesian_2d((0..bars.len()).into_segmented(), floor..ceiling)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Subject")
        .y_desc("Grade")
        .x_labels(bars.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|l| l.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(8)
                .data(bars.iter().enumerate().map(|(i, b)| (i, b.value))),
        )
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    info!(path = %path.as_ref().display(), bars = bars.len(), "rendered chart");
    Ok(())
}

fn draw_error<E: std::fmt::Display>(e: E) -> GradeError {
    GradeError::Chart(e.to_string())
}
