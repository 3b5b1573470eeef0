use chrono::{Datelike, Months, NaiveDate};
use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::domain::timeline::Timeline;

#[derive(Error, Debug)]
pub enum TimelinePlotError {
    #[error("timeline has no phases; answer the visa type question first")]
    EmptyTimeline,
    #[error("failed to render timeline plot: {0}")]
    Plot(String),
}

/// Draws the phases as horizontal bars on a monthly axis. A red marker
/// shows `today` when it falls inside the charted range.
pub fn write_timeline_png(
    output_path: &str,
    timeline: &Timeline,
    today: NaiveDate,
    size: (u32, u32),
) -> Result<(), TimelinePlotError> {
    let Some(anchor) = timeline.start_date() else {
        return Err(TimelinePlotError::EmptyTimeline);
    };
    render_timeline_png(output_path, timeline, anchor, today, size)?;
    info!(output_path, phases = timeline.phases.len(), "timeline plot written");
    Ok(())
}

fn render_timeline_png(
    output_path: &str,
    timeline: &Timeline,
    anchor: NaiveDate,
    today: NaiveDate,
    size: (u32, u32),
) -> Result<(), TimelinePlotError> {
    let config = timeline.scenario.config();
    let total_months = timeline.total_months().max(1) as f64;
    let rows = timeline.phases.len() as f64;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    let caption = format!(
        "Process Timeline - {} ({} months)",
        config.label,
        timeline.total_months()
    );
    let (r, g, b) = config.color;
    let caption_style = ("sans-serif", 28).into_font().color(&RGBColor(r, g, b));
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, caption_style)
        .x_label_area_size(45)
        .y_label_area_size(10)
        .build_cartesian_2d(0.0..total_months, 0.0..rows)
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    let label_count = (total_months as usize + 1).min(13);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("Month")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(label_count)
        .x_label_formatter(&|offset| month_label(anchor, *offset))
        .draw()
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    let (r, g, b) = config.bar_color;
    let bar_style = ShapeStyle::from(&RGBColor(r, g, b)).filled();
    let mut offset = 0.0_f64;
    let mut bars = Vec::with_capacity(timeline.phases.len());
    for (index, phase) in timeline.phases.iter().enumerate() {
        let row_top = rows - index as f64;
        let end = offset + f64::from(phase.duration_months);
        bars.push((offset, end, row_top - 0.75, row_top - 0.25, phase));
        offset = end;
    }

    chart
        .draw_series(
            bars.iter()
                .map(|(x0, x1, y0, y1, _)| Rectangle::new([(*x0, *y0), (*x1, *y1)], bar_style)),
        )
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    let label_style = ("sans-serif", 16).into_font().color(&BLACK);
    chart
        .draw_series(bars.iter().map(|(x0, _, _, y1, phase)| {
            Text::new(
                format!("{} ({} mo)", phase.name, phase.duration_months),
                (*x0, *y1 + 0.2),
                label_style.clone(),
            )
        }))
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    if let Some(today_offset) = months_since(anchor, today).filter(|o| *o <= total_months) {
        chart
            .draw_series(LineSeries::new(
                vec![(today_offset, 0.0), (today_offset, rows)],
                ShapeStyle::from(&RED).stroke_width(2),
            ))
            .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;
    }

    root.present()
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;
    Ok(())
}

fn month_label(anchor: NaiveDate, offset: f64) -> String {
    if offset < 0.0 {
        return String::new();
    }
    anchor
        .checked_add_months(Months::new(offset.round() as u32))
        .map(|date| date.format("%b %y").to_string())
        .unwrap_or_default()
}

/// Fractional months from `anchor` to `date`, `None` when `date` is earlier.
fn months_since(anchor: NaiveDate, date: NaiveDate) -> Option<f64> {
    if date < anchor {
        return None;
    }
    let whole = (date.year() - anchor.year()) * 12 + date.month() as i32 - anchor.month() as i32;
    let month_start = date.with_day(1)?;
    let next_month = month_start.checked_add_months(Months::new(1))?;
    let days_in_month = (next_month - month_start).num_days() as f64;
    let fraction = f64::from(date.day() - 1) / days_in_month;
    Some(f64::from(whole) + fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::Answers;
    use crate::domain::scenario::ScenarioId;
    use crate::services::timeline_allocator::compute_timeline;
    use crate::test_support::{build_full_answers, on_date};
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_timeline_png_creates_file() {
        let timeline = compute_timeline(
            &build_full_answers(),
            ScenarioId::Intermediate,
            on_date(2026, 3, 10),
        );
        let output_file = assert_fs::NamedTempFile::new("timeline.png").unwrap();

        write_timeline_png(
            output_file.path().to_str().unwrap(),
            &timeline,
            on_date(2026, 3, 10),
            (800, 400),
        )
        .unwrap();

        output_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn write_timeline_png_rejects_empty_timeline() {
        let timeline = compute_timeline(
            &Answers::new(),
            ScenarioId::Intermediate,
            on_date(2026, 3, 10),
        );
        let output_file = assert_fs::NamedTempFile::new("empty.png").unwrap();

        let error = write_timeline_png(
            output_file.path().to_str().unwrap(),
            &timeline,
            on_date(2026, 3, 10),
            (800, 400),
        )
        .expect_err("expected empty timeline error");
        assert!(matches!(error, TimelinePlotError::EmptyTimeline));
    }

    #[test]
    fn months_since_counts_partial_months() {
        let anchor = on_date(2026, 1, 1);
        assert_eq!(months_since(anchor, on_date(2026, 1, 1)), Some(0.0));
        assert_eq!(months_since(anchor, on_date(2026, 3, 1)), Some(2.0));
        assert_eq!(months_since(anchor, on_date(2026, 2, 15)), Some(1.5));
        assert_eq!(months_since(anchor, on_date(2025, 12, 31)), None);
    }

    #[test]
    fn month_label_formats_offset_from_anchor() {
        assert_eq!(month_label(on_date(2026, 11, 1), 2.0), "Jan 27");
        assert_eq!(month_label(on_date(2026, 11, 1), -1.0), "");
    }
}
