use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::domain::cost::CostSummary;

#[derive(Error, Debug)]
pub enum CostPlotError {
    #[error("cost summary is empty; answer the visa type question first")]
    EmptySummary,
    #[error("failed to render cost plot: {0}")]
    Plot(String),
}

const COMPARISON_COLORS: [RGBColor; 3] = [
    RGBColor(0x1a, 0x1f, 0x4e),
    RGBColor(0x3b, 0x82, 0xf6),
    RGBColor(0x94, 0xa3, 0xb8),
];

/// Writes the cost breakdown (left) and the market comparison (right) as
/// bar charts into one PNG.
pub fn write_cost_png(
    output_path: &str,
    summary: &CostSummary,
    size: (u32, u32),
) -> Result<(), CostPlotError> {
    if summary.is_empty() {
        return Err(CostPlotError::EmptySummary);
    }

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;
    let (left, right) = root.split_horizontally(breakdown_width(size.0));

    let breakdown: Vec<(String, f64, RGBColor)> = summary
        .breakdown
        .iter()
        .map(|item| {
            let (r, g, b) = item.category.color();
            (item.name.clone(), item.value, RGBColor(r, g, b))
        })
        .collect();
    draw_bars(
        &left,
        &format!("Cost Breakdown (total ${:.0})", summary.total),
        &breakdown,
    )?;

    let comparison: Vec<(String, f64, RGBColor)> = summary
        .market_comparison
        .iter()
        .zip(COMPARISON_COLORS.iter())
        .map(|(entry, color)| (entry.name.clone(), entry.amount, *color))
        .collect();
    draw_bars(&right, "Market Comparison", &comparison)?;

    root.present()
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;
    info!(output_path, items = summary.breakdown.len(), "cost plot written");
    Ok(())
}

/// Three fifths of the image width, for the breakdown panel.
fn breakdown_width(width: u32) -> i32 {
    let split = u64::from(width) * 3 / 5;
    i32::try_from(split).unwrap_or(i32::MAX)
}

fn draw_bars(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    bars: &[(String, f64, RGBColor)],
) -> Result<(), CostPlotError> {
    let max_value = bars.iter().map(|(_, value, _)| *value).fold(0.0_f64, f64::max);
    let min_value = bars.iter().map(|(_, value, _)| *value).fold(0.0_f64, f64::min);
    let max_y = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let min_y = min_value * 1.1;
    let max_x = bars.len().max(1) as i32;

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(caption, ("sans-serif", 24))
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .label_style(("sans-serif", 14))
        .x_labels(bars.len().max(1))
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            bars.get(*index as usize)
                .map(|(name, _, _)| name.clone())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format!("${:.1}k", value / 1000.0))
        .draw()
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(idx, (_, value, color))| {
            let x = idx as i32;
            Rectangle::new([(x, 0.0), (x + 1, *value)], color.filled())
        }))
        .map_err(|e| CostPlotError::Plot(e.to_string()))?;

    Ok(())
}
