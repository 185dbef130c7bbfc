//! Summary chart rendering.
//!
//! Five fixed views over the canonical table, written as PNGs into the plot
//! directory. Rendering is intentionally minimal (series geometry on a white
//! canvas, no text layer) so the crate needs no font stack.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, Rectangle};
use plotters::prelude::BitMapBackend;
use plotters::style::{Color, RGBColor, WHITE};
use tracing::info;

use medtab_model::{Table, columns};

use crate::summary::{category_counts, numeric_column, split_blood_pressure};

/// File names of the five summary charts, in render order.
pub const CHART_FILES: [&str; 5] = [
    "age_distribution.png",
    "temperature_distribution.png",
    "blood_pressure_distribution.png",
    "gender_distribution.png",
    "insurance_distribution.png",
];

const CHART_SIZE: (u32, u32) = (1000, 600);
const HISTOGRAM_BINS: usize = 20;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const TEAL: RGBColor = RGBColor(64, 160, 160);
const MAUVE: RGBColor = RGBColor(176, 124, 164);

fn chart_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!("chart rendering failed: {err}")
}

/// Renders all five charts into `plot_dir`, creating it if absent.
///
/// Returns the written file paths in [`CHART_FILES`] order.
pub fn render_all(table: &Table, plot_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(plot_dir)
        .with_context(|| format!("creating plot dir {}", plot_dir.display()))?;

    let ages = numeric_column(table, columns::AGE)?;
    let temperatures = numeric_column(table, columns::TEMPERATURE)?;
    let pressures = split_blood_pressure(table)?;
    let genders = category_counts(table, columns::GENDER)?;
    let insurances = category_counts(table, columns::INSURANCE)?;

    let paths: Vec<PathBuf> = CHART_FILES.iter().map(|name| plot_dir.join(name)).collect();
    histogram_png(&ages, &paths[0], SKY_BLUE)?;
    histogram_png(&temperatures, &paths[1], LIGHT_GREEN)?;
    scatter_png(&pressures, &paths[2], ORANGE)?;
    bar_png(&genders, &paths[3], TEAL)?;
    bar_png(&insurances, &paths[4], MAUVE)?;

    info!(dir = %plot_dir.display(), charts = paths.len(), "summary charts written");
    Ok(paths)
}

fn histogram_png(values: &[f64], path: &Path, color: RGBColor) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    if !values.is_empty() {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            min = min.min(*value);
            max = max.max(*value);
        }
        if min == max {
            min -= 0.5;
            max += 0.5;
        }
        let bin_width = (max - min) / HISTOGRAM_BINS as f64;
        let mut counts = vec![0u32; HISTOGRAM_BINS];
        for value in values {
            let bin = (((value - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
            counts[bin] += 1;
        }
        let tallest = counts.iter().copied().max().unwrap_or(1).max(1);

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(min..max, 0u32..tallest + 1)
            .map_err(chart_error)?;
        chart
            .draw_series(counts.iter().enumerate().map(|(bin, count)| {
                let x0 = min + bin as f64 * bin_width;
                Rectangle::new([(x0, 0u32), (x0 + bin_width, *count)], color.filled())
            }))
            .map_err(chart_error)?;
    }

    root.present().map_err(chart_error)?;
    Ok(())
}

fn scatter_png(points: &[(i64, i64)], path: &Path, color: RGBColor) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    if !points.is_empty() {
        let x_min = points.iter().map(|(s, _)| *s).min().unwrap_or(0) - 5;
        let x_max = points.iter().map(|(s, _)| *s).max().unwrap_or(1) + 5;
        let y_min = points.iter().map(|(_, d)| *d).min().unwrap_or(0) - 5;
        let y_max = points.iter().map(|(_, d)| *d).max().unwrap_or(1) + 5;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(chart_error)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|(systolic, diastolic)| {
                        Circle::new((*systolic, *diastolic), 4, color.filled())
                    }),
            )
            .map_err(chart_error)?;
    }

    root.present().map_err(chart_error)?;
    Ok(())
}

fn bar_png(counts: &[(String, usize)], path: &Path, color: RGBColor) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    if !counts.is_empty() {
        let tallest = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as u32;
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(0f64..counts.len() as f64, 0u32..tallest + 1)
            .map_err(chart_error)?;
        chart
            .draw_series(counts.iter().enumerate().map(|(idx, (_, count))| {
                let x0 = idx as f64 + 0.1;
                let x1 = idx as f64 + 0.9;
                Rectangle::new([(x0, 0u32), (x1, *count as u32)], color.filled())
            }))
            .map_err(chart_error)?;
    }

    root.present().map_err(chart_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtab_model::CellValue;

    #[test]
    fn render_all_writes_five_pngs() {
        let mut table = Table::with_schema();
        let mut row: Vec<CellValue> = (0..table.width()).map(|_| CellValue::Missing).collect();
        row[table.column_index(columns::AGE).unwrap()] = CellValue::Number(40.0);
        row[table.column_index(columns::TEMPERATURE).unwrap()] = CellValue::Number(37.2);
        row[table.column_index(columns::BLOOD_PRESSURE).unwrap()] =
            CellValue::Text("120/80".to_string());
        row[table.column_index(columns::GENDER).unwrap()] = CellValue::Text("Female".to_string());
        row[table.column_index(columns::INSURANCE).unwrap()] =
            CellValue::Text("Private".to_string());
        table.push_row(row);

        let dir = tempfile::tempdir().unwrap();
        let plot_dir = dir.path().join("plots");
        let paths = render_all(&table, &plot_dir).unwrap();

        assert_eq!(paths.len(), 5);
        for path in paths {
            let metadata = std::fs::metadata(&path).unwrap();
            assert!(metadata.len() > 0, "{} is empty", path.display());
        }
    }

    #[test]
    fn charts_tolerate_empty_tables() {
        let table = Table::with_schema();
        let dir = tempfile::tempdir().unwrap();
        let paths = render_all(&table, dir.path()).unwrap();
        assert_eq!(paths.len(), 5);
    }
}
