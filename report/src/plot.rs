use crate::errors::{ReportError, Result};
use doegen_sampling::SampleTable;
use linfa::Float;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Marker color families for the scatter matrix, one per generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Cold blue markers
    Winter,
    /// Red-orange markers
    Autumn,
    /// Neutral gray markers
    Gray,
    /// Green markers
    Summer,
}

impl Palette {
    fn color(self) -> RGBColor {
        match self {
            Palette::Winter => RGBColor(31, 119, 180),
            Palette::Autumn => RGBColor(214, 96, 39),
            Palette::Gray => RGBColor(110, 110, 110),
            Palette::Summer => RGBColor(44, 160, 44),
        }
    }
}

const CELL_SIZE: u32 = 300;
const TITLE_HEIGHT: u32 = 40;
const HIST_BINS: usize = 10;

/// Renders the pairwise scatter matrix of `table` as a PNG file.
///
/// The grid is `n x n` for `n` factors: cell `(i, j)` scatters factor `j`
/// (x axis) against factor `i` (y axis), and diagonal cells show the marginal
/// histogram of their factor. Axis ranges follow the data, so excursions
/// outside the declared bounds (normal designs) stay visible.
pub fn scatter_matrix<F: Float>(
    table: &SampleTable<F>,
    path: impl AsRef<Path>,
    palette: Palette,
    title: &str,
) -> Result<()> {
    let n = table.num_factors();
    if n == 0 || table.num_samples() == 0 {
        return Err(ReportError::Plot("nothing to plot: empty table".to_string()));
    }

    let columns: Vec<Vec<f64>> = (0..n)
        .map(|j| {
            table
                .values()
                .column(j)
                .iter()
                .map(|v| v.to_f64().unwrap_or(f64::NAN))
                .collect()
        })
        .collect();
    let ranges: Vec<(f64, f64)> = columns.iter().map(|c| axis_range(c)).collect();
    let color = palette.color();

    let side = CELL_SIZE * n as u32;
    let root = BitMapBackend::new(path.as_ref(), (side, side + TITLE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let root = root
        .titled(title, ("sans-serif", 24))
        .map_err(plot_err)?;

    let panels = root.split_evenly((n, n));
    for i in 0..n {
        for j in 0..n {
            let panel = &panels[i * n + j];
            let names = table.column_names();
            if i == j {
                draw_histogram(panel, &columns[i], ranges[i], color, &names[i])?;
            } else {
                draw_scatter(
                    panel,
                    &columns[j],
                    &columns[i],
                    ranges[j],
                    ranges[i],
                    color,
                    &names[j],
                    &names[i],
                )?;
            }
        }
    }
    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Plot(e.to_string())
}

/// Data range with a small margin; degenerate ranges are widened so that
/// every chart keeps a non-empty span.
fn axis_range(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0., 1.);
    }
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

#[allow(clippy::too_many_arguments)]
fn draw_scatter(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    xs: &[f64],
    ys: &[f64],
    x_range: (f64, f64),
    y_range: (f64, f64),
    color: RGBColor,
    x_name: &str,
    y_name: &str,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_labels(4)
        .y_labels(4)
        .x_desc(x_name)
        .y_desc(y_name)
        .label_style(("sans-serif", 11))
        .draw()
        .map_err(plot_err)?;
    chart
        .draw_series(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Circle::new((x, y), 2, color.filled())),
        )
        .map_err(plot_err)?;
    Ok(())
}

fn draw_histogram(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    values: &[f64],
    range: (f64, f64),
    color: RGBColor,
    name: &str,
) -> Result<()> {
    let (lo, hi) = range;
    let bin_width = (hi - lo) / HIST_BINS as f64;
    let mut counts = [0usize; HIST_BINS];
    for &v in values {
        let bin = (((v - lo) / bin_width) as usize).min(HIST_BINS - 1);
        counts[bin] += 1;
    }
    let y_max = counts.iter().max().copied().unwrap_or(1).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(40)
        .build_cartesian_2d(lo..hi, 0.0..y_max)
        .map_err(plot_err)?;
    chart
        .configure_mesh()
        .x_labels(4)
        .y_labels(4)
        .x_desc(name)
        .label_style(("sans-serif", 11))
        .draw()
        .map_err(plot_err)?;
    chart
        .draw_series(counts.iter().enumerate().map(|(bin, &count)| {
            let x0 = lo + bin as f64 * bin_width;
            Rectangle::new(
                [(x0, 0.), (x0 + bin_width, count as f64)],
                color.mix(0.6).filled(),
            )
        }))
        .map_err(plot_err)?;
    Ok(())
}
