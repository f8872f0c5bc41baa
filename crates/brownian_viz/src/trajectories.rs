//! Trajectory figure: X(t) and S(t) against time.

use std::path::Path;

use brownian_core::PathMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::{padded_range, PlotError, PlotOptions};

/// Renders ABM and GBM trajectories to an SVG file at `out`.
///
/// Left panel "ABM" shows X(t), right panel "GBM" shows S(t); each row of
/// the matrices is drawn as one line.
///
/// # Errors
///
/// - `DimensionMismatch` if `abm` and `gbm` differ in shape or their column
///   count differs from `time.len()`
/// - `EmptyInput` if there are no paths
/// - `Drawing` if the backend fails to render or write the file
pub fn plot_paths(
    out: &Path,
    time: &[f64],
    abm: &PathMatrix,
    gbm: &PathMatrix,
    options: &PlotOptions,
) -> Result<(), PlotError> {
    let expected = (abm.n_rows(), time.len());
    if abm.shape() != expected {
        return Err(PlotError::DimensionMismatch {
            what: "abm",
            expected,
            found: abm.shape(),
        });
    }
    if gbm.shape() != expected {
        return Err(PlotError::DimensionMismatch {
            what: "gbm",
            expected,
            found: gbm.shape(),
        });
    }
    if abm.n_rows() == 0 || time.is_empty() {
        return Err(PlotError::EmptyInput);
    }

    debug!(paths = abm.n_rows(), points = time.len(), "drawing trajectories");

    let root = SVGBackend::new(out, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    draw_panel(&panels[0], time, abm, "ABM", "X(t)")?;
    draw_panel(&panels[1], time, gbm, "GBM", "S(t)")?;

    root.present()?;
    info!(path = %out.display(), "wrote trajectory figure");
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    time: &[f64],
    values: &PathMatrix,
    title: &str,
    y_desc: &str,
) -> Result<(), PlotError> {
    let (lo, hi) = values.min_max().ok_or(PlotError::EmptyInput)?;
    let (y_lo, y_hi) = padded_range(lo, hi);
    let t_start = time[0];
    let t_end = time[time.len() - 1].max(t_start + f64::EPSILON);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t_start..t_end, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("time")
        .y_desc(y_desc)
        .draw()?;

    for (idx, row) in values.rows().enumerate() {
        chart.draw_series(LineSeries::new(
            time.iter().copied().zip(row.iter().copied()),
            Palette99::pick(idx).stroke_width(1),
        ))?;
    }

    Ok(())
}
