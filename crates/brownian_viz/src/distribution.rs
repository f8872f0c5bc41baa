//! Terminal-distribution figure: histograms with fitted densities.

use std::path::Path;

use brownian_core::analysis::{linspace, Histogram, LogNormalFit, NormalFit};
use brownian_core::PathMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info, warn};

use crate::{PlotError, PlotOptions};

/// One histogram panel and its optional density overlay.
struct Panel<'a> {
    title: &'a str,
    x_desc: &'a str,
    y_desc: &'a str,
    histogram: Histogram,
    density: Option<Vec<(f64, f64)>>,
}

/// Renders terminal histograms of X and S to an SVG file at `out`.
///
/// The left panel bins X(T) and overlays the maximum-likelihood Normal
/// density; the right panel bins S(T) and overlays the Log-Normal density.
/// Densities sit on a secondary y axis and are evaluated on
/// `options.density_points` points across the histogram range. When a fit
/// is impossible (e.g. zero volatility) the overlay is skipped.
///
/// # Errors
///
/// - `DimensionMismatch` if either matrix is not `n_paths × (n_steps + 1)`
/// - `EmptyInput` if `n_paths` is zero
/// - `Analysis` if the histogram cannot be built
/// - `Drawing` if the backend fails to render or write the file
pub fn plot_distribution(
    out: &Path,
    n_paths: usize,
    n_steps: usize,
    abm: &PathMatrix,
    gbm: &PathMatrix,
    options: &PlotOptions,
) -> Result<(), PlotError> {
    let expected = (n_paths, n_steps + 1);
    for (what, matrix) in [("abm", abm), ("gbm", gbm)] {
        if matrix.shape() != expected {
            return Err(PlotError::DimensionMismatch {
                what,
                expected,
                found: matrix.shape(),
            });
        }
    }
    if n_paths == 0 {
        return Err(PlotError::EmptyInput);
    }

    let terminal_x = abm.terminal();
    let terminal_s = gbm.terminal();

    let x_hist = Histogram::from_samples(&terminal_x, options.bins)?;
    let x_density = match NormalFit::fit(&terminal_x) {
        Ok(fit) => {
            debug!(mu = fit.mu, sigma = fit.sigma, "normal fit of X(T)");
            Some(density_curve(&x_hist, options.density_points, |x| fit.pdf(x)))
        }
        Err(err) => {
            warn!(error = %err, "skipping normal density overlay");
            None
        }
    };

    let s_hist = Histogram::from_samples(&terminal_s, options.bins)?;
    let s_density = match LogNormalFit::fit(&terminal_s) {
        Ok(fit) => {
            debug!(mu = fit.mu, sigma = fit.sigma, "log-normal fit of S(T)");
            Some(density_curve(&s_hist, options.density_points, |s| fit.pdf(s)))
        }
        Err(err) => {
            warn!(error = %err, "skipping log-normal density overlay");
            None
        }
    };

    let root = SVGBackend::new(out, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    draw_panel(
        &panels[0],
        Panel {
            title: "ABM",
            x_desc: "X(t)",
            y_desc: "Normal PDF",
            histogram: x_hist,
            density: x_density,
        },
    )?;
    draw_panel(
        &panels[1],
        Panel {
            title: "GBM",
            x_desc: "S(t)",
            y_desc: "Log-Normal PDF",
            histogram: s_hist,
            density: s_density,
        },
    )?;

    root.present()?;
    info!(path = %out.display(), "wrote distribution figure");
    Ok(())
}

fn density_curve<F>(hist: &Histogram, points: usize, pdf: F) -> Vec<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let (lo, hi) = hist.range();
    linspace(lo, hi, points)
        .into_iter()
        .map(|x| (x, pdf(x)))
        .collect()
}

fn upper_bound(peak: f64) -> f64 {
    if peak > 0.0 && peak.is_finite() {
        peak * 1.05
    } else {
        1.0
    }
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: Panel<'_>) -> Result<(), PlotError> {
    let (x_lo, x_hi) = panel.histogram.range();
    let hist_top = upper_bound(panel.histogram.max_density());
    let pdf_top = upper_bound(
        panel
            .density
            .iter()
            .flatten()
            .map(|&(_, p)| p)
            .fold(0.0, f64::max),
    );

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0..hist_top)?
        .set_secondary_coord(x_lo..x_hi, 0.0..pdf_top);

    chart
        .configure_mesh()
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .draw()?;
    chart.configure_secondary_axes().draw()?;

    chart.draw_series(panel.histogram.iter_bins().map(|(left, right, density)| {
        Rectangle::new([(left, 0.0), (right, density)], BLUE.mix(0.6).filled())
    }))?;

    if let Some(curve) = panel.density {
        chart.draw_secondary_series(LineSeries::new(curve, BLACK.stroke_width(2)))?;
    }

    Ok(())
}
