//! Scatter + best-fit rendering of the precession series.

use camino::Utf8Path;
use plotters::prelude::*;

use crate::fit::LinearFit;
use crate::periprec_errors::PrecessError;
use crate::precession::AngleSeries;

const PLOT_SIZE: (u32, u32) = (1200, 700);

/// Render the precession series and its best-fit line to a PNG file.
///
/// The caption carries the fitted slope rescaled to arcseconds per Julian
/// century; the x tick labels show the calendar date of the nearest
/// perihelion. An empty series draws nothing.
pub fn save_plot(
    series: &AngleSeries,
    fit: &LinearFit,
    path: &Utf8Path,
) -> Result<(), PrecessError> {
    if series.is_empty() {
        return Ok(());
    }

    let x_min = series.times.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = series
        .times
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let x_pad = if x_max > x_min {
        0.02 * (x_max - x_min)
    } else {
        1.0
    };

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &y in series
        .arcsec
        .iter()
        .chain([fit.value_at(x_min), fit.value_at(x_max)].iter())
    {
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let y_range = (y_max - y_min).abs();
    let y_pad = if y_range > 1e-6 {
        0.1 * y_range
    } else {
        0.1 * y_max.abs().max(1.0)
    };

    let root = BitMapBackend::new(path.as_std_path(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let caption = format!(
        "Slope of Best Fit Line {:.2} arcsec/cent",
        fit.slope_arcsec_per_century()
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(&caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )
        .map_err(plot_err)?;

    // Ticks show the calendar label of the nearest perihelion.
    let label_for = |x: &f64| {
        series
            .times
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - x)
                    .abs()
                    .partial_cmp(&(*b - x).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| series.labels[i].clone())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_desc("Perihelion date")
        .y_desc("Precession (arcsec)")
        .x_labels(series.len().min(12))
        .x_label_formatter(&label_for)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            series
                .times
                .iter()
                .zip(&series.arcsec)
                .map(|(&x, &y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(plot_err)?
        .label("Actual Data")
        .legend(|(x, y)| Circle::new((x + 9, y), 4, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(
            [x_min, x_max].iter().map(|&x| (x, fit.value_at(x))),
            &BLUE,
        ))
        .map_err(plot_err)?
        .label("Best Fit Line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_err<E: std::fmt::Display>(err: E) -> PrecessError {
    PrecessError::PlotRender(err.to_string())
}
