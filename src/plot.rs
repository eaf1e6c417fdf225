//! Chart rendering for the curve pair and its intersections

use crate::framing::{CurveSeries, ViewWindow};
use crate::roots::Root;
use anyhow::Result;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

/// Renders both curves with intersection markers into a PNG.
///
/// The exponential series spans the whole window; the logarithmic
/// series ends at its domain boundary. With `draw_axes` set, dashed
/// guide lines mark x=0 and y=0 (clipped to the window).
pub fn plot_intersections(
    series: &CurveSeries,
    roots: &[Root],
    window: &ViewWindow,
    draw_axes: bool,
    out_path: &str,
) -> Result<()> {
    let area = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    area.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&area)
        .margin(20)
        .caption("Exponential vs Logarithmic", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)?;
    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    if draw_axes {
        let guide = BLACK.mix(0.35);
        chart.draw_series(DashedLineSeries::new(
            vec![(window.x_min, 0.0), (window.x_max, 0.0)],
            6,
            4,
            guide.stroke_width(1),
        ))?;
        chart.draw_series(DashedLineSeries::new(
            vec![(0.0, window.y_min), (0.0, window.y_max)],
            6,
            4,
            guide.stroke_width(1),
        ))?;
    }

    chart
        .draw_series(LineSeries::new(series.exp.iter().copied(), &BLUE))?
        .label("exponential")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(series.log.iter().copied(), &RED))?
        .label("logarithmic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    if !roots.is_empty() {
        chart
            .draw_series(
                roots
                    .iter()
                    .map(|r| Cross::new((r.x, r.y), 6, BLACK.stroke_width(2))),
            )?
            .label("intersection")
            .legend(|(x, y)| Cross::new((x + 10, y), 4, BLACK.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    area.present()?;
    Ok(())
}
