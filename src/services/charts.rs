use plotters::prelude::*;
use thiserror::Error;

use crate::domain::results::{AggregateResults, TimeSeriesPoint, TrajectoryPoint};
use crate::services::magnitude::{format_colonies, format_years};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPaths {
    pub colonization: String,
    pub trajectories: String,
    pub new_colonies: String,
}

impl ChartPaths {
    /// `<base>.colonization.png`, `<base>.trajectories.png` and
    /// `<base>.new_colonies.png`.
    pub fn from_base(base: &str) -> Self {
        Self {
            colonization: format!("{base}.colonization.png"),
            trajectories: format!("{base}.trajectories.png"),
            new_colonies: format!("{base}.new_colonies.png"),
        }
    }
}

/// Renders all three charts off the async executor.
pub async fn write_charts_png(paths: &ChartPaths, results: &AggregateResults) -> Result<(), ChartError> {
    let paths = paths.clone();
    let results = results.clone();
    tokio::task::spawn_blocking(move || {
        render_colonization_png(&paths.colonization, &results)?;
        render_trajectories_png(&paths.trajectories, &results)?;
        render_new_colonies_png(&paths.new_colonies, &results)
    })
    .await
    .map_err(|e| ChartError::Render(e.to_string()))??;
    Ok(())
}

fn render_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Mean colonized percentage with the 10th-90th percentile band.
pub fn render_colonization_png(output_path: &str, results: &AggregateResults) -> Result<(), ChartError> {
    let series = &results.time_series;
    if series.is_empty() {
        return Ok(());
    }
    let max_year = series.last().map(|p| p.year).unwrap_or(0.0).max(1.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Galaxy Colonization Over Time", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0f64..max_year, 0f64..100f64)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Years")
        .y_desc("Colonized (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|year| format_years(*year))
        .draw()
        .map_err(render_error)?;

    let band_color = RGBColor(30, 122, 204);
    let band: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (p.year, p.p90))
        .chain(series.iter().rev().map(|p| (p.year, p.p10)))
        .collect();
    chart
        .draw_series(std::iter::once(Polygon::new(band, band_color.mix(0.25).filled())))
        .map_err(render_error)?
        .label("10th-90th percentile")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], band_color.mix(0.25).filled()));

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|p| (p.year, p.mean)),
            band_color.stroke_width(2),
        ))
        .map_err(render_error)?
        .label("Mean")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], band_color.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Sampled trial trajectories on a logarithmic percentage axis.
pub fn render_trajectories_png(output_path: &str, results: &AggregateResults) -> Result<(), ChartError> {
    let points = results.sampled_trajectories.iter().flatten();
    let max_year = points.clone().map(|p| p.year).fold(0.0, f64::max).max(1.0);
    let min_percent = points
        .map(|p| p.percent_colonized)
        .filter(|p| *p > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !min_percent.is_finite() {
        return Ok(());
    }
    let min_percent = min_percent.min(1.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Individual Simulations", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..max_year, (min_percent..100f64).log_scale())
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Years")
        .y_desc("Colonized (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|year| format_years(*year))
        .y_label_formatter(&|percent| format!("{percent:.0e}"))
        .draw()
        .map_err(render_error)?;

    let line_color = RGBColor(30, 122, 204).mix(0.35);
    for trajectory in &results.sampled_trajectories {
        chart
            .draw_series(LineSeries::new(positive_points(trajectory), &line_color))
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

/// Mean newly founded colonies per round on a logarithmic axis.
pub fn render_new_colonies_png(output_path: &str, results: &AggregateResults) -> Result<(), ChartError> {
    let series: Vec<(f64, f64)> = results
        .time_series
        .iter()
        .filter(|p| p.mean_new_colonies > 0.0)
        .map(|p| (p.year, p.mean_new_colonies))
        .collect();
    if series.is_empty() {
        return Ok(());
    }
    let max_year = series.iter().map(|(year, _)| *year).fold(0.0, f64::max).max(1.0);
    let min_count = series.iter().map(|(_, n)| *n).fold(f64::INFINITY, f64::min).min(1.0);
    let max_count = series.iter().map(|(_, n)| *n).fold(0.0, f64::max).max(10.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("New Colonies per Round", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..max_year, (min_count..max_count).log_scale())
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Years")
        .y_desc("Mean new colonies")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|year| format_years(*year))
        .y_label_formatter(&|count| format_colonies(*count))
        .draw()
        .map_err(render_error)?;

    let line_color = RGBColor(204, 102, 30);
    chart
        .draw_series(LineSeries::new(series, line_color.stroke_width(2)))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Mean and percentile band of one scenario at one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandValues {
    pub mean: f64,
    pub p10: f64,
    pub p90: f64,
}

impl From<&TimeSeriesPoint> for BandValues {
    fn from(point: &TimeSeriesPoint) -> Self {
        Self {
            mean: point.mean,
            p10: point.p10,
            p90: point.p90,
        }
    }
}

/// One year on the shared axis of a comparison; a scenario without a point
/// at that year is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedBandPoint {
    pub year: f64,
    pub first: Option<BandValues>,
    pub second: Option<BandValues>,
}

/// Joins two time series on their year values. Scenarios with different
/// round lengths share only the years both reach.
pub fn merge_by_year(first: &[TimeSeriesPoint], second: &[TimeSeriesPoint]) -> Vec<MergedBandPoint> {
    let mut merged = Vec::with_capacity(first.len().max(second.len()));
    let mut left = first.iter().copied().peekable();
    let mut right = second.iter().copied().peekable();
    loop {
        let (year, left_point, right_point) = match (left.peek().copied(), right.peek().copied()) {
            (Some(a), Some(b)) if a.year == b.year => {
                left.next();
                right.next();
                (a.year, Some(a), Some(b))
            }
            (Some(a), Some(b)) if a.year < b.year => {
                left.next();
                (a.year, Some(a), None)
            }
            (Some(a), None) => {
                left.next();
                (a.year, Some(a), None)
            }
            (_, Some(b)) => {
                right.next();
                (b.year, None, Some(b))
            }
            (None, None) => break,
        };
        merged.push(MergedBandPoint {
            year,
            first: left_point.as_ref().map(BandValues::from),
            second: right_point.as_ref().map(BandValues::from),
        });
    }
    merged
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChartPaths {
    pub colonization: String,
    pub trajectories: String,
}

impl ComparisonChartPaths {
    /// `<base>.colonization.png` and `<base>.trajectories.png`.
    pub fn from_base(base: &str) -> Self {
        Self {
            colonization: format!("{base}.colonization.png"),
            trajectories: format!("{base}.trajectories.png"),
        }
    }
}

/// One side of a comparison chart.
#[derive(Debug, Clone)]
pub struct ScenarioSeries {
    pub name: String,
    pub results: AggregateResults,
}

const FIRST_COLOR: RGBColor = RGBColor(30, 122, 204);
const SECOND_COLOR: RGBColor = RGBColor(204, 60, 30);

/// Renders both overlay charts off the async executor.
pub async fn write_comparison_charts_png(
    paths: &ComparisonChartPaths,
    first: &ScenarioSeries,
    second: &ScenarioSeries,
) -> Result<(), ChartError> {
    let paths = paths.clone();
    let first = first.clone();
    let second = second.clone();
    tokio::task::spawn_blocking(move || {
        render_comparison_colonization_png(&paths.colonization, &first, &second)?;
        render_comparison_trajectories_png(&paths.trajectories, &first, &second)
    })
    .await
    .map_err(|e| ChartError::Render(e.to_string()))??;
    Ok(())
}

/// Both scenarios' mean lines and percentile bands on a shared year axis.
pub fn render_comparison_colonization_png(
    output_path: &str,
    first: &ScenarioSeries,
    second: &ScenarioSeries,
) -> Result<(), ChartError> {
    let merged = merge_by_year(&first.results.time_series, &second.results.time_series);
    let Some(last) = merged.last() else {
        return Ok(());
    };
    let max_year = last.year.max(1.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Galaxy Colonization Over Time", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0f64..max_year, 0f64..100f64)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Years")
        .y_desc("Colonized (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|year| format_years(*year))
        .draw()
        .map_err(render_error)?;

    let sides: [(&str, fn(&MergedBandPoint) -> Option<BandValues>, RGBColor); 2] = [
        (first.name.as_str(), |p: &MergedBandPoint| p.first, FIRST_COLOR),
        (second.name.as_str(), |p: &MergedBandPoint| p.second, SECOND_COLOR),
    ];
    for (name, pick, color) in sides {
        let points: Vec<(f64, BandValues)> = merged
            .iter()
            .filter_map(|p| pick(p).map(|values| (p.year, values)))
            .collect();
        if points.is_empty() {
            continue;
        }
        let band: Vec<(f64, f64)> = points
            .iter()
            .map(|(year, v)| (*year, v.p90))
            .chain(points.iter().rev().map(|(year, v)| (*year, v.p10)))
            .collect();
        chart
            .draw_series(std::iter::once(Polygon::new(band, color.mix(0.2).filled())))
            .map_err(render_error)?;
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|(year, v)| (*year, v.mean)),
                color.stroke_width(2),
            ))
            .map_err(render_error)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Both scenarios' sampled trajectories overlaid on a logarithmic axis.
pub fn render_comparison_trajectories_png(
    output_path: &str,
    first: &ScenarioSeries,
    second: &ScenarioSeries,
) -> Result<(), ChartError> {
    let all_points = || {
        first
            .results
            .sampled_trajectories
            .iter()
            .chain(&second.results.sampled_trajectories)
            .flatten()
    };
    let max_year = all_points().map(|p| p.year).fold(0.0, f64::max).max(1.0);
    let min_percent = all_points()
        .map(|p| p.percent_colonized)
        .filter(|p| *p > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !min_percent.is_finite() {
        return Ok(());
    }
    let min_percent = min_percent.min(1.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Individual Simulations", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..max_year, (min_percent..100f64).log_scale())
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Years")
        .y_desc("Colonized (%)")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|year| format_years(*year))
        .y_label_formatter(&|percent| format!("{percent:.0e}"))
        .draw()
        .map_err(render_error)?;

    for (scenario, color) in [(first, FIRST_COLOR), (second, SECOND_COLOR)] {
        let line_color = color.mix(0.35);
        for (index, trajectory) in scenario.results.sampled_trajectories.iter().enumerate() {
            let drawn = chart
                .draw_series(LineSeries::new(positive_points(trajectory), &line_color))
                .map_err(render_error)?;
            if index == 0 {
                drawn
                    .label(scenario.name.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

fn positive_points(trajectory: &[TrajectoryPoint]) -> impl Iterator<Item = (f64, f64)> + '_ {
    trajectory
        .iter()
        .filter(|p| p.percent_colonized > 0.0)
        .map(|p| (p.year, p.percent_colonized))
}
