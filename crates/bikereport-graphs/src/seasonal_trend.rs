//! Seasonal rental trend over time (question 2)

use crate::{GraphConfig, GraphRenderer};
use bikereport_common::{bail, Result, Season};
use bikereport_data::{group_mean, RentalFrame};
use chrono::NaiveDate;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Chart-ready structure: one dated rental series per season, plus
/// per-season means for the caption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonalTrendChart {
    pub series: BTreeMap<Season, Vec<(NaiveDate, u32)>>,
    pub mean_by_season: BTreeMap<Season, f64>,
}

impl SeasonalTrendChart {
    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.series.values().flatten().map(|(date, _)| *date);
        let min = dates.clone().min()?;
        let max = dates.max()?;
        Some((min, max))
    }

    fn max_count(&self) -> u32 {
        self.series
            .values()
            .flatten()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
    }
}

/// Group dated rentals by season.
///
/// Rows whose date cannot be derived are dropped with a warning; a bad
/// row never aborts the report. Empty input produces an empty chart.
pub fn seasonal_trend(frame: &RentalFrame) -> SeasonalTrendChart {
    let mut series: BTreeMap<Season, Vec<(NaiveDate, u32)>> = BTreeMap::new();

    for record in frame.records() {
        let Some(date) = record.date() else {
            warn!(
                year = record.year_index,
                month = record.month_index,
                "Dropping row with underivable date"
            );
            continue;
        };
        series.entry(record.season()).or_default().push((date, record.rental_count));
    }

    for points in series.values_mut() {
        points.sort_by_key(|(date, _)| *date);
    }

    let mean_by_season = group_mean(
        frame
            .records()
            .iter()
            .filter(|r| r.date().is_some())
            .map(|r| (r.season(), f64::from(r.rental_count))),
    );

    SeasonalTrendChart { series, mean_by_season }
}

/// Multi-series line chart renderer for the seasonal question
#[derive(Debug)]
pub struct SeasonalTrendGraph {
    pub chart: SeasonalTrendChart,
}

impl SeasonalTrendGraph {
    pub fn new(chart: SeasonalTrendChart) -> Self {
        Self { chart }
    }

    fn season_color(season: Season) -> RGBColor {
        match season {
            Season::Winter => RGBColor(31, 119, 180),
            Season::Spring => RGBColor(44, 160, 44),
            Season::Summer => RGBColor(255, 127, 14),
            Season::Fall => RGBColor(148, 103, 189),
        }
    }
}

impl GraphRenderer for SeasonalTrendGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.chart.is_empty() {
            bail!(graph, "No data to render");
        }

        let (min_date, max_date) = self
            .chart
            .date_bounds()
            .ok_or_else(|| bikereport_common::BikeReportError::graph("No dated rows to render"))?;
        let y_max = (f64::from(self.chart.max_count()) * 1.1).max(10.0);

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(min_date..max_date, 0f64..y_max)?;

        let mut mesh = chart.configure_mesh();
        if let Some(x_label) = &config.x_label {
            mesh.x_desc(x_label);
        }
        if let Some(y_label) = &config.y_label {
            mesh.y_desc(y_label);
        }
        mesh.draw()?;

        for (season, points) in &self.chart.series {
            if points.is_empty() {
                continue;
            }
            let color = Self::season_color(*season);
            chart
                .draw_series(LineSeries::new(
                    points.iter().map(|(date, count)| (*date, f64::from(*count))),
                    &color,
                ))?
                .label(season.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 10, y)], color)
                });
        }

        chart.configure_series_labels().draw()?;

        root.present()?;
        info!(path = %path.display(), "Rendered seasonal trend chart");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "seasonal_trend"
    }

    fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikereport_common::RentalRecord;
    use tempfile::TempDir;

    fn record(year: i32, month: u32, count: u32) -> RentalRecord {
        RentalRecord {
            year_index: year,
            month_index: month,
            weekday_index: 2,
            weather_situation: 1,
            rental_count: count,
            casual_count: count / 3,
            registered_count: count - count / 3,
        }
    }

    #[test]
    fn test_pipeline_groups_by_season_sorted_by_date() {
        let frame: RentalFrame = [
            record(2012, 8, 300),
            record(2011, 7, 200),
            record(2012, 1, 50),
            record(2011, 4, 120),
        ]
        .into_iter()
        .collect();

        let chart = seasonal_trend(&frame);

        assert_eq!(chart.series[&Season::Summer].len(), 2);
        // Sorted ascending by date within the season
        assert_eq!(
            chart.series[&Season::Summer][0].0,
            NaiveDate::from_ymd_opt(2011, 7, 1).unwrap()
        );
        assert_eq!(chart.series[&Season::Winter], vec![(
            NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
            50
        )]);
        assert_eq!(chart.mean_by_season[&Season::Summer], 250.0);
        assert_eq!(chart.mean_by_season[&Season::Spring], 120.0);
        assert!(!chart.mean_by_season.contains_key(&Season::Fall));
    }

    #[test]
    fn test_pipeline_empty_frame_yields_empty_chart() {
        let chart = seasonal_trend(&RentalFrame::empty());
        assert!(chart.is_empty());
        assert!(chart.mean_by_season.is_empty());
    }

    #[test]
    fn test_render_to_file() {
        let frame: RentalFrame = (1..=12)
            .map(|month| record(2012, month, 40 * month + 100))
            .collect();

        let graph = SeasonalTrendGraph::new(seasonal_trend(&frame));
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_path = temp_dir.path().join("seasonal_trend.png");

        let config = GraphConfig::new("Seasonal Trend", Some("Date"), Some("Rentals"));
        let result = graph.render_to_file(&config, &test_path);
        assert!(result.is_ok(), "Failed to render graph: {:?}", result.err());
        assert!(test_path.exists());
    }

    #[test]
    fn test_render_empty_chart_is_error() {
        let graph = SeasonalTrendGraph::new(SeasonalTrendChart::default());
        let temp_dir = TempDir::new().unwrap();
        let result = graph.render_to_file(&GraphConfig::default(), &temp_dir.path().join("x.png"));
        assert!(result.is_err());
    }
}
