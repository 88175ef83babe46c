//! Report assembly: runs the question pipelines, renders charts, and
//! writes the markdown report surface.

use crate::narrative;
use bikereport_common::{bail, Result};
use bikereport_config::ReportSettings;
use bikereport_data::{LoadedDataset, RentalFrame};
use bikereport_graphs::{
    seasonal_trend, user_comparison, weather_weekend, GraphConfig, GraphRenderer,
    SeasonalTrendGraph, UserComparisonGraph, WeatherWeekendGraph,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{info, warn};

/// One chart section of the report
struct ChartSection {
    heading: &'static str,
    caption: &'static str,
    /// Rendered image file name, or None when the chart had no data
    image: Option<String>,
    /// Per-group means shown under the caption
    means: Vec<(String, f64)>,
}

/// Generates the report directory from a loaded dataset
pub struct ReportGenerator<'a> {
    settings: &'a ReportSettings,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(settings: &'a ReportSettings) -> Self {
        Self { settings }
    }

    /// Run the full pipeline and write `report.md` plus the chart PNGs.
    ///
    /// Returns the path of the written report. An empty dataset is
    /// terminal: processing halts with a dataset error and nothing is
    /// written.
    pub fn generate(&self, dataset: &LoadedDataset) -> Result<PathBuf> {
        if dataset.frame.is_empty() {
            bail!(dataset, "dataset is empty after all fallbacks; halting report generation");
        }

        let frame = dataset
            .frame
            .filter_recent_periods(self.settings.data.recent_year_window);
        info!(
            rows = frame.len(),
            window = self.settings.data.recent_year_window,
            "Prepared frame for reporting"
        );

        let output_dir = &self.settings.graph.output_dir;
        std::fs::create_dir_all(output_dir)?;

        let sections = vec![
            self.weather_section(&frame)?,
            self.seasonal_section(&frame)?,
            self.user_section(&frame)?,
        ];

        let report_path = output_dir.join("report.md");
        std::fs::write(&report_path, self.render_markdown(&sections))?;
        info!(path = %report_path.display(), "Report written");

        Ok(report_path)
    }

    fn graph_config(&self, title: &str, x_label: &str, y_label: &str) -> GraphConfig {
        GraphConfig::new(title, Some(x_label), Some(y_label))
            .with_dimensions(self.settings.graph.width, self.settings.graph.height)
    }

    /// Render a chart, or record a skipped section when it has no data.
    ///
    /// Only an empty chart structure is skipped; a rendering failure on
    /// a chart with data is a real error and propagates.
    fn rendered_image(&self, renderer: &dyn GraphRenderer, config: &GraphConfig) -> Result<Option<String>> {
        if renderer.is_empty() {
            warn!(chart = renderer.name(), "Skipping chart with no data");
            return Ok(None);
        }

        let file_name = format!("{}.png", renderer.name());
        let path = self.settings.graph.output_dir.join(&file_name);
        renderer.render_to_file(config, &path)?;
        Ok(Some(file_name))
    }

    fn weather_section(&self, frame: &RentalFrame) -> Result<ChartSection> {
        let chart = weather_weekend(frame);
        let means = chart
            .mean_by_weather
            .iter()
            .map(|(weather, mean)| (weather.to_string(), *mean))
            .collect();

        let config = self.graph_config(
            "Weekend Rentals by Weather Situation",
            "Weather Situation",
            "Rentals",
        );
        let image = self.rendered_image(&WeatherWeekendGraph::new(chart), &config)?;

        Ok(ChartSection {
            heading: narrative::Q1_HEADING,
            caption: narrative::Q1_CAPTION,
            image,
            means,
        })
    }

    fn seasonal_section(&self, frame: &RentalFrame) -> Result<ChartSection> {
        let chart = seasonal_trend(frame);
        let means = chart
            .mean_by_season
            .iter()
            .map(|(season, mean)| (season.to_string(), *mean))
            .collect();

        let config = self.graph_config("Seasonal Rental Trend", "Date", "Rentals");
        let image = self.rendered_image(&SeasonalTrendGraph::new(chart), &config)?;

        Ok(ChartSection {
            heading: narrative::Q2_HEADING,
            caption: narrative::Q2_CAPTION,
            image,
            means,
        })
    }

    fn user_section(&self, frame: &RentalFrame) -> Result<ChartSection> {
        let chart = user_comparison(frame);
        let means = chart
            .mean_by_user
            .iter()
            .map(|(label, mean)| (label.to_string(), *mean))
            .collect();

        let config = self.graph_config(
            "Casual vs Registered Rentals on Workdays",
            "User Type",
            "Rentals",
        );
        let image = self.rendered_image(&UserComparisonGraph::new(chart), &config)?;

        Ok(ChartSection {
            heading: narrative::Q3_HEADING,
            caption: narrative::Q3_CAPTION,
            image,
            means,
        })
    }

    fn render_markdown(&self, sections: &[ChartSection]) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# {}\n", narrative::TITLE);
        let _ = writeln!(out, "{}\n", narrative::DATASET_DESCRIPTION);

        for section in sections {
            let _ = writeln!(out, "## {}\n", section.heading);
            match &section.image {
                Some(image) => {
                    let _ = writeln!(out, "![{}]({})\n", section.heading, image);
                }
                None => {
                    let _ = writeln!(out, "*No data available for this chart.*\n");
                }
            }
            let _ = writeln!(out, "{}\n", section.caption);

            if !section.means.is_empty() {
                let _ = writeln!(out, "Mean daily rentals:\n");
                for (label, mean) in &section.means {
                    let _ = writeln!(out, "- {label}: {mean:.1}");
                }
                let _ = writeln!(out);
            }
        }

        let _ = writeln!(out, "{}", narrative::CONCLUSION);

        out
    }
}
