//! Weekend rental distribution by weather situation (question 1)

use crate::{GraphConfig, GraphRenderer};
use bikereport_common::{bail, Result, WeatherSituation};
use bikereport_data::{group_mean, RentalFrame};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Rental-count distribution for one weather code
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherGroup {
    pub weather: WeatherSituation,
    pub rentals: Vec<f64>,
}

/// Chart-ready structure: one distribution per weather code seen on
/// weekends, plus per-code means for the caption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherWeekendChart {
    pub groups: Vec<WeatherGroup>,
    pub mean_by_weather: BTreeMap<WeatherSituation, f64>,
}

impl WeatherWeekendChart {
    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group weekend rentals by weather situation.
///
/// Pure transform: the input frame is not modified, and an empty frame
/// produces an empty chart structure rather than an error.
pub fn weather_weekend(frame: &RentalFrame) -> WeatherWeekendChart {
    let weekend = frame.weekends();

    let mut grouped: BTreeMap<WeatherSituation, Vec<f64>> = BTreeMap::new();
    for record in weekend.records() {
        grouped
            .entry(WeatherSituation::from_code(record.weather_situation))
            .or_default()
            .push(f64::from(record.rental_count));
    }

    let mean_by_weather = group_mean(
        weekend
            .records()
            .iter()
            .map(|r| (WeatherSituation::from_code(r.weather_situation), f64::from(r.rental_count))),
    );

    WeatherWeekendChart {
        groups: grouped
            .into_iter()
            .map(|(weather, rentals)| WeatherGroup { weather, rentals })
            .collect(),
        mean_by_weather,
    }
}

/// Boxplot renderer for the weather question
#[derive(Debug)]
pub struct WeatherWeekendGraph {
    pub chart: WeatherWeekendChart,
}

impl WeatherWeekendGraph {
    pub fn new(chart: WeatherWeekendChart) -> Self {
        Self { chart }
    }
}

impl GraphRenderer for WeatherWeekendGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.chart.is_empty() {
            bail!(graph, "No data to render");
        }

        let labels: Vec<String> = self.chart.groups.iter().map(|g| g.weather.to_string()).collect();
        let quartiles: Vec<Quartiles> = self
            .chart
            .groups
            .iter()
            .map(|g| Quartiles::new(&g.rentals))
            .collect();

        let y_max = quartiles
            .iter()
            .map(|q| q.values()[4])
            .fold(0f32, f32::max)
            * 1.1;

        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (0..self.chart.groups.len()).into_segmented(),
                0f32..y_max.max(10.0),
            )?;

        let mut mesh = chart.configure_mesh();
        if let Some(x_label) = &config.x_label {
            mesh.x_desc(x_label);
        }
        if let Some(y_label) = &config.y_label {
            mesh.y_desc(y_label);
        }
        mesh.x_labels(self.chart.groups.len())
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(index) => {
                    labels.get(*index).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(quartiles.iter().enumerate().map(|(index, quartile)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(index), quartile)
                .width(30)
                .whisker_width(0.5)
                .style(BLUE)
        }))?;

        root.present()?;
        info!(path = %path.display(), "Rendered weather-weekend boxplot");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "weather_weekend"
    }

    fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}
