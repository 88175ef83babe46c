//! Casual vs. registered usage on workdays (question 3)

use crate::{GraphConfig, GraphRenderer};
use bikereport_common::{bail, Result};
use bikereport_data::{group_mean, to_long_form, RentalFrame, ValueColumn};
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// The melted value columns, in output order
const USER_COLUMNS: [ValueColumn; 2] = [
    ValueColumn { label: "Casual", extract: |r| r.casual_count },
    ValueColumn { label: "Registered", extract: |r| r.registered_count },
];

/// Rental distribution for one user type
#[derive(Debug, Clone, PartialEq)]
pub struct UserGroup {
    pub label: &'static str,
    pub rentals: Vec<f64>,
}

/// Chart-ready structure: one distribution per user type on workdays,
/// plus per-type means for the caption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserComparisonChart {
    pub groups: Vec<UserGroup>,
    pub mean_by_user: BTreeMap<&'static str, f64>,
}

impl UserComparisonChart {
    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Melt workday rentals into casual/registered distributions.
///
/// Pure transform; empty input yields an empty chart structure.
pub fn user_comparison(frame: &RentalFrame) -> UserComparisonChart {
    let workdays = frame.workdays();
    let long = to_long_form(&workdays, &USER_COLUMNS);

    if long.is_empty() {
        return UserComparisonChart::default();
    }

    let mut groups = Vec::with_capacity(USER_COLUMNS.len());
    for column in &USER_COLUMNS {
        let rentals: Vec<f64> = long
            .iter()
            .filter(|row| row.label == column.label)
            .map(|row| row.value)
            .collect();
        groups.push(UserGroup { label: column.label, rentals });
    }

    let mean_by_user = group_mean(long.iter().map(|row| (row.label, row.value)));

    UserComparisonChart { groups, mean_by_user }
}

/// Boxplot renderer for the user-type question
#[derive(Debug)]
pub struct UserComparisonGraph {
    pub chart: UserComparisonChart,
}

impl UserComparisonGraph {
    pub fn new(chart: UserComparisonChart) -> Self {
        Self { chart }
    }
}

impl GraphRenderer for UserComparisonGraph {
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        if self.chart.is_empty() {
            bail!(graph, "No data to render");
        }

        let labels: Vec<&'static str> = self.chart.groups.iter().map(|g| g.label).collect();
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
                    labels.get(*index).map(|l| l.to_string()).unwrap_or_default()
                }
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(quartiles.iter().enumerate().map(|(index, quartile)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(index), quartile)
                .width(40)
                .whisker_width(0.5)
                .style(if index == 0 { RED } else { BLUE })
        }))?;

        root.present()?;
        info!(path = %path.display(), "Rendered user comparison boxplot");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "user_comparison"
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

    fn record(weekday: u32, casual: u32, registered: u32) -> RentalRecord {
        RentalRecord {
            year_index: 2012,
            month_index: 6,
            weekday_index: weekday,
            weather_situation: 1,
            rental_count: casual + registered,
            casual_count: casual,
            registered_count: registered,
        }
    }

    #[test]
    fn test_pipeline_melts_workdays_only() {
        let frame: RentalFrame = [
            record(1, 10, 100),
            record(3, 20, 200),
            record(6, 999, 999), // weekend, excluded
        ]
        .into_iter()
        .collect();

        let chart = user_comparison(&frame);

        assert_eq!(chart.groups.len(), 2);
        assert_eq!(chart.groups[0].label, "Casual");
        assert_eq!(chart.groups[0].rentals, vec![10.0, 20.0]);
        assert_eq!(chart.groups[1].label, "Registered");
        assert_eq!(chart.groups[1].rentals, vec![100.0, 200.0]);

        assert_eq!(chart.mean_by_user["Casual"], 15.0);
        assert_eq!(chart.mean_by_user["Registered"], 150.0);
    }

    #[test]
    fn test_pipeline_empty_frame_yields_empty_chart() {
        let chart = user_comparison(&RentalFrame::empty());
        assert!(chart.is_empty());
        assert!(chart.mean_by_user.is_empty());
    }

    #[test]
    fn test_weekend_only_frame_yields_empty_chart() {
        let frame: RentalFrame = [record(0, 5, 10), record(6, 7, 14)].into_iter().collect();
        assert!(user_comparison(&frame).is_empty());
    }

    #[test]
    fn test_render_to_file() {
        let frame: RentalFrame = (1..=5).map(|d| record(d, 10 * d, 50 * d)).collect();

        let graph = UserComparisonGraph::new(user_comparison(&frame));
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let test_path = temp_dir.path().join("user_comparison.png");

        let config = GraphConfig::new("Casual vs Registered", Some("User Type"), Some("Rentals"));
        let result = graph.render_to_file(&config, &test_path);
        assert!(result.is_ok(), "Failed to render graph: {:?}", result.err());
        assert!(test_path.exists());
    }

    #[test]
    fn test_render_empty_chart_is_error() {
        let graph = UserComparisonGraph::new(UserComparisonChart::default());
        let temp_dir = TempDir::new().unwrap();
        let result = graph.render_to_file(&GraphConfig::default(), &temp_dir.path().join("x.png"));
        assert!(result.is_err());
    }
}
