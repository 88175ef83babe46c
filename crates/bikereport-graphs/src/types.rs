//! Shared graph configuration and the renderer seam

use bikereport_common::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering configuration shared by all charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            width: 1000,
            height: 600,
            x_label: None,
            y_label: None,
        }
    }
}

impl GraphConfig {
    /// Convenience constructor with title and axis labels
    pub fn new(title: &str, x_label: Option<&str>, y_label: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.map(|s| s.to_string()),
            y_label: y_label.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    /// Set custom dimensions
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Renderer seam implemented by each chart type
pub trait GraphRenderer {
    /// Draw the chart to a PNG file.
    ///
    /// Rendering an empty chart structure is an error; callers check
    /// [`GraphRenderer::is_empty`] first and skip the chart instead of
    /// producing a blank image. Any error from a non-empty chart is a
    /// real rendering failure and must be propagated.
    fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()>;

    /// Stable identifier used for output file names
    fn name(&self) -> &'static str;

    /// Whether the underlying chart structure has nothing to draw
    fn is_empty(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_constructor() {
        let config = GraphConfig::new("Title", Some("X"), Some("Y"));
        assert_eq!(config.title, "Title");
        assert_eq!(config.x_label.as_deref(), Some("X"));
        assert_eq!(config.y_label.as_deref(), Some("Y"));
        assert_eq!(config.width, 1000);
    }

    #[test]
    fn test_with_dimensions() {
        let config = GraphConfig::default().with_dimensions(640, 480);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
    }
}
