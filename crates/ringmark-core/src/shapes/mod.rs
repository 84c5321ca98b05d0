//! Shape definitions for ring markers.

mod circle;

pub use circle::{Circle, CircleRole};

use serde::{Deserialize, Serialize};

/// Style properties for shapes.
///
/// Colors are kept as the CSS strings they were set with so that a color
/// written by a handler reads back byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: String,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    #[serde(default)]
    pub fill_color: Option<String>,
}

impl ShapeStyle {
    /// Outline-only style.
    pub fn outline(color: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke_color: color.into(),
            stroke_width,
            fill_color: None,
        }
    }

    /// Style with stroke and fill set to the same color.
    pub fn solid(color: impl Into<String>, stroke_width: f64) -> Self {
        let color = color.into();
        Self {
            stroke_color: color.clone(),
            stroke_width,
            fill_color: Some(color),
        }
    }

    /// Set the stroke color.
    pub fn set_stroke(&mut self, color: &str) {
        self.stroke_color = color.to_string();
    }

    /// Set the fill color.
    pub fn set_fill(&mut self, color: Option<&str>) {
        self.fill_color = color.map(str::to_string);
    }
}
