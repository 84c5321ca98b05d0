//! Ring placement configuration.

use serde::{Deserialize, Serialize};

/// Default outer circle radius.
pub const DEFAULT_OUTER_RADIUS: f64 = 10.0;
/// Default inner circle radius.
pub const DEFAULT_INNER_RADIUS: f64 = 5.0;
/// Default distance between the anchor vertex and the ring center, per axis.
pub const DEFAULT_ANCHOR_OFFSET: f64 = 10.0;
/// Default minimum detection confidence for an object to get a ring.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.85;
/// Corner radius of the rounded clip rectangle drawn around each object.
pub const DEFAULT_CLIP_CORNER_RADIUS: f64 = 10.0;

/// Parameters used when generating rings for detected objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Initial outer circle radius.
    pub outer_radius: f64,
    /// Initial inner circle radius.
    pub inner_radius: f64,
    /// The ring center sits `anchor_offset` left of and below the anchor vertex.
    pub anchor_offset: f64,
    /// Stroke width of both circles.
    pub stroke_width: f64,
    /// Color used before any color change event.
    pub default_color: String,
    /// Objects detected with a lower confidence are ignored.
    pub score_threshold: f64,
    /// Object names that never get a ring.
    pub object_filters: Vec<String>,
    /// Corner radius of each object's clip rectangle.
    pub clip_corner_radius: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius: DEFAULT_INNER_RADIUS,
            anchor_offset: DEFAULT_ANCHOR_OFFSET,
            stroke_width: 1.0,
            default_color: "white".to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            object_filters: vec!["Person".to_string()],
            clip_corner_radius: DEFAULT_CLIP_CORNER_RADIUS,
        }
    }
}
