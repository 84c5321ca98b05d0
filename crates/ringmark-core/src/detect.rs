//! Detected objects and the polygons rings are generated for.
//!
//! Object localization reports each object's bounding polygon in normalized
//! coordinates (0..1). Before rings can be placed the objects are filtered by
//! confidence and name, scaled to image pixels and given unique labels.

use crate::config::RingConfig;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A vertex in normalized image coordinates. Missing axes read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedVertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// One localized object as reported by the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedObject {
    pub name: String,
    /// Detection confidence, 0..1.
    pub score: f64,
    #[serde(alias = "normalizedVertices")]
    pub vertices: Vec<NormalizedVertex>,
}

/// A kept object with a unique label and pixel vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// `{name}_{n}`, numbered per name in detection order starting at 1.
    pub label: String,
    pub score: f64,
    /// Vertices in whole image pixels.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Rectangle spanned by the first vertex, the second vertex's x and the
    /// third vertex's y. `None` for polygons with fewer than three vertices.
    pub fn clip_rect(&self) -> Option<Rect> {
        match self.vertices.as_slice() {
            [first, second, third, ..] => {
                Some(Rect::new(first.x, first.y, second.x, third.y).abs())
            }
            _ => None,
        }
    }
}

/// Filter, label and scale detected objects for an image of `width` x `height`.
pub fn polygons(
    objects: &[LocalizedObject],
    width: f64,
    height: f64,
    config: &RingConfig,
) -> Vec<Polygon> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut kept = Vec::new();

    for object in objects {
        if config.object_filters.iter().any(|f| f == &object.name) {
            log::debug!("Skipping filtered object {}", object.name);
            continue;
        }
        if object.score < config.score_threshold {
            log::debug!(
                "Skipping {} below threshold ({} < {})",
                object.name,
                object.score,
                config.score_threshold
            );
            continue;
        }

        let count = seen.entry(object.name.as_str()).or_insert(0);
        *count += 1;
        let vertices = object
            .vertices
            .iter()
            .map(|v| Point::new((v.x * width).trunc(), (v.y * height).trunc()))
            .collect();
        kept.push(Polygon {
            label: format!("{}_{}", object.name, count),
            score: object.score,
            vertices,
        });
    }

    log::debug!("Kept {} of {} detected objects", kept.len(), objects.len());
    kept
}
