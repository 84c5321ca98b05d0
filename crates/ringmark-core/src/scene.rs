//! Scene files: detected objects, slider setup and a list of events to replay.

use crate::color::SerializableColor;
use crate::config::RingConfig;
use crate::detect::{self, LocalizedObject, Polygon};
use crate::handlers::{RingController, SizeDelta};
use crate::ring::RingSet;
use crate::slider::SizeSlider;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Scene loading and replay errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Color(#[from] crate::color::ColorError),
}

/// Initial slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderSetup {
    pub min: i32,
    pub max: i32,
    pub value: i32,
    /// Raw former-value attribute. When absent the former value is `value`.
    #[serde(default)]
    pub former_value: Option<String>,
}

impl Default for SliderSetup {
    fn default() -> Self {
        Self {
            min: 0,
            max: 20,
            value: 5,
            former_value: None,
        }
    }
}

/// A UI event recorded in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneEvent {
    /// Color picker changed to a `#RRGGBB` value.
    Color(String),
    /// Size slider moved to a value.
    Size(i32),
}

/// A ring marker scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub objects: Vec<LocalizedObject>,
    #[serde(default)]
    pub slider: SliderSetup,
    #[serde(default)]
    pub config: RingConfig,
    #[serde(default)]
    pub events: Vec<SceneEvent>,
}

impl Scene {
    /// Parse a scene from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Objects that pass the configured threshold and filters, in pixels.
    pub fn polygons(&self) -> Vec<Polygon> {
        detect::polygons(&self.objects, self.width, self.height, &self.config)
    }

    /// Generate one ring per kept object that has at least one vertex.
    pub fn rings(&self) -> RingSet {
        RingSet::for_polygons(&self.polygons(), &self.config)
    }

    /// Build a controller holding the scene's rings and a seeded slider.
    pub fn controller(&self) -> RingController {
        let setup = &self.slider;
        let mut slider = SizeSlider::new(setup.min, setup.max, setup.value);
        if let Some(attribute) = &setup.former_value {
            slider = slider.with_former_attribute(attribute);
        }
        RingController::new(self.rings(), slider)
    }
}

/// Feed `events` to `controller` in order.
///
/// A malformed color aborts the replay. A size event the handler rejects is
/// logged and replay continues, matching how a UI keeps running after a
/// failed handler call.
pub fn replay<'a>(
    controller: &mut RingController,
    events: impl IntoIterator<Item = &'a SceneEvent>,
) -> Result<(), SceneError> {
    for event in events {
        match event {
            SceneEvent::Color(hex) => {
                let color = SerializableColor::from_hex(hex)?;
                controller.on_color_change(&color);
            }
            SceneEvent::Size(value) => {
                let event = controller.slider.event(*value);
                match controller.on_size_change(event) {
                    Ok(SizeDelta::Unchanged) => log::debug!("Slider already at {}", value),
                    Ok(_) => {}
                    Err(e) => log::warn!("Size event skipped: {}", e),
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCENE: &str = r##"{
        "width": 320,
        "height": 160,
        "objects": [
            {"name": "Cat", "score": 0.9, "normalizedVertices": [
                {"x": 0.03125, "y": 0.0625}, {"x": 0.1875, "y": 0.125}, {"x": 0.1875, "y": 0.5}
            ]},
            {"name": "Ghost", "score": 0.95, "normalizedVertices": []},
            {"name": "Person", "score": 0.99, "normalizedVertices": [{"x": 0.5, "y": 0.5}]},
            {"name": "Dog", "score": 0.5, "normalizedVertices": [{"x": 0.5, "y": 0.5}]},
            {"name": "Cat", "score": 0.88, "normalizedVertices": [
                {"x": 0.3125, "y": 0.625}, {"x": 0.46875, "y": 0.6875}
            ]}
        ],
        "slider": {"min": 0, "max": 20, "value": 5},
        "events": [{"color": "#ff0000"}, {"size": 8}]
    }"##;

    fn ids(rings: &RingSet) -> Vec<&str> {
        rings.iter().map(|p| p.outer.element_id.as_str()).collect()
    }

    #[test]
    fn test_scene_polygons_filtered_and_labelled() {
        let scene = Scene::from_json(SCENE).unwrap();
        let labels: Vec<String> = scene.polygons().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Cat_1", "Ghost_1", "Cat_2"]);
    }

    #[test]
    fn test_scene_rings_skip_empty_polygons() {
        let scene = Scene::from_json(SCENE).unwrap();
        let rings = scene.rings();
        assert_eq!(ids(&rings), vec!["outer-circle-Cat_1", "outer-circle-Cat_2"]);
        let first = rings.iter().next().unwrap();
        assert_eq!(first.outer.center, kurbo::Point::new(50.0, 30.0));
    }

    #[test]
    fn test_repeated_objects_get_distinct_ids() {
        let scene = Scene::from_json(SCENE).unwrap();
        let rings = scene.rings();
        let mut all = ids(&rings);
        all.extend(rings.iter().map(|p| p.inner.element_id.as_str()));
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn test_threshold_from_config() {
        let mut scene = Scene::from_json(SCENE).unwrap();
        scene.config.score_threshold = 0.4;
        scene.config.object_filters.clear();
        assert_eq!(scene.polygons().len(), 5);
    }

    #[test]
    fn test_former_value_attribute() {
        let mut scene = Scene::from_json(SCENE).unwrap();
        scene.slider.former_value = Some("7px".to_string());
        let mut controller = scene.controller();
        assert_eq!(controller.slider.former_value, Some(7));
        replay(&mut controller, &scene.events).unwrap();
        let first = controller.rings.iter().next().unwrap();
        assert!((first.outer.radius - 11.0).abs() < f64::EPSILON);

        scene.slider.former_value = Some(String::new());
        let mut controller = scene.controller();
        replay(&mut controller, &scene.events).unwrap();
        let first = controller.rings.iter().next().unwrap();
        assert!((first.outer.radius - 10.0).abs() < f64::EPSILON);
        assert_eq!(controller.slider.former_value, Some(8));
    }

    #[test]
    fn test_replay_applies_events() {
        let scene = Scene::from_json(SCENE).unwrap();
        let mut controller = scene.controller();
        replay(&mut controller, &scene.events).unwrap();
        for pair in controller.rings.iter() {
            assert_eq!(pair.outer.style.stroke_color, "#FF0000");
            assert!((pair.outer.radius - 13.0).abs() < f64::EPSILON);
            assert!((pair.inner.radius - 8.0).abs() < f64::EPSILON);
        }
        assert_eq!(controller.slider.former_value, Some(8));
    }

    #[test]
    fn test_replay_rejects_bad_color() {
        let scene = Scene::from_json(SCENE).unwrap();
        let mut controller = scene.controller();
        let events = [SceneEvent::Color("red".to_string())];
        assert!(matches!(
            replay(&mut controller, &events),
            Err(SceneError::Color(_))
        ));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let scene = Scene::from_json(r#"{"width": 10, "height": 10}"#).unwrap();
        assert!(scene.objects.is_empty());
        assert_eq!(scene.slider, SliderSetup::default());
        assert_eq!(scene.config, RingConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENE.as_bytes()).unwrap();
        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.events.len(), 2);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(Scene::load(file.path()), Err(SceneError::Json(_))));
        assert!(matches!(
            Scene::load("/nonexistent/ringmark-scene.json"),
            Err(SceneError::Io(_))
        ));
    }
}
