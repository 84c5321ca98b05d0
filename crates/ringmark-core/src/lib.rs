//! Ringmark Core Library
//!
//! Ring markers (an outer circle paired with a filled inner circle) drawn next
//! to detected objects, and the two handlers that recolor and resize them in
//! response to a color picker and a size slider.

pub mod color;
pub mod config;
pub mod detect;
pub mod handlers;
pub mod render;
pub mod ring;
pub mod scene;
pub mod shapes;
pub mod slider;

pub use color::{ColorError, ColorSource, SerializableColor};
pub use config::RingConfig;
pub use detect::{LocalizedObject, NormalizedVertex, Polygon, polygons};
pub use handlers::{
    MIN_RADIUS, RingController, STEP_VALUE, SizeDelta, SizeError, apply_color, apply_size,
};
pub use ring::{RingError, RingPair, RingSet};
pub use scene::{Scene, SceneError, SceneEvent, SliderSetup, replay};
pub use shapes::{Circle, CircleRole, ShapeStyle};
pub use slider::{SizeSlider, SliderEvent, parse_int};
