//! Ring markers: paired outer/inner circles and the ordered set of them.

use crate::config::RingConfig;
use crate::detect::Polygon;
use crate::shapes::{Circle, CircleRole, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ring construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    #[error("Outer and inner circle lists differ in length ({outer} vs {inner})")]
    Misaligned { outer: usize, inner: usize },
}

/// An outer circle and the inner circle drawn inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingPair {
    pub outer: Circle,
    pub inner: Circle,
}

impl RingPair {
    pub fn new(outer: Circle, inner: Circle) -> Self {
        Self { outer, inner }
    }

    /// Build the ring marking the object `label`, anchored at `anchor`.
    pub fn at_anchor(label: &str, anchor: Point, config: &RingConfig) -> Self {
        let offset = config.anchor_offset;
        let center = Point::new(anchor.x - offset, anchor.y + offset);
        let outer = Circle::new(
            format!("{}-{}", CircleRole::Outer.class_name(), label),
            CircleRole::Outer,
            center,
            config.outer_radius,
            ShapeStyle::outline(config.default_color.as_str(), config.stroke_width),
        );
        let inner = Circle::new(
            format!("{}-{}", CircleRole::Inner.class_name(), label),
            CircleRole::Inner,
            center,
            config.inner_radius,
            ShapeStyle::solid(config.default_color.as_str(), config.stroke_width),
        );
        Self { outer, inner }
    }

    /// Build the ring for a detected object's polygon.
    ///
    /// The ring hangs off the second vertex, or the only vertex of a one-point
    /// polygon. Returns `None` for an empty polygon.
    pub fn for_polygon(label: &str, vertices: &[Point], config: &RingConfig) -> Option<Self> {
        let anchor = vertices.get(1).or_else(|| vertices.first())?;
        Some(Self::at_anchor(label, *anchor, config))
    }
}

/// Ordered list of ring pairs, owned by the component that drew them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RingSet {
    pairs: Vec<RingPair>,
}

impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair up two index-aligned circle lists.
    pub fn from_parts(outer: Vec<Circle>, inner: Vec<Circle>) -> Result<Self, RingError> {
        if outer.len() != inner.len() {
            return Err(RingError::Misaligned {
                outer: outer.len(),
                inner: inner.len(),
            });
        }
        let pairs = outer
            .into_iter()
            .zip(inner)
            .map(|(outer, inner)| RingPair::new(outer, inner))
            .collect();
        Ok(Self { pairs })
    }

    /// One ring per polygon, in polygon order. Empty polygons get no ring.
    pub fn for_polygons(polygons: &[Polygon], config: &RingConfig) -> Self {
        polygons
            .iter()
            .filter_map(|p| RingPair::for_polygon(&p.label, &p.vertices, config))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RingPair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RingPair> {
        self.pairs.iter_mut()
    }
}

impl FromIterator<RingPair> for RingSet {
    fn from_iter<I: IntoIterator<Item = RingPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RingSet {
    type Item = &'a RingPair;
    type IntoIter = std::slice::Iter<'a, RingPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
