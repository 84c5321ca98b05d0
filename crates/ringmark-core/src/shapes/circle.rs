//! Circle shape.

use super::ShapeStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which half of a ring a circle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircleRole {
    Outer,
    Inner,
}

impl CircleRole {
    /// Classification tag shared by every circle of this role.
    pub fn class_name(&self) -> &'static str {
        match self {
            CircleRole::Outer => "outer-circle",
            CircleRole::Inner => "inner-circle",
        }
    }
}

/// A circle shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    /// Element identifier used in markup (e.g. `outer-circle-cat_1`).
    pub element_id: String,
    /// Outer or inner half of a ring.
    pub role: CircleRole,
    /// Center point.
    pub center: Point,
    /// Radius. Never negative.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(
        element_id: impl Into<String>,
        role: CircleRole,
        center: Point,
        radius: f64,
        style: ShapeStyle,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            role,
            center,
            radius: radius.max(0.0),
            style,
        }
    }

    /// Radius as an integer, truncating any fractional part.
    pub fn whole_radius(&self) -> f64 {
        self.radius.trunc()
    }

    /// Set the radius, never below zero.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(radius: f64) -> Circle {
        Circle::new(
            "outer-circle-a",
            CircleRole::Outer,
            Point::new(50.0, 50.0),
            radius,
            ShapeStyle::outline("white", 2.0),
        )
    }

    #[test]
    fn test_negative_radius_clamped() {
        let mut c = circle(-3.0);
        assert!(c.radius.abs() < f64::EPSILON);
        c.set_radius(-1.0);
        assert!(c.radius.abs() < f64::EPSILON);
    }

    #[test]
    fn test_whole_radius_truncates() {
        assert!((circle(10.9).whole_radius() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(CircleRole::Outer.class_name(), "outer-circle");
        assert_eq!(CircleRole::Inner.class_name(), "inner-circle");
    }
}
