//! SVG output for ring markers and the clip paths around detected objects.

use crate::detect::Polygon;
use crate::ring::{RingPair, RingSet};
use crate::shapes::Circle;
use svg::Document;
use svg::node::element::{Circle as SvgCircle, ClipPath, Definitions, Group, Rectangle};

/// One `<circle>` element.
pub fn circle_element(circle: &Circle) -> SvgCircle {
    let fill = circle.style.fill_color.as_deref().unwrap_or("none");
    SvgCircle::new()
        .set("id", circle.element_id.as_str())
        .set("class", circle.role.class_name())
        .set("cx", circle.center.x)
        .set("cy", circle.center.y)
        .set("r", circle.radius)
        .set("stroke", circle.style.stroke_color.as_str())
        .set("stroke-width", circle.style.stroke_width)
        .set("fill", fill)
}

/// A ring: the outer circle followed by the inner one.
pub fn ring_group(pair: &RingPair) -> Group {
    Group::new()
        .set("class", "ring")
        .add(circle_element(&pair.outer))
        .add(circle_element(&pair.inner))
}

/// Rounded rectangle clip path named after the polygon's label.
pub fn clip_path(polygon: &Polygon, corner_radius: f64) -> Option<ClipPath> {
    let rect = polygon.clip_rect()?;
    let rounded = Rectangle::new()
        .set("x", rect.x0)
        .set("y", rect.y0)
        .set("rx", corner_radius)
        .set("ry", corner_radius)
        .set("width", rect.width())
        .set("height", rect.height());
    Some(ClipPath::new().set("id", polygon.label.as_str()).add(rounded))
}

/// Every ring's group, one per line, for embedding in an existing image.
pub fn rings_markup(rings: &RingSet) -> String {
    rings
        .iter()
        .map(|pair| ring_group(pair).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A standalone `width` x `height` document with clip paths and rings.
pub fn document(
    rings: &RingSet,
    polygons: &[Polygon],
    width: f64,
    height: f64,
    corner_radius: f64,
) -> Document {
    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height));

    let clips: Vec<ClipPath> = polygons
        .iter()
        .filter_map(|p| clip_path(p, corner_radius))
        .collect();
    if !clips.is_empty() {
        let defs = clips.into_iter().fold(Definitions::new(), |defs, c| defs.add(c));
        doc = doc.add(defs);
    }

    rings.iter().fold(doc, |doc, pair| doc.add(ring_group(pair)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RingConfig;
    use kurbo::Point;

    fn square(label: &str) -> Polygon {
        Polygon {
            label: label.to_string(),
            score: 0.9,
            vertices: vec![
                Point::new(10.0, 20.0),
                Point::new(60.0, 20.0),
                Point::new(60.0, 90.0),
                Point::new(10.0, 90.0),
            ],
        }
    }

    #[test]
    fn test_circle_attributes() {
        let ring = RingPair::at_anchor("dog", Point::new(40.0, 20.0), &RingConfig::default());
        let outer = circle_element(&ring.outer).to_string();
        for attr in [
            r#"id="outer-circle-dog""#,
            r#"class="outer-circle""#,
            r#"cx="30""#,
            r#"cy="30""#,
            r#"r="10""#,
            r#"stroke="white""#,
            r#"stroke-width="1""#,
            r#"fill="none""#,
        ] {
            assert!(outer.contains(attr), "{attr} missing from {outer}");
        }
        let inner = circle_element(&ring.inner).to_string();
        assert!(inner.contains(r#"r="5""#));
        assert!(inner.contains(r#"fill="white""#));
    }

    #[test]
    fn test_fractional_radius_kept() {
        let mut ring = RingPair::at_anchor("cat", Point::new(40.0, 20.0), &RingConfig::default());
        ring.outer.set_radius(2.5);
        assert!(circle_element(&ring.outer).to_string().contains(r#"r="2.5""#));
    }

    #[test]
    fn test_ring_group_orders_outer_first() {
        let ring = RingPair::at_anchor("dog", Point::new(40.0, 20.0), &RingConfig::default());
        let group = ring_group(&ring).to_string();
        let outer = group.find("outer-circle-dog").unwrap();
        let inner = group.find("inner-circle-dog").unwrap();
        assert!(outer < inner);
        assert!(group.starts_with("<g"));
    }

    #[test]
    fn test_clip_path_rect() {
        let clip = clip_path(&square("Cat_1"), 10.0).unwrap().to_string();
        assert!(clip.contains(r#"id="Cat_1""#));
        for attr in [
            r#" x="10""#,
            r#" y="20""#,
            r#"rx="10""#,
            r#"ry="10""#,
            r#"width="50""#,
            r#"height="70""#,
        ] {
            assert!(clip.contains(attr), "{attr} missing from {clip}");
        }

        let mut line = square("Cat_2");
        line.vertices.truncate(2);
        assert!(clip_path(&line, 10.0).is_none());
    }

    #[test]
    fn test_document_wraps_rings() {
        let config = RingConfig::default();
        let polygons = [square("Cat_1")];
        let rings = RingSet::for_polygons(&polygons, &config);
        let doc = document(&rings, &polygons, 640.0, 480.0, 10.0).to_string();
        assert!(doc.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(doc.contains(r#"width="640""#));
        assert!(doc.contains(r#"viewBox="0 0 640 480""#));
        assert!(doc.contains("<clipPath"));
        assert!(doc.contains("outer-circle-Cat_1"));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert_eq!(rings_markup(&rings).matches("<g").count(), 1);
    }

    #[test]
    fn test_document_without_polygons_has_no_defs() {
        let doc = document(&RingSet::new(), &[], 10.0, 10.0, 10.0).to_string();
        assert!(!doc.contains("<defs"));
        assert!(rings_markup(&RingSet::new()).is_empty());
    }
}
