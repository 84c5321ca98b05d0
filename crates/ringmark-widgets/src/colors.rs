//! Ring color swatches and the bridge from egui colors to the color handler.

use egui::{Color32, CursorIcon, Rect, Sense, Stroke, Ui, Vec2, vec2};
use ringmark_core::ColorSource;

use crate::{sizing, theme};

/// An egui color handed to the ring color handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedColor(pub Color32);

impl ColorSource for PickedColor {
    fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0.r(), self.0.g(), self.0.b())
    }
}

/// A named preset color.
#[derive(Clone, Copy)]
pub struct PresetColor {
    pub name: &'static str,
    pub color: Color32,
}

impl PresetColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Color32::from_rgb(r, g, b),
        }
    }
}

/// Quick-pick ring colors: white plus the Tailwind 500 shades that read well
/// on top of photos.
pub const PRESET_COLORS: &[PresetColor] = &[
    PresetColor::new("White", 255, 255, 255),
    PresetColor::new("Red", 239, 68, 68),
    PresetColor::new("Amber", 245, 158, 11),
    PresetColor::new("Lime", 132, 204, 22),
    PresetColor::new("Sky", 14, 165, 233),
    PresetColor::new("Indigo", 99, 102, 241),
    PresetColor::new("Pink", 236, 72, 153),
    PresetColor::new("Slate", 100, 116, 139),
];

/// Compare two colors ignoring alpha.
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// A clickable swatch drawn as a miniature ring marker.
pub struct RingSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: Vec2,
}

impl<'a> RingSwatch<'a> {
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: vec2(sizing::SMALL, sizing::SMALL),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let outer_radius = rect.width().min(rect.height()) / 2.0 - 1.0;

            // Dark backdrop so a white ring stays visible
            ui.painter()
                .circle_filled(center, outer_radius + 1.0, theme::SWATCH_BG);
            ui.painter()
                .circle_stroke(center, outer_radius - 1.0, Stroke::new(1.5, self.color));
            ui.painter()
                .circle_filled(center, outer_radius / 2.0, self.color);

            if self.selected {
                ui.painter()
                    .circle_stroke(center, outer_radius + 1.0, Stroke::new(2.0, theme::ACCENT));
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}
