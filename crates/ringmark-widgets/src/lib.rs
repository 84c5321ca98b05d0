//! egui controls for ring markers.
//!
//! - **Colors**: preset ring swatches and the `PickedColor` bridge into the core handlers
//! - **Controls**: the color/size panel and the `RingAction` it emits
//! - **Layout**: section labels

pub mod colors;
pub mod controls;
pub mod layout;

pub use colors::{PRESET_COLORS, PickedColor, PresetColor, RingSwatch, colors_match};
pub use controls::{RingAction, RingControls, apply_action};
pub use layout::section_label;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small button size (color swatches)
    pub const SMALL: f32 = 20.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Backdrop behind ring swatches
    pub const SWATCH_BG: Color32 = Color32::from_gray(40);
}
