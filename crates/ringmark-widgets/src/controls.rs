//! Ring control panel: color swatches, a custom color button and the size slider.

use egui::color_picker::{Alpha, color_edit_button_srgba};
use egui::{Color32, Ui, Vec2};
use ringmark_core::{RingController, SizeError, SizeSlider, SliderEvent};

use crate::colors::{PRESET_COLORS, PickedColor, RingSwatch, colors_match};
use crate::layout::section_label;

/// Actions that can be triggered by the ring controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingAction {
    /// Color picker changed.
    SetColor(Color32),
    /// Size slider moved.
    SetSize(SliderEvent),
}

/// Route an action to the matching handler.
pub fn apply_action(controller: &mut RingController, action: RingAction) -> Result<(), SizeError> {
    match action {
        RingAction::SetColor(color) => {
            controller.on_color_change(&PickedColor(color));
            Ok(())
        }
        RingAction::SetSize(event) => controller.on_size_change(event).map(|_| ()),
    }
}

/// Color and size controls for a ring layer.
pub struct RingControls<'a> {
    color: &'a mut Color32,
    slider: &'a SizeSlider,
}

impl<'a> RingControls<'a> {
    /// `color` is the panel's current color and is updated when the user picks
    /// one. `slider` supplies the size slider's bounds and value.
    pub fn new(color: &'a mut Color32, slider: &'a SizeSlider) -> Self {
        Self { color, slider }
    }

    /// Show the controls and return the action the user triggered, if any.
    pub fn show(self, ui: &mut Ui) -> Option<RingAction> {
        let mut action = None;

        section_label(ui, "Color");
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);
            for preset in PRESET_COLORS {
                let selected = colors_match(*self.color, preset.color);
                let (clicked, _) = RingSwatch::new(preset.color, preset.name)
                    .selected(selected)
                    .show(ui);
                if clicked {
                    *self.color = preset.color;
                    action = Some(RingAction::SetColor(preset.color));
                }
            }

            let mut custom = *self.color;
            let picker = color_edit_button_srgba(ui, &mut custom, Alpha::Opaque);
            if picker.changed() {
                *self.color = custom;
                action = Some(RingAction::SetColor(custom));
            }
        });

        ui.add_space(8.0);
        section_label(ui, "Size");
        let mut value = self.slider.value;
        let range = self.slider.min..=self.slider.max;
        let slider = egui::Slider::new(&mut value, range).show_value(true);
        if ui.add(slider).changed() {
            action = Some(RingAction::SetSize(self.slider.event(value)));
        }

        if let Some(ref action) = action {
            log::debug!("Ring controls: {:?}", action);
        }
        action
    }
}
