//! Color and size change handlers.
//!
//! Both handlers are synchronous and mutate the rings they are handed in
//! place. Neither keeps a reference to the ring set between calls; the slider's
//! former value is the only state that outlives a call, and it lives in the
//! caller's [`SizeSlider`].

use crate::color::ColorSource;
use crate::ring::RingSet;
use crate::slider::{SizeSlider, SliderEvent};
use thiserror::Error;

/// Radius change per slider step.
pub const STEP_VALUE: f64 = 1.0;

/// Radii never shrink below this.
pub const MIN_RADIUS: f64 = 1.0;

/// Size handler errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("Slider has no numeric former value; now recording {recorded}")]
    MissingFormerValue { recorded: i32 },
}

/// What a size change did to the rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeDelta {
    /// The slider reported the value it already had.
    Unchanged,
    /// Every radius grew by this amount.
    Grew(f64),
    /// Every radius shrank by this amount, floored at [`MIN_RADIUS`].
    Shrank(f64),
}

/// Apply the picked color to every ring: outer stroke, inner stroke and fill.
pub fn apply_color<C: ColorSource + ?Sized>(rings: &mut RingSet, source: &C) {
    let color = source.to_hex_string();
    for pair in rings.iter_mut() {
        pair.outer.style.set_stroke(&color);
        pair.inner.style.set_stroke(&color);
        pair.inner.style.set_fill(Some(color.as_str()));
    }
    log::debug!("Applied color {} to {} rings", color, rings.len());
}

/// Grow or shrink every ring by the slider's movement since the last event.
///
/// The slider's former value is replaced with `event.value` before anything
/// else, even when nothing moves.
pub fn apply_size(
    rings: &mut RingSet,
    slider: &mut SizeSlider,
    event: SliderEvent,
) -> Result<SizeDelta, SizeError> {
    let Some(former) = slider.record(event.value) else {
        log::warn!(
            "Size change to {} without a former value; rings left as-is",
            event.value
        );
        return Err(SizeError::MissingFormerValue {
            recorded: event.value,
        });
    };

    let steps = i64::from(event.value) - i64::from(former);
    let ratio = STEP_VALUE * steps.unsigned_abs() as f64;

    let delta = match steps {
        0 => return Ok(SizeDelta::Unchanged),
        s if s > 0 => {
            for pair in rings.iter_mut() {
                let out_r = pair.outer.whole_radius();
                let in_r = pair.inner.whole_radius();
                pair.outer.set_radius(out_r + ratio);
                pair.inner.set_radius(in_r + ratio);
            }
            SizeDelta::Grew(ratio)
        }
        _ => {
            for pair in rings.iter_mut() {
                let out_r = pair.outer.whole_radius();
                let in_r = pair.inner.whole_radius();
                pair.outer.set_radius((out_r - ratio).max(MIN_RADIUS));
                pair.inner.set_radius((in_r - ratio).max(MIN_RADIUS));
            }
            SizeDelta::Shrank(ratio)
        }
    };

    log::debug!(
        "Slider {} -> {} ({:?}) over {} rings",
        former,
        event.value,
        delta,
        rings.len()
    );
    Ok(delta)
}

/// Owns the rings and the slider state for a single marker layer.
#[derive(Debug, Clone, Default)]
pub struct RingController {
    pub rings: RingSet,
    pub slider: SizeSlider,
}

impl RingController {
    pub fn new(rings: RingSet, slider: SizeSlider) -> Self {
        Self { rings, slider }
    }

    /// Color picker changed.
    pub fn on_color_change<C: ColorSource + ?Sized>(&mut self, source: &C) {
        apply_color(&mut self.rings, source);
    }

    /// Size slider changed.
    pub fn on_size_change(&mut self, event: SliderEvent) -> Result<SizeDelta, SizeError> {
        apply_size(&mut self.rings, &mut self.slider, event)
    }
}
