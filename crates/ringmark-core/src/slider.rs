//! Size slider state.
//!
//! The slider remembers the value it reported on the previous change event so
//! that the size handler can grow or shrink rings by the difference instead of
//! setting an absolute size.

use serde::{Deserialize, Serialize};

/// A change event reported by a slider-like control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderEvent {
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl SliderEvent {
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        Self { value, min, max }
    }
}

/// State owned by whatever manages the size slider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSlider {
    pub min: i32,
    pub max: i32,
    pub value: i32,
    /// Value seen by the previous change event. `None` until seeded.
    #[serde(default)]
    pub former_value: Option<i32>,
}

impl SizeSlider {
    /// Create a slider whose former value is seeded with its initial value.
    pub fn new(min: i32, max: i32, value: i32) -> Self {
        Self {
            min,
            max,
            value,
            former_value: Some(value),
        }
    }

    /// Seed the former value from an attribute string, `parseInt`-style.
    pub fn with_former_attribute(mut self, attribute: &str) -> Self {
        self.former_value = parse_int(attribute);
        self
    }

    /// Build a change event for `value` using this slider's bounds.
    pub fn event(&self, value: i32) -> SliderEvent {
        SliderEvent::new(value, self.min, self.max)
    }

    /// Record `value` as the current and former value, returning the previous
    /// former value.
    pub fn record(&mut self, value: i32) -> Option<i32> {
        self.value = value;
        self.former_value.replace(value)
    }
}

/// Parse the leading integer of `text` the way a browser's `parseInt` does:
/// skip leading whitespace, accept one sign, then read decimal digits and
/// ignore whatever follows. Returns `None` when there are no digits or the
/// number does not fit.
pub fn parse_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
