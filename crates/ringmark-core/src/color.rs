//! Colors and the color-source seam used by the color handler.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Expected a #RRGGBB hex color, got: {0}")]
    InvalidHex(String),
}

/// Anything a color picker can hand to the color handler.
pub trait ColorSource {
    /// The picked color as a `#RRGGBB` string.
    fn to_hex_string(&self) -> String;
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#RRGGBB` (or `RRGGBB`), case-insensitive. Alpha is opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl ColorSource for SerializableColor {
    fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color that is already a hex string passes through untouched.
impl ColorSource for str {
    fn to_hex_string(&self) -> String {
        self.to_string()
    }
}
