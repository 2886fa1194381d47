use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// RGBA color, stored in OME-XML as a signed 32-bit integer `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", from = "i32")]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel, 255 is opaque
    pub alpha: u8,
}

impl Color {
    /// Create a color from its four channels
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from red, green and blue
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    /// Decode the packed OME-XML integer form.
    pub fn from_rgba_i32(packed: i32) -> Self {
        let [red, green, blue, alpha] = packed.to_be_bytes();
        Self::new(red, green, blue, alpha)
    }

    /// Encode to the packed OME-XML integer form.
    pub fn to_rgba_i32(self) -> i32 {
        i32::from_be_bytes([self.red, self.green, self.blue, self.alpha])
    }
}

/// Opaque white, the schema default (`-1`)
impl Default for Color {
    fn default() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl From<Color> for i32 {
    fn from(color: Color) -> Self {
        color.to_rgba_i32()
    }
}

impl From<i32> for Color {
    fn from(packed: i32) -> Self {
        Color::from_rgba_i32(packed)
    }
}

/// `#RRGGBBAA`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Accepts `#RRGGBB`, `#RRGGBBAA` or the packed signed integer.
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let channel = |i: usize| {
                hex.get(i..i + 2)
                    .and_then(|c| u8::from_str_radix(c, 16).ok())
                    .ok_or_else(|| format!("invalid hex color '{s}'"))
            };
            return match hex.len() {
                6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
                8 => Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
                _ => Err(format!("invalid hex color '{s}'")),
            };
        }
        s.parse::<i32>()
            .map(Color::from_rgba_i32)
            .map_err(|e| format!("invalid color '{s}': {e}"))
    }
}
