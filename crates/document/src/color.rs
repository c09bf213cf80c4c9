use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DocumentError, Result};

/// An RGB color used for run text and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Create a color from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Parse a color from a hex string like `"1F2D3C"` or `"#1F2D3C"`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DocumentError::InvalidColor {
                value: value.to_string(),
            });
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| DocumentError::InvalidColor {
                value: value.to_string(),
            })
        };
        Ok(Color {
            red: component(0..2)?,
            green: component(2..4)?,
            blue: component(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let color = Color::from_hex("1F2D3C").unwrap();
        assert_eq!(color, Color::new(0x1F, 0x2D, 0x3C));
    }

    #[test]
    fn test_from_hex_with_hash_prefix() {
        let color = Color::from_hex("#ff0000").unwrap();
        assert_eq!(color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("12345").is_err());
        assert!(Color::from_hex("12345G").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let color = Color::new(0x0A, 0xBC, 0xDE);
        assert_eq!(color.to_string(), "0ABCDE");
        assert_eq!(Color::from_hex(&color.to_string()).unwrap(), color);
    }
}
