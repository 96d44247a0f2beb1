use serde::{Deserialize, Serialize};

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#32cd32" or "32cd32".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scales each channel by `percent / 100`, used for dimmed tracks.
    pub fn dimmed(self, percent: u8) -> Self {
        let p = u16::from(percent.min(100));
        let scale = |c: u8| (u16::from(c) * p / 100) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Color::from_hex("#32cd32"), Some(Color::new(0x32, 0xcd, 0x32)));
        assert_eq!(Color::from_hex("FFD700"), Some(Color::new(0xff, 0xd7, 0x00)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Color::new(0xFF, 0x0A, 0x00).to_hex(), "#ff0a00");
    }

    #[test]
    fn dimmed_scales_channels() {
        let c = Color::new(200, 100, 50).dimmed(50);
        assert_eq!(c, Color::new(100, 50, 25));
    }
}
