//! Hex color conversion for configuration files.
//!
//! Colors are written as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.

use egui::Color32;

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Format a color as hex, dropping the alpha channel when opaque
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// `#[serde(with = "serde_hex")]` adapter for `Color32` fields
pub mod serde_hex {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::color_to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hex_color(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {}", raw)))
    }
}
