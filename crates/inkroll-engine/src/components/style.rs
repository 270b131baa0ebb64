use serde::{Deserialize, Serialize};

/// RGBA color for vector drawing operations.
///
/// Serializes as a `#rrggbbaa` hex string; `#rrggbb` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Create a color from RGBA u8 values (0-255).
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 0.85, 0.2);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl TryFrom<String> for VectorColor {
    type Error = String;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Self::from_hex(&hex).ok_or_else(|| format!("invalid color {:?}, expected #rrggbb or #rrggbbaa", hex))
    }
}

impl From<VectorColor> for String {
    fn from(color: VectorColor) -> Self {
        color.to_hex()
    }
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Cosmetic drawing attributes for a body. Ignored by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStyle {
    /// Fill color; `None` draws the outline only.
    pub fill: Option<VectorColor>,
    /// Outline color and width.
    pub stroke: Option<(VectorColor, f32)>,
}

impl BodyStyle {
    pub fn filled(color: VectorColor) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn outlined(color: VectorColor, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some((color, width)),
        }
    }

    pub fn with_stroke(mut self, color: VectorColor, width: f32) -> Self {
        self.stroke = Some((color, width));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        let c = VectorColor::from_hex("#2c3e50").unwrap();
        assert!((c.r - 44.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 62.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 80.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);

        let c = VectorColor::from_hex("#ffffff80").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(VectorColor::from_hex("2c3e50"), None);
        assert_eq!(VectorColor::from_hex("#2c3e5"), None);
        assert_eq!(VectorColor::from_hex("#zzzzzz"), None);
        assert_eq!(VectorColor::from_hex("#é2c3e5"), None);
    }

    #[test]
    fn hex_survives_serde() {
        let c: VectorColor = serde_json::from_str("\"#2ecc71b2\"").unwrap();
        assert_eq!(c, VectorColor::rgba8(0x2e, 0xcc, 0x71, 0xb2));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#2ecc71b2\"");
        assert!(serde_json::from_str::<VectorColor>("\"teal\"").is_err());
    }

    #[test]
    fn style_builders() {
        let s = BodyStyle::filled(VectorColor::WHITE).with_stroke(VectorColor::BLACK, 3.0);
        assert_eq!(s.fill, Some(VectorColor::WHITE));
        assert_eq!(s.stroke, Some((VectorColor::BLACK, 3.0)));
        assert_eq!(BodyStyle::outlined(VectorColor::GRAY, 5.0).fill, None);
    }
}
