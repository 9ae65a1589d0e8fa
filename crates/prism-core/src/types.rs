//! Core value types passed between shader nodes.

/// A linear RGBA color value.
///
/// Channels are unbounded `f32`s; shader nodes are free to produce values
/// outside `[0, 1]` unless they clamp explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The red, green and blue channels, ignoring alpha.
    pub const fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from three channels with the 4th channel zeroed.
    ///
    /// This is the layout shader nodes write: the 4th slot is padding, not
    /// coverage.
    pub const fn from_rgb_array([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b, a: 0.0 }
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::from_rgb_array(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_array_zeroes_fourth_channel() {
        let c = Color::from_rgb_array([0.25, 0.5, 2.0]);
        assert_eq!(c, Color::rgba(0.25, 0.5, 2.0, 0.0));
        assert_eq!(Color::rgba(0.1, 0.2, 0.3, 0.9).to_rgb_array(), [0.1, 0.2, 0.3]);
        assert_eq!(Color::from([1.0, 1.0, 1.0]).a, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = Color::rgba(0.5, -1.0, 3.0, 0.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":0.5,"g":-1.0,"b":3.0,"a":0.0}"#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
