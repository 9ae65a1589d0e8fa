//! Blend modes and the per-mode blend table.
//!
//! [`ramp_blend`] is shared by every node that blends two colors by a
//! factor (mix nodes, color ramps). Each mode is evaluated on the RGB triple
//! only; the factor is expected in `[0, 1]` and callers normalize it first.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use prism_core::ShaderError;

use crate::hsv::{hsv_to_rgb, rgb_to_hsv};

/// Blend mode of a mix node.
///
/// Discriminants match the ids used in compiled node graphs and device
/// kernels, so `mode as u32` is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u32)]
pub enum BlendMode {
    #[default]
    Mix = 0,
    Add = 1,
    Multiply = 2,
    Subtract = 3,
    Screen = 4,
    Divide = 5,
    Difference = 6,
    Darken = 7,
    Lighten = 8,
    Overlay = 9,
    Dodge = 10,
    Burn = 11,
    Hue = 12,
    Saturation = 13,
    Value = 14,
    Color = 15,
    SoftLight = 16,
    LinearLight = 17,
    Exclusion = 18,
}

impl BlendMode {
    /// All blend modes, indexed by id.
    pub const ALL: [BlendMode; 19] = [
        Self::Mix,
        Self::Add,
        Self::Multiply,
        Self::Subtract,
        Self::Screen,
        Self::Divide,
        Self::Difference,
        Self::Darken,
        Self::Lighten,
        Self::Overlay,
        Self::Dodge,
        Self::Burn,
        Self::Hue,
        Self::Saturation,
        Self::Value,
        Self::Color,
        Self::SoftLight,
        Self::LinearLight,
        Self::Exclusion,
    ];

    /// Stable identifier used in node settings (e.g. `"SOFT_LIGHT"`).
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Mix => "MIX",
            Self::Add => "ADD",
            Self::Multiply => "MULTIPLY",
            Self::Subtract => "SUBTRACT",
            Self::Screen => "SCREEN",
            Self::Divide => "DIVIDE",
            Self::Difference => "DIFFERENCE",
            Self::Darken => "DARKEN",
            Self::Lighten => "LIGHTEN",
            Self::Overlay => "OVERLAY",
            Self::Dodge => "DODGE",
            Self::Burn => "BURN",
            Self::Hue => "HUE",
            Self::Saturation => "SATURATION",
            Self::Value => "VALUE",
            Self::Color => "COLOR",
            Self::SoftLight => "SOFT_LIGHT",
            Self::LinearLight => "LINEAR_LIGHT",
            Self::Exclusion => "EXCLUSION",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mix => "Mix",
            Self::Add => "Add",
            Self::Multiply => "Multiply",
            Self::Subtract => "Subtract",
            Self::Screen => "Screen",
            Self::Divide => "Divide",
            Self::Difference => "Difference",
            Self::Darken => "Darken",
            Self::Lighten => "Lighten",
            Self::Overlay => "Overlay",
            Self::Dodge => "Color Dodge",
            Self::Burn => "Color Burn",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Value => "Value",
            Self::Color => "Color",
            Self::SoftLight => "Soft Light",
            Self::LinearLight => "Linear Light",
            Self::Exclusion => "Exclusion",
        }
    }

    /// Look up a mode by its numeric id.
    pub fn from_id(id: u32) -> Option<Self> {
        usize::try_from(id).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for BlendMode {
    type Err = ShaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShaderError::UnknownBlendMode { name: s.to_string() })
    }
}

impl TryFrom<u32> for BlendMode {
    type Error = ShaderError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(ShaderError::UnknownBlendModeId { id })
    }
}

impl From<BlendMode> for u32 {
    fn from(mode: BlendMode) -> Self {
        mode as u32
    }
}

/// Apply `f` to each channel pair of `col` and `other`.
#[inline]
fn per_channel(col: Vec3, other: Vec3, f: impl Fn(f32, f32) -> f32) -> Vec3 {
    Vec3::new(f(col.x, other.x), f(col.y, other.y), f(col.z, other.z))
}

/// Blend `other` into `col` in place using `mode`, weighted by `fac`.
///
/// Most modes interpolate between `col` and the mode's result, so `fac = 0`
/// leaves `col` untouched for in-range inputs. Lighten, Dodge, Burn and
/// Exclusion can still move out-of-range channels at `fac = 0`.
///
/// A NaN channel in `col` stays NaN, except where the mode pins the channel
/// to a bound regardless of its value: Dodge with `fac * other >= 1` gives 1,
/// Burn with `1 - fac + fac * other <= 0` gives 0, and Exclusion floors at 0.
/// The HSV-based modes turn the whole triple NaN.
pub fn ramp_blend(mode: BlendMode, col: &mut Vec3, fac: f32, other: Vec3) {
    let facm = 1.0 - fac;

    match mode {
        BlendMode::Mix => *col = *col * facm + other * fac,
        BlendMode::Add => *col += other * fac,
        BlendMode::Multiply => *col *= Vec3::splat(facm) + other * fac,
        BlendMode::Subtract => *col -= other * fac,
        BlendMode::Screen => {
            *col = Vec3::ONE - (Vec3::splat(facm) + (Vec3::ONE - other) * fac) * (Vec3::ONE - *col);
        }
        BlendMode::Divide => {
            // Channels divided by zero are left as-is.
            *col = per_channel(*col, other, |c, o| {
                if o != 0.0 {
                    facm * c + fac * c / o
                } else {
                    c
                }
            });
        }
        BlendMode::Difference => {
            *col = per_channel(*col, other, |c, o| facm * c + fac * (c - o).abs());
        }
        BlendMode::Darken => {
            *col = per_channel(*col, other, |c, o| c.min(o) * fac + c * facm);
        }
        BlendMode::Lighten => {
            *col = per_channel(*col, other, |c, o| {
                let lit = fac * o;
                if lit > c {
                    lit
                } else {
                    c
                }
            });
        }
        BlendMode::Overlay => {
            *col = per_channel(*col, other, |c, o| {
                if c < 0.5 {
                    c * (facm + 2.0 * fac * o)
                } else {
                    1.0 - (facm + 2.0 * fac * (1.0 - o)) * (1.0 - c)
                }
            });
        }
        BlendMode::Dodge => {
            *col = per_channel(*col, other, |c, o| {
                if c == 0.0 {
                    return c;
                }
                let denom = 1.0 - fac * o;
                if denom <= 0.0 {
                    1.0
                } else {
                    let q = c / denom;
                    if q > 1.0 {
                        1.0
                    } else {
                        q
                    }
                }
            });
        }
        BlendMode::Burn => {
            *col = per_channel(*col, other, |c, o| {
                let denom = facm + fac * o;
                if denom <= 0.0 {
                    0.0
                } else {
                    (1.0 - (1.0 - c) / denom).clamp(0.0, 1.0)
                }
            });
        }
        BlendMode::Hue => {
            let other_hsv = rgb_to_hsv(other);
            if other_hsv.y != 0.0 {
                let hsv = rgb_to_hsv(*col);
                let tinted = hsv_to_rgb(Vec3::new(other_hsv.x, hsv.y, hsv.z));
                *col = *col * facm + tinted * fac;
            }
        }
        BlendMode::Saturation => {
            let hsv = rgb_to_hsv(*col);
            if hsv.y != 0.0 {
                let other_hsv = rgb_to_hsv(other);
                *col = hsv_to_rgb(Vec3::new(hsv.x, facm * hsv.y + fac * other_hsv.y, hsv.z));
            }
        }
        BlendMode::Value => {
            let hsv = rgb_to_hsv(*col);
            let other_hsv = rgb_to_hsv(other);
            *col = hsv_to_rgb(Vec3::new(hsv.x, hsv.y, facm * hsv.z + fac * other_hsv.z));
        }
        BlendMode::Color => {
            let other_hsv = rgb_to_hsv(other);
            if other_hsv.y != 0.0 {
                let hsv = rgb_to_hsv(*col);
                let tinted = hsv_to_rgb(Vec3::new(other_hsv.x, other_hsv.y, hsv.z));
                *col = *col * facm + tinted * fac;
            }
        }
        BlendMode::SoftLight => {
            *col = per_channel(*col, other, |c, o| {
                let screen = 1.0 - (1.0 - o) * (1.0 - c);
                facm * c + fac * ((1.0 - c) * o * c + c * screen)
            });
        }
        BlendMode::LinearLight => {
            *col = per_channel(*col, other, |c, o| {
                if o > 0.5 {
                    c + fac * (2.0 * (o - 0.5))
                } else {
                    c + fac * (2.0 * o - 1.0)
                }
            });
        }
        BlendMode::Exclusion => {
            *col = per_channel(*col, other, |c, o| {
                (facm * c + fac * (c + o - 2.0 * c * o)).max(0.0)
            });
        }
    }
}
