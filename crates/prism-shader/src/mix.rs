//! Mix RGB node evaluation.
//!
//! [`mix_rgb`] is the pure evaluation used by the CPU shading path.
//! [`mix_rgb_into`] matches the device kernel calling convention: a raw
//! mode id and an optional output slot.

use glam::Vec3;
use prism_core::Color;

use crate::blend::{ramp_blend, BlendMode};
use crate::saturate::Saturate;

/// Blend `color2` into `color1` using `mode`.
///
/// `factor` is saturated to `[0, 1]` before blending, so out-of-range
/// factors act like the nearest bound and NaN acts like 0. With `clamp`
/// set, every output channel is saturated to `[0, 1]` as well.
///
/// Only the RGB channels are read; the returned color always has `a = 0`.
pub fn mix_rgb(mode: BlendMode, clamp: bool, factor: f32, color1: Color, color2: Color) -> Color {
    let mut result = Vec3::from_array(color1.to_rgb_array());
    let other = Vec3::from_array(color2.to_rgb_array());

    ramp_blend(mode, &mut result, factor.saturate(), other);

    finish(result, clamp)
}

/// Evaluate the node with a raw mode id, writing into `out`.
///
/// Does nothing when `out` is `None`. An id with no matching [`BlendMode`]
/// skips the blend step, so `out` receives `color1`'s RGB (still clamped if
/// requested, with a zeroed 4th channel).
pub fn mix_rgb_into(
    mode_id: u32,
    clamp: bool,
    factor: f32,
    color1: Color,
    color2: Color,
    out: Option<&mut Color>,
) {
    let Some(out) = out else {
        tracing::trace!(mode_id, "mix_rgb: no output slot, skipping");
        return;
    };

    *out = match BlendMode::from_id(mode_id) {
        Some(mode) => mix_rgb(mode, clamp, factor, color1, color2),
        None => {
            tracing::trace!(mode_id, "mix_rgb: unknown blend mode id, passing color1 through");
            finish(Vec3::from_array(color1.to_rgb_array()), clamp)
        }
    };
}

#[inline]
fn finish(result: Vec3, clamp: bool) -> Color {
    let result = if clamp { result.saturate() } else { result };
    Color::from_rgb_array(result.to_array())
}
