//! RGB <-> HSV conversion for the component blend modes.
//!
//! Hue, saturation and value are all expressed in `[0, 1]`; a hue of 1.0
//! wraps to red like 0.0.

use glam::Vec3;

/// Convert RGB to HSV, packed as `(h, s, v)`.
///
/// Achromatic colors (all channels equal) get `h = s = 0`. A NaN in any
/// channel gives an all-NaN result.
pub fn rgb_to_hsv(rgb: Vec3) -> Vec3 {
    if rgb.is_nan() {
        return Vec3::NAN;
    }

    let max = rgb.max_element();
    let min = rgb.min_element();
    let chroma = max - min;

    let s = if max != 0.0 { chroma / max } else { 0.0 };
    if chroma == 0.0 {
        return Vec3::new(0.0, s, max);
    }

    let sector = if max == rgb.x {
        (rgb.y - rgb.z) / chroma
    } else if max == rgb.y {
        (rgb.z - rgb.x) / chroma + 2.0
    } else {
        (rgb.x - rgb.y) / chroma + 4.0
    };
    let h = (sector / 6.0).rem_euclid(1.0);

    Vec3::new(h, s, max)
}

/// Convert HSV, packed as `(h, s, v)`, back to RGB.
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let (h, s, v) = (hsv.x, hsv.y, hsv.z);
    let h6 = h * 6.0;

    // Fully saturated, full value ramp for this hue.
    let ramp = Vec3::new(
        (h6 - 3.0).abs() - 1.0,
        2.0 - (h6 - 2.0).abs(),
        2.0 - (h6 - 4.0).abs(),
    )
    .clamp(Vec3::ZERO, Vec3::ONE);

    ((ramp - Vec3::ONE) * s + Vec3::ONE) * v
}
