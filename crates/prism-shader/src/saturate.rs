//! Unit-range clamping for shader values.
//!
//! NaN saturates to 0 and infinities saturate to the nearest bound, so the
//! result is always inside `[0, 1]` (unlike `f32::clamp`, which keeps NaN).

use glam::Vec3;

/// Clamp a value into `[0, 1]`.
pub trait Saturate {
    fn saturate(self) -> Self;
}

impl Saturate for f32 {
    #[inline]
    fn saturate(self) -> Self {
        // `max` returns the non-NaN operand.
        self.max(0.0).min(1.0)
    }
}

impl Saturate for Vec3 {
    #[inline]
    fn saturate(self) -> Self {
        Vec3::new(self.x.saturate(), self.y.saturate(), self.z.saturate())
    }
}
