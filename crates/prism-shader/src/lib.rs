//! Mix RGB shader node for the Prism shading system.
//!
//! Blends two colors by one of the [`BlendMode`]s, weighted by a factor that
//! is always normalized to `[0, 1]`, with an optional clamp of the result.
//!
//! ```
//! use prism_core::Color;
//! use prism_shader::{mix_rgb, BlendMode};
//!
//! let out = mix_rgb(BlendMode::Mix, true, 0.5, Color::RED, Color::GREEN);
//! assert_eq!(out, Color::rgba(0.5, 0.5, 0.0, 0.0));
//! ```

pub mod blend;
pub mod hsv;
pub mod mix;
pub mod node;
pub mod saturate;

pub use blend::{ramp_blend, BlendMode};
pub use mix::{mix_rgb, mix_rgb_into};
pub use node::MixRgbNode;
pub use saturate::Saturate;
