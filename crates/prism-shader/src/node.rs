//! The Mix RGB node's stored settings.

use prism_core::{Color, ShaderError};

use crate::blend::BlendMode;
use crate::mix::mix_rgb;

/// Settings of a Mix RGB node, as stored in a node graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MixRgbNode {
    /// Blend mode applied to the two inputs.
    pub blend_type: BlendMode,
    /// Clamp the output to `[0, 1]`.
    pub use_clamp: bool,
}

impl MixRgbNode {
    /// Create a node with the given blend mode and no output clamp.
    pub fn new(blend_type: BlendMode) -> Self {
        Self { blend_type, use_clamp: false }
    }

    /// Build a node from string-keyed settings (e.g. `"MULTIPLY"`).
    pub fn from_params(blend_type: &str, use_clamp: bool) -> Result<Self, ShaderError> {
        let blend_type: BlendMode = blend_type.parse()?;
        tracing::debug!(%blend_type, use_clamp, "configured mix rgb node");
        Ok(Self { blend_type, use_clamp })
    }

    /// Set whether the output is clamped.
    pub fn with_clamp(mut self, use_clamp: bool) -> Self {
        self.use_clamp = use_clamp;
        self
    }

    /// Evaluate the node for one shading sample.
    pub fn evaluate(&self, fac: f32, color1: Color, color2: Color) -> Color {
        mix_rgb(self.blend_type, self.use_clamp, fac, color1, color2)
    }
}

impl From<BlendMode> for MixRgbNode {
    fn from(blend_type: BlendMode) -> Self {
        Self::new(blend_type)
    }
}
