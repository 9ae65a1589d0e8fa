//! Error types for Prism shader nodes.

use thiserror::Error;

/// Errors raised while configuring a shader node.
///
/// Evaluating a node never fails; these only surface when turning external
/// settings (names, raw ids) into typed node parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    #[error("Unknown blend mode: {name}")]
    UnknownBlendMode { name: String },

    #[error("Unknown blend mode id: {id}")]
    UnknownBlendModeId { id: u32 },
}
