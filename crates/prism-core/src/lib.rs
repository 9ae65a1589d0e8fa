//! Core value types and errors for the Prism shading nodes.
//!
//! This crate provides the foundational types used across the prism crates:
//! - Color values passed between shader nodes
//! - Error types for node configuration

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
