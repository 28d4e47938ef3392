//! Error types for chain evaluation and leg configuration loading.
//!
//! The motor algebra itself is total and never produces these.

use std::path::PathBuf;

/// Errors raised by [`KinematicChain`](crate::chain::KinematicChain) and
/// [`LegConfig`](crate::config::LegConfig).
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// The number of joint values does not match the chain.
    #[error("expected {expected} joint values, got {got}")]
    JointCountMismatch { expected: usize, got: usize },

    /// A chain needs at least one joint.
    #[error("kinematic chain has no joints")]
    EmptyChain,

    /// Failed to read a configuration file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration was not valid JSON for a leg description.
    #[error("leg config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
