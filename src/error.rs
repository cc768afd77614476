//! Error types for sketchmer.
//!
//! One exhaustive, strongly-typed enum covers everything the library can
//! report: bad parameters at construction or scan time, and counter-matrix
//! allocation failure. Misuse that would corrupt caller memory (a too-small
//! query buffer) is a panic, not an error value.

use thiserror::Error;

/// Errors reported by sketch construction and the sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchmerError {
    /// K-mer length outside the supported range (1-127).
    #[error("invalid k-mer length {k}: must be between {min} and {max}")]
    InvalidKmerLength { k: usize, min: u8, max: u8 },

    /// Sketch constructed with zero columns.
    #[error("sketch width must be at least 1")]
    ZeroWidth,

    /// Sketch constructed with zero rows.
    #[error("sketch depth must be at least 1")]
    ZeroDepth,

    /// The counter matrix could not be allocated.
    #[error("failed to allocate {bytes} bytes for the counter matrix")]
    Allocation { bytes: usize },
}
