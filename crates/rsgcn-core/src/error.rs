//! Error types for molecule construction and featurization.

use thiserror::Error;

/// Errors raised while building molecules or turning them into tensors.
///
/// None of these are retryable: featurization is deterministic, so running the
/// same molecule through the same configuration reproduces the same error.
#[derive(Debug, Error)]
pub enum Error {
    /// The padding target is smaller than the largest molecule accepted.
    ///
    /// Raised once, when a featurizer is constructed.
    #[error("max_atoms {max_atoms} must be equal to or smaller than out_size {out_size}")]
    Configuration { max_atoms: usize, out_size: usize },

    /// Replication multiplier must be at least 1.
    #[error("multiplier must be >= 1, got {0}")]
    InvalidMultiplier(usize),

    /// The molecule has more atoms than the configured limit.
    ///
    /// Raised per call. Callers typically skip such molecules.
    #[error("number of atoms in molecule ({num_atoms}) exceeds limit ({limit})")]
    Oversize { num_atoms: usize, limit: usize },

    /// A bond references an atom outside the molecule, or bonds an atom to itself.
    #[error("invalid bond between atoms {atom1} and {atom2} in a molecule of {num_atoms} atoms")]
    InvalidBond {
        atom1: usize,
        atom2: usize,
        num_atoms: usize,
    },

    #[error("unknown bond order code: {0}")]
    UnknownBondOrder(i32),

    /// Tensor backend failure.
    #[error(transparent)]
    Candle(#[from] candle_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
