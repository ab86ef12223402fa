//! # rsgcn-core
//!
//! Molecular graph primitives for graph-convolution featurizers.
//!
//! __rsgcn-core__ provides:
//! * A minimal molecular graph ([`Molecule`]) of atoms and [`Bond`]s
//! * The shared [`Error`] type used across the workspace
//! * Extraction helpers that turn a molecule into raw atomic-number and adjacency arrays,
//!   optionally zero padded to a fixed size
//!
//! Normalization and replication live in `rsgcn-featurizers`.
//!
mod bonds;
pub mod construct;
mod error;
mod molecule;

pub use self::bonds::{Bond, BondOrder};
pub use self::construct::{AdjacencyOptions, AdjacencyWeighting};
pub use self::error::{Error, Result};
pub use self::molecule::Molecule;
