//! Molecule->Array utilities shared by the graph featurizers.
//!
//! These build the raw, unnormalized inputs: the atomic number of every atom
//! slot and the bond adjacency matrix. When an `out_size` is given both are
//! zero-padded up to that many slots. Nothing is ever truncated.
use crate::error::{Error, Result};
use crate::Molecule;
use candle_core::{Device, Tensor};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How bonds are written into the raw adjacency matrix.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyWeighting {
    /// Every bond contributes 1.0 regardless of its order.
    #[default]
    Binary,
    /// Every bond contributes [`BondOrder::weight`](crate::BondOrder::weight).
    BondOrder,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyOptions {
    #[serde(default)]
    pub weighting: AdjacencyWeighting,
    /// Put 1.0 on the diagonal of every real atom.
    #[serde(default)]
    pub self_connection: bool,
}

/// Fail with [`Error::Oversize`] if the molecule holds more atoms than `max_atoms`.
pub fn check_num_atoms(mol: &Molecule, max_atoms: Option<usize>) -> Result<()> {
    match max_atoms {
        Some(limit) if mol.get_size() > limit => Err(Error::Oversize {
            num_atoms: mol.get_size(),
            limit,
        }),
        _ => Ok(()),
    }
}

// number of slots for a molecule under the out_size padding contract
fn padded_len(mol: &Molecule, out_size: Option<usize>) -> Result<usize> {
    let n = mol.get_size();
    match out_size {
        None => Ok(n),
        Some(k) if k >= n => Ok(k),
        Some(k) => Err(Error::Oversize {
            num_atoms: n,
            limit: k,
        }),
    }
}

/// Atomic numbers in atom order, zero padded to `out_size` slots.
pub fn construct_atomic_number_array(mol: &Molecule, out_size: Option<usize>) -> Result<Vec<u32>> {
    let len = padded_len(mol, out_size)?;
    let mut atom_array = vec![0u32; len];
    for (slot, z) in atom_array.iter_mut().zip(mol.iter_atomic_numbers()) {
        *slot = z;
    }
    Ok(atom_array)
}

/// Row-major `len x len` raw adjacency matrix, zero padded to `out_size` slots.
pub fn construct_adj_matrix(
    mol: &Molecule,
    out_size: Option<usize>,
    options: AdjacencyOptions,
) -> Result<Vec<f32>> {
    let len = padded_len(mol, out_size)?;
    let mut adj = vec![0f32; len * len];
    for bond in mol.get_bonds() {
        let (i, j) = bond.get_atom_indices();
        let w = match options.weighting {
            AdjacencyWeighting::Binary => 1.0,
            AdjacencyWeighting::BondOrder => bond.get_order().weight(),
        };
        adj[i * len + j] = w;
        adj[j * len + i] = w;
    }
    if options.self_connection {
        for i in 0..mol.get_size() {
            adj[i * len + i] = 1.0;
        }
    }
    Ok(adj)
}

/// [`construct_atomic_number_array`] as a `U32` tensor of shape `(len,)`.
pub fn atomic_number_tensor(
    mol: &Molecule,
    out_size: Option<usize>,
    device: &Device,
) -> Result<Tensor> {
    let atom_array = construct_atomic_number_array(mol, out_size)?;
    let len = atom_array.len();
    Ok(Tensor::from_vec(atom_array, (len,), device)?)
}

/// [`construct_adj_matrix`] as an `F32` tensor of shape `(len, len)`.
pub fn adjacency_tensor(
    mol: &Molecule,
    out_size: Option<usize>,
    options: AdjacencyOptions,
    device: &Device,
) -> Result<Tensor> {
    let len = padded_len(mol, out_size)?;
    let adj = construct_adj_matrix(mol, out_size, options)?;
    Ok(Tensor::from_vec(adj, (len, len), device)?)
}
