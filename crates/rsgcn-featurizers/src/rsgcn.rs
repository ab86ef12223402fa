//! RSGCN Featurizer
//!
//! Turns a [`Molecule`] into the two inputs of a renormalized spectral graph
//! convolution network:
//!
//! - atomic numbers, `U32` tensor of shape `[atoms]`
//! - symmetrically normalized adjacency, `F32` tensor of shape `[atoms, atoms]`
//!
//! `atoms` is the molecule size, or `out_size` when padding is configured,
//! times the replication `multiplier`.
use crate::config::RSGCNConfig;
use candle_core::{Device, Tensor};
use rsgcn_core::construct::{adjacency_tensor, atomic_number_tensor, check_num_atoms};
use rsgcn_core::{Molecule, Result};

/// Produces the dense `(atomic_numbers, adjacency)` pair for a molecule.
///
/// The sparse featurizer is generic over this trait so alternative dense
/// featurizers can be swapped in.
pub trait AdjacencyFeaturizer {
    fn get_input_features(&self, mol: &Molecule, device: &Device) -> Result<(Tensor, Tensor)>;
}

fn log_construction(config: &RSGCNConfig) {
    tracing::info!(
        multiplier = config.multiplier,
        max_atoms = ?config.max_atoms,
        out_size = ?config.out_size,
        "rsgcn featurizer configured"
    );
}

#[derive(Debug, Clone)]
pub struct RSGCNFeaturizer {
    config: RSGCNConfig,
}

impl RSGCNFeaturizer {
    pub fn new(config: RSGCNConfig) -> Result<Self> {
        Self::new_with_observer(config, log_construction)
    }

    /// Like [`RSGCNFeaturizer::new`], but hands the validated config to `observer`
    /// instead of logging it.
    pub fn new_with_observer<F>(config: RSGCNConfig, observer: F) -> Result<Self>
    where
        F: FnOnce(&RSGCNConfig),
    {
        config.validate()?;
        observer(&config);
        Ok(Self { config })
    }

    pub fn config(&self) -> &RSGCNConfig {
        &self.config
    }
}

impl AdjacencyFeaturizer for RSGCNFeaturizer {
    fn get_input_features(&self, mol: &Molecule, device: &Device) -> Result<(Tensor, Tensor)> {
        check_num_atoms(mol, self.config.max_atoms)?;
        let atom_array = atomic_number_tensor(mol, self.config.out_size, device)?;
        let adj_array =
            adjacency_tensor(mol, self.config.out_size, self.config.adjacency, device)?;
        let adj_array = normalize_adjacency(&adj_array)?;

        if self.config.multiplier > 1 {
            return replicate_block_diagonal(&atom_array, &adj_array, self.config.multiplier);
        }
        Ok((atom_array, adj_array))
    }
}

/// `A'[i, j] = A[i, j] / sqrt(deg[i]) / sqrt(deg[j])` with `deg` the row sums of `A`.
///
/// Rows with zero degree are not special cased: their scale factor is `+inf`,
/// so an isolated atom or a padding slot turns its row and column into `NaN`.
pub fn normalize_adjacency(adj: &Tensor) -> Result<Tensor> {
    // [atoms, 1]
    let degree = adj.sum_keepdim(1)?;
    // counting needs a host copy of the degrees, so only do it when someone listens
    if tracing::enabled!(tracing::Level::DEBUG) {
        let zero_degree = degree
            .flatten_all()?
            .to_vec1::<f32>()?
            .into_iter()
            .filter(|&d| d == 0.0)
            .count();
        if zero_degree > 0 {
            tracing::debug!(zero_degree, "adjacency has rows with zero degree");
        }
    }
    let degree_sqrt_inv = degree.sqrt()?.recip()?;
    let adj = adj.broadcast_mul(&degree_sqrt_inv)?;
    Ok(adj.broadcast_mul(&degree_sqrt_inv.t()?)?)
}

/// Tile `mult` disconnected copies of a graph into one larger graph.
///
/// The atom vector is repeated `mult` times and the adjacency matrix is placed
/// `mult` times along the diagonal. Everything off the diagonal blocks is zero.
pub fn replicate_block_diagonal(
    atom_array: &Tensor,
    adj_array: &Tensor,
    mult: usize,
) -> Result<(Tensor, Tensor)> {
    let n_atoms = atom_array.dim(0)?;
    let total = n_atoms * mult;
    if n_atoms == 0 {
        return Ok((
            Tensor::zeros(total, atom_array.dtype(), atom_array.device())?,
            Tensor::zeros((total, total), adj_array.dtype(), adj_array.device())?,
        ));
    }
    let x_atom_array = Tensor::cat(&vec![atom_array; mult], 0)?;

    // row block k: [zeros(n, n*k) | adj | zeros(n, n*(mult-k-1))]
    let (dtype, device) = (adj_array.dtype(), adj_array.device());
    let row_blocks = (0..mult)
        .map(|k| {
            let left = n_atoms * k;
            let right = n_atoms * (mult - k - 1);
            let mut parts = Vec::with_capacity(3);
            if left > 0 {
                parts.push(Tensor::zeros((n_atoms, left), dtype, device)?);
            }
            parts.push(adj_array.clone());
            if right > 0 {
                parts.push(Tensor::zeros((n_atoms, right), dtype, device)?);
            }
            Tensor::cat(&parts, 1)
        })
        .collect::<candle_core::Result<Vec<_>>>()?;
    let x_adj_array = Tensor::cat(&row_blocks, 0)?;
    Ok((x_atom_array, x_adj_array))
}
