//! rsgcn-featurizers
//!
//! Molecule -> Tensor featurizers for renormalized spectral graph convolution (RSGCN) models.
//!
//! - [`RSGCNFeaturizer`]: atomic numbers plus a dense, symmetrically normalized adjacency matrix
//! - [`SparseRSGCNFeaturizer`]: the same, with the adjacency matrix in coordinate form
//!
//! ```ignore
//! use rsgcn_featurizers::{device, AdjacencyFeaturizer, RSGCNConfig, RSGCNFeaturizer};
//! let featurizer = RSGCNFeaturizer::new(RSGCNConfig::builder().max_atoms(30).out_size(32).build())?;
//! let (atoms, adj) = featurizer.get_input_features(&mol, &device(true)?)?;
//! ```
use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::{Device, Result};

pub use config::RSGCNConfig;
pub use coo::dense_to_coo;
pub use rsgcn::{
    normalize_adjacency, replicate_block_diagonal, AdjacencyFeaturizer, RSGCNFeaturizer,
};
pub use rsgcn_core::{AdjacencyOptions, AdjacencyWeighting, Error, Molecule};
pub use sparse::SparseRSGCNFeaturizer;

mod config;
mod coo;
mod rsgcn;
mod sparse;

pub fn device(cpu: bool) -> Result<Device> {
    if cpu {
        Ok(Device::Cpu)
    } else if cuda_is_available() {
        Ok(Device::new_cuda(0)?)
    } else if metal_is_available() {
        Ok(Device::new_metal(0)?)
    } else {
        #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
        {
            tracing::info!(
                "Running on CPU, to run on GPU(metal), build with `--features metal`"
            );
        }
        #[cfg(not(all(target_os = "macos", target_arch = "aarch64")))]
        {
            tracing::info!("Running on CPU, to run on GPU, build with `--features cuda`");
        }
        Ok(Device::Cpu)
    }
}
