//! Sparse RSGCN Featurizer
//!
//! Same features as [`RSGCNFeaturizer`], with the adjacency matrix returned in
//! coordinate form: `(atomic_numbers, values, rows, cols)`.
use crate::config::RSGCNConfig;
use crate::coo::dense_to_coo;
use crate::rsgcn::{AdjacencyFeaturizer, RSGCNFeaturizer};
use candle_core::{Device, Tensor};
use rsgcn_core::{Molecule, Result};

/// Wraps a dense featurizer and converts its adjacency output to COO.
#[derive(Debug, Clone)]
pub struct SparseRSGCNFeaturizer<F = RSGCNFeaturizer> {
    inner: F,
}

impl SparseRSGCNFeaturizer<RSGCNFeaturizer> {
    /// Validates `config` exactly as [`RSGCNFeaturizer::new`] does.
    pub fn new(config: RSGCNConfig) -> Result<Self> {
        Ok(Self::from_featurizer(RSGCNFeaturizer::new(config)?))
    }
}

impl<F: AdjacencyFeaturizer> SparseRSGCNFeaturizer<F> {
    pub fn from_featurizer(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Returns `(atomic_numbers, values, rows, cols)`.
    pub fn get_input_features(
        &self,
        mol: &Molecule,
        device: &Device,
    ) -> Result<(Tensor, Tensor, Tensor, Tensor)> {
        let (atom_array, adj_array) = self.inner.get_input_features(mol, device)?;
        let (values, rows, cols) = dense_to_coo(&adj_array)?;
        Ok((atom_array, values, rows, cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsgcn_core::Error;
    use rsgcn_test_data::TestMolecule;

    #[test]
    fn test_inherits_config_validation() {
        let bad = RSGCNConfig::builder().max_atoms(5).out_size(3).build();
        assert!(matches!(
            SparseRSGCNFeaturizer::new(bad),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_propagates_oversize() {
        let t = TestMolecule::hexane();
        let mol = Molecule::from_bond_table(t.atomic_numbers, t.bonds).unwrap();
        let featurizer =
            SparseRSGCNFeaturizer::new(RSGCNConfig::builder().max_atoms(2).build()).unwrap();
        assert!(matches!(
            featurizer.get_input_features(&mol, &Device::Cpu),
            Err(Error::Oversize {
                num_atoms: 6,
                limit: 2
            })
        ));
    }

    #[test]
    fn test_replicated_sparse_offsets() -> anyhow::Result<()> {
        let t = TestMolecule::ethanol();
        let mol = Molecule::from_bond_table(t.atomic_numbers, t.bonds)?;
        let featurizer = SparseRSGCNFeaturizer::new(RSGCNConfig::builder().multiplier(2).build())?;
        let (atoms, values, rows, cols) = featurizer.get_input_features(&mol, &Device::Cpu)?;
        assert_eq!(atoms.to_vec1::<u32>()?, vec![6, 6, 8, 6, 6, 8]);
        assert_eq!(values.dims(), &[8]);
        assert_eq!(rows.to_vec1::<u32>()?, vec![0, 1, 1, 2, 3, 4, 4, 5]);
        assert_eq!(cols.to_vec1::<u32>()?, vec![1, 0, 2, 1, 4, 3, 5, 4]);
        Ok(())
    }
}
