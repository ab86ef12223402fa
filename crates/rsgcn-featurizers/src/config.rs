use bon::Builder;
use rsgcn_core::{AdjacencyOptions, Error, Result};
use serde::{Deserialize, Serialize};

fn default_multiplier() -> usize {
    1
}

/// Settings shared by the dense and sparse RSGCN featurizers.
///
/// - `max_atoms`: molecules with more atoms are rejected. `None` means no limit.
/// - `out_size`: pad the returned arrays to exactly this many atom slots. `None` means no padding.
/// - `multiplier`: tile the graph `multiplier` times along the diagonal. Used for throughput tests.
///
/// ```
/// use rsgcn_featurizers::RSGCNConfig;
/// let config = RSGCNConfig::builder().max_atoms(9).out_size(12).build();
/// assert_eq!(config.multiplier, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct RSGCNConfig {
    #[serde(default)]
    pub max_atoms: Option<usize>,
    #[serde(default)]
    pub out_size: Option<usize>,
    #[builder(default = 1)]
    #[serde(default = "default_multiplier")]
    pub multiplier: usize,
    #[builder(default)]
    #[serde(default)]
    pub adjacency: AdjacencyOptions,
}

impl Default for RSGCNConfig {
    fn default() -> Self {
        Self {
            max_atoms: None,
            out_size: None,
            multiplier: 1,
            adjacency: AdjacencyOptions::default(),
        }
    }
}

impl RSGCNConfig {
    /// Build from the integer convention where any negative value means "unset".
    pub fn from_signed(max_atoms: i64, out_size: i64, multiplier: usize) -> Self {
        Self {
            max_atoms: usize::try_from(max_atoms).ok(),
            out_size: usize::try_from(out_size).ok(),
            multiplier,
            adjacency: AdjacencyOptions::default(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(max_atoms), Some(out_size)) = (self.max_atoms, self.out_size) {
            if max_atoms > out_size {
                return Err(Error::Configuration {
                    max_atoms,
                    out_size,
                });
            }
        }
        if self.multiplier == 0 {
            return Err(Error::InvalidMultiplier(self.multiplier));
        }
        Ok(())
    }
}
