//! rsgcn-test-data
//!
//! A module to provide small reference molecules for use in testing.
//!
//! Each molecule is represented as a `TestMolecule`, a static table of atomic numbers
//! plus a bond list of `(atom1, atom2, bond_order_code)` triples using the integer
//! bond codes understood by `rsgcn_core::BondOrder::match_bond`.
//! Hydrogens are implicit unless a fixture says otherwise.

#[derive(Debug, Clone, Copy)]
/// Test Molecule
///
/// Example usage:
///
/// ```ignore
/// use rsgcn_core::Molecule;
/// use rsgcn_test_data::TestMolecule;
/// let t = TestMolecule::propanal_backbone();
/// let mol = Molecule::from_bond_table(t.atomic_numbers, t.bonds)?;
/// ```
pub struct TestMolecule {
    pub name: &'static str,
    pub atomic_numbers: &'static [u32],
    pub bonds: &'static [(usize, usize, i32)],
}

impl TestMolecule {
    /// C-C-O chain with single bonds. The worked example used throughout the docs.
    pub fn ethanol() -> Self {
        Self {
            name: "ethanol",
            atomic_numbers: &[6, 6, 8],
            bonds: &[(0, 1, 1), (1, 2, 1)],
        }
    }

    /// C-C=O, one double bond.
    pub fn acetaldehyde() -> Self {
        Self {
            name: "acetaldehyde",
            atomic_numbers: &[6, 6, 8],
            bonds: &[(0, 1, 1), (1, 2, 2)],
        }
    }

    /// C-C-C=O, used as a four atom chain with a double bond at the end.
    pub fn propanal_backbone() -> Self {
        Self {
            name: "propanal",
            atomic_numbers: &[6, 6, 6, 8],
            bonds: &[(0, 1, 1), (1, 2, 1), (2, 3, 2)],
        }
    }

    /// Benzene as a kekulized ring of alternating single/double bonds.
    pub fn benzene_kekule() -> Self {
        Self {
            name: "benzene",
            atomic_numbers: &[6, 6, 6, 6, 6, 6],
            bonds: &[(0, 1, 2), (1, 2, 1), (2, 3, 2), (3, 4, 1), (4, 5, 2), (5, 0, 1)],
        }
    }

    /// Benzene with aromatic bond codes.
    pub fn benzene_aromatic() -> Self {
        Self {
            name: "benzene",
            atomic_numbers: &[6, 6, 6, 6, 6, 6],
            bonds: &[(0, 1, 12), (1, 2, 12), (2, 3, 12), (3, 4, 12), (4, 5, 12), (5, 0, 12)],
        }
    }

    /// Sodium acetate drawn as two disconnected fragments. The sodium has no bonds.
    pub fn sodium_acetate() -> Self {
        Self {
            name: "sodium acetate",
            atomic_numbers: &[6, 6, 8, 8, 11],
            bonds: &[(0, 1, 1), (1, 2, 2), (1, 3, 1)],
        }
    }

    /// A lone methane carbon.
    pub fn methane() -> Self {
        Self {
            name: "methane",
            atomic_numbers: &[6],
            bonds: &[],
        }
    }

    /// Hexane, six carbons in a chain. Handy for exceeding small atom limits.
    pub fn hexane() -> Self {
        Self {
            name: "hexane",
            atomic_numbers: &[6, 6, 6, 6, 6, 6],
            bonds: &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1)],
        }
    }

    pub fn num_atoms(&self) -> usize {
        self.atomic_numbers.len()
    }

    /// All fixtures in which every atom carries at least one bond.
    pub fn connected() -> Vec<Self> {
        vec![
            Self::ethanol(),
            Self::acetaldehyde(),
            Self::propanal_backbone(),
            Self::benzene_kekule(),
            Self::benzene_aromatic(),
            Self::hexane(),
        ]
    }
}
