use super::bonds::{Bond, BondOrder};
use crate::error::{Error, Result};
use pdbtbx::Element;

/// Molecular graph: atoms in a fixed order plus an undirected bond list.
///
/// Atoms are stored by atomic number. Hydrogens are only present if the
/// caller added them explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    size: usize,
    atomic_numbers: Vec<u32>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Build a molecule, checking that every bond joins two distinct atoms of the molecule.
    pub fn new(atomic_numbers: Vec<u32>, bonds: Vec<Bond>) -> Result<Self> {
        let size = atomic_numbers.len();
        for bond in &bonds {
            let (atom1, atom2) = bond.get_atom_indices();
            if atom1 >= size || atom2 >= size || atom1 == atom2 {
                return Err(Error::InvalidBond {
                    atom1,
                    atom2,
                    num_atoms: size,
                });
            }
        }
        Ok(Molecule {
            size,
            atomic_numbers,
            bonds,
        })
    }

    pub fn from_elements<I>(elements: I, bonds: Vec<Bond>) -> Result<Self>
    where
        I: IntoIterator<Item = Element>,
    {
        let atomic_numbers = elements
            .into_iter()
            .map(|e| e.atomic_number() as u32)
            .collect();
        Self::new(atomic_numbers, bonds)
    }

    /// Build from raw tables: atomic numbers and `(atom1, atom2, bond_order_code)` triples.
    pub fn from_bond_table(atomic_numbers: &[u32], bonds: &[(usize, usize, i32)]) -> Result<Self> {
        let bonds = bonds
            .iter()
            .map(|&(a, b, code)| Ok(Bond::new(a, b, BondOrder::match_bond(code)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(atomic_numbers.to_vec(), bonds)
    }

    pub fn get_size(&self) -> usize {
        self.size
    }
    pub fn get_atomic_number(&self, idx: usize) -> Option<u32> {
        self.atomic_numbers.get(idx).copied()
    }
    pub fn get_bonds(&self) -> &[Bond] {
        &self.bonds
    }
    pub fn iter_atomic_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.atomic_numbers.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsgcn_test_data::TestMolecule;

    #[test]
    fn test_from_bond_table() -> anyhow::Result<()> {
        let t = TestMolecule::acetaldehyde();
        let mol = Molecule::from_bond_table(t.atomic_numbers, t.bonds)?;
        assert_eq!(mol.get_size(), 3);
        assert_eq!(mol.get_atomic_number(2), Some(8));
        assert_eq!(mol.get_atomic_number(3), None);
        assert_eq!(mol.get_bonds().len(), 2);
        assert_eq!(mol.get_bonds()[1].get_order(), BondOrder::Double);
        Ok(())
    }

    #[test]
    fn test_from_elements() -> anyhow::Result<()> {
        let mol = Molecule::from_elements(
            [Element::C, Element::N, Element::O],
            vec![Bond::new(0, 1, BondOrder::Single)],
        )?;
        let numbers: Vec<u32> = mol.iter_atomic_numbers().collect();
        assert_eq!(numbers, vec![6, 7, 8]);
        Ok(())
    }

    #[test]
    fn test_rejects_out_of_range_bond() {
        let res = Molecule::from_bond_table(&[6, 6], &[(0, 2, 1)]);
        assert!(matches!(
            res,
            Err(Error::InvalidBond {
                atom1: 0,
                atom2: 2,
                num_atoms: 2
            })
        ));
    }

    #[test]
    fn test_rejects_self_bond() {
        let res = Molecule::from_bond_table(&[6, 6], &[(1, 1, 1)]);
        assert!(matches!(res, Err(Error::InvalidBond { .. })));
    }

    #[test]
    fn test_rejects_unknown_bond_code() {
        let res = Molecule::from_bond_table(&[6, 6], &[(0, 1, 9)]);
        assert!(matches!(res, Err(Error::UnknownBondOrder(9))));
    }
}
