use crate::error::{Error, Result};
use strum::{Display, EnumIter, EnumString};

/// Bond
///
/// Undirected connection between two atoms of a [`Molecule`](crate::Molecule),
/// of type [BondOrder].
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    atom1: usize,
    atom2: usize,
    order: BondOrder,
}

impl Bond {
    pub fn new(atom1: usize, atom2: usize, order: BondOrder) -> Self {
        Bond {
            atom1,
            atom2,
            order,
        }
    }
    pub fn get_atom_indices(&self) -> (usize, usize) {
        (self.atom1, self.atom2)
    }
    pub fn get_order(&self) -> BondOrder {
        self.order
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
/// BondOrder:
///
/// Enum for defining Bond orders.
/// Integer codes follow the RDKit `BondType` numbering, with 4-6 folded into
/// [`BondOrder::Quadruple`].
pub enum BondOrder {
    /// Used if the actual type is unknown
    Unset,
    /// Single bond
    Single,
    /// Double bond
    Double,
    /// Triple bond
    Triple,
    /// A quadruple bond
    Quadruple,
    /// Delocalized ring bond
    Aromatic,
}

impl BondOrder {
    pub fn match_bond(bond_int: i32) -> Result<BondOrder> {
        match bond_int {
            0 => Ok(BondOrder::Unset),
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            4..=6 => Ok(BondOrder::Quadruple),
            12 => Ok(BondOrder::Aromatic),
            _ => Err(Error::UnknownBondOrder(bond_int)),
        }
    }

    /// Numeric weight used for bond-order weighted adjacency matrices.
    /// An unset order counts as a single bond.
    pub fn weight(&self) -> f32 {
        match self {
            BondOrder::Unset | BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Quadruple => 4.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_match_bond() {
        assert_eq!(BondOrder::match_bond(1).unwrap(), BondOrder::Single);
        assert_eq!(BondOrder::match_bond(5).unwrap(), BondOrder::Quadruple);
        assert_eq!(BondOrder::match_bond(12).unwrap(), BondOrder::Aromatic);
        assert!(matches!(
            BondOrder::match_bond(7),
            Err(Error::UnknownBondOrder(7))
        ));
    }

    #[test]
    fn test_bond_weights_positive() {
        for order in BondOrder::iter() {
            assert!(order.weight() > 0.0, "{order} has no weight");
        }
        assert_eq!(BondOrder::Aromatic.weight(), 1.5);
    }

    #[test]
    fn test_bond_order_names() {
        assert_eq!(BondOrder::Double.to_string(), "double");
        assert_eq!(BondOrder::from_str("aromatic").unwrap(), BondOrder::Aromatic);
    }

    #[test]
    fn test_bond_indices() {
        let bond = Bond::new(3, 1, BondOrder::Triple);
        assert_eq!(bond.get_atom_indices(), (3, 1));
        assert_eq!(bond.get_order(), BondOrder::Triple);
    }
}
