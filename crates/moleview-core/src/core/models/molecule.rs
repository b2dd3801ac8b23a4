use super::atom::Atom;
use crate::core::bonding::{self, Bond, BondCutoffs, BondError};
use crate::core::periodic::ElementError;
use nalgebra::Point3;
use thiserror::Error;

/// Errors raised while assembling a molecule from parsed input.
#[derive(Debug, Error)]
pub enum MoleculeError {
    #[error("symbol/coordinate count mismatch: {symbols} symbols, {positions} coordinates")]
    MismatchedLengths { symbols: usize, positions: usize },
    #[error(transparent)]
    Element(#[from] ElementError),
}

/// An ordered collection of atoms; index order is input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Builds a molecule from parallel symbol and coordinate sequences.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::MismatchedLengths`] if the sequences differ
    /// in length, or propagates [`ElementError::UnknownSymbol`] for a symbol
    /// the periodic table does not know.
    pub fn from_parts(
        symbols: &[impl AsRef<str>],
        positions: &[Point3<f64>],
    ) -> Result<Self, MoleculeError> {
        if symbols.len() != positions.len() {
            return Err(MoleculeError::MismatchedLengths {
                symbols: symbols.len(),
                positions: positions.len(),
            });
        }
        let atoms = symbols
            .iter()
            .zip(positions)
            .map(|(symbol, &position)| Atom::new(symbol.as_ref(), position))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { atoms })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Element symbols in input order.
    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(|atom| atom.symbol.as_str()).collect()
    }

    /// Atom positions in input order.
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|atom| atom.position).collect()
    }

    /// Infers bonded atom pairs over this molecule's atoms.
    ///
    /// See [`bonding::infer_bonds`] for the algorithm and its edge cases.
    pub fn infer_bonds(&self, cutoffs: &BondCutoffs) -> Result<Vec<Bond>, BondError> {
        bonding::infer_bonds(&self.symbols(), &self.positions(), cutoffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_builds_atoms_in_input_order() {
        let symbols = ["O", "H", "H"];
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.757, 0.586, 0.0),
            Point3::new(-0.757, 0.586, 0.0),
        ];
        let molecule = Molecule::from_parts(&symbols, &positions).unwrap();

        assert_eq!(molecule.len(), 3);
        assert_eq!(molecule.symbols(), vec!["O", "H", "H"]);
        assert_eq!(molecule.atoms()[0].atomic_number, 8);
        assert_eq!(molecule.positions()[1], positions[1]);
    }

    #[test]
    fn from_parts_rejects_mismatched_lengths() {
        let symbols = ["O", "H"];
        let positions = [Point3::new(0.0, 0.0, 0.0)];
        let err = Molecule::from_parts(&symbols, &positions).unwrap_err();
        assert!(matches!(
            err,
            MoleculeError::MismatchedLengths {
                symbols: 2,
                positions: 1
            }
        ));
    }

    #[test]
    fn from_parts_rejects_unknown_symbols() {
        let symbols = ["O", "Qq"];
        let positions = [Point3::origin(), Point3::origin()];
        let err = Molecule::from_parts(&symbols, &positions).unwrap_err();
        assert!(matches!(err, MoleculeError::Element(_)));
    }

    #[test]
    fn empty_molecule_has_no_atoms() {
        let molecule = Molecule::default();
        assert!(molecule.is_empty());
        assert_eq!(molecule.len(), 0);
        assert!(molecule.symbols().is_empty());
    }

    #[test]
    fn infer_bonds_delegates_over_own_atoms() {
        let symbols = ["O", "H", "H"];
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.757, 0.586, 0.0),
            Point3::new(-0.757, 0.586, 0.0),
        ];
        let molecule = Molecule::from_parts(&symbols, &positions).unwrap();
        let bonds = molecule.infer_bonds(&BondCutoffs::default()).unwrap();

        assert_eq!(bonds.len(), 2);
        assert_eq!((bonds[0].atom_a, bonds[0].atom_b), (0, 1));
        assert_eq!((bonds[1].atom_a, bonds[1].atom_b), (0, 2));
    }
}
