use crate::core::periodic::{self, ElementError};
use nalgebra::Point3;

/// A single atom: element symbol, resolved atomic number, and position.
///
/// The atomic number is resolved from the symbol when the atom is created,
/// and the triple is immutable afterwards. Index order within a
/// [`Molecule`](super::molecule::Molecule) is the order atoms appeared in
/// the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element symbol as it appeared in the input (e.g. "Fe").
    pub symbol: String,
    /// Atomic number resolved from the symbol (1-109).
    pub atomic_number: u8,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates an atom, resolving the symbol to its atomic number.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::UnknownSymbol`] if the symbol is not in the
    /// periodic table. Matching is exact and case-sensitive.
    pub fn new(symbol: &str, position: Point3<f64>) -> Result<Self, ElementError> {
        let atomic_number = periodic::symbol_to_number(symbol)?;
        Ok(Self {
            symbol: symbol.to_string(),
            atomic_number,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_resolves_atomic_number() {
        let atom = Atom::new("Fe", Point3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(atom.symbol, "Fe");
        assert_eq!(atom.atomic_number, 26);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn new_atom_rejects_unknown_symbols() {
        let err = Atom::new("Xx", Point3::origin()).unwrap_err();
        assert_eq!(err, ElementError::UnknownSymbol("Xx".to_string()));
    }

    #[test]
    fn new_atom_rejects_lowercase_symbols() {
        assert!(Atom::new("h", Point3::origin()).is_err());
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("N", Point3::new(0.0, 0.0, 0.0)).unwrap();
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
