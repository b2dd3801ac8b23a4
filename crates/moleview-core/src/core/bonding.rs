//! Distance-based bond inference.
//!
//! Decides which atom pairs to draw as bonded from geometry alone: every
//! pair within a global distance cutoff is a candidate, and pairs involving
//! a hydrogen atom must additionally pass a tighter cutoff, since hydrogens
//! sit much closer to heavy atoms than typical heavy-heavy bonds. This is a
//! drawing heuristic, not a chemical bonding model.
//!
//! Enumeration is the full O(n^2) candidate set with no spatial pruning,
//! which is fine at the target scale of tens to low hundreds of atoms.

use nalgebra::Point3;
use thiserror::Error;

/// Default maximum distance for any bond, in Angstroms.
pub const DEFAULT_GLOBAL_CUTOFF: f64 = 2.0;

/// Default maximum distance for a bond involving hydrogen, in Angstroms.
pub const DEFAULT_HYDROGEN_CUTOFF: f64 = 1.2;

/// Distance cutoffs applied when screening candidate bonds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCutoffs {
    /// Maximum distance for any bond.
    pub global: f64,
    /// Maximum distance for a bond with at least one hydrogen endpoint.
    pub hydrogen: f64,
}

impl Default for BondCutoffs {
    fn default() -> Self {
        Self {
            global: DEFAULT_GLOBAL_CUTOFF,
            hydrogen: DEFAULT_HYDROGEN_CUTOFF,
        }
    }
}

/// An inferred bond between two atoms, by index into the input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    /// Index of the first atom; always the smaller of the two.
    pub atom_a: usize,
    /// Index of the second atom.
    pub atom_b: usize,
    /// Euclidean distance between the two atoms in Angstroms.
    pub distance: f64,
}

/// Errors raised by bond inference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BondError {
    #[error("symbol/coordinate count mismatch: {symbols} symbols, {positions} coordinates")]
    MismatchedLengths { symbols: usize, positions: usize },
}

/// Infers bonded atom pairs from element symbols and positions.
///
/// All unordered pairs `(i, j)` with `i < j` are enumerated in generation
/// order (`i` ascending, then `j`) and their Euclidean distances computed.
/// A pair survives if its distance is within `cutoffs.global` and, when
/// either endpoint's symbol is exactly `"H"`, additionally within
/// `cutoffs.hydrogen`. Both bounds are inclusive, and the enumeration order
/// is preserved in the result.
///
/// Symbol matching is exact: `"h"` is not treated as hydrogen, and symbols
/// are not validated against the periodic table here. Fewer than two atoms
/// yield an empty list. Coincident positions (distance zero) are a valid
/// bond.
///
/// Pure function of its inputs; calling it twice on the same input yields
/// the same output.
///
/// # Errors
///
/// Returns [`BondError::MismatchedLengths`] if the two slices disagree in
/// length.
pub fn infer_bonds(
    symbols: &[impl AsRef<str>],
    positions: &[Point3<f64>],
    cutoffs: &BondCutoffs,
) -> Result<Vec<Bond>, BondError> {
    if symbols.len() != positions.len() {
        return Err(BondError::MismatchedLengths {
            symbols: symbols.len(),
            positions: positions.len(),
        });
    }

    let n = positions.len();
    let mut candidates = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let distance = (positions[i] - positions[j]).norm();
            candidates.push(Bond {
                atom_a: i,
                atom_b: j,
                distance,
            });
        }
    }

    // Stage 1: global cutoff, inclusive.
    let within_global: Vec<Bond> = candidates
        .into_iter()
        .filter(|bond| bond.distance <= cutoffs.global)
        .collect();

    // Stage 2: pairs touching hydrogen must also pass the tighter cutoff.
    let bonds = within_global
        .into_iter()
        .filter(|bond| {
            let touches_hydrogen =
                symbols[bond.atom_a].as_ref() == "H" || symbols[bond.atom_b].as_ref() == "H";
            !touches_hydrogen || bond.distance <= cutoffs.hydrogen
        })
        .collect();

    Ok(bonds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Octahedral Fe complex with three N and three O ligands.
    fn iron_complex() -> (Vec<&'static str>, Vec<Point3<f64>>) {
        let symbols = vec!["Fe", "N", "N", "N", "O", "O", "O"];
        let positions = vec![
            Point3::new(2.298354, 5.161785, 7.971898),
            Point3::new(1.885657, 4.804777, 6.183726),
            Point3::new(1.747515, 6.960963, 7.932784),
            Point3::new(4.094380, 5.807257, 7.588689),
            Point3::new(0.539005, 4.482809, 8.460004),
            Point3::new(2.812425, 3.266553, 8.131637),
            Point3::new(2.886404, 5.392925, 9.848966),
        ];
        (symbols, positions)
    }

    #[test]
    fn iron_complex_yields_six_metal_ligand_bonds() {
        let (symbols, positions) = iron_complex();
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();

        assert_eq!(bonds.len(), 6);
        for (ligand, bond) in (1..=6).zip(&bonds) {
            assert_eq!(bond.atom_a, 0);
            assert_eq!(bond.atom_b, ligand);
            assert!(bond.distance <= 2.0);
        }
    }

    #[test]
    fn result_is_deterministic() {
        let (symbols, positions) = iron_complex();
        let first = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        let second = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn water_keeps_oh_bonds_but_drops_hh_pair() {
        let symbols = ["O", "H", "H"];
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.757, 0.586, 0.0),
            Point3::new(-0.757, 0.586, 0.0),
        ];
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();

        // The H-H pair is 1.514 A apart: inside the global cutoff but culled
        // by the hydrogen cutoff.
        assert_eq!(bonds.len(), 2);
        assert_eq!((bonds[0].atom_a, bonds[0].atom_b), (0, 1));
        assert_eq!((bonds[1].atom_a, bonds[1].atom_b), (0, 2));
        assert_relative_eq!(bonds[0].distance, 0.9573, epsilon = 1e-4);
    }

    #[test]
    fn distance_exactly_at_cutoff_is_retained() {
        let symbols = ["C", "C"];
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].distance, 2.0);
    }

    #[test]
    fn distance_just_past_cutoff_is_excluded() {
        let symbols = ["C", "C"];
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.000001, 0.0, 0.0)];
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        assert!(bonds.is_empty());
    }

    #[test]
    fn hydrogen_distance_exactly_at_cutoff_is_retained() {
        let symbols = ["O", "H"];
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let cutoffs = BondCutoffs {
            global: 2.0,
            hydrogen: 1.0,
        };
        let bonds = infer_bonds(&symbols, &positions, &cutoffs).unwrap();
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].distance, 1.0);
    }

    #[test]
    fn lowercase_h_is_not_treated_as_hydrogen() {
        // Exact-match symbol comparison: "h" passes only the global cutoff.
        let symbols = ["h", "O"];
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.5, 0.0, 0.0)];
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        assert_eq!(bonds.len(), 1);

        let uppercase = ["H", "O"];
        let bonds = infer_bonds(&uppercase, &positions, &BondCutoffs::default()).unwrap();
        assert!(bonds.is_empty());
    }

    #[test]
    fn fewer_than_two_atoms_yield_no_bonds() {
        let empty: [&str; 0] = [];
        let bonds = infer_bonds(&empty, &[], &BondCutoffs::default()).unwrap();
        assert!(bonds.is_empty());

        let single = ["Fe"];
        let bonds = infer_bonds(&single, &[Point3::origin()], &BondCutoffs::default()).unwrap();
        assert!(bonds.is_empty());
    }

    #[test]
    fn coincident_atoms_form_a_zero_length_bond() {
        let symbols = ["N", "C"];
        let positions = [Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 1.0, 1.0)];
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].distance, 0.0);
    }

    #[test]
    fn mismatched_input_lengths_are_rejected() {
        let symbols = ["C", "C"];
        let positions = [Point3::origin()];
        let err = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap_err();
        assert_eq!(
            err,
            BondError::MismatchedLengths {
                symbols: 2,
                positions: 1
            }
        );
    }

    #[test]
    fn generation_order_is_preserved_through_filtering() {
        // Three carbons in a line; the (0, 2) pair is out of range, the rest
        // keep their enumeration order.
        let symbols = ["C", "C", "C"];
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.4, 0.0, 0.0),
            Point3::new(2.8, 0.0, 0.0),
        ];
        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        let pairs: Vec<_> = bonds.iter().map(|b| (b.atom_a, b.atom_b)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn relabeling_indices_preserves_the_bond_set() {
        // Same atoms with Fe moved to the end: the bond set follows the
        // atoms, only the index labels and generation order change.
        let symbols = vec!["N", "N", "N", "O", "O", "O", "Fe"];
        let (_, original_positions) = iron_complex();
        let mut positions = original_positions[1..].to_vec();
        positions.push(original_positions[0]);

        let bonds = infer_bonds(&symbols, &positions, &BondCutoffs::default()).unwrap();
        let pairs: Vec<_> = bonds.iter().map(|b| (b.atom_a, b.atom_b)).collect();
        assert_eq!(pairs, vec![(0, 6), (1, 6), (2, 6), (3, 6), (4, 6), (5, 6)]);
    }

    #[test]
    fn widening_the_global_cutoff_only_adds_pairs() {
        let symbols = ["C", "C", "C"];
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.4, 0.0, 0.0),
            Point3::new(2.8, 0.0, 0.0),
        ];
        let narrow = BondCutoffs::default();
        let wide = BondCutoffs {
            global: 3.0,
            ..narrow
        };

        let kept_narrow = infer_bonds(&symbols, &positions, &narrow).unwrap();
        let kept_wide = infer_bonds(&symbols, &positions, &wide).unwrap();

        assert_eq!(kept_narrow.len(), 2);
        assert_eq!(kept_wide.len(), 3);
        for bond in &kept_narrow {
            assert!(
                kept_wide
                    .iter()
                    .any(|b| (b.atom_a, b.atom_b) == (bond.atom_a, bond.atom_b))
            );
        }
    }
}
