use super::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Metadata carried by an XYZ file: the free-form comment/title line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzMetadata {
    pub comment: String,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("File declares {declared} atoms but only {found} atom lines are present")]
    AtomCountMismatch { declared: usize, found: usize },
    #[error("File is empty; expected an atom count on the first line")]
    Empty,
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Atom line needs a symbol and three coordinates (found {found} fields)")]
    MissingFields { found: usize },
    #[error("Invalid coordinate (value: '{value}')")]
    InvalidCoordinate { value: String },
    #[error("Unknown element symbol: '{symbol}'")]
    UnknownElement { symbol: String },
}

/// Plain-text XYZ format: an atom count, a comment line, then one
/// whitespace-separated `symbol x y z` line per atom.
///
/// Coordinates may use Fortran-style exponent markers (`D`, `d`, or `*^`
/// in place of `E`); they are normalized before parsing. A malformed atom
/// line is an error, not skipped, so symbols can never desynchronize from
/// coordinates. Content after the declared atom count is ignored.
pub struct XyzFile;

/// Rewrites Fortran-style exponent markers to `e` so the token parses as a
/// standard float, e.g. `1.5D+01` and `1.5*^+01` both become `1.5e+01`.
fn normalize_exponent(token: &str) -> String {
    token.to_ascii_lowercase().replace('d', "e").replace("*^", "e")
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64, XyzError> {
    normalize_exponent(token)
        .parse::<f64>()
        .map_err(|_| XyzError::Parse {
            line,
            kind: XyzParseErrorKind::InvalidCoordinate {
                value: token.to_string(),
            },
        })
}

impl MolecularFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, XyzMetadata), XyzError> {
        let mut lines = reader.lines().enumerate();

        let (_, count_line) = lines.next().ok_or(XyzError::Empty)?;
        let count_line = count_line?;
        let declared: usize = count_line.trim().parse().map_err(|_| XyzError::Parse {
            line: 1,
            kind: XyzParseErrorKind::InvalidAtomCount {
                value: count_line.trim().to_string(),
            },
        })?;

        let comment = match lines.next() {
            Some((_, line)) => line?,
            None if declared == 0 => String::new(),
            None => {
                return Err(XyzError::AtomCountMismatch {
                    declared,
                    found: 0,
                });
            }
        };

        let mut atoms = Vec::with_capacity(declared);
        for (index, line) in lines.take(declared) {
            let line_num = index + 1;
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            // Extra trailing fields are ignored.
            if fields.len() < 4 {
                return Err(XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::MissingFields {
                        found: fields.len(),
                    },
                });
            }

            let x = parse_coordinate(fields[1], line_num)?;
            let y = parse_coordinate(fields[2], line_num)?;
            let z = parse_coordinate(fields[3], line_num)?;
            let atom = Atom::new(fields[0], Point3::new(x, y, z)).map_err(|_| XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::UnknownElement {
                    symbol: fields[0].to_string(),
                },
            })?;
            atoms.push(atom);
        }

        if atoms.len() != declared {
            return Err(XyzError::AtomCountMismatch {
                declared,
                found: atoms.len(),
            });
        }

        Ok((Molecule::new(atoms), XyzMetadata { comment }))
    }

    fn write_to(
        molecule: &Molecule,
        metadata: &XyzMetadata,
        writer: &mut impl Write,
    ) -> Result<(), XyzError> {
        writeln!(writer, "{}", molecule.len())?;
        writeln!(writer, "{}", metadata.comment)?;
        for atom in molecule.atoms() {
            writeln!(
                writer,
                "{:<2} {:>15.8} {:>15.8} {:>15.8}",
                atom.symbol, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }
}
