//! Reading and writing molecular geometry files.
//!
//! A unified trait-based interface ([`traits::MolecularFile`]) with one
//! concrete format: plain-text XYZ ([`xyz::XyzFile`]).

pub mod traits;
pub mod xyz;
