//! Fundamental data structures and algorithms for molecular visualization.
//!
//! - **Periodic-table data** ([`periodic`]) - static symbol/number, radius,
//!   and color lookup tables
//! - **Molecular representation** ([`models`]) - atoms and ordered atom
//!   collections
//! - **Bond inference** ([`bonding`]) - the distance-cutoff pair filter
//! - **File I/O** ([`io`]) - reading and writing XYZ geometry files

pub mod bonding;
pub mod io;
pub mod models;
pub mod periodic;
