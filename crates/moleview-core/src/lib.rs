//! # MoleView Core Library
//!
//! A library for viewing molecules: it reads molecular geometries from
//! XYZ-format files, infers which atom pairs to draw as bonded from pairwise
//! distances alone, and packages the result as a renderer-agnostic scene.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers so that the geometric core stays free
//! of any drawing concern:
//!
//! - **[`core`]: The Foundation.** Immutable periodic-table data, stateless
//!   models ([`core::models::atom::Atom`], [`core::models::molecule::Molecule`]),
//!   the distance-cutoff bond inference, and XYZ file I/O.
//!
//! - **[`scene`]: The Renderer Contract.** Resolves a molecule and its bond
//!   list into plain drawable values (markers, line segments, a de-duplicated
//!   legend) that any backend can consume. Drawing itself lives with the
//!   consumer, e.g. the `moleview` CLI binary.

pub mod core;
pub mod scene;
