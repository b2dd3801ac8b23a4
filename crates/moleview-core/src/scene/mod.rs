//! Renderer-agnostic scene construction.
//!
//! A [`Scene`] is a plain value holding everything a drawing backend needs:
//! one marker per atom with its resolved CPK color and display radius, one
//! line segment per bond, and a legend de-duplicated by element. The scene
//! is built once and threaded through render calls; nothing here draws.

use crate::core::bonding::Bond;
use crate::core::models::molecule::Molecule;
use crate::core::periodic::{self, ElementError};
use nalgebra::Point3;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Display options for a rendered scene.
///
/// Deserializable from a TOML style file; every field falls back to its
/// default, so a partial file works.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneStyle {
    /// Plot title.
    pub title: String,
    pub show_title: bool,
    pub show_axes: bool,
    pub show_grid: bool,
    pub show_legend: bool,
    /// Multiplier applied to covalent radii (Angstroms) to obtain marker
    /// sizes in pixels.
    pub marker_scale: f64,
    /// Bond line width in pixels.
    pub bond_width: u32,
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            title: "Full complex".to_string(),
            show_title: true,
            show_axes: true,
            show_grid: true,
            show_legend: true,
            marker_scale: 12.0,
            bond_width: 2,
            width: 1024,
            height: 768,
        }
    }
}

/// Errors raised while loading a style file.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl SceneStyle {
    /// Loads a style from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the file cannot be read or is not valid
    /// TOML for this structure.
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path).map_err(|e| StyleError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| StyleError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

/// A plotted atom: position, element label, CPK color, and display radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point3<f64>,
    pub label: String,
    /// `#RRGGBB` color code from the CPK table.
    pub color: &'static str,
    /// Covalent radius in Angstroms; backends scale this to pixels.
    pub radius: f64,
}

/// A bond drawn as a straight segment between two atom positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// One legend row per distinct element, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Everything a backend needs to draw one molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
    pub legend: Vec<LegendEntry>,
    pub style: SceneStyle,
}

impl Scene {
    /// Resolves a molecule and its bond list into drawable values.
    ///
    /// Bond indices must refer to `molecule`'s atom order, as produced by
    /// [`Molecule::infer_bonds`].
    ///
    /// # Errors
    ///
    /// Propagates [`ElementError`] from the color/radius lookups.
    pub fn build(
        molecule: &Molecule,
        bonds: &[Bond],
        style: SceneStyle,
    ) -> Result<Self, ElementError> {
        let mut markers = Vec::with_capacity(molecule.len());
        let mut legend: Vec<LegendEntry> = Vec::new();

        for atom in molecule.atoms() {
            let color = periodic::cpk_color(atom.atomic_number)?;
            let radius = periodic::covalent_radius(atom.atomic_number)?;
            if !legend.iter().any(|entry| entry.label == atom.symbol) {
                legend.push(LegendEntry {
                    label: atom.symbol.clone(),
                    color,
                });
            }
            markers.push(Marker {
                position: atom.position,
                label: atom.symbol.clone(),
                color,
                radius,
            });
        }

        let atoms = molecule.atoms();
        let segments = bonds
            .iter()
            .map(|bond| Segment {
                start: atoms[bond.atom_a].position,
                end: atoms[bond.atom_b].position,
            })
            .collect();

        Ok(Self {
            markers,
            segments,
            legend,
            style,
        })
    }

    /// Axis-aligned `(min, max)` bounds per axis over all markers, or `None`
    /// for an empty scene.
    pub fn bounds(&self) -> Option<[(f64, f64); 3]> {
        let first = self.markers.first()?.position;
        let mut bounds = [(first.x, first.x), (first.y, first.y), (first.z, first.z)];
        for marker in &self.markers[1..] {
            let p = marker.position;
            for (axis, value) in [p.x, p.y, p.z].into_iter().enumerate() {
                let (min, max) = &mut bounds[axis];
                *min = min.min(value);
                *max = max.max(value);
            }
        }
        Some(bounds)
    }
}
