//! Plotters drawing backend for [`Scene`] values.
//!
//! Atoms are drawn as filled circles sized by covalent radius, bonds as
//! black line segments, and the legend lists one entry per element. The
//! backend is chosen by the output extension: `.svg` draws vectors,
//! anything else rasterizes to PNG.

use crate::error::{CliError, Result};
use moleview::scene::Scene;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Half-width of the fallback plot range for empty or flat scenes.
const MIN_HALF_RANGE: f64 = 1.0;

pub fn draw_to_file(scene: &Scene, path: &Path) -> Result<()> {
    let size = (scene.style.width, scene.style.height);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(scene, &root)
        }
        _ => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(scene, &root)
        }
    }
}

fn draw<DB: DrawingBackend>(scene: &Scene, root: &DrawingArea<DB, Shift>) -> Result<()> {
    root.fill(&WHITE).map_err(to_render_error)?;

    let [x_range, y_range, z_range] = axis_ranges(scene);
    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if scene.style.show_title {
        builder.caption(&scene.style.title, ("sans-serif", 24));
    }
    let mut chart = builder
        .build_cartesian_3d(x_range, y_range, z_range)
        .map_err(to_render_error)?;

    if scene.style.show_axes {
        let mut axes = chart.configure_axes();
        if !scene.style.show_grid {
            axes.bold_grid_style(TRANSPARENT).light_grid_style(TRANSPARENT);
        }
        axes.draw().map_err(to_render_error)?;
    }

    for segment in &scene.segments {
        chart
            .draw_series(LineSeries::new(
                vec![
                    (segment.start.x, segment.start.y, segment.start.z),
                    (segment.end.x, segment.end.y, segment.end.z),
                ],
                BLACK.stroke_width(scene.style.bond_width),
            ))
            .map_err(to_render_error)?;
    }

    // One series per legend entry so duplicate element labels collapse.
    for entry in &scene.legend {
        let color = hex_color(entry.color);
        let scale = scene.style.marker_scale;
        let series = chart
            .draw_series(
                scene
                    .markers
                    .iter()
                    .filter(|marker| marker.label == entry.label)
                    .map(|marker| {
                        let size = (marker.radius * scale).round().max(2.0) as i32;
                        Circle::new(
                            (marker.position.x, marker.position.y, marker.position.z),
                            size,
                            color.filled(),
                        )
                    }),
            )
            .map_err(to_render_error)?;
        if scene.style.show_legend {
            series
                .label(&entry.label)
                .legend(move |(x, y)| Circle::new((x + 10, y), 6, color.filled()));
        }
    }

    if scene.style.show_legend && !scene.legend.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerLeft)
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(to_render_error)?;
    }

    root.present().map_err(to_render_error)?;
    Ok(())
}

fn to_render_error(err: impl std::fmt::Display) -> CliError {
    CliError::Render(err.to_string())
}

fn axis_ranges(scene: &Scene) -> [std::ops::Range<f64>; 3] {
    match scene.bounds() {
        Some(bounds) => bounds.map(|(min, max)| {
            // Flat axes still need a non-empty range.
            let pad = ((max - min) * 0.1).max(0.5);
            (min - pad)..(max + pad)
        }),
        None => std::array::from_fn(|_| -MIN_HALF_RANGE..MIN_HALF_RANGE),
    }
}

/// Parses a `#RRGGBB` code from the CPK table; malformed codes map to black.
fn hex_color(code: &str) -> RGBColor {
    let hex = code.strip_prefix('#').unwrap_or(code);
    if hex.len() != 6 || !hex.is_ascii() {
        return RGBColor(0, 0, 0);
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    RGBColor(channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use moleview::core::bonding::BondCutoffs;
    use moleview::core::models::molecule::Molecule;
    use moleview::scene::SceneStyle;
    use nalgebra::Point3;

    #[test]
    fn hex_color_parses_cpk_codes() {
        assert_eq!(hex_color("#FFFFFF"), RGBColor(255, 255, 255));
        assert_eq!(hex_color("#FF0D0D"), RGBColor(255, 13, 13));
        assert_eq!(hex_color("#3050F8"), RGBColor(48, 80, 248));
    }

    #[test]
    fn hex_color_maps_malformed_codes_to_black() {
        assert_eq!(hex_color("0"), RGBColor(0, 0, 0));
        assert_eq!(hex_color("#GGGGGG"), RGBColor(0, 0, 0));
        assert_eq!(hex_color(""), RGBColor(0, 0, 0));
    }

    #[test]
    fn axis_ranges_pad_the_scene_bounds() {
        let symbols = ["C", "C"];
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let molecule = Molecule::from_parts(&symbols, &positions).unwrap();
        let bonds = molecule.infer_bonds(&BondCutoffs::default()).unwrap();
        let scene = moleview::scene::Scene::build(&molecule, &bonds, SceneStyle::default()).unwrap();

        let [x_range, y_range, _] = axis_ranges(&scene);
        assert!(x_range.start < 0.0 && x_range.end > 1.0);
        // Flat axes are widened so the chart never degenerates.
        assert!(y_range.end > y_range.start);
    }

    #[test]
    fn empty_scene_gets_a_fallback_range() {
        let scene =
            moleview::scene::Scene::build(&Molecule::default(), &[], SceneStyle::default())
                .unwrap();
        let [x_range, _, _] = axis_ranges(&scene);
        assert_eq!(x_range, -1.0..1.0);
    }

    #[test]
    fn draws_a_molecule_to_a_png_file() {
        let symbols = ["O", "H", "H"];
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.757, 0.586, 0.0),
            Point3::new(-0.757, 0.586, 0.0),
        ];
        let molecule = Molecule::from_parts(&symbols, &positions).unwrap();
        let bonds = molecule.infer_bonds(&BondCutoffs::default()).unwrap();
        // Text-free style so the test does not depend on system fonts.
        let style = SceneStyle {
            show_title: false,
            show_axes: false,
            show_legend: false,
            ..SceneStyle::default()
        };
        let scene = moleview::scene::Scene::build(&molecule, &bonds, style).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.png");
        draw_to_file(&scene, &path).unwrap();
        assert!(path.exists());
    }
}
