use crate::cli::RenderArgs;
use crate::error::Result;
use crate::render;
use moleview::core::bonding::BondCutoffs;
use moleview::core::io::traits::MolecularFile;
use moleview::core::io::xyz::XyzFile;
use moleview::scene::{Scene, SceneStyle};
use tracing::{debug, info};

pub fn run(args: RenderArgs) -> Result<()> {
    let (molecule, metadata) = XyzFile::read_from_path(&args.input)?;
    info!(
        "Read {} atoms from '{}'.",
        molecule.len(),
        args.input.display()
    );
    if !metadata.comment.is_empty() {
        debug!("Title line: {}", metadata.comment);
    }

    let cutoffs: BondCutoffs = args.cutoffs.into();
    let bonds = molecule.infer_bonds(&cutoffs)?;
    info!(
        "Inferred {} bonds (global {:.2} A, hydrogen {:.2} A).",
        bonds.len(),
        cutoffs.global,
        cutoffs.hydrogen
    );

    let mut style = match &args.style {
        Some(path) => SceneStyle::load(path)?,
        None => SceneStyle::default(),
    };
    if let Some(title) = args.title {
        style.title = title;
    }
    if let Some(width) = args.width {
        style.width = width;
    }
    if let Some(height) = args.height {
        style.height = height;
    }
    if args.no_axes {
        style.show_axes = false;
    }
    if args.no_grid {
        style.show_grid = false;
    }
    if args.no_title {
        style.show_title = false;
    }
    if args.no_legend {
        style.show_legend = false;
    }

    let scene = Scene::build(&molecule, &bonds, style)?;

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("png"));
    render::draw_to_file(&scene, &output)?;
    info!("Wrote image to '{}'.", output.display());
    println!("Saved {}", output.display());

    Ok(())
}
