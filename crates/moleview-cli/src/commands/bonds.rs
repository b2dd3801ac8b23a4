use crate::cli::BondsArgs;
use crate::error::Result;
use moleview::core::bonding::BondCutoffs;
use moleview::core::io::traits::MolecularFile;
use moleview::core::io::xyz::XyzFile;
use tracing::info;

pub fn run(args: BondsArgs) -> Result<()> {
    let (molecule, _) = XyzFile::read_from_path(&args.input)?;
    let cutoffs: BondCutoffs = args.cutoffs.into();
    let bonds = molecule.infer_bonds(&cutoffs)?;
    info!(
        "Inferred {} bonds over {} atoms.",
        bonds.len(),
        molecule.len()
    );

    let atoms = molecule.atoms();
    println!(
        "{:>5} {:>5}  {:>4} {:>4}  {:>10}",
        "i", "j", "a", "b", "dist (A)"
    );
    for bond in &bonds {
        println!(
            "{:>5} {:>5}  {:>4} {:>4}  {:>10.4}",
            bond.atom_a,
            bond.atom_b,
            atoms[bond.atom_a].symbol,
            atoms[bond.atom_b].symbol,
            bond.distance
        );
    }
    println!("{} bonds", bonds.len());
    Ok(())
}
