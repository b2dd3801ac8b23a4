use moleview::core::bonding::BondError;
use moleview::core::io::xyz::XyzError;
use moleview::core::models::molecule::MoleculeError;
use moleview::core::periodic::ElementError;
use moleview::scene::StyleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Xyz(#[from] XyzError),

    #[error(transparent)]
    Molecule(#[from] MoleculeError),

    #[error(transparent)]
    Element(#[from] ElementError),

    #[error(transparent)]
    Bonds(#[from] BondError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
