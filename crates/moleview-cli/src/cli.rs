use clap::{Args, Parser, Subcommand};
use moleview::core::bonding::{BondCutoffs, DEFAULT_GLOBAL_CUTOFF, DEFAULT_HYDROGEN_CUTOFF};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Rangsiman Ketkaew",
    version,
    about = "MoleView - view your molecule anywhere and anytime.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a molecule from an XYZ file to a PNG or SVG image.
    Render(RenderArgs),
    /// Infer bonds from an XYZ file and print them as a table.
    Bonds(BondsArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Coordinates of the molecule in XYZ format (.xyz).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the output image; the extension selects the backend
    /// (.png or .svg). Defaults to the input name with a .png extension.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub cutoffs: CutoffArgs,

    /// Path to a TOML style file.
    #[arg(long, value_name = "PATH")]
    pub style: Option<PathBuf>,

    /// Override the plot title.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Override the output image width in pixels.
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Override the output image height in pixels.
    #[arg(long, value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Hide the coordinate axes.
    #[arg(long)]
    pub no_axes: bool,

    /// Hide the grid lines.
    #[arg(long)]
    pub no_grid: bool,

    /// Hide the title.
    #[arg(long)]
    pub no_title: bool,

    /// Hide the element legend.
    #[arg(long)]
    pub no_legend: bool,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Coordinates of the molecule in XYZ format (.xyz).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub cutoffs: CutoffArgs,
}

/// Distance cutoffs shared by every subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct CutoffArgs {
    /// Maximum distance for any bond, in Angstroms.
    #[arg(long, value_name = "ANGSTROM", default_value_t = DEFAULT_GLOBAL_CUTOFF)]
    pub cutoff_global: f64,

    /// Maximum distance for a bond involving hydrogen, in Angstroms.
    #[arg(long, value_name = "ANGSTROM", default_value_t = DEFAULT_HYDROGEN_CUTOFF)]
    pub cutoff_hydrogen: f64,
}

impl From<CutoffArgs> for BondCutoffs {
    fn from(args: CutoffArgs) -> Self {
        Self {
            global: args.cutoff_global,
            hydrogen: args.cutoff_hydrogen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cutoffs_have_expected_defaults() {
        let cli = Cli::parse_from(["moleview", "bonds", "input.xyz"]);
        let Commands::Bonds(args) = cli.command else {
            panic!("expected bonds subcommand");
        };
        let cutoffs: BondCutoffs = args.cutoffs.into();
        assert_eq!(cutoffs.global, 2.0);
        assert_eq!(cutoffs.hydrogen, 1.2);
    }

    #[test]
    fn cutoffs_can_be_overridden() {
        let cli = Cli::parse_from([
            "moleview",
            "bonds",
            "input.xyz",
            "--cutoff-global",
            "2.5",
            "--cutoff-hydrogen",
            "1.0",
        ]);
        let Commands::Bonds(args) = cli.command else {
            panic!("expected bonds subcommand");
        };
        assert_eq!(args.cutoffs.cutoff_global, 2.5);
        assert_eq!(args.cutoffs.cutoff_hydrogen, 1.0);
    }
}
