//! Static periodic-table lookups: symbol/atomic-number conversion, covalent
//! radii, and CPK display colors.
//!
//! All tables are immutable statics baked into the binary, so every lookup is
//! read-only and thread-safe. Index 0 of each number-indexed table is a
//! sentinel and never a valid query.

use phf::{Map, phf_map};
use thiserror::Error;

/// Errors produced by the periodic-table lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    #[error("unknown element symbol: '{0}'")]
    UnknownSymbol(String),
    #[error("atomic number {number} outside table range 1..={max}")]
    OutOfRange { number: u8, max: u8 },
}

/// Highest atomic number with a symbol and color entry (Mt).
pub const ELEMENT_COUNT: u8 = 109;

/// Highest atomic number with a tabulated radius.
pub const RADIUS_COUNT: u8 = 119;

static SYMBOLS: [&str; 110] = [
    "0", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
];

static SYMBOL_NUMBERS: Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8,
    "F" => 9, "Ne" => 10, "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16,
    "Cl" => 17, "Ar" => 18, "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24,
    "Mn" => 25, "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32,
    "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36, "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40,
    "Nb" => 41, "Mo" => 42, "Tc" => 43, "Ru" => 44, "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48,
    "In" => 49, "Sn" => 50, "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54, "Cs" => 55, "Ba" => 56,
    "La" => 57, "Ce" => 58, "Pr" => 59, "Nd" => 60, "Pm" => 61, "Sm" => 62, "Eu" => 63, "Gd" => 64,
    "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71, "Hf" => 72,
    "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78, "Au" => 79, "Hg" => 80,
    "Tl" => 81, "Pb" => 82, "Bi" => 83, "Po" => 84, "At" => 85, "Rn" => 86, "Fr" => 87, "Ra" => 88,
    "Ac" => 89, "Th" => 90, "Pa" => 91, "U" => 92, "Np" => 93, "Pu" => 94, "Am" => 95, "Cm" => 96,
    "Bk" => 97, "Cf" => 98, "Es" => 99, "Fm" => 100, "Md" => 101, "No" => 102, "Lr" => 103,
    "Rf" => 104, "Db" => 105, "Sg" => 106, "Bh" => 107, "Hs" => 108, "Mt" => 109,
};

// Covalent radii stored in milli-Angstrom; divided by 1000 on lookup.
static RADII_MILLI: [u16; 120] = [
    0, 230, 930, 680, 350, 830, 680, 680, 680, 640, 1120, 970, 1100, 1350, 1200, 750, 1020, 990,
    1570, 1330, 990, 1440, 1470, 1330, 1350, 1350, 1340, 1330, 1500, 1520, 1450, 1220, 1170, 1210,
    1220, 1210, 1910, 1470, 1120, 1780, 1560, 1480, 1470, 1350, 1400, 1450, 1500, 1590, 1690,
    1630, 1460, 1460, 1470, 1400, 1980, 1670, 1340, 1870, 1830, 1820, 1810, 1800, 1800, 1990,
    1790, 1760, 1750, 1740, 1730, 1720, 1940, 1720, 1570, 1430, 1370, 1350, 1370, 1320, 1500,
    1500, 1700, 1550, 1540, 1540, 1680, 1700, 2400, 2000, 1900, 1880, 1790, 1610, 1580, 1550,
    1530, 1510, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1500, 1600, 1600, 1600, 1600, 1600,
    1600, 1600, 1600, 1600, 1600, 1600, 1600, 1600, 1600, 1600, 1600,
];

// Jmol CPK color scheme, http://jmol.sourceforge.net/jscolors/
static CPK_COLORS: [&str; 110] = [
    "0", "#FFFFFF", "#D9FFFF", "#CC80FF", "#C2FF00", "#FFB5B5", "#909090", "#3050F8", "#FF0D0D",
    "#90E050", "#B3E3F5", "#AB5CF2", "#8AFF00", "#BFA6A6", "#F0C8A0", "#FF8000", "#FFFF30",
    "#1FF01F", "#80D1E3", "#8F40D4", "#3DFF00", "#E6E6E6", "#BFC2C7", "#A6A6AB", "#8A99C7",
    "#9C7AC7", "#E06633", "#F090A0", "#50D050", "#C88033", "#7D80B0", "#C28F8F", "#668F8F",
    "#BD80E3", "#FFA100", "#A62929", "#5CB8D1", "#702EB0", "#00FF00", "#94FFFF", "#94E0E0",
    "#73C2C9", "#54B5B5", "#3B9E9E", "#248F8F", "#0A7D8C", "#006985", "#C0C0C0", "#FFD98F",
    "#A67573", "#668080", "#9E63B5", "#D47A00", "#940094", "#429EB0", "#57178F", "#00C900",
    "#70D4FF", "#FFFFC7", "#D9FFC7", "#C7FFC7", "#A3FFC7", "#8FFFC7", "#61FFC7", "#45FFC7",
    "#30FFC7", "#1FFFC7", "#00FF9C", "#00E675", "#00D452", "#00BF38", "#00AB24", "#4DC2FF",
    "#4DA6FF", "#2194D6", "#267DAB", "#266696", "#175487", "#D0D0E0", "#FFD123", "#B8B8D0",
    "#A6544D", "#575961", "#9E4FB5", "#AB5C00", "#754F45", "#428296", "#420066", "#007D00",
    "#70ABFA", "#00BAFF", "#00A1FF", "#008FFF", "#0080FF", "#006BFF", "#545CF2", "#785CE3",
    "#8A4FE3", "#A136D4", "#B31FD4", "#B31FBA", "#B30DA6", "#BD0D87", "#C70066", "#CC0059",
    "#D1004F", "#D90045", "#E00038", "#E6002E", "#EB0026",
];

/// Resolves an element symbol to its atomic number (1-109).
///
/// Matching is exact and case-sensitive: `"He"` resolves, `"he"` does not.
///
/// # Errors
///
/// Returns [`ElementError::UnknownSymbol`] if the symbol is not in the table.
pub fn symbol_to_number(symbol: &str) -> Result<u8, ElementError> {
    SYMBOL_NUMBERS
        .get(symbol)
        .copied()
        .ok_or_else(|| ElementError::UnknownSymbol(symbol.to_string()))
}

/// Resolves an atomic number (1-109) back to its element symbol.
///
/// # Errors
///
/// Returns [`ElementError::OutOfRange`] for 0 (the sentinel index) or
/// anything above [`ELEMENT_COUNT`].
pub fn number_to_symbol(number: u8) -> Result<&'static str, ElementError> {
    if number == 0 || number > ELEMENT_COUNT {
        return Err(ElementError::OutOfRange {
            number,
            max: ELEMENT_COUNT,
        });
    }
    Ok(SYMBOLS[number as usize])
}

/// Returns the tabulated covalent radius in Angstroms for atomic numbers
/// 1-119.
///
/// # Errors
///
/// Returns [`ElementError::OutOfRange`] for 0 or anything above
/// [`RADIUS_COUNT`].
pub fn covalent_radius(number: u8) -> Result<f64, ElementError> {
    if number == 0 || number > RADIUS_COUNT {
        return Err(ElementError::OutOfRange {
            number,
            max: RADIUS_COUNT,
        });
    }
    Ok(f64::from(RADII_MILLI[number as usize]) / 1000.0)
}

/// Returns the CPK display color (`#RRGGBB`) for atomic numbers 1-109.
///
/// # Errors
///
/// Returns [`ElementError::OutOfRange`] for 0 or anything above
/// [`ELEMENT_COUNT`].
pub fn cpk_color(number: u8) -> Result<&'static str, ElementError> {
    if number == 0 || number > ELEMENT_COUNT {
        return Err(ElementError::OutOfRange {
            number,
            max: ELEMENT_COUNT,
        });
    }
    Ok(CPK_COLORS[number as usize])
}
