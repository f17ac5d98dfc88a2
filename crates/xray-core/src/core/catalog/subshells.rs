use crate::core::descriptors::{AtomicSubshell, ValidationError};
use phf::{Map, phf_map};
use std::sync::Arc;

pub const SUBSHELL_COUNT: u8 = 29;

/// `(n, l, j_n)` of each catalog subshell; catalog index `i` is at position `i - 1`.
#[rustfmt::skip]
static SUBSHELLS: [(u8, u8, u8); SUBSHELL_COUNT as usize] = [
    (1, 0, 1),
    (2, 0, 1), (2, 1, 1), (2, 1, 3),
    (3, 0, 1), (3, 1, 1), (3, 1, 3), (3, 2, 3), (3, 2, 5),
    (4, 0, 1), (4, 1, 1), (4, 1, 3), (4, 2, 3), (4, 2, 5), (4, 3, 5), (4, 3, 7),
    (5, 0, 1), (5, 1, 1), (5, 1, 3), (5, 2, 3), (5, 2, 5), (5, 3, 5), (5, 3, 7),
    (6, 0, 1), (6, 1, 1), (6, 1, 3), (6, 2, 3), (6, 2, 5),
    (7, 0, 1),
];

#[rustfmt::skip]
static IUPAC_SUBSHELLS: Map<&'static str, u8> = phf_map! {
    "K" => 1,
    "L1" => 2, "L2" => 3, "L3" => 4,
    "M1" => 5, "M2" => 6, "M3" => 7, "M4" => 8, "M5" => 9,
    "N1" => 10, "N2" => 11, "N3" => 12, "N4" => 13, "N5" => 14, "N6" => 15, "N7" => 16,
    "O1" => 17, "O2" => 18, "O3" => 19, "O4" => 20, "O5" => 21, "O6" => 22, "O7" => 23,
    "P1" => 24, "P2" => 25, "P3" => 26, "P4" => 27, "P5" => 28,
    "Q1" => 29,
};

#[rustfmt::skip]
static SIEGBAHN_SUBSHELLS: Map<&'static str, u8> = phf_map! {
    "K" => 1,
    "LI" => 2, "LII" => 3, "LIII" => 4,
    "MI" => 5, "MII" => 6, "MIII" => 7, "MIV" => 8, "MV" => 9,
    "NI" => 10, "NII" => 11, "NIII" => 12, "NIV" => 13, "NV" => 14, "NVI" => 15, "NVII" => 16,
    "OI" => 17, "OII" => 18, "OIII" => 19, "OIV" => 20, "OV" => 21, "OVI" => 22, "OVII" => 23,
    "PI" => 24, "PII" => 25, "PIII" => 26, "PIV" => 27, "PV" => 28,
    "QI" => 29,
};

/// The subshell at catalog index `index` (1 for K through 29 for Q1).
pub fn subshell_at(index: u8) -> Result<Arc<AtomicSubshell>, ValidationError> {
    let &(n, l, j_n) = usize::from(index)
        .checked_sub(1)
        .and_then(|position| SUBSHELLS.get(position))
        .ok_or(ValidationError::UnknownSubshellIndex { index })?;
    AtomicSubshell::new(n, l, j_n)
}

pub fn subshell_index(subshell: &AtomicSubshell) -> Option<u8> {
    let key = (subshell.n(), subshell.l(), subshell.j_n());
    SUBSHELLS
        .iter()
        .position(|&entry| entry == key)
        .and_then(|position| u8::try_from(position + 1).ok())
}

pub fn iupac_subshell_index(name: &str) -> Option<u8> {
    IUPAC_SUBSHELLS.get(name).copied()
}

pub fn siegbahn_subshell_index(name: &str) -> Option<u8> {
    SIEGBAHN_SUBSHELLS.get(name).copied()
}

/// Looks up a subshell by its IUPAC name, e.g. `L3`.
pub fn subshell_from_iupac(name: &str) -> Option<Arc<AtomicSubshell>> {
    iupac_subshell_index(name).and_then(|index| subshell_at(index).ok())
}

/// Looks up a subshell by its Siegbahn name, e.g. `LIII`.
pub fn subshell_from_siegbahn(name: &str) -> Option<Arc<AtomicSubshell>> {
    siegbahn_subshell_index(name).and_then(|index| subshell_at(index).ok())
}

/// Every catalog subshell, in index order.
pub fn all_subshells() -> Vec<Arc<AtomicSubshell>> {
    (1..=SUBSHELL_COUNT)
        .filter_map(|index| subshell_at(index).ok())
        .collect()
}
