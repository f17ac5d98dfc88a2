use crate::core::descriptors::{Transition, ValidationError};
use phf::{Map, phf_map};
use std::sync::Arc;

use super::subshells::{subshell_at, subshell_index};

/// A diagram line of the catalog: source and destination subshell indices and
/// the canonical Siegbahn name (which, for lines without one, is the compact IUPAC form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub source: u8,
    pub destination: u8,
    pub siegbahn: &'static str,
}

impl CatalogEntry {
    const fn new(source: u8, destination: u8, siegbahn: &'static str) -> Self {
        Self {
            source,
            destination,
            siegbahn,
        }
    }
}

pub const CATALOG_SIZE: usize = 77;

/// Ordering index given to transitions absent from the catalog; greater than any real index.
pub const CATALOG_SENTINEL: usize = CATALOG_SIZE;

#[rustfmt::skip]
pub static TRANSITION_CATALOG: [CatalogEntry; CATALOG_SIZE] = [
    CatalogEntry::new(4, 1, "Kα1"),
    CatalogEntry::new(3, 1, "Kα2"),
    CatalogEntry::new(7, 1, "Kβ1"),
    CatalogEntry::new(12, 1, "Kβ2"),
    CatalogEntry::new(6, 1, "Kβ3"),
    CatalogEntry::new(14, 1, "Kβ4"),
    CatalogEntry::new(9, 1, "Kβ5"),
    CatalogEntry::new(11, 4, "L3N2"),
    CatalogEntry::new(12, 4, "L3N3"),
    CatalogEntry::new(18, 4, "L3O2"),
    CatalogEntry::new(19, 4, "L3O3"),
    CatalogEntry::new(24, 4, "L3P1"),
    CatalogEntry::new(9, 4, "Lα1"),
    CatalogEntry::new(8, 4, "Lα2"),
    CatalogEntry::new(13, 4, "Lβ15"),
    CatalogEntry::new(14, 4, "Lβ2"),
    CatalogEntry::new(20, 4, "Lβ5"),
    CatalogEntry::new(10, 4, "Lβ6"),
    CatalogEntry::new(17, 4, "Lβ7"),
    CatalogEntry::new(5, 4, "Lℓ"),
    CatalogEntry::new(7, 4, "Ls"),
    CatalogEntry::new(6, 4, "Lt"),
    CatalogEntry::new(15, 4, "Lu"),
    CatalogEntry::new(6, 3, "L2M2"),
    CatalogEntry::new(9, 3, "L2M5"),
    CatalogEntry::new(11, 3, "L2N2"),
    CatalogEntry::new(12, 3, "L2N3"),
    CatalogEntry::new(14, 3, "L2N5"),
    CatalogEntry::new(18, 3, "L2O2"),
    CatalogEntry::new(19, 3, "L2O3"),
    CatalogEntry::new(25, 3, "L2P2"),
    CatalogEntry::new(8, 3, "Lβ1"),
    CatalogEntry::new(7, 3, "Lβ17"),
    CatalogEntry::new(13, 3, "Lγ1"),
    CatalogEntry::new(10, 3, "Lγ5"),
    CatalogEntry::new(20, 3, "Lγ6"),
    CatalogEntry::new(17, 3, "Lγ8"),
    CatalogEntry::new(5, 3, "Lη"),
    CatalogEntry::new(15, 3, "Lν"),
    CatalogEntry::new(5, 2, "L1M1"),
    CatalogEntry::new(10, 2, "L1N1"),
    CatalogEntry::new(13, 2, "L1N4"),
    CatalogEntry::new(17, 2, "L1O1"),
    CatalogEntry::new(20, 2, "L1O4"),
    CatalogEntry::new(8, 2, "Lβ10"),
    CatalogEntry::new(7, 2, "Lβ3"),
    CatalogEntry::new(6, 2, "Lβ4"),
    CatalogEntry::new(9, 2, "Lβ9"),
    CatalogEntry::new(11, 2, "Lγ2"),
    CatalogEntry::new(14, 2, "Lγ11"),
    CatalogEntry::new(12, 2, "Lγ3"),
    CatalogEntry::new(19, 2, "Lγ4"),
    CatalogEntry::new(18, 2, "Lγ4′"),
    CatalogEntry::new(11, 5, "M1N2"),
    CatalogEntry::new(12, 5, "M1N3"),
    CatalogEntry::new(8, 6, "M2M4"),
    CatalogEntry::new(10, 6, "M2N1"),
    CatalogEntry::new(13, 6, "M2N4"),
    CatalogEntry::new(20, 6, "M2O4"),
    CatalogEntry::new(8, 7, "M3M4"),
    CatalogEntry::new(9, 7, "M3M5"),
    CatalogEntry::new(10, 7, "M3N1"),
    CatalogEntry::new(13, 7, "M3N4"),
    CatalogEntry::new(17, 7, "M3O1"),
    CatalogEntry::new(20, 7, "M3O4"),
    CatalogEntry::new(21, 7, "M3O5"),
    CatalogEntry::new(14, 7, "Mγ"),
    CatalogEntry::new(12, 8, "M4N3"),
    CatalogEntry::new(18, 8, "M4O2"),
    CatalogEntry::new(15, 8, "Mβ"),
    CatalogEntry::new(11, 8, "Mζ2"),
    CatalogEntry::new(19, 9, "M5O3"),
    CatalogEntry::new(16, 9, "Mα1"),
    CatalogEntry::new(15, 9, "Mα2"),
    CatalogEntry::new(12, 9, "Mζ1"),
    CatalogEntry::new(15, 13, "N4N6"),
    CatalogEntry::new(15, 14, "N5N6"),
];

#[rustfmt::skip]
static SIEGBAHN_INDEX: Map<&'static str, usize> = phf_map! {
    "Kα1" => 0,
    "Kα2" => 1,
    "Kβ1" => 2,
    "Kβ2" => 3,
    "Kβ3" => 4,
    "Kβ4" => 5,
    "Kβ5" => 6,
    "L3N2" => 7,
    "L3N3" => 8,
    "L3O2" => 9,
    "L3O3" => 10,
    "L3P1" => 11,
    "Lα1" => 12,
    "Lα2" => 13,
    "Lβ15" => 14,
    "Lβ2" => 15,
    "Lβ5" => 16,
    "Lβ6" => 17,
    "Lβ7" => 18,
    "Lℓ" => 19,
    "Ls" => 20,
    "Lt" => 21,
    "Lu" => 22,
    "L2M2" => 23,
    "L2M5" => 24,
    "L2N2" => 25,
    "L2N3" => 26,
    "L2N5" => 27,
    "L2O2" => 28,
    "L2O3" => 29,
    "L2P2" => 30,
    "Lβ1" => 31,
    "Lβ17" => 32,
    "Lγ1" => 33,
    "Lγ5" => 34,
    "Lγ6" => 35,
    "Lγ8" => 36,
    "Lη" => 37,
    "Lν" => 38,
    "L1M1" => 39,
    "L1N1" => 40,
    "L1N4" => 41,
    "L1O1" => 42,
    "L1O4" => 43,
    "Lβ10" => 44,
    "Lβ3" => 45,
    "Lβ4" => 46,
    "Lβ9" => 47,
    "Lγ2" => 48,
    "Lγ11" => 49,
    "Lγ3" => 50,
    "Lγ4" => 51,
    "Lγ4′" => 52,
    "M1N2" => 53,
    "M1N3" => 54,
    "M2M4" => 55,
    "M2N1" => 56,
    "M2N4" => 57,
    "M2O4" => 58,
    "M3M4" => 59,
    "M3M5" => 60,
    "M3N1" => 61,
    "M3N4" => 62,
    "M3O1" => 63,
    "M3O4" => 64,
    "M3O5" => 65,
    "Mγ" => 66,
    "M4N3" => 67,
    "M4O2" => 68,
    "Mβ" => 69,
    "Mζ2" => 70,
    "M5O3" => 71,
    "Mα1" => 72,
    "Mα2" => 73,
    "Mζ1" => 74,
    "N4N6" => 75,
    "N5N6" => 76,
};

/// Catalog index of a canonical (Unicode) Siegbahn name.
pub fn siegbahn_index(name: &str) -> Option<usize> {
    SIEGBAHN_INDEX.get(name).copied()
}

/// Catalog index of a transition, ignoring its satellite index.
///
/// Only radiative transitions between catalog subshells can be found.
pub fn catalog_index(transition: &Transition) -> Option<usize> {
    if transition.is_nonradiative() {
        return None;
    }
    let source = subshell_index(transition.source_subshell())?;
    let destination = subshell_index(transition.destination_subshell())?;
    TRANSITION_CATALOG
        .iter()
        .position(|entry| entry.source == source && entry.destination == destination)
}

/// The catalog index used for ordering: the real index, or [`CATALOG_SENTINEL`].
pub fn sort_index(transition: &Transition) -> usize {
    catalog_index(transition).unwrap_or(CATALOG_SENTINEL)
}

pub fn catalog_entry(index: usize) -> Result<&'static CatalogEntry, ValidationError> {
    TRANSITION_CATALOG
        .get(index)
        .ok_or(ValidationError::UnknownTransitionIndex { index })
}

pub fn catalog_transition(index: usize) -> Result<Arc<Transition>, ValidationError> {
    let entry = catalog_entry(index)?;
    Ok(Transition::radiative(
        subshell_at(entry.source)?,
        subshell_at(entry.destination)?,
    ))
}

/// Every diagram line of the catalog, in index order.
pub fn catalog_transitions() -> Result<Vec<Arc<Transition>>, ValidationError> {
    (0..CATALOG_SIZE).map(catalog_transition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::AtomicSubshell;

    #[test]
    fn every_entry_builds_a_transition() {
        let transitions = catalog_transitions().unwrap();
        assert_eq!(transitions.len(), CATALOG_SIZE);
        assert!(transitions.iter().all(|t| t.is_radiative() && t.is_diagram_line()));
    }

    #[test]
    fn names_and_indices_agree() {
        for (index, entry) in TRANSITION_CATALOG.iter().enumerate() {
            assert_eq!(siegbahn_index(entry.siegbahn), Some(index), "{}", entry.siegbahn);
            let transition = catalog_transition(index).unwrap();
            assert_eq!(catalog_index(&transition), Some(index));
        }
    }

    #[test]
    fn ka1_is_l3_to_k() {
        let ka1 = catalog_transition(siegbahn_index("Kα1").unwrap()).unwrap();
        assert_eq!(**ka1.source_subshell(), *AtomicSubshell::new(2, 1, 3).unwrap());
        assert_eq!(**ka1.destination_subshell(), *AtomicSubshell::new(1, 0, 1).unwrap());
    }

    #[test]
    fn satellites_share_the_index_of_their_diagram_line() {
        let ka1 = catalog_transition(0).unwrap();
        assert_eq!(catalog_index(&ka1.with_satellite(4)), Some(0));
    }

    #[test]
    fn unknown_transitions_sort_after_the_catalog() {
        let transition = Transition::radiative(
            AtomicSubshell::new(7, 0, 1).unwrap(),
            AtomicSubshell::new(1, 0, 1).unwrap(),
        );
        assert_eq!(catalog_index(&transition), None);
        assert_eq!(sort_index(&transition), CATALOG_SENTINEL);
        assert!(catalog_transition(CATALOG_SIZE).is_err());
    }
}
