//! Static tables of the database: chemical symbols, the 29 catalog subshells
//! (K through Q1), the 77 diagram lines and the named line groups.
//!
//! Catalog indices are stable. Subshells are numbered from 1 (K) and diagram
//! lines from 0 (Kα1); the line index also defines the display order of lines
//! within an element.

pub mod elements;
pub mod groups;
pub mod subshells;
pub mod transitions;

pub use groups::{GroupKind, Selection};
pub use subshells::{
    SUBSHELL_COUNT, all_subshells, subshell_at, subshell_from_iupac, subshell_from_siegbahn,
    subshell_index,
};
pub use transitions::{
    CATALOG_SENTINEL, CATALOG_SIZE, CatalogEntry, TRANSITION_CATALOG, catalog_entry,
    catalog_index, catalog_transition, catalog_transitions, siegbahn_index, sort_index,
};
