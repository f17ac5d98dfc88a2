//! # Core Module
//!
//! This module provides the fundamental vocabulary of the library: the descriptors
//! naming physical entities, the static catalog of X-ray diagram lines and the
//! notation systems used to write them.
//!
//! ## Architecture
//!
//! - **Descriptors** ([`descriptors`]) - Validated, interned value objects such as
//!   `Element`, `AtomicSubshell`, `Transition` and `Reference`
//! - **Catalog** ([`catalog`]) - Fixed tables of the 29 subshells, the 77 diagram lines
//!   with their Siegbahn names, the chemical symbols and the named line groups
//! - **Notation** ([`notation`]) - Formatting descriptors in Siegbahn, IUPAC and orbital
//!   notations across several encodings, and parsing the textual forms back
//!
//! ## Key Capabilities
//!
//! - **Identity by content**: two descriptors built from equal fields are the same
//!   shared instance, so they compare and hash equal
//! - **Validation on construction**: quantum numbers, atomic numbers and reference keys
//!   are checked before a descriptor ever exists
//! - **Notation round-tripping**: every catalog name formats back to the exact string
//!   it was parsed from

pub mod catalog;
pub mod descriptors;
pub mod notation;
