//! # xrayref
//!
//! A reference database of atomic subshells and characteristic X-ray transitions,
//! resolving each physical property across multiple literature sources.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the vocabulary of the
//! domain, the resolution of data, and the user-facing queries can evolve independently.
//!
//! - **[`core`]: The Foundation.** Immutable, interned descriptors (`Element`,
//!   `AtomicSubshell`, `Transition`, ...), the static catalog of diagram lines and
//!   the Siegbahn/IUPAC notation machinery (formatting and parsing).
//!
//! - **[`engine`]: The Resolution Core.** The `PropertyStore` abstraction over
//!   property rows keyed by subject and reference, the in-memory `PropertyTable`
//!   with its CSV loaders, and the `Resolver` applying the reference-priority policy.
//!
//! - **[`workflows`]: The Public API.** Parsing free-form line notations such as
//!   `"Fe Ka1"`, building line groups (`Kα`, `L`, `LIII`, ...) and enumerating the
//!   X-ray lines of an element within an energy window.

pub mod core;
pub mod engine;
pub mod workflows;
