//! # Notation Module
//!
//! Formatting and parsing of the textual names of shells, subshells and transitions.
//!
//! ## Notation Systems
//!
//! - **Siegbahn** - The historical names (`Kα1`, `Lβ15`, `LIII`). Only diagram lines of
//!   the catalog have one. Greek letters have ASCII stand-ins (`a`, `b`, `g`, `z`, `n`,
//!   `v`, `l`, and `p` or `'` for the prime).
//! - **IUPAC** - Systematic names built from subshells (`K-L3`, `L3`, `K-L2L3`).
//! - **Orbital** - Spectroscopic subshell names (`2p3/2`).
//!
//! Every name is available in four [`Encoding`]s: ASCII, Unicode (`utf16`), HTML and LaTeX.
//!
//! ## Usage
//!
//! ```ignore
//! use xrayref::core::notation::{parse_notation, siegbahn_name, ParsedNotation};
//!
//! if let ParsedNotation::Transition(t) = parse_notation("Ka1")? {
//!     assert_eq!(siegbahn_name(&t).as_deref(), Some("Kα1"));
//! }
//! ```

mod error;
mod format;
pub mod greek;
pub mod markup;
mod parser;

pub use error::ParseError;
pub use format::{
    Encoding, NotationKind, atomic_shell_notation, atomic_subshell_notation, iupac_name,
    siegbahn_name, transition_notation,
};
pub use parser::{ParsedNotation, parse_notation};
