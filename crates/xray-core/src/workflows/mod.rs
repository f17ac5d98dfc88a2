//! # Workflows Module
//!
//! The user-facing queries of the library, built on the descriptors of [`crate::core`]
//! and the [`Resolver`](crate::engine::Resolver) of [`crate::engine`].
//!
//! ## Key Components
//!
//! - **[`XrayLine`] / [`XrayLineSet`]** - A line or a named group of lines of one element,
//!   with resolved Siegbahn and IUPAC names
//! - **[`from_string`]** - Parses `"Fe Ka1"`, `"Fe K-L3"`, `"Fe Ka"` or `"Fe LIII"`
//! - **[`transition_group`]** - Builds the families (`K`, `L`, ...), groups (`Kα`, `Lβ`, ...)
//!   and shells (`LI` ... `MV`) from the lines known for an element
//! - **[`get_transitions`]** - Lists the lines of an element within an energy window
//! - **[`Composition`]** - Converts between chemical formulas, mass, atomic and oxide
//!   fractions using the resolved atomic weights
//!
//! ## Usage
//!
//! ```ignore
//! use xrayref::workflows::{from_string, get_transitions, TransitionQuery};
//!
//! let line = from_string(&resolver, "Fe Ka1")?;
//! let window = TransitionQuery::new().energy_range(6000.0, 6500.0);
//! for line in get_transitions(&resolver, 26, &window)? {
//!     println!("{line}");
//! }
//! ```

mod composition;
mod error;
mod groups;
mod line;
mod query;

pub use crate::core::catalog::GroupKind;
pub use composition::{Composition, Fraction};
pub use error::QueryError;
pub use groups::transition_group;
pub use line::{Line, XrayLine, XrayLineSet};
pub use query::{TransitionQuery, from_string, get_transitions};
