//! # Engine Module
//!
//! The resolution core: where property values live and how one value is chosen
//! when several references publish it.
//!
//! ## Key Components
//!
//! - **[`PropertyStore`]** - Read access to property rows keyed by `(property, subject)`,
//!   each row tagged with its [`Reference`](crate::core::descriptors::Reference)
//! - **[`PropertyTable`]** - The in-memory store, seeded with the chemical symbols and
//!   filled from CSV files
//! - **[`Resolver`]** - Typed accessors (`element_symbol`, `transition_energy_ev`, ...)
//!   applying the reference-priority policy
//! - **[`ResolverConfig`]** - The priority list, built in code or loaded from TOML
//!
//! ## Usage
//!
//! ```ignore
//! use xrayref::engine::{PropertyTable, Resolver, ResolverConfigBuilder};
//!
//! let mut table = PropertyTable::builtin()?;
//! table.load_transitions_csv(Path::new("transitions.csv"))?;
//!
//! let config = ResolverConfigBuilder::new().prefer("deslattes2003").build()?;
//! let resolver = Resolver::with_config(table, &config);
//! let energy = resolver.transition_energy_ev(26, &ka1, None)?;
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod property;
pub mod resolver;
pub mod store;

pub use config::{ConfigError, ResolverConfig, ResolverConfigBuilder};
pub use error::LookupError;
pub use loader::LoadError;
pub use property::{PropertyKind, PropertyRow, PropertyValue, Subject};
pub use resolver::Resolver;
pub use store::{PropertyStore, PropertyTable};
