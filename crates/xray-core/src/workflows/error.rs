use crate::core::descriptors::ValidationError;
use crate::core::notation::ParseError;
use crate::engine::LookupError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("Invalid notation: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    #[error("Lookup failed: {source}")]
    Lookup {
        #[from]
        source: LookupError,
    },

    #[error("Invalid descriptor: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("No transition for {symbol} {group}")]
    EmptyGroup { symbol: String, group: String },

    #[error("Energy range is empty: {low} eV > {high} eV")]
    InvalidEnergyRange { low: f64, high: f64 },

    #[error("Invalid chemical formula '{formula}': {reason}")]
    InvalidFormula { formula: String, reason: String },

    #[error("A composition must contain at least one element")]
    EmptyComposition,

    #[error("A composition must have a total fraction greater than 0, got {total}")]
    NonPositiveComposition { total: f64 },
}
