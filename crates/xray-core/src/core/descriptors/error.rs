use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Atomic number ({z}) must be in [{min}, {max}]")]
    AtomicNumberOutOfRange { z: u8, min: u8, max: u8 },

    #[error("Principal quantum number ({n}) must be at least 1")]
    PrincipalQuantumNumberOutOfRange { n: u8 },

    #[error("Azimuthal quantum number ({l}) must be in [0, {max}] for n = {n}")]
    AzimuthalQuantumNumberOutOfRange { n: u8, l: u8, max: u8 },

    #[error("Total angular momentum ({j_n}/2) must be {min}/2 or {max}/2 for l = {l}")]
    TotalAngularMomentumOutOfRange { l: u8, j_n: u8, min: u16, max: u16 },

    #[error("A transition requires 2 or 3 subshells, got {count}")]
    SubshellCount { count: usize },

    #[error("A transition set must contain at least one transition")]
    EmptyTransitionSet,

    #[error("A BibTeX key must be defined")]
    EmptyBibtexKey,

    #[error("Language code '{code}' must be between 2 and 3 characters")]
    InvalidLanguageCode { code: String },

    #[error("Notation name cannot be empty")]
    EmptyNotationName,

    #[error("No subshell at catalog index {index}")]
    UnknownSubshellIndex { index: u8 },

    #[error("No diagram line at catalog index {index}")]
    UnknownTransitionIndex { index: usize },
}
