use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Line notation '{text}' must have 2 words (element symbol and transition notation), found {count}"
    )]
    WrongWordCount { text: String, count: usize },

    #[error("Unknown IUPAC subshell '{name}' in '{notation}'")]
    UnknownSubshell { notation: String, name: String },

    #[error("Invalid satellite suffix in '{0}'")]
    InvalidSatellite(String),

    #[error("Cannot parse transition notation '{0}'")]
    Unparseable(String),

    #[error("Unknown notation '{0}' (expected siegbahn, iupac or orbital)")]
    UnknownNotationKind(String),

    #[error("Unknown encoding '{0}' (expected ascii, utf16, html or latex)")]
    UnknownEncoding(String),
}
