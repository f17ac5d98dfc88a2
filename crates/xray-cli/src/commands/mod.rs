pub mod composition;
pub mod element;
pub mod line;
pub mod lines;

use crate::error::Result;
use xrayref::engine::LookupError;

/// Turns a missing property into `None`, keeping every other failure.
fn optional<T>(result: std::result::Result<T, LookupError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Formats an optional numeric property, showing `n/a` when the store has none.
fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) if unit.is_empty() => format!("{value}"),
        Some(value) => format!("{value} {unit}"),
        None => "n/a".to_string(),
    }
}
