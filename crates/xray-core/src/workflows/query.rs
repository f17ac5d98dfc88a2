use super::error::QueryError;
use super::groups::transition_group;
use super::line::{Line, XrayLine};
use crate::core::notation::{ParseError, ParsedNotation, parse_notation};
use crate::engine::{PropertyStore, Resolver};
use tracing::{debug, instrument};

/// Bounds and options of [`get_transitions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionQuery {
    /// Inclusive lower bound, in eV.
    pub energy_low_ev: f64,
    /// Inclusive upper bound, in eV.
    pub energy_high_ev: f64,
    pub include_satellite: bool,
}

impl Default for TransitionQuery {
    fn default() -> Self {
        Self {
            energy_low_ev: 0.0,
            energy_high_ev: 1e6,
            include_satellite: false,
        }
    }
}

impl TransitionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn energy_range(mut self, low_ev: f64, high_ev: f64) -> Self {
        self.energy_low_ev = low_ev;
        self.energy_high_ev = high_ev;
        self
    }

    pub fn include_satellite(mut self, include: bool) -> Self {
        self.include_satellite = include;
        self
    }
}

/// Every X-ray line of element `z` whose resolved energy lies within the query
/// bounds, sorted in line order.
#[instrument(skip(resolver))]
pub fn get_transitions<S: PropertyStore>(
    resolver: &Resolver<S>,
    z: u8,
    query: &TransitionQuery,
) -> Result<Vec<XrayLine>, QueryError> {
    if query.energy_low_ev > query.energy_high_ev {
        return Err(QueryError::InvalidEnergyRange {
            low: query.energy_low_ev,
            high: query.energy_high_ev,
        });
    }

    let mut lines = Vec::new();
    for transition in resolver.element_transitions(z) {
        if !transition.is_radiative() || (transition.is_satellite() && !query.include_satellite) {
            continue;
        }
        let energy = resolver.transition_energy_ev(z, &transition, None)?;
        if energy < query.energy_low_ev || energy > query.energy_high_ev {
            continue;
        }
        lines.push(XrayLine::new(resolver, z, transition)?);
    }
    lines.sort();

    debug!(z, count = lines.len(), "Enumerated X-ray lines.");
    Ok(lines)
}

/// Parses `"<symbol> <notation>"`, e.g. `"Fe Ka1"`, `"Fe K-L3"`, `"Fe Ka"` or `"Fe LIII"`.
///
/// Single transitions are returned whether or not the store knows them; groups
/// only contain the lines that exist for the element.
#[instrument(skip(resolver))]
pub fn from_string<S: PropertyStore>(resolver: &Resolver<S>, text: &str) -> Result<Line, QueryError> {
    let words: Vec<&str> = text.trim().split(' ').collect();
    let [symbol, notation] = words.as_slice() else {
        return Err(ParseError::WrongWordCount {
            text: text.to_string(),
            count: words.len(),
        }
        .into());
    };

    let z = resolver.element_atomic_number(symbol)?;
    match parse_notation(notation)? {
        ParsedNotation::Transition(transition) => {
            Ok(Line::Single(XrayLine::new(resolver, z, transition)?))
        }
        ParsedNotation::Group(kind) => Ok(Line::Group(transition_group(resolver, z, kind, false)?)),
    }
}
