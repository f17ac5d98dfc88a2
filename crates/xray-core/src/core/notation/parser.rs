use super::error::ParseError;
use super::greek;
use crate::core::catalog::{GroupKind, catalog_transition, siegbahn_index, subshell_from_iupac};
use crate::core::descriptors::{AtomicSubshell, Transition};
use std::sync::Arc;
use tracing::trace;

/// What the notation word of a line such as `"Fe Ka1"` denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNotation {
    Transition(Arc<Transition>),
    Group(GroupKind),
}

const IUPAC_SEPARATORS: [char; 2] = ['-', '–'];

/// Splits a trailing satellite suffix `[sN]` off a notation.
fn split_satellite(notation: &str) -> Result<(&str, u8), ParseError> {
    let Some(body) = notation.strip_suffix(']') else {
        return Ok((notation, 0));
    };
    let (head, index) = body
        .rsplit_once("[s")
        .ok_or_else(|| ParseError::InvalidSatellite(notation.to_string()))?;
    let satellite = index
        .parse::<u8>()
        .ok()
        .filter(|&satellite| satellite > 0)
        .ok_or_else(|| ParseError::InvalidSatellite(notation.to_string()))?;
    Ok((head, satellite))
}

/// Parses the source side of an IUPAC name: one subshell, or two run together
/// (`L3`, `L2L3`) for a nonradiative transition.
fn parse_iupac_sources(
    notation: &str,
    sources: &str,
) -> Result<Vec<Arc<AtomicSubshell>>, ParseError> {
    if let Some(subshell) = subshell_from_iupac(sources) {
        return Ok(vec![subshell]);
    }
    for (position, _) in sources.char_indices().skip(1) {
        let (first, second) = sources.split_at(position);
        if let (Some(a), Some(b)) = (subshell_from_iupac(first), subshell_from_iupac(second)) {
            return Ok(vec![a, b]);
        }
    }
    Err(ParseError::UnknownSubshell {
        notation: notation.to_string(),
        name: sources.to_string(),
    })
}

fn parse_iupac(notation: &str, satellite: u8) -> Result<Arc<Transition>, ParseError> {
    let (destination, sources) = notation
        .split_once(IUPAC_SEPARATORS)
        .ok_or_else(|| ParseError::Unparseable(notation.to_string()))?;
    let destination = subshell_from_iupac(destination).ok_or_else(|| ParseError::UnknownSubshell {
        notation: notation.to_string(),
        name: destination.to_string(),
    })?;
    let sources = parse_iupac_sources(notation, sources)?;

    let transition = match sources.as_slice() {
        [source] => Transition::new(Arc::clone(source), destination, None, satellite),
        [source, secondary] => Transition::new(
            Arc::clone(source),
            destination,
            Some(Arc::clone(secondary)),
            satellite,
        ),
        _ => return Err(ParseError::Unparseable(notation.to_string())),
    };
    Ok(transition)
}

/// Parses a transition or group notation, without its element symbol.
///
/// Accepted forms, tried in order:
/// 1. a Siegbahn name in ASCII or Unicode (`Ka1`, `Kα1`, `Lg4p`, `Lγ4′`);
/// 2. an IUPAC name `destination-source` (`K-L3`, `K–L3`, `K-L2L3`);
/// 3. a group keyword (`K`, `Ka`, `Lb`, `LIII`, ...).
///
/// Anything after a `/` is ignored and `Le` is read as `Ln` (`Lη`). Transitions
/// may end with a satellite suffix `[sN]`.
pub fn parse_notation(notation: &str) -> Result<ParsedNotation, ParseError> {
    let trimmed = notation.trim();
    let trimmed = trimmed.split_once('/').map_or(trimmed, |(head, _)| head);
    let (body, satellite) = split_satellite(trimmed)?;
    let body = if body == "Le" { "Ln" } else { body };

    let unicode = greek::to_unicode(body);

    if let Some(index) = siegbahn_index(&unicode) {
        trace!(notation, index, "Parsed Siegbahn notation.");
        let transition = catalog_transition(index)
            .map_err(|_| ParseError::Unparseable(notation.to_string()))?;
        return Ok(ParsedNotation::Transition(transition.with_satellite(satellite)));
    }

    if body.contains(IUPAC_SEPARATORS) {
        trace!(notation, "Parsing IUPAC notation.");
        return parse_iupac(body, satellite).map(ParsedNotation::Transition);
    }

    if satellite == 0 {
        if let Some(kind) = GroupKind::from_keyword(&unicode) {
            trace!(notation, group = ?kind, "Parsed group notation.");
            return Ok(ParsedNotation::Group(kind));
        }
    }

    Err(ParseError::Unparseable(notation.to_string()))
}
