use super::error::QueryError;
use crate::core::catalog::{CATALOG_SENTINEL, sort_index};
use crate::core::descriptors::{Element, Transition, TransitionSet};
use crate::core::notation::{Encoding, NotationKind, iupac_name, siegbahn_name, transition_notation};
use crate::engine::{PropertyStore, Resolver};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Padding for index sequences of unequal length; greater than any sort index.
const PADDING_INDEX: usize = CATALOG_SENTINEL + 1;

/// One X-ray line of one element, with its display names resolved.
///
/// Lines order by atomic number, then by descending catalog index, so that
/// `Kα1` comes last among the lines of an element. Transitions outside the
/// catalog sort before every catalog line.
#[derive(Debug, Clone)]
pub struct XrayLine {
    element: Arc<Element>,
    transition: Arc<Transition>,
    symbol: String,
    siegbahn: String,
    iupac: String,
}

impl XrayLine {
    pub fn new<S: PropertyStore>(
        resolver: &Resolver<S>,
        z: u8,
        transition: Arc<Transition>,
    ) -> Result<Self, QueryError> {
        let element = Element::new(z)?;
        let symbol = resolver.element_symbol(z, None)?;
        let iupac = iupac_name(&transition).unwrap_or_else(|| transition.to_string());
        let siegbahn = siegbahn_name(&transition).unwrap_or_else(|| iupac.clone());
        Ok(Self {
            element,
            transition,
            symbol,
            siegbahn,
            iupac,
        })
    }

    pub fn element(&self) -> &Arc<Element> {
        &self.element
    }

    pub fn z(&self) -> u8 {
        self.element.z()
    }

    pub fn transition(&self) -> &Arc<Transition> {
        &self.transition
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Unicode Siegbahn name (`Kα1`), or the IUPAC name when the line has none.
    pub fn siegbahn(&self) -> &str {
        &self.siegbahn
    }

    pub fn iupac(&self) -> &str {
        &self.iupac
    }

    /// `Fe Kα1`
    pub fn label(&self) -> String {
        format!("{} {}", self.symbol, self.siegbahn)
    }

    /// `Fe K–L3`
    pub fn iupac_label(&self) -> String {
        format!("{} {}", self.symbol, self.iupac)
    }

    pub fn notation(&self, kind: NotationKind, encoding: Encoding) -> Option<String> {
        transition_notation(&self.transition, kind, encoding)
    }

    pub fn sort_index(&self) -> usize {
        sort_index(&self.transition)
    }

    pub fn is_diagram_line(&self) -> bool {
        self.transition.is_diagram_line()
    }

    pub fn is_satellite(&self) -> bool {
        self.transition.is_satellite()
    }

    pub fn energy_ev<S: PropertyStore>(
        &self,
        resolver: &Resolver<S>,
        reference: Option<&str>,
    ) -> Result<f64, QueryError> {
        Ok(resolver.transition_energy_ev(self.z(), &self.transition, reference)?)
    }

    pub fn probability<S: PropertyStore>(
        &self,
        resolver: &Resolver<S>,
        reference: Option<&str>,
    ) -> Result<f64, QueryError> {
        Ok(resolver.transition_probability(self.z(), &self.transition, reference)?)
    }
}

impl PartialEq for XrayLine {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && self.transition == other.transition
    }
}

impl Eq for XrayLine {}

impl Hash for XrayLine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state);
        self.transition.hash(state);
    }
}

impl Ord for XrayLine {
    fn cmp(&self, other: &Self) -> Ordering {
        self.z()
            .cmp(&other.z())
            .then_with(|| other.sort_index().cmp(&self.sort_index()))
            .then_with(|| self.transition.satellite().cmp(&other.transition.satellite()))
            .then_with(|| self.transition.cmp(&other.transition))
    }
}

impl PartialOrd for XrayLine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for XrayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.siegbahn)
    }
}

/// A named group of X-ray lines of one element, such as `Fe Kα`.
#[derive(Debug, Clone)]
pub struct XrayLineSet {
    element: Arc<Element>,
    set: Arc<TransitionSet>,
    symbol: String,
    siegbahn: String,
    iupac: String,
    lines: Vec<XrayLine>,
    most_probable: usize,
}

impl XrayLineSet {
    /// Builds the group from its member transitions.
    ///
    /// The most probable line is the member with the highest resolved probability;
    /// members without one rank lowest, and ties go to the member sorting first.
    /// A probability stored with the wrong value type is an error.
    pub fn new<S: PropertyStore>(
        resolver: &Resolver<S>,
        z: u8,
        siegbahn: &str,
        iupac: &str,
        transitions: Vec<Arc<Transition>>,
    ) -> Result<Self, QueryError> {
        let set = TransitionSet::new(transitions)?;
        let mut lines = set
            .iter()
            .map(|transition| XrayLine::new(resolver, z, Arc::clone(transition)))
            .collect::<Result<Vec<_>, _>>()?;
        lines.sort();

        let mut most_probable = 0;
        let mut best: Option<f64> = None;
        for (index, line) in lines.iter().enumerate() {
            let probability = match resolver.transition_probability(z, line.transition(), None) {
                Ok(probability) => Some(probability),
                Err(e) if e.is_not_found() => None,
                Err(e) => return Err(e.into()),
            };
            let better = match (probability, best) {
                (Some(p), Some(b)) => p > b,
                (Some(_), None) => true,
                (None, _) => false,
            };
            if better {
                most_probable = index;
                best = probability;
            }
        }

        Ok(Self {
            element: Element::new(z)?,
            set,
            symbol: resolver.element_symbol(z, None)?,
            siegbahn: siegbahn.to_string(),
            iupac: iupac.to_string(),
            lines,
            most_probable,
        })
    }

    pub fn element(&self) -> &Arc<Element> {
        &self.element
    }

    pub fn z(&self) -> u8 {
        self.element.z()
    }

    pub fn transitions(&self) -> &Arc<TransitionSet> {
        &self.set
    }

    /// Member lines, in line order.
    pub fn lines(&self) -> &[XrayLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn most_probable(&self) -> &XrayLine {
        &self.lines[self.most_probable]
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn siegbahn(&self) -> &str {
        &self.siegbahn
    }

    pub fn iupac(&self) -> &str {
        &self.iupac
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.symbol, self.siegbahn)
    }

    pub fn iupac_label(&self) -> String {
        format!("{} {}", self.symbol, self.iupac)
    }

    fn index_sequence(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.lines.iter().map(XrayLine::sort_index).collect();
        indices.sort_unstable();
        indices
    }
}

impl PartialEq for XrayLineSet {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && self.set == other.set
    }
}

impl Eq for XrayLineSet {}

impl Hash for XrayLineSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state);
        self.set.hash(state);
    }
}

impl Ord for XrayLineSet {
    /// Sets compare by their sorted catalog indices, element by element, with the
    /// shorter sequence padded past the end of the catalog; the result is inverted.
    fn cmp(&self, other: &Self) -> Ordering {
        let ours = self.index_sequence();
        let theirs = other.index_sequence();
        let length = ours.len().max(theirs.len());
        let by_indices = (0..length)
            .map(|i| {
                let a = ours.get(i).copied().unwrap_or(PADDING_INDEX);
                let b = theirs.get(i).copied().unwrap_or(PADDING_INDEX);
                b.cmp(&a)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal);

        self.z()
            .cmp(&other.z())
            .then(by_indices)
            .then_with(|| self.set.cmp(&other.set))
    }
}

impl PartialOrd for XrayLineSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for XrayLineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.siegbahn)
    }
}

/// The result of parsing a line notation: a single line or a group of lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    Single(XrayLine),
    Group(XrayLineSet),
}

impl Line {
    pub fn z(&self) -> u8 {
        match self {
            Line::Single(line) => line.z(),
            Line::Group(group) => group.z(),
        }
    }

    pub fn siegbahn(&self) -> &str {
        match self {
            Line::Single(line) => line.siegbahn(),
            Line::Group(group) => group.siegbahn(),
        }
    }

    pub fn iupac(&self) -> &str {
        match self {
            Line::Single(line) => line.iupac(),
            Line::Group(group) => group.iupac(),
        }
    }

    /// The member lines: one for a single line, every member for a group.
    pub fn lines(&self) -> Vec<&XrayLine> {
        match self {
            Line::Single(line) => vec![line],
            Line::Group(group) => group.lines().iter().collect(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Line::Group(_))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Single(line) => line.fmt(f),
            Line::Group(group) => group.fmt(f),
        }
    }
}
