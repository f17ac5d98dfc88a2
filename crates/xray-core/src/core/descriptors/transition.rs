use super::error::ValidationError;
use super::intern::Interner;
use super::shell::AtomicSubshell;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// An electron transition from a `source` subshell into a vacancy in `destination`.
///
/// Radiative transitions (X-ray lines) involve two subshells. Nonradiative ones
/// (Auger and Coster-Kronig) carry a `secondary_destination`, the subshell from
/// which the second electron is ejected. A non-zero `satellite` marks a satellite
/// of the diagram line with the same subshells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transition {
    source: Arc<AtomicSubshell>,
    destination: Arc<AtomicSubshell>,
    secondary_destination: Option<Arc<AtomicSubshell>>,
    satellite: u8,
}

type TransitionKey = (
    Arc<AtomicSubshell>,
    Arc<AtomicSubshell>,
    Option<Arc<AtomicSubshell>>,
    u8,
);

pub(super) static TRANSITIONS: Interner<TransitionKey, Transition> = Interner::new("Transition");

impl Transition {
    pub fn new(
        source: Arc<AtomicSubshell>,
        destination: Arc<AtomicSubshell>,
        secondary_destination: Option<Arc<AtomicSubshell>>,
        satellite: u8,
    ) -> Arc<Self> {
        let key = (
            Arc::clone(&source),
            Arc::clone(&destination),
            secondary_destination.clone(),
            satellite,
        );
        TRANSITIONS.get_or_insert_with(key, || Self {
            source,
            destination,
            secondary_destination,
            satellite,
        })
    }

    pub fn radiative(source: Arc<AtomicSubshell>, destination: Arc<AtomicSubshell>) -> Arc<Self> {
        Self::new(source, destination, None, 0)
    }

    pub fn nonradiative(
        source: Arc<AtomicSubshell>,
        destination: Arc<AtomicSubshell>,
        secondary_destination: Arc<AtomicSubshell>,
    ) -> Arc<Self> {
        Self::new(source, destination, Some(secondary_destination), 0)
    }

    /// Builds a transition from `[source, destination]` or
    /// `[source, destination, secondary_destination]`.
    pub fn from_subshells(
        subshells: &[Arc<AtomicSubshell>],
        satellite: u8,
    ) -> Result<Arc<Self>, ValidationError> {
        match subshells {
            [source, destination] => Ok(Self::new(
                Arc::clone(source),
                Arc::clone(destination),
                None,
                satellite,
            )),
            [source, destination, secondary] => Ok(Self::new(
                Arc::clone(source),
                Arc::clone(destination),
                Some(Arc::clone(secondary)),
                satellite,
            )),
            _ => Err(ValidationError::SubshellCount {
                count: subshells.len(),
            }),
        }
    }

    pub fn source_subshell(&self) -> &Arc<AtomicSubshell> {
        &self.source
    }

    pub fn destination_subshell(&self) -> &Arc<AtomicSubshell> {
        &self.destination
    }

    pub fn secondary_destination_subshell(&self) -> Option<&Arc<AtomicSubshell>> {
        self.secondary_destination.as_ref()
    }

    pub fn satellite(&self) -> u8 {
        self.satellite
    }

    pub fn is_radiative(&self) -> bool {
        self.secondary_destination.is_none()
    }

    pub fn is_nonradiative(&self) -> bool {
        self.secondary_destination.is_some()
    }

    /// A nonradiative transition whose source and destination lie in the same shell.
    pub fn is_coster_kronig(&self) -> bool {
        self.is_nonradiative() && self.source.n() == self.destination.n()
    }

    pub fn is_diagram_line(&self) -> bool {
        self.satellite == 0
    }

    pub fn is_satellite(&self) -> bool {
        self.satellite > 0
    }

    /// The same transition with a different satellite index.
    pub fn with_satellite(&self, satellite: u8) -> Arc<Self> {
        Self::new(
            Arc::clone(&self.source),
            Arc::clone(&self.destination),
            self.secondary_destination.clone(),
            satellite,
        )
    }

    /// The diagram line this transition is a satellite of (itself when it is one).
    pub fn diagram_line(&self) -> Arc<Self> {
        self.with_satellite(0)
    }

    /// Electric dipole selection rules: `Δn ≠ 0`, `|Δl| = 1` and `|Δj| ≤ 1`.
    ///
    /// Informational only; construction never enforces selection rules.
    pub fn is_dipole_allowed(&self) -> bool {
        self.is_radiative()
            && self.source.n() != self.destination.n()
            && self.source.l().abs_diff(self.destination.l()) == 1
            && self.source.j_n().abs_diff(self.destination.j_n()) <= 2
    }

    /// Electric quadrupole selection rules: `Δn ≠ 0`, `|Δl| ∈ {0, 2}` and `|Δj| ≤ 2`.
    pub fn is_quadrupole_allowed(&self) -> bool {
        let delta_l = self.source.l().abs_diff(self.destination.l());
        self.is_radiative()
            && self.source.n() != self.destination.n()
            && (delta_l == 0 || delta_l == 2)
            && self.source.j_n().abs_diff(self.destination.j_n()) <= 4
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transition({} -> {}", self.source, self.destination)?;
        if let Some(secondary) = &self.secondary_destination {
            write!(f, " + {}", secondary)?;
        }
        if self.satellite > 0 {
            write!(f, ", satellite={}", self.satellite)?;
        }
        write!(f, ")")
    }
}

/// An unordered, deduplicated collection of transitions, such as the members of `Kα`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionSet {
    transitions: BTreeSet<Arc<Transition>>,
}

pub(super) static TRANSITION_SETS: Interner<BTreeSet<Arc<Transition>>, TransitionSet> =
    Interner::new("TransitionSet");

impl TransitionSet {
    pub fn new<I>(transitions: I) -> Result<Arc<Self>, ValidationError>
    where
        I: IntoIterator<Item = Arc<Transition>>,
    {
        let transitions: BTreeSet<Arc<Transition>> = transitions.into_iter().collect();
        if transitions.is_empty() {
            return Err(ValidationError::EmptyTransitionSet);
        }
        Ok(TRANSITION_SETS.get_or_insert_with(transitions.clone(), || Self { transitions }))
    }

    pub fn transitions(&self) -> &BTreeSet<Arc<Transition>> {
        &self.transitions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Transition>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn contains(&self, transition: &Transition) -> bool {
        self.transitions.iter().any(|t| t.as_ref() == transition)
    }
}

impl fmt::Display for TransitionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitionSet({} transitions)", self.transitions.len())
    }
}
