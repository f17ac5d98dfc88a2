use crate::core::descriptors::{AtomicSubshell, Element, Language, Reference, Transition, TransitionSet};
use std::fmt;
use std::sync::Arc;

/// The physical properties the database can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    ElementSymbol,
    ElementName(Arc<Language>),
    ElementAtomicWeight,
    /// Mass density in kg/m³.
    ElementMassDensity,
    /// Binding energy in eV.
    SubshellBindingEnergy,
    /// Radiative width in eV.
    SubshellRadiativeWidth,
    /// Nonradiative width in eV.
    SubshellNonradiativeWidth,
    SubshellOccupancy,
    /// Energy in eV.
    TransitionEnergy,
    TransitionProbability,
    TransitionRelativeWeight,
    /// Energy in eV.
    TransitionSetEnergy,
    TransitionSetRelativeWeight,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::ElementSymbol => f.write_str("element symbol"),
            PropertyKind::ElementName(language) => write!(f, "element name ({language})"),
            PropertyKind::ElementAtomicWeight => f.write_str("atomic weight"),
            PropertyKind::ElementMassDensity => f.write_str("mass density"),
            PropertyKind::SubshellBindingEnergy => f.write_str("binding energy"),
            PropertyKind::SubshellRadiativeWidth => f.write_str("radiative width"),
            PropertyKind::SubshellNonradiativeWidth => f.write_str("nonradiative width"),
            PropertyKind::SubshellOccupancy => f.write_str("occupancy"),
            PropertyKind::TransitionEnergy => f.write_str("transition energy"),
            PropertyKind::TransitionProbability => f.write_str("transition probability"),
            PropertyKind::TransitionRelativeWeight => f.write_str("transition relative weight"),
            PropertyKind::TransitionSetEnergy => f.write_str("transition set energy"),
            PropertyKind::TransitionSetRelativeWeight => {
                f.write_str("transition set relative weight")
            }
        }
    }
}

/// What a property row is about: an element, or a subshell, transition or set within an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    Element(Arc<Element>),
    AtomicSubshell {
        element: Arc<Element>,
        subshell: Arc<AtomicSubshell>,
    },
    Transition {
        element: Arc<Element>,
        transition: Arc<Transition>,
    },
    TransitionSet {
        element: Arc<Element>,
        set: Arc<TransitionSet>,
    },
}

impl Subject {
    pub fn element(&self) -> &Arc<Element> {
        match self {
            Subject::Element(element)
            | Subject::AtomicSubshell { element, .. }
            | Subject::Transition { element, .. }
            | Subject::TransitionSet { element, .. } => element,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Element(element) => write!(f, "{element}"),
            Subject::AtomicSubshell { element, subshell } => write!(f, "{element} {subshell}"),
            Subject::Transition {
                element,
                transition,
            } => write!(f, "{element} {transition}"),
            Subject::TransitionSet { element, set } => write!(f, "{element} {set}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Integer(i64),
    Text(String),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(value) => Some(*value),
            PropertyValue::Integer(value) => Some(*value as f64),
            PropertyValue::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Number(_) => "number",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Text(_) => "text",
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(value) => write!(f, "{value}"),
            PropertyValue::Integer(value) => write!(f, "{value}"),
            PropertyValue::Text(value) => f.write_str(value),
        }
    }
}

/// One value of a property for a subject, as published by one reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub reference: Arc<Reference>,
    pub value: PropertyValue,
}
