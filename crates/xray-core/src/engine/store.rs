use super::property::{PropertyKind, PropertyRow, PropertyValue, Subject};
use crate::core::catalog::elements::SYMBOLS;
use crate::core::descriptors::{Element, Reference, Transition, ValidationError};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Read access to property rows keyed by `(property, subject)`.
///
/// Rows for one key come back in insertion order and carry at most one value
/// per BibTeX key; the resolver relies on that order for its fallback.
///
/// The provided methods scan [`PropertyStore::keys`]. Stores holding many rows
/// should override them with indexed lookups, as [`PropertyTable`] does.
pub trait PropertyStore {
    fn rows(&self, kind: &PropertyKind, subject: &Subject) -> Vec<PropertyRow>;

    /// Every `(property, subject)` key holding at least one row.
    fn keys(&self) -> Vec<(PropertyKind, Subject)>;

    fn subjects(&self, kind: &PropertyKind) -> Vec<Subject> {
        self.keys()
            .into_iter()
            .filter(|(k, _)| k == kind)
            .map(|(_, subject)| subject)
            .collect()
    }

    fn has_property(&self, kind: &PropertyKind, subject: &Subject, reference: &str) -> bool {
        self.get_property(kind, subject, reference).is_some()
    }

    fn get_property(
        &self,
        kind: &PropertyKind,
        subject: &Subject,
        reference: &str,
    ) -> Option<PropertyValue> {
        self.rows(kind, subject)
            .into_iter()
            .find(|row| row.reference.bibtexkey() == reference)
            .map(|row| row.value)
    }

    /// Distinct references of the store, sorted by BibTeX key.
    fn references(&self) -> Vec<Arc<Reference>> {
        let mut references = BTreeMap::new();
        for (kind, subject) in self.keys() {
            for row in self.rows(&kind, &subject) {
                references
                    .entry(row.reference.bibtexkey().to_string())
                    .or_insert(row.reference);
            }
        }
        references.into_values().collect()
    }

    /// The element whose symbol or name, in any language, is `name` once both
    /// are lowercased. The lowest atomic number wins if several match.
    fn find_element(&self, name: &str) -> Option<Arc<Element>> {
        let name = name.to_lowercase();
        self.keys()
            .into_iter()
            .filter(|(kind, _)| is_name_kind(kind))
            .filter_map(|(kind, subject)| {
                let Subject::Element(element) = &subject else {
                    return None;
                };
                self.rows(&kind, &subject)
                    .iter()
                    .any(|row| row.value.as_str().is_some_and(|text| text.to_lowercase() == name))
                    .then(|| Arc::clone(element))
            })
            .min()
    }

    /// Transitions of element `z` holding an energy row, in descriptor order.
    fn element_transitions(&self, z: u8) -> Vec<Arc<Transition>> {
        let transitions: BTreeSet<Arc<Transition>> = self
            .subjects(&PropertyKind::TransitionEnergy)
            .into_iter()
            .filter_map(|subject| match subject {
                Subject::Transition {
                    element,
                    transition,
                } if element.z() == z => Some(transition),
                _ => None,
            })
            .collect();
        transitions.into_iter().collect()
    }
}

/// In-memory property store.
///
/// Besides the rows it keeps three indexes, maintained by [`PropertyTable::insert`]:
/// lowercased symbols and names to elements, energy-bearing transitions per
/// element, and the references seen so far.
#[derive(Debug, Default, Clone)]
pub struct PropertyTable {
    rows: BTreeMap<(PropertyKind, Subject), Vec<PropertyRow>>,
    /// Lowercased name -> element -> number of rows spelling it.
    names: HashMap<String, BTreeMap<Arc<Element>, usize>>,
    transitions: BTreeMap<u8, BTreeSet<Arc<Transition>>>,
    references: BTreeMap<String, Arc<Reference>>,
}

fn is_name_kind(kind: &PropertyKind) -> bool {
    matches!(kind, PropertyKind::ElementSymbol | PropertyKind::ElementName(_))
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table seeded with the chemical symbols of all 118 elements under the
    /// `unattributed` reference.
    pub fn builtin() -> Result<Self, ValidationError> {
        let mut table = Self::new();
        let reference = Reference::unattributed()?;
        for (index, symbol) in SYMBOLS.iter().enumerate() {
            let z = u8::try_from(index + 1).unwrap_or(u8::MAX);
            let element = Element::new(z)?;
            table.insert(
                PropertyKind::ElementSymbol,
                Subject::Element(element),
                Arc::clone(&reference),
                *symbol,
            );
        }
        debug!(rows = table.len(), "Seeded built-in property table.");
        Ok(table)
    }

    /// Adds a row. A row with the same BibTeX key is replaced in place, taking
    /// the new reference details along with the new value.
    pub fn insert(
        &mut self,
        kind: PropertyKind,
        subject: Subject,
        reference: Arc<Reference>,
        value: impl Into<PropertyValue>,
    ) {
        let value = value.into();
        let named = match (is_name_kind(&kind), &subject) {
            (true, Subject::Element(element)) => Some(Arc::clone(element)),
            _ => None,
        };
        if let (PropertyKind::TransitionEnergy, Subject::Transition { element, transition }) =
            (&kind, &subject)
        {
            self.transitions
                .entry(element.z())
                .or_default()
                .insert(Arc::clone(transition));
        }
        self.references
            .insert(reference.bibtexkey().to_string(), Arc::clone(&reference));

        if let Some(element) = &named {
            if let Some(text) = value.as_str() {
                self.index_name(text, element);
            }
        }

        let rows = self.rows.entry((kind, subject)).or_default();
        let position = rows
            .iter()
            .position(|row| row.reference.bibtexkey() == reference.bibtexkey());
        let replaced = match position {
            Some(position) => {
                let old = std::mem::replace(&mut rows[position], PropertyRow { reference, value });
                Some(old.value)
            }
            None => {
                rows.push(PropertyRow { reference, value });
                None
            }
        };

        if let (Some(element), Some(old)) = (&named, replaced) {
            if let Some(text) = old.as_str() {
                self.unindex_name(text, element);
            }
        }
    }

    fn index_name(&mut self, text: &str, element: &Arc<Element>) {
        *self
            .names
            .entry(text.to_lowercase())
            .or_default()
            .entry(Arc::clone(element))
            .or_insert(0) += 1;
    }

    fn unindex_name(&mut self, text: &str, element: &Arc<Element>) {
        let name = text.to_lowercase();
        let Some(elements) = self.names.get_mut(&name) else {
            return;
        };
        if let Some(count) = elements.get_mut(element) {
            *count -= 1;
            if *count == 0 {
                elements.remove(element);
            }
        }
        if elements.is_empty() {
            self.names.remove(&name);
        }
    }

    /// Appends every row of `other`, in its order.
    pub fn merge(&mut self, other: PropertyTable) {
        for ((kind, subject), rows) in other.rows {
            for row in rows {
                self.insert(kind.clone(), subject.clone(), row.reference, row.value);
            }
        }
    }

    /// Number of rows across all keys.
    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PropertyStore for PropertyTable {
    fn rows(&self, kind: &PropertyKind, subject: &Subject) -> Vec<PropertyRow> {
        self.rows
            .get(&(kind.clone(), subject.clone()))
            .cloned()
            .unwrap_or_default()
    }

    fn keys(&self) -> Vec<(PropertyKind, Subject)> {
        self.rows.keys().cloned().collect()
    }

    fn references(&self) -> Vec<Arc<Reference>> {
        self.references.values().cloned().collect()
    }

    fn find_element(&self, name: &str) -> Option<Arc<Element>> {
        self.names
            .get(&name.to_lowercase())
            .and_then(|elements| elements.keys().next().cloned())
    }

    fn element_transitions(&self, z: u8) -> Vec<Arc<Transition>> {
        self.transitions
            .get(&z)
            .map(|transitions| transitions.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog_transition;
    use crate::core::descriptors::{Language, ReferenceDetails};

    fn fe() -> Subject {
        Subject::Element(Element::new(26).unwrap())
    }

    #[test]
    fn builtin_holds_every_symbol() {
        let table = PropertyTable::builtin().unwrap();
        assert_eq!(table.len(), 118);
        assert_eq!(
            table.get_property(&PropertyKind::ElementSymbol, &fe(), "unattributed"),
            Some(PropertyValue::from("Fe"))
        );
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut table = PropertyTable::new();
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("b").unwrap(), 1.0);
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("a").unwrap(), 2.0);

        let keys: Vec<String> = table
            .rows(&PropertyKind::ElementAtomicWeight, &fe())
            .into_iter()
            .map(|row| row.reference.bibtexkey().to_string())
            .collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn same_reference_replaces_value() {
        let mut table = PropertyTable::new();
        let reference = Reference::new("a").unwrap();
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Arc::clone(&reference), 1.0);
        table.insert(PropertyKind::ElementAtomicWeight, fe(), reference, 3.0);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get_property(&PropertyKind::ElementAtomicWeight, &fe(), "a"),
            Some(PropertyValue::Number(3.0))
        );
    }

    #[test]
    fn same_bibtexkey_with_new_details_replaces_row() {
        let mut table = PropertyTable::new();
        let bare = Reference::new("krause1979").unwrap();
        let detailed = Reference::with_details(
            "krause1979",
            ReferenceDetails {
                year: Some("1979".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        table.insert(PropertyKind::ElementAtomicWeight, fe(), bare, 1.0);
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Arc::clone(&detailed), 2.0);

        let rows = table.rows(&PropertyKind::ElementAtomicWeight, &fe());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, PropertyValue::Number(2.0));
        assert_eq!(rows[0].reference, detailed);
        assert_eq!(table.references(), vec![detailed]);
    }

    #[test]
    fn names_are_indexed_case_insensitively() {
        let mut table = PropertyTable::builtin().unwrap();
        let french = PropertyKind::ElementName(Language::new("fr").unwrap());
        let sn = Subject::Element(Element::new(50).unwrap());
        table.insert(french.clone(), sn.clone(), Reference::new("a").unwrap(), "Étain");

        assert_eq!(table.find_element("ÉTAIN").map(|e| e.z()), Some(50));
        assert_eq!(table.find_element("étain").map(|e| e.z()), Some(50));
        assert_eq!(table.find_element("og").map(|e| e.z()), Some(118));
        assert_eq!(table.find_element("tin"), None);

        table.insert(french, sn, Reference::new("a").unwrap(), "Etain");
        assert_eq!(table.find_element("étain"), None);
        assert_eq!(table.find_element("etain").map(|e| e.z()), Some(50));
    }

    #[test]
    fn name_shared_by_two_rows_survives_one_replacement() {
        let mut table = PropertyTable::new();
        let english = PropertyKind::ElementName(Language::new("en").unwrap());
        let french = PropertyKind::ElementName(Language::new("fr").unwrap());
        let al = Subject::Element(Element::new(13).unwrap());
        table.insert(english.clone(), al.clone(), Reference::new("a").unwrap(), "Aluminium");
        table.insert(french, al.clone(), Reference::new("a").unwrap(), "Aluminium");
        table.insert(english, al, Reference::new("a").unwrap(), "Aluminum");

        assert_eq!(table.find_element("aluminium").map(|e| e.z()), Some(13));
        assert_eq!(table.find_element("aluminum").map(|e| e.z()), Some(13));
    }

    #[test]
    fn transitions_are_indexed_per_element() {
        let ka1 = catalog_transition(0).unwrap();
        let ka2 = catalog_transition(1).unwrap();
        let mut table = PropertyTable::new();
        for (z, transition) in [(26, &ka2), (26, &ka1), (29, &ka1)] {
            table.insert(
                PropertyKind::TransitionEnergy,
                Subject::Transition {
                    element: Element::new(z).unwrap(),
                    transition: Arc::clone(transition),
                },
                Reference::new("a").unwrap(),
                1.0,
            );
        }
        table.insert(
            PropertyKind::TransitionProbability,
            Subject::Transition {
                element: Element::new(13).unwrap(),
                transition: Arc::clone(&ka1),
            },
            Reference::new("a").unwrap(),
            0.1,
        );

        let mut expected = vec![Arc::clone(&ka1), Arc::clone(&ka2)];
        expected.sort();
        assert_eq!(table.element_transitions(26), expected);
        assert_eq!(table.element_transitions(29), vec![ka1]);
        assert!(table.element_transitions(13).is_empty());
    }

    #[test]
    fn missing_rows_are_empty() {
        let table = PropertyTable::new();
        assert!(table.rows(&PropertyKind::ElementMassDensity, &fe()).is_empty());
        assert!(!table.has_property(&PropertyKind::ElementMassDensity, &fe(), "a"));
    }

    #[test]
    fn subjects_and_references_are_enumerable() {
        let mut table = PropertyTable::new();
        let cu = Subject::Element(Element::new(29).unwrap());
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("a").unwrap(), 1.0);
        table.insert(PropertyKind::ElementAtomicWeight, cu.clone(), Reference::new("b").unwrap(), 2.0);
        table.insert(PropertyKind::ElementMassDensity, cu, Reference::new("a").unwrap(), 3.0);

        assert_eq!(table.subjects(&PropertyKind::ElementAtomicWeight).len(), 2);
        let keys: Vec<String> = table
            .references()
            .iter()
            .map(|r| r.bibtexkey().to_string())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn merge_appends_rows_of_other_table() {
        let mut base = PropertyTable::new();
        base.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("a").unwrap(), 1.0);
        let mut other = PropertyTable::new();
        other.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("b").unwrap(), 2.0);

        base.merge(other);
        assert_eq!(base.rows(&PropertyKind::ElementAtomicWeight, &fe()).len(), 2);
    }
}
