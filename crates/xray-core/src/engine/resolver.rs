use super::config::ResolverConfig;
use super::error::LookupError;
use super::property::{PropertyKind, PropertyRow, PropertyValue, Subject};
use super::store::{PropertyStore, PropertyTable};
use crate::core::descriptors::{AtomicSubshell, Element, Language, Transition, TransitionSet};
use std::sync::Arc;
use tracing::{trace, warn};

/// Planck constant times the speed of light, in eV·m.
const HC_EV_M: f64 = 4.135_667_33e-15 * 299_792_458.0;

/// Answers property queries over a [`PropertyStore`], choosing among the values
/// published by different references.
///
/// For a lookup without an explicit reference, the first reference of the
/// priority list that has a value wins; when none does, the first row stored
/// for the subject is returned. A lookup naming a reference returns exactly that
/// reference's value or fails.
#[derive(Debug, Clone)]
pub struct Resolver<S = PropertyTable> {
    store: S,
    reference_priority: Vec<String>,
}

impl<S: PropertyStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            reference_priority: Vec::new(),
        }
    }

    pub fn with_config(store: S, config: &ResolverConfig) -> Self {
        let mut resolver = Self::new(store);
        resolver.set_reference_priority(config.reference_priority.iter().cloned());
        resolver
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn reference_priority(&self) -> &[String] {
        &self.reference_priority
    }

    /// Replaces the priority list. Keys unknown to the store are kept but logged.
    pub fn set_reference_priority<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.reference_priority = keys.into_iter().map(Into::into).collect();

        let known: Vec<String> = self
            .store
            .references()
            .iter()
            .map(|reference| reference.bibtexkey().to_string())
            .collect();
        for key in &self.reference_priority {
            if !known.contains(key) {
                warn!(reference = %key, "Preferred reference has no data in the store.");
            }
        }
    }

    fn select(
        &self,
        kind: &PropertyKind,
        subject: &Subject,
        reference: Option<&str>,
    ) -> Result<PropertyRow, LookupError> {
        let rows = self.store.rows(kind, subject);
        if rows.is_empty() {
            return Err(LookupError::NotFound {
                property: kind.to_string(),
                subject: subject.to_string(),
            });
        }

        if let Some(key) = reference {
            let available: Vec<String> = rows
                .iter()
                .map(|row| row.reference.bibtexkey().to_string())
                .collect();
            return rows
                .into_iter()
                .find(|row| row.reference.bibtexkey() == key)
                .ok_or_else(|| LookupError::ReferenceNotFound {
                    property: kind.to_string(),
                    subject: subject.to_string(),
                    reference: key.to_string(),
                    available,
                });
        }

        for key in &self.reference_priority {
            if let Some(row) = rows.iter().find(|row| row.reference.bibtexkey() == key) {
                trace!(property = %kind, subject = %subject, reference = %key, "Resolved by priority.");
                return Ok(row.clone());
            }
        }

        let mut rows = rows.into_iter();
        let first = rows.next().ok_or_else(|| LookupError::NotFound {
            property: kind.to_string(),
            subject: subject.to_string(),
        })?;
        trace!(
            property = %kind,
            subject = %subject,
            reference = %first.reference.bibtexkey(),
            "Resolved by insertion order."
        );
        Ok(first)
    }

    /// The value of a property, under the reference-priority policy.
    pub fn lookup(
        &self,
        kind: &PropertyKind,
        subject: &Subject,
        reference: Option<&str>,
    ) -> Result<PropertyValue, LookupError> {
        self.select(kind, subject, reference).map(|row| row.value)
    }

    /// Like [`Resolver::lookup`], also naming the reference that supplied the value.
    pub fn lookup_row(
        &self,
        kind: &PropertyKind,
        subject: &Subject,
        reference: Option<&str>,
    ) -> Result<PropertyRow, LookupError> {
        self.select(kind, subject, reference)
    }

    pub fn exists(&self, kind: &PropertyKind, subject: &Subject, reference: Option<&str>) -> bool {
        self.select(kind, subject, reference).is_ok()
    }

    fn lookup_f64(
        &self,
        kind: &PropertyKind,
        subject: &Subject,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let value = self.lookup(kind, subject, reference)?;
        value.as_f64().ok_or_else(|| LookupError::WrongValueType {
            property: kind.to_string(),
            subject: subject.to_string(),
            expected: "number",
            found: value.type_name(),
        })
    }

    fn lookup_text(
        &self,
        kind: &PropertyKind,
        subject: &Subject,
        reference: Option<&str>,
    ) -> Result<String, LookupError> {
        match self.lookup(kind, subject, reference)? {
            PropertyValue::Text(text) => Ok(text),
            other => Err(LookupError::WrongValueType {
                property: kind.to_string(),
                subject: subject.to_string(),
                expected: "text",
                found: other.type_name(),
            }),
        }
    }

    fn element_subject(z: u8) -> Result<Subject, LookupError> {
        Ok(Subject::Element(Element::new(z)?))
    }

    fn subshell_subject(z: u8, subshell: &Arc<AtomicSubshell>) -> Result<Subject, LookupError> {
        Ok(Subject::AtomicSubshell {
            element: Element::new(z)?,
            subshell: Arc::clone(subshell),
        })
    }

    fn transition_subject(z: u8, transition: &Arc<Transition>) -> Result<Subject, LookupError> {
        Ok(Subject::Transition {
            element: Element::new(z)?,
            transition: Arc::clone(transition),
        })
    }

    fn transitionset_subject(z: u8, set: &Arc<TransitionSet>) -> Result<Subject, LookupError> {
        Ok(Subject::TransitionSet {
            element: Element::new(z)?,
            set: Arc::clone(set),
        })
    }

    /// Finds an element from its symbol or its name in any language, ignoring case.
    pub fn element(&self, query: &str) -> Result<Arc<Element>, LookupError> {
        let query = query.trim();
        self.store
            .find_element(query)
            .ok_or_else(|| LookupError::UnknownElement(query.to_string()))
    }

    pub fn element_atomic_number(&self, query: &str) -> Result<u8, LookupError> {
        self.element(query).map(|element| element.z())
    }

    pub fn element_symbol(&self, z: u8, reference: Option<&str>) -> Result<String, LookupError> {
        self.lookup_text(&PropertyKind::ElementSymbol, &Self::element_subject(z)?, reference)
    }

    pub fn element_name(
        &self,
        z: u8,
        language: &str,
        reference: Option<&str>,
    ) -> Result<String, LookupError> {
        let kind = PropertyKind::ElementName(Language::new(language)?);
        self.lookup_text(&kind, &Self::element_subject(z)?, reference)
    }

    pub fn element_atomic_weight(&self, z: u8, reference: Option<&str>) -> Result<f64, LookupError> {
        self.lookup_f64(&PropertyKind::ElementAtomicWeight, &Self::element_subject(z)?, reference)
    }

    pub fn element_mass_density_kg_per_m3(
        &self,
        z: u8,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        self.lookup_f64(&PropertyKind::ElementMassDensity, &Self::element_subject(z)?, reference)
    }

    pub fn element_mass_density_g_per_cm3(
        &self,
        z: u8,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        Ok(self.element_mass_density_kg_per_m3(z, reference)? / 1000.0)
    }

    pub fn atomic_subshell_binding_energy_ev(
        &self,
        z: u8,
        subshell: &Arc<AtomicSubshell>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::subshell_subject(z, subshell)?;
        self.lookup_f64(&PropertyKind::SubshellBindingEnergy, &subject, reference)
    }

    pub fn atomic_subshell_radiative_width_ev(
        &self,
        z: u8,
        subshell: &Arc<AtomicSubshell>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::subshell_subject(z, subshell)?;
        self.lookup_f64(&PropertyKind::SubshellRadiativeWidth, &subject, reference)
    }

    pub fn atomic_subshell_nonradiative_width_ev(
        &self,
        z: u8,
        subshell: &Arc<AtomicSubshell>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::subshell_subject(z, subshell)?;
        self.lookup_f64(&PropertyKind::SubshellNonradiativeWidth, &subject, reference)
    }

    pub fn atomic_subshell_occupancy(
        &self,
        z: u8,
        subshell: &Arc<AtomicSubshell>,
        reference: Option<&str>,
    ) -> Result<i64, LookupError> {
        let kind = PropertyKind::SubshellOccupancy;
        let subject = Self::subshell_subject(z, subshell)?;
        let value = self.lookup(&kind, &subject, reference)?;
        value.as_i64().ok_or_else(|| LookupError::WrongValueType {
            property: kind.to_string(),
            subject: subject.to_string(),
            expected: "integer",
            found: value.type_name(),
        })
    }

    /// Whether the store knows the energy of this transition for element `z`.
    pub fn transition_exists(
        &self,
        z: u8,
        transition: &Arc<Transition>,
        reference: Option<&str>,
    ) -> bool {
        Self::transition_subject(z, transition)
            .map(|subject| self.exists(&PropertyKind::TransitionEnergy, &subject, reference))
            .unwrap_or(false)
    }

    pub fn transition_energy_ev(
        &self,
        z: u8,
        transition: &Arc<Transition>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::transition_subject(z, transition)?;
        self.lookup_f64(&PropertyKind::TransitionEnergy, &subject, reference)
    }

    /// Wavelength in metres, derived from the transition energy.
    pub fn transition_wavelength_m(
        &self,
        z: u8,
        transition: &Arc<Transition>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        Ok(HC_EV_M / self.transition_energy_ev(z, transition, reference)?)
    }

    pub fn transition_probability(
        &self,
        z: u8,
        transition: &Arc<Transition>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::transition_subject(z, transition)?;
        self.lookup_f64(&PropertyKind::TransitionProbability, &subject, reference)
    }

    pub fn transition_relative_weight(
        &self,
        z: u8,
        transition: &Arc<Transition>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::transition_subject(z, transition)?;
        self.lookup_f64(&PropertyKind::TransitionRelativeWeight, &subject, reference)
    }

    pub fn transitionset_energy_ev(
        &self,
        z: u8,
        set: &Arc<TransitionSet>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::transitionset_subject(z, set)?;
        self.lookup_f64(&PropertyKind::TransitionSetEnergy, &subject, reference)
    }

    pub fn transitionset_relative_weight(
        &self,
        z: u8,
        set: &Arc<TransitionSet>,
        reference: Option<&str>,
    ) -> Result<f64, LookupError> {
        let subject = Self::transitionset_subject(z, set)?;
        self.lookup_f64(&PropertyKind::TransitionSetRelativeWeight, &subject, reference)
    }

    /// Every transition of element `z` with a known energy, in descriptor order.
    pub fn element_transitions(&self, z: u8) -> Vec<Arc<Transition>> {
        self.store.element_transitions(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog_transition;
    use crate::core::descriptors::Reference;

    fn fe() -> Subject {
        Subject::Element(Element::new(26).unwrap())
    }

    fn resolver() -> Resolver {
        let mut table = PropertyTable::builtin().unwrap();
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("ref1").unwrap(), 55.845);
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("ref2").unwrap(), 58.0);
        table.insert(PropertyKind::ElementMassDensity, fe(), Reference::new("ref2").unwrap(), 7874.0);
        table.insert(
            PropertyKind::ElementName(Language::new("en").unwrap()),
            fe(),
            Reference::new("ref1").unwrap(),
            "Iron",
        );
        Resolver::new(table)
    }

    #[test]
    fn first_row_wins_without_priority() {
        assert_eq!(resolver().element_atomic_weight(26, None).unwrap(), 55.845);
    }

    #[test]
    fn priority_selects_listed_reference() {
        let mut resolver = resolver();
        resolver.set_reference_priority(["ref2"]);
        assert_eq!(resolver.element_atomic_weight(26, None).unwrap(), 58.0);
    }

    #[test]
    fn priority_skips_references_without_a_value() {
        let mut resolver = resolver();
        resolver.set_reference_priority(["unknown", "ref1", "ref2"]);
        assert_eq!(resolver.element_atomic_weight(26, None).unwrap(), 55.845);
    }

    #[test]
    fn priority_falls_back_to_first_row() {
        let mut resolver = resolver();
        resolver.set_reference_priority(["ref2"]);
        assert_eq!(resolver.element_name(26, "en", None).unwrap(), "Iron");
    }

    #[test]
    fn explicit_reference_overrides_priority() {
        let mut resolver = resolver();
        resolver.set_reference_priority(["ref2"]);
        assert_eq!(resolver.element_atomic_weight(26, Some("ref1")).unwrap(), 55.845);
    }

    #[test]
    fn explicit_reference_without_value_fails() {
        let err = resolver().element_atomic_weight(26, Some("ref3")).unwrap_err();
        match err {
            LookupError::ReferenceNotFound {
                reference,
                available,
                ..
            } => {
                assert_eq!(reference, "ref3");
                assert_eq!(available, ["ref1", "ref2"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_property_is_not_found() {
        let err = resolver().element_atomic_weight(29, None).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_atomic_number_is_a_validation_error() {
        let err = resolver().element_symbol(0, None).unwrap_err();
        assert!(matches!(err, LookupError::Validation { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn elements_resolve_from_symbol_or_name() {
        let resolver = resolver();
        assert_eq!(resolver.element_atomic_number("Fe").unwrap(), 26);
        assert_eq!(resolver.element_atomic_number("fe").unwrap(), 26);
        assert_eq!(resolver.element_atomic_number("iron").unwrap(), 26);
        assert!(matches!(
            resolver.element_atomic_number("Unobtainium"),
            Err(LookupError::UnknownElement(_))
        ));
    }

    #[test]
    fn element_names_fold_non_ascii_case() {
        let mut resolver = resolver();
        resolver.store_mut().insert(
            PropertyKind::ElementName(Language::new("fr").unwrap()),
            Subject::Element(Element::new(50).unwrap()),
            Reference::new("ref1").unwrap(),
            "Étain",
        );
        assert_eq!(resolver.element_atomic_number("étain").unwrap(), 50);
        assert_eq!(resolver.element_atomic_number(" ÉTAIN ").unwrap(), 50);
    }

    #[test]
    fn mass_density_converts_units() {
        let resolver = resolver();
        assert_eq!(resolver.element_mass_density_kg_per_m3(26, None).unwrap(), 7874.0);
        assert!((resolver.element_mass_density_g_per_cm3(26, None).unwrap() - 7.874).abs() < 1e-12);
    }

    #[test]
    fn text_property_read_as_number_is_a_type_error() {
        let mut table = PropertyTable::new();
        table.insert(PropertyKind::ElementAtomicWeight, fe(), Reference::new("ref1").unwrap(), "heavy");
        let err = Resolver::new(table).element_atomic_weight(26, None).unwrap_err();
        assert!(matches!(err, LookupError::WrongValueType { found: "text", .. }));
    }

    #[test]
    fn wavelength_derives_from_energy() {
        let ka1 = catalog_transition(0).unwrap();
        let mut table = PropertyTable::new();
        table.insert(
            PropertyKind::TransitionEnergy,
            Subject::Transition {
                element: Element::new(26).unwrap(),
                transition: Arc::clone(&ka1),
            },
            Reference::new("ref1").unwrap(),
            6403.84,
        );
        let resolver = Resolver::new(table);

        let wavelength = resolver.transition_wavelength_m(26, &ka1, None).unwrap();
        assert!((wavelength - 1.936e-10).abs() < 1e-13);
        assert!(resolver.transition_exists(26, &ka1, None));
        assert!(!resolver.transition_exists(27, &ka1, None));
        assert_eq!(resolver.element_transitions(26), vec![ka1]);
    }

    #[test]
    fn with_config_applies_priority() {
        let config = ResolverConfig {
            reference_priority: vec!["ref2".to_string()],
        };
        let resolver = Resolver::with_config(resolver().into_store(), &config);
        assert_eq!(resolver.reference_priority(), ["ref2"]);
        assert_eq!(resolver.element_atomic_weight(26, None).unwrap(), 58.0);
    }
}
