use super::error::QueryError;
use crate::core::catalog::elements::symbol;
use crate::core::descriptors::Element;
use crate::engine::{PropertyStore, Resolver};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

/// A fraction of one element in a composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fraction {
    Value(f64),
    /// Written `?`: the element takes what the other fractions leave below 1,
    /// split evenly between all balance elements.
    Balance,
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Fraction::Value(value)
    }
}

/// Resolves balance elements. Repeated elements add up.
fn balance<I>(fractions: I) -> Result<BTreeMap<u8, f64>, QueryError>
where
    I: IntoIterator<Item = (u8, Fraction)>,
{
    let mut values: BTreeMap<u8, f64> = BTreeMap::new();
    let mut wildcards: Vec<u8> = Vec::new();
    for (z, fraction) in fractions {
        Element::new(z)?;
        let entry = values.entry(z).or_insert(0.0);
        match fraction {
            Fraction::Value(value) => *entry += value,
            Fraction::Balance if !wildcards.contains(&z) => wildcards.push(z),
            Fraction::Balance => {}
        }
    }

    if !wildcards.is_empty() {
        let total: f64 = values.values().sum();
        let share = (1.0 - total) / wildcards.len() as f64;
        for z in wildcards {
            *values.entry(z).or_insert(0.0) += share;
        }
    }
    Ok(values)
}

/// Splits a formula such as `Al2O3`, `Al 2 Na 3` or `Fe0.5Ni0.5` into
/// symbols and atom counts. A missing count is 1.
fn parse_formula(formula: &str) -> Result<Vec<(String, f64)>, QueryError> {
    let invalid = |reason: String| QueryError::InvalidFormula {
        formula: formula.to_string(),
        reason,
    };

    let mut chars = formula.chars().peekable();
    let mut terms = Vec::new();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(first) = chars.next() else {
            break;
        };
        if !first.is_ascii_uppercase() {
            return Err(invalid(format!("expected an element symbol at '{first}'")));
        }

        let mut symbol = first.to_string();
        while let Some(c) = chars.next_if(char::is_ascii_lowercase) {
            symbol.push(c);
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut count = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            count.push(c);
        }
        let count = if count.is_empty() {
            1.0
        } else {
            count
                .parse::<f64>()
                .map_err(|_| invalid(format!("invalid count '{count}' for {symbol}")))?
        };
        terms.push((symbol, count));
    }

    if terms.is_empty() {
        return Err(invalid("no element".to_string()));
    }
    Ok(terms)
}

fn formula_moles<S: PropertyStore>(
    resolver: &Resolver<S>,
    formula: &str,
) -> Result<Vec<(u8, Fraction)>, QueryError> {
    parse_formula(formula)?
        .into_iter()
        .map(|(symbol, count)| -> Result<(u8, Fraction), QueryError> {
            Ok((resolver.element_atomic_number(&symbol)?, Fraction::Value(count)))
        })
        .collect()
}

/// How close a scaled atomic fraction must be to an integer to count as one.
const WHOLE_TOLERANCE: f64 = 1e-6;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// The elemental make-up of a material, stored as mass fractions keyed by
/// atomic number.
///
/// Conversions between mass fractions, atomic fractions, chemical formulas and
/// oxide fractions use the atomic weights the resolver selects.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    mass_fractions: BTreeMap<u8, f64>,
}

impl Composition {
    pub fn from_mass_fractions<I>(fractions: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (u8, Fraction)>,
    {
        let mass_fractions = balance(fractions)?;
        if mass_fractions.is_empty() {
            return Err(QueryError::EmptyComposition);
        }
        let total: f64 = mass_fractions.values().sum();
        if total.is_nan() || total <= 0.0 {
            return Err(QueryError::NonPositiveComposition { total });
        }
        Ok(Self { mass_fractions })
    }

    pub fn from_atomic_fractions<S, I>(resolver: &Resolver<S>, fractions: I) -> Result<Self, QueryError>
    where
        S: PropertyStore,
        I: IntoIterator<Item = (u8, Fraction)>,
    {
        let masses = balance(fractions)?
            .into_iter()
            .map(|(z, fraction)| -> Result<(u8, f64), QueryError> {
                Ok((z, fraction * resolver.element_atomic_weight(z, None)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total: f64 = masses.iter().map(|(_, mass)| mass).sum();

        Self::from_mass_fractions(
            masses
                .into_iter()
                .map(|(z, mass)| (z, Fraction::Value(mass / total))),
        )
    }

    /// Parses a chemical formula, e.g. `Al2Na3B12` or `Al2 Na3 B12`.
    #[instrument(skip(resolver))]
    pub fn from_formula<S: PropertyStore>(resolver: &Resolver<S>, formula: &str) -> Result<Self, QueryError> {
        let composition = Self::from_atomic_fractions(resolver, formula_moles(resolver, formula)?)?;
        debug!(formula, elements = composition.len(), "Parsed chemical formula.");
        Ok(composition)
    }

    /// Combines oxides given by formula and fraction, e.g. `[("CaO", 55.84), ("P2O5", 42.05)]`.
    ///
    /// Each oxide contributes its element mass fractions weighted by
    /// `fraction / molar mass of the oxide`; the result is normalised to 1.
    pub fn from_oxide_fractions<S, I, F>(resolver: &Resolver<S>, oxides: I) -> Result<Self, QueryError>
    where
        S: PropertyStore,
        I: IntoIterator<Item = (F, f64)>,
        F: AsRef<str>,
    {
        let mut proportions: BTreeMap<u8, f64> = BTreeMap::new();
        for (oxide, fraction) in oxides {
            let moles = balance(formula_moles(resolver, oxide.as_ref())?)?;
            let mut molar_mass = 0.0;
            for (&z, &count) in &moles {
                molar_mass += count * resolver.element_atomic_weight(z, None)?;
            }

            let composition = Self::from_atomic_fractions(
                resolver,
                moles.into_iter().map(|(z, count)| (z, Fraction::Value(count))),
            )?;
            for (z, mass_fraction) in composition.mass_fractions {
                *proportions.entry(z).or_insert(0.0) += fraction / molar_mass * mass_fraction;
            }
        }

        let total: f64 = proportions.values().sum();
        Self::from_mass_fractions(
            proportions
                .into_iter()
                .map(|(z, proportion)| (z, Fraction::Value(proportion / total))),
        )
    }

    pub fn mass_fractions(&self) -> &BTreeMap<u8, f64> {
        &self.mass_fractions
    }

    /// Mass fraction of element `z`, 0 when absent.
    pub fn mass_fraction(&self, z: u8) -> f64 {
        self.mass_fractions.get(&z).copied().unwrap_or(0.0)
    }

    pub fn normalized_mass_fractions(&self) -> BTreeMap<u8, f64> {
        let total: f64 = self.mass_fractions.values().sum();
        self.mass_fractions
            .iter()
            .map(|(&z, &fraction)| (z, fraction / total))
            .collect()
    }

    /// Atomic fractions summing to 1.
    pub fn atomic_fractions<S: PropertyStore>(
        &self,
        resolver: &Resolver<S>,
    ) -> Result<BTreeMap<u8, f64>, QueryError> {
        let mut atomic = BTreeMap::new();
        for (z, fraction) in self.normalized_mass_fractions() {
            atomic.insert(z, fraction / resolver.element_atomic_weight(z, None)?);
        }
        let total: f64 = atomic.values().sum();
        Ok(atomic
            .into_iter()
            .map(|(z, fraction)| (z, fraction / total))
            .collect())
    }

    /// Writes the composition as a formula, elements by descending atomic number.
    ///
    /// Atom counts come from the smallest multiplier up to `denominator` that
    /// turns every atomic fraction into a whole number. Failing that, fractions
    /// are scaled by `denominator`, rounded and divided by their greatest common
    /// divisor.
    pub fn to_formula<S: PropertyStore>(
        &self,
        resolver: &Resolver<S>,
        denominator: u32,
    ) -> Result<String, QueryError> {
        let fractions: Vec<(u8, f64)> = self.atomic_fractions(resolver)?.into_iter().rev().collect();
        let whole = |multiplier: f64| -> Option<Vec<(u8, u64)>> {
            fractions
                .iter()
                .map(|&(z, fraction)| {
                    let count = fraction * multiplier;
                    ((count - count.round()).abs() < WHOLE_TOLERANCE).then(|| (z, count.round() as u64))
                })
                .collect()
        };

        let counts = (1..=denominator)
            .map(f64::from)
            .find_map(whole)
            .unwrap_or_else(|| {
                let scaled: Vec<(u8, u64)> = fractions
                    .iter()
                    .map(|&(z, fraction)| (z, (fraction * f64::from(denominator)).round() as u64))
                    .collect();
                match scaled.iter().map(|&(_, count)| count).fold(0, gcd) {
                    0 => scaled,
                    divisor => scaled.into_iter().map(|(z, count)| (z, count / divisor)).collect(),
                }
            });

        let mut formula = String::new();
        for (z, count) in counts {
            if count == 0 {
                continue;
            }
            formula.push_str(&resolver.element_symbol(z, None)?);
            if count > 1 {
                formula.push_str(&count.to_string());
            }
        }
        Ok(formula)
    }

    pub fn contains(&self, z: u8) -> bool {
        self.mass_fractions.contains_key(&z)
    }

    pub fn len(&self) -> usize {
        self.mass_fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass_fractions.is_empty()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Composition(")?;
        for (index, (&z, &fraction)) in self.mass_fractions.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:.2}%{}", fraction * 100.0, symbol(z).unwrap_or("?"))?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptors::Reference;
    use crate::engine::{LookupError, PropertyKind, PropertyTable, Subject};

    const WEIGHTS: [(u8, f64); 10] = [
        (1, 1.008),
        (5, 10.811),
        (8, 15.999),
        (11, 22.989_769_28),
        (12, 24.305),
        (13, 26.981_538_5),
        (15, 30.973_761_998),
        (20, 40.078),
        (25, 54.938_044),
        (26, 55.845),
    ];

    fn resolver() -> Resolver {
        let mut table = PropertyTable::builtin().unwrap();
        let reference = Reference::new("weights").unwrap();
        for (z, weight) in WEIGHTS {
            table.insert(
                PropertyKind::ElementAtomicWeight,
                Subject::Element(Element::new(z).unwrap()),
                std::sync::Arc::clone(&reference),
                weight,
            );
        }
        Resolver::new(table)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn formula_converts_to_mass_fractions() {
        let resolver = resolver();
        for formula in ["Al2Na3B12", "Al 2 Na 3 B 12", "Al2 Na3 B12"] {
            let composition = Composition::from_formula(&resolver, formula).unwrap();
            assert_close(composition.mass_fraction(13), 0.213_586, 1e-4);
            assert_close(composition.mass_fraction(11), 0.272_981, 1e-4);
            assert_close(composition.mass_fraction(5), 0.513_433, 1e-4);
        }
    }

    #[test]
    fn single_element_formula_is_pure() {
        let composition = Composition::from_formula(&resolver(), "Al2").unwrap();
        assert_eq!(composition.len(), 1);
        assert_close(composition.mass_fraction(13), 1.0, 1e-12);
    }

    #[test]
    fn unknown_symbol_in_formula_fails() {
        let err = Composition::from_formula(&resolver(), "Aq2 Na3 B12").unwrap_err();
        assert!(matches!(
            err,
            QueryError::Lookup {
                source: LookupError::UnknownElement(_)
            }
        ));
    }

    #[test]
    fn malformed_formulas_are_rejected() {
        for formula in ["", "2Al", "al2", "Al2.3.4"] {
            assert!(
                matches!(
                    Composition::from_formula(&resolver(), formula),
                    Err(QueryError::InvalidFormula { .. })
                ),
                "{formula}"
            );
        }
    }

    #[test]
    fn oxide_fractions_combine_into_elements() {
        let oxides = [("MnO", 0.07), ("MgO", 0.1), ("CaO", 55.84), ("P2O5", 42.05), ("H2O", 1.86)];
        let composition = Composition::from_oxide_fractions(&resolver(), oxides).unwrap();

        assert_close(composition.mass_fraction(25) * 100.0, 0.055, 1e-3);
        assert_close(composition.mass_fraction(12) * 100.0, 0.107, 1e-3);
        assert_close(composition.mass_fraction(20) * 100.0, 50.880, 1e-3);
        assert_close(composition.mass_fraction(15) * 100.0, 9.243, 1e-3);
        assert_close(composition.mass_fraction(1) * 100.0, 0.826, 1e-3);
        assert_close(composition.mass_fractions().values().sum(), 1.0, 1e-12);
    }

    #[test]
    fn balance_element_takes_the_remainder() {
        let composition =
            Composition::from_mass_fractions([(26, Fraction::Value(0.7)), (13, Fraction::Balance)]).unwrap();
        assert_close(composition.mass_fraction(13), 0.3, 1e-12);

        let atomic = Composition::from_atomic_fractions(
            &resolver(),
            [(8, Fraction::Value(0.6)), (13, Fraction::Balance)],
        )
        .unwrap();
        assert_close(atomic.atomic_fractions(&resolver()).unwrap()[&13], 0.4, 1e-12);
    }

    #[test]
    fn atomic_fractions_round_trip_to_formula() {
        let resolver = resolver();
        let alumina = Composition::from_formula(&resolver, "Al2O3").unwrap();

        let atomic = alumina.atomic_fractions(&resolver).unwrap();
        assert_close(atomic[&13], 0.4, 1e-12);
        assert_close(atomic[&8], 0.6, 1e-12);
        assert_eq!(alumina.to_formula(&resolver, 100).unwrap(), "Al2O3");

        let aluminium = Composition::from_formula(&resolver, "Al").unwrap();
        assert_eq!(aluminium.to_formula(&resolver, 100).unwrap(), "Al");
    }

    #[test]
    fn empty_or_non_positive_compositions_are_rejected() {
        assert_eq!(
            Composition::from_mass_fractions(Vec::new()),
            Err(QueryError::EmptyComposition)
        );
        assert!(matches!(
            Composition::from_mass_fractions([(26, Fraction::Value(0.0))]),
            Err(QueryError::NonPositiveComposition { .. })
        ));
        assert!(matches!(
            Composition::from_mass_fractions([(0, Fraction::Value(1.0))]),
            Err(QueryError::Validation { .. })
        ));
    }

    #[test]
    fn missing_atomic_weight_is_reported() {
        let err = Composition::from_formula(&resolver(), "SiO2").unwrap_err();
        assert!(matches!(
            err,
            QueryError::Lookup {
                source: LookupError::NotFound { .. }
            }
        ));
    }

    #[test]
    fn repeated_elements_add_up() {
        let resolver = resolver();
        let water = Composition::from_formula(&resolver, "HOH").unwrap();
        let reference = Composition::from_formula(&resolver, "H2O").unwrap();

        assert_close(water.mass_fraction(1), reference.mass_fraction(1), 1e-12);
        assert_eq!(water.to_formula(&resolver, 100).unwrap(), "OH2");
        assert!(water.contains(1));
        assert!(!water.contains(26));
    }

    #[test]
    fn formula_counts_use_smallest_whole_multiplier() {
        let resolver = resolver();
        let glass = Composition::from_formula(&resolver, "B12 Na3 Al2").unwrap();
        assert_eq!(glass.to_formula(&resolver, 100).unwrap(), "Al2Na3B12");

        let alloy = Composition::from_formula(&resolver, "Fe0.333Al0.667").unwrap();
        assert_eq!(alloy.to_formula(&resolver, 10).unwrap(), "Fe3Al7");
    }

    #[test]
    fn display_lists_percentages() {
        let composition =
            Composition::from_mass_fractions([(26, Fraction::Value(0.7)), (13, Fraction::Value(0.3))]).unwrap();
        assert_eq!(composition.to_string(), "Composition(30.00%Al 70.00%Fe)");
    }
}
