use super::property::{PropertyKind, Subject};
use super::store::PropertyTable;
use crate::core::catalog::{subshell_from_iupac, subshell_from_siegbahn};
use crate::core::descriptors::{
    AtomicSubshell, Element, Language, Reference, Transition, ValidationError,
};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Invalid record at row {row} of '{path}': {source}")]
    InvalidRecord {
        path: String,
        row: usize,
        source: ValidationError,
    },

    #[error("Unknown subshell '{name}' at row {row} of '{path}'")]
    UnknownSubshell {
        path: String,
        row: usize,
        name: String,
    },
}

#[derive(Debug, Deserialize)]
struct ElementRecord {
    z: u8,
    symbol: Option<String>,
    name: Option<String>,
    language: Option<String>,
    atomic_weight: Option<f64>,
    mass_density_kg_per_m3: Option<f64>,
    reference: String,
}

#[derive(Debug, Deserialize)]
struct SubshellRecord {
    z: u8,
    subshell: String,
    binding_energy_ev: Option<f64>,
    radiative_width_ev: Option<f64>,
    nonradiative_width_ev: Option<f64>,
    occupancy: Option<i64>,
    reference: String,
}

#[derive(Debug, Deserialize)]
struct TransitionRecord {
    z: u8,
    destination: String,
    source: String,
    secondary_destination: Option<String>,
    satellite: Option<u8>,
    energy_ev: Option<f64>,
    probability: Option<f64>,
    relative_weight: Option<f64>,
    reference: String,
}

/// Where the rows being read come from, for error messages.
struct Origin<'a> {
    path: &'a str,
    row: usize,
}

impl Origin<'_> {
    fn invalid(&self, source: ValidationError) -> LoadError {
        LoadError::InvalidRecord {
            path: self.path.to_string(),
            row: self.row,
            source,
        }
    }

    fn subshell(&self, name: &str) -> Result<Arc<AtomicSubshell>, LoadError> {
        let name = name.trim();
        subshell_from_iupac(name)
            .or_else(|| subshell_from_siegbahn(name))
            .ok_or_else(|| LoadError::UnknownSubshell {
                path: self.path.to_string(),
                row: self.row,
                name: name.to_string(),
            })
    }

    fn element(&self, z: u8) -> Result<Arc<Element>, LoadError> {
        Element::new(z).map_err(|e| self.invalid(e))
    }

    fn reference(&self, bibtexkey: &str) -> Result<Arc<Reference>, LoadError> {
        Reference::new(bibtexkey.trim()).map_err(|e| self.invalid(e))
    }
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, LoadError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn records<R, T>(
    reader: &mut csv::Reader<R>,
    path: &str,
) -> impl Iterator<Item = Result<(usize, T), LoadError>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let path = path.to_string();
    reader
        .deserialize::<T>()
        .enumerate()
        .map(move |(index, result)| {
            result
                .map(|record| (index + 2, record))
                .map_err(|e| LoadError::Csv {
                    path: path.clone(),
                    source: e,
                })
        })
}

impl PropertyTable {
    /// Loads element rows from a CSV file with the header
    /// `z,symbol,name,language,atomic_weight,mass_density_kg_per_m3,reference`.
    ///
    /// Empty cells are skipped; a name without a language is taken as English.
    /// Returns the number of property rows inserted. Nothing is inserted unless
    /// every row of the file is valid.
    pub fn load_elements_csv(&mut self, path: &Path) -> Result<usize, LoadError> {
        let mut csv = open(path)?;
        let count = self.read_elements(&mut csv, &path.to_string_lossy())?;
        info!(path = %path.display(), rows = count, "Loaded element properties.");
        Ok(count)
    }

    pub fn read_elements_csv<R: Read>(&mut self, source: R, origin: &str) -> Result<usize, LoadError> {
        self.read_elements(&mut reader(source), origin)
    }

    fn read_elements<R: Read>(
        &mut self,
        csv: &mut csv::Reader<R>,
        path: &str,
    ) -> Result<usize, LoadError> {
        let mut staged = PropertyTable::new();
        let mut count = 0;
        for result in records::<R, ElementRecord>(csv, path) {
            let (row, record) = result?;
            let origin = Origin { path, row };
            let subject = Subject::Element(origin.element(record.z)?);
            let reference = origin.reference(&record.reference)?;

            if let Some(symbol) = record.symbol.filter(|s| !s.is_empty()) {
                staged.insert(PropertyKind::ElementSymbol, subject.clone(), Arc::clone(&reference), symbol);
                count += 1;
            }
            if let Some(name) = record.name.filter(|s| !s.is_empty()) {
                let code = record.language.as_deref().unwrap_or("en");
                let language = Language::new(code).map_err(|e| origin.invalid(e))?;
                staged.insert(
                    PropertyKind::ElementName(language),
                    subject.clone(),
                    Arc::clone(&reference),
                    name,
                );
                count += 1;
            }
            if let Some(weight) = record.atomic_weight {
                staged.insert(PropertyKind::ElementAtomicWeight, subject.clone(), Arc::clone(&reference), weight);
                count += 1;
            }
            if let Some(density) = record.mass_density_kg_per_m3 {
                staged.insert(PropertyKind::ElementMassDensity, subject, reference, density);
                count += 1;
            }
        }
        self.merge(staged);
        Ok(count)
    }

    /// Loads subshell rows from a CSV file with the header
    /// `z,subshell,binding_energy_ev,radiative_width_ev,nonradiative_width_ev,occupancy,reference`.
    ///
    /// Subshells are named in IUPAC (`L3`) or Siegbahn (`LIII`) notation.
    pub fn load_subshells_csv(&mut self, path: &Path) -> Result<usize, LoadError> {
        let mut csv = open(path)?;
        let count = self.read_subshells(&mut csv, &path.to_string_lossy())?;
        info!(path = %path.display(), rows = count, "Loaded subshell properties.");
        Ok(count)
    }

    pub fn read_subshells_csv<R: Read>(&mut self, source: R, origin: &str) -> Result<usize, LoadError> {
        self.read_subshells(&mut reader(source), origin)
    }

    fn read_subshells<R: Read>(
        &mut self,
        csv: &mut csv::Reader<R>,
        path: &str,
    ) -> Result<usize, LoadError> {
        let mut staged = PropertyTable::new();
        let mut count = 0;
        for result in records::<R, SubshellRecord>(csv, path) {
            let (row, record) = result?;
            let origin = Origin { path, row };
            let subject = Subject::AtomicSubshell {
                element: origin.element(record.z)?,
                subshell: origin.subshell(&record.subshell)?,
            };
            let reference = origin.reference(&record.reference)?;

            let numbers = [
                (PropertyKind::SubshellBindingEnergy, record.binding_energy_ev),
                (PropertyKind::SubshellRadiativeWidth, record.radiative_width_ev),
                (PropertyKind::SubshellNonradiativeWidth, record.nonradiative_width_ev),
            ];
            for (kind, value) in numbers {
                if let Some(value) = value {
                    staged.insert(kind, subject.clone(), Arc::clone(&reference), value);
                    count += 1;
                }
            }
            if let Some(occupancy) = record.occupancy {
                staged.insert(PropertyKind::SubshellOccupancy, subject, reference, occupancy);
                count += 1;
            }
        }
        self.merge(staged);
        Ok(count)
    }

    /// Loads transition rows from a CSV file with the header
    /// `z,destination,source,secondary_destination,satellite,energy_ev,probability,relative_weight,reference`.
    pub fn load_transitions_csv(&mut self, path: &Path) -> Result<usize, LoadError> {
        let mut csv = open(path)?;
        let count = self.read_transitions(&mut csv, &path.to_string_lossy())?;
        info!(path = %path.display(), rows = count, "Loaded transition properties.");
        Ok(count)
    }

    pub fn read_transitions_csv<R: Read>(
        &mut self,
        source: R,
        origin: &str,
    ) -> Result<usize, LoadError> {
        self.read_transitions(&mut reader(source), origin)
    }

    fn read_transitions<R: Read>(
        &mut self,
        csv: &mut csv::Reader<R>,
        path: &str,
    ) -> Result<usize, LoadError> {
        let mut staged = PropertyTable::new();
        let mut count = 0;
        for result in records::<R, TransitionRecord>(csv, path) {
            let (row, record) = result?;
            let origin = Origin { path, row };
            let secondary = match record.secondary_destination.as_deref() {
                Some(name) if !name.is_empty() => Some(origin.subshell(name)?),
                _ => None,
            };
            let transition = Transition::new(
                origin.subshell(&record.source)?,
                origin.subshell(&record.destination)?,
                secondary,
                record.satellite.unwrap_or(0),
            );
            let subject = Subject::Transition {
                element: origin.element(record.z)?,
                transition,
            };
            let reference = origin.reference(&record.reference)?;

            let numbers = [
                (PropertyKind::TransitionEnergy, record.energy_ev),
                (PropertyKind::TransitionProbability, record.probability),
                (PropertyKind::TransitionRelativeWeight, record.relative_weight),
            ];
            for (kind, value) in numbers {
                if let Some(value) = value {
                    staged.insert(kind, subject.clone(), Arc::clone(&reference), value);
                    count += 1;
                }
            }
        }
        self.merge(staged);
        Ok(count)
    }
}
