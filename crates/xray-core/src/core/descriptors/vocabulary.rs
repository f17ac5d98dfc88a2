use super::error::ValidationError;
use super::intern::Interner;
use std::fmt;
use std::sync::Arc;

/// A language, by its ISO 639 code (normalised to lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    code: String,
}

pub(super) static LANGUAGES: Interner<String, Language> = Interner::new("Language");

impl Language {
    pub fn new(code: &str) -> Result<Arc<Self>, ValidationError> {
        let code = code.trim().to_lowercase();
        LANGUAGES.get_or_try_insert_with(code.clone(), || {
            let length = code.chars().count();
            if !(2..=3).contains(&length) {
                return Err(ValidationError::InvalidLanguageCode { code: code.clone() });
            }
            Ok(Self { code })
        })
    }

    pub fn english() -> Result<Arc<Self>, ValidationError> {
        Self::new("en")
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// The name of a notation system (`siegbahn`, `iupac`, `orbital`), normalised to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Notation {
    name: String,
}

pub(super) static NOTATIONS: Interner<String, Notation> = Interner::new("Notation");

impl Notation {
    pub fn new(name: &str) -> Result<Arc<Self>, ValidationError> {
        let name = name.trim().to_lowercase();
        NOTATIONS.get_or_try_insert_with(name.clone(), || {
            if name.is_empty() {
                return Err(ValidationError::EmptyNotationName);
            }
            Ok(Self { name })
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
