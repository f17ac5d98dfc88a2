use super::error::ValidationError;
use super::intern::Interner;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// BibTeX key of the reference attached to built-in values that carry no citation.
pub const UNATTRIBUTED: &str = "unattributed";

/// Optional bibliographic fields of a [`Reference`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceDetails {
    pub author: Option<String>,
    pub year: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub booktitle: Option<String>,
    pub editor: Option<String>,
    pub pages: Option<String>,
    pub edition: Option<String>,
    pub journal: Option<String>,
    pub school: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub note: Option<String>,
    pub number: Option<String>,
    pub series: Option<String>,
    pub volume: Option<String>,
    pub publisher: Option<String>,
    pub organization: Option<String>,
    pub chapter: Option<String>,
    pub howpublished: Option<String>,
    pub doi: Option<String>,
}

/// A literature source of property values, identified by its BibTeX key.
///
/// Two references are the same instance only when the key and every
/// bibliographic field are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference {
    bibtexkey: String,
    details: ReferenceDetails,
}

pub(super) static REFERENCES: Interner<(String, ReferenceDetails), Reference> =
    Interner::new("Reference");

impl Reference {
    pub fn new(bibtexkey: &str) -> Result<Arc<Self>, ValidationError> {
        Self::with_details(bibtexkey, ReferenceDetails::default())
    }

    pub fn with_details(
        bibtexkey: &str,
        details: ReferenceDetails,
    ) -> Result<Arc<Self>, ValidationError> {
        let key = (bibtexkey.to_string(), details.clone());
        REFERENCES.get_or_try_insert_with(key, || {
            if bibtexkey.trim().is_empty() {
                return Err(ValidationError::EmptyBibtexKey);
            }
            Ok(Self {
                bibtexkey: bibtexkey.to_string(),
                details,
            })
        })
    }

    /// The reference attached to built-in values.
    pub fn unattributed() -> Result<Arc<Self>, ValidationError> {
        Self::new(UNATTRIBUTED)
    }

    pub fn bibtexkey(&self) -> &str {
        &self.bibtexkey
    }

    pub fn details(&self) -> &ReferenceDetails {
        &self.details
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({})", self.bibtexkey)
    }
}
