//! Municipality (kommune) records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Official written standard (målform) used by a municipality's administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageForm {
    #[serde(rename = "Bokmål")]
    Bokmal,
    #[serde(rename = "Nynorsk")]
    Nynorsk,
    /// No declared preference
    #[serde(rename = "Nøytral")]
    Neutral,
}

impl LanguageForm {
    /// Get all language forms
    pub fn all() -> &'static [LanguageForm] {
        &[
            LanguageForm::Bokmal,
            LanguageForm::Nynorsk,
            LanguageForm::Neutral,
        ]
    }

    /// Display name as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageForm::Bokmal => "Bokmål",
            LanguageForm::Nynorsk => "Nynorsk",
            LanguageForm::Neutral => "Nøytral",
        }
    }
}

impl fmt::Display for LanguageForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language form: {0}")]
pub struct ParseLanguageFormError(pub String);

impl FromStr for LanguageForm {
    type Err = ParseLanguageFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LanguageForm::all()
            .iter()
            .copied()
            .find(|form| form.as_str().to_lowercase() == wanted)
            .ok_or_else(|| ParseLanguageFormError(s.to_string()))
    }
}

/// A second-level administrative division, nested in a county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    /// Four-digit municipality number; the first two digits are the county number
    pub id: String,

    /// Primary name
    pub name: String,

    /// Sami, Kven or other parallel official name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_name: Option<String>,

    /// Administrative center
    pub admin_center: String,

    pub population: u32,

    pub area_km2: f64,

    pub language_form: LanguageForm,

    /// Municipality website
    pub website: Url,
}

impl Municipality {
    /// Number of the owning county (the first two characters of the id).
    pub fn county_id(&self) -> &str {
        self.id.get(..2).unwrap_or(&self.id)
    }

    /// Inhabitants per km², `None` for a zero area.
    pub fn population_density(&self) -> Option<f64> {
        if self.area_km2 > 0.0 {
            Some(f64::from(self.population) / self.area_km2)
        } else {
            None
        }
    }

    /// Primary name followed by the alternate name when present.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alt_name.as_deref())
    }
}
