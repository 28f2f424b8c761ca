//! Form value models for the three natures of civil-registry acts.
//!
//! The shapes mirror the transcription form: one shared structure with
//! optional sections, since which sections exist depends on the nature of the
//! act (a birth act has a holder and parents, a death act has a decedent and
//! possibly a last spouse). JSON field names keep the French camelCase used
//! by the form layer so exported form values deserialize directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ActaError;

/// Nature of a civil-registry act.
///
/// Selects which extraction patterns and which form field paths apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentNature {
    Birth,
    Marriage,
    Death,
}

impl fmt::Display for DocumentNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentNature::Birth => "BIRTH",
            DocumentNature::Marriage => "MARRIAGE",
            DocumentNature::Death => "DEATH",
        };
        f.write_str(name)
    }
}

impl FromStr for DocumentNature {
    type Err = ActaError;

    /// Accepts both the English names and the French registry terms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "birth" | "naissance" => Ok(DocumentNature::Birth),
            "marriage" | "mariage" => Ok(DocumentNature::Marriage),
            "death" | "deces" | "décès" => Ok(DocumentNature::Death),
            _ => Err(ActaError::UnknownNature(s.to_string())),
        }
    }
}

/// Structured date as entered in the form: three zero-padded components.
///
/// Components default to empty strings; a date only counts as populated when
/// all three are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFields {
    pub jour: String,
    pub mois: String,
    pub annee: String,
}

impl DateFields {
    /// Whether day, month and year are all present.
    pub fn is_complete(&self) -> bool {
        !self.jour.is_empty() && !self.mois.is_empty() && !self.annee.is_empty()
    }

    /// Format as "DD/MM/YYYY" for comparison.
    pub fn formatted(&self) -> String {
        format!("{}/{}/{}", self.jour, self.mois, self.annee)
    }
}

/// Place as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceFields {
    #[serde(rename = "lieuReprise")]
    pub lieu_reprise: String,
}

/// A parent or last-spouse section: surname and given names only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentFields {
    pub nom: String,
    pub prenoms: String,
}

/// A primary person on the act: holder, spouse or decedent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonFields {
    pub nom: String,
    pub prenoms: String,
    pub pere: Option<ParentFields>,
    pub mere: Option<ParentFields>,
    #[serde(rename = "dateNaissance")]
    pub date_naissance: Option<DateFields>,
    #[serde(rename = "lieuNaissance")]
    pub lieu_naissance: Option<PlaceFields>,
}

/// The event section of a marriage or death act: where and when it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFields {
    pub date: Option<DateFields>,
    pub lieu: Option<PlaceFields>,
}

/// Current values of the transcription form.
///
/// Optional sections mirror the conditionally rendered parts of the form: an
/// absent section produces no suggestions for its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub titulaire: Option<PersonFields>,
    pub parent1: Option<PersonFields>,
    pub parent2: Option<PersonFields>,
    pub epoux1: Option<PersonFields>,
    pub epoux2: Option<PersonFields>,
    pub defunt: Option<PersonFields>,
    #[serde(rename = "dernierConjoint")]
    pub dernier_conjoint: Option<ParentFields>,
    pub evenement: Option<EventFields>,
}

impl FormValues {
    /// Deserialize form values from the JSON exported by the form layer.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
