//! Core library for civil-registry transcription assistance.
//!
//! This crate provides:
//! - French textual numeral and month-name conversion ("vingt-quatre" -> "24")
//! - Heuristic field extraction from the free-form body text of an act
//! - Suggestion generation comparing form values against extracted values
//! - Session state for the "select text in document, fill active field" flow

pub mod error;
pub mod models;
pub mod session;
pub mod text;
pub mod verify;

pub use error::{ActaError, Result};
pub use models::form::{
    DateFields, DocumentNature, EventFields, FormValues, ParentFields, PersonFields, PlaceFields,
};
pub use models::suggestion::{FieldSuggestion, MatchState, SuggestionMap, SuggestionSummary};
pub use session::{ExtractionSession, Feedback, FeedbackKind};
pub use text::french::{classify_field, convert_french_text, FieldType};
pub use text::{clean_selected_text, normalize};
pub use verify::{compare_values, extract_value, generate_suggestions};
