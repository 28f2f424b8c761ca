//! Per-screen session state for the "select text in the act, fill the active
//! field" flow.
//!
//! One [`ExtractionSession`] is owned by each form-editing screen and torn
//! down with it; it is never shared across screens. All mutation goes through
//! the session's transition methods, driven by the single UI thread: field
//! focus events, text-selection events and the consuming field's
//! acknowledgement.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::text::french::{classify_field, convert_french_text};
use crate::text::clean_selected_text;

/// How long feedback stays visible before it expires.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(3);

/// Preview lengths used in the feedback messages.
const CONVERTED_PREVIEW_CHARS: usize = 15;
const COPIED_PREVIEW_CHARS: usize = 20;

/// Whether feedback reports a completed extraction or a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Transient user-facing feedback about the last selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

/// Handler invoked when converted text is delivered to a field.
///
/// Receives the converted text and the field path that was active when the
/// selection happened.
pub type DeliveryHandler = Box<dyn FnMut(&str, &str)>;

/// Coordinator for delivering text selected in the act body to the currently
/// focused form field.
///
/// Delivery is dispatched through a registry keyed by field path, resolved
/// with the path captured at selection time. A handler registered for a path
/// replaces that path's previous handler; fields register on focus and may
/// unregister on blur.
pub struct ExtractionSession {
    active_field: Option<String>,
    extracted_text: Option<String>,
    feedback: Option<(Feedback, Instant)>,
    handlers: HashMap<String, DeliveryHandler>,
    feedback_ttl: Duration,
}

impl ExtractionSession {
    pub fn new() -> Self {
        Self {
            active_field: None,
            extracted_text: None,
            feedback: None,
            handlers: HashMap::new(),
            feedback_ttl: FEEDBACK_TTL,
        }
    }

    /// Override the feedback lifetime (tests use a zero TTL).
    pub fn with_feedback_ttl(mut self, ttl: Duration) -> Self {
        self.feedback_ttl = ttl;
        self
    }

    /// The field currently eligible to receive extracted text.
    pub fn active_field(&self) -> Option<&str> {
        self.active_field.as_deref()
    }

    /// Record a field-focus event. Last focus wins; in-flight feedback is
    /// left alone.
    pub fn set_active_field(&mut self, field_path: impl Into<String>) {
        self.active_field = Some(field_path.into());
    }

    /// Record that no field has focus anymore.
    pub fn clear_active_field(&mut self) {
        self.active_field = None;
    }

    /// Register the delivery handler for a field path, replacing any
    /// previous handler for that path.
    pub fn register_handler(&mut self, field_path: impl Into<String>, handler: DeliveryHandler) {
        self.handlers.insert(field_path.into(), handler);
    }

    /// Remove the delivery handler for a field path, if any.
    pub fn unregister_handler(&mut self, field_path: &str) {
        self.handlers.remove(field_path);
    }

    /// Handle a text-selection event in the act body.
    ///
    /// With no active field this is a user mistake: ERROR feedback, no
    /// extraction. An empty cleaned selection is a silent no-op. Otherwise
    /// the text is cleaned, converted for the active field's type, stored,
    /// delivered to the field's handler (with the field path captured now,
    /// so a focus change cannot redirect the delivery) and acknowledged with
    /// SUCCESS feedback.
    pub fn on_text_selected(&mut self, text: &str) {
        let Some(field_path) = self.active_field.clone() else {
            self.set_feedback(
                FeedbackKind::Error,
                "Veuillez d'abord sélectionner un champ dans le formulaire".to_string(),
            );
            return;
        };

        let cleaned = clean_selected_text(text);
        if cleaned.is_empty() {
            return;
        }

        let field_type = classify_field(&field_path);
        let converted = convert_french_text(&cleaned, field_type);
        debug!("extracted {:?} for field {}", converted, field_path);

        self.extracted_text = Some(converted.clone());

        if let Some(handler) = self.handlers.get_mut(&field_path) {
            handler(&converted, &field_path);
        }

        let message = if converted != cleaned {
            format!("Converti : \"{}...\" → {}", preview(&cleaned, CONVERTED_PREVIEW_CHARS), converted)
        } else {
            format!("Copié : \"{}...\"", preview(&converted, COPIED_PREVIEW_CHARS))
        };
        self.set_feedback(FeedbackKind::Success, message);
    }

    /// The last converted text, until its consumer acknowledges it.
    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted_text.as_deref()
    }

    /// Acknowledge a delivery: the consuming field calls this after applying
    /// the value.
    pub fn clear_extracted_text(&mut self) {
        self.extracted_text = None;
    }

    /// Current feedback, or None once it has expired.
    pub fn feedback(&self) -> Option<&Feedback> {
        match &self.feedback {
            Some((feedback, expires_at)) if Instant::now() < *expires_at => Some(feedback),
            _ => None,
        }
    }

    /// Arm (or re-arm) the feedback expiry. Overwriting the deadline is the
    /// cancel-and-restart of the expiry timer: only the latest feedback can
    /// ever be visible.
    fn set_feedback(&mut self, kind: FeedbackKind, message: String) {
        self.feedback = Some((Feedback { kind, message }, Instant::now() + self.feedback_ttl));
    }
}

impl Default for ExtractionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// First `max_chars` characters, char-boundary safe.
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
