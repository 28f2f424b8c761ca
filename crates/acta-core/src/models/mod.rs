//! Data models for act forms and verification suggestions.

pub mod form;
pub mod suggestion;
