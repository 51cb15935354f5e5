//! Domain DTOs for the APOD API.
//!
//! # Design
//! `Apod` mirrors the success-response schema but is defined independently
//! from the mock-server crate; integration tests catch schema drift. Every
//! field the upstream may omit defaults to empty/absent instead of failing
//! deserialization — the API does not validate its own output, so neither
//! do we.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One Astronomy Picture of the Day, as returned by a successful search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Apod {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub media_type: String,
    /// Topical keywords, present only when the request asked for concept
    /// tags and the upstream had them for this picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepts: Option<Vec<String>>,
}

/// The `concept_tags` query value.
///
/// The upstream accepts boolean-ish text here and the original wire format
/// interpolates whatever was configured, so the raw form is preserved:
/// `Flag` renders `"true"`/`"false"`, `Raw` renders unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConceptTags {
    Flag(bool),
    Raw(String),
}

impl ConceptTags {
    /// Normalize a configured value: absent or empty means off, anything
    /// else is stored as given.
    pub fn normalize(value: Option<ConceptTags>) -> ConceptTags {
        match value {
            None => ConceptTags::Flag(false),
            Some(ConceptTags::Raw(s)) if s.is_empty() => ConceptTags::Flag(false),
            Some(other) => other,
        }
    }
}

impl fmt::Display for ConceptTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConceptTags::Flag(flag) => write!(f, "{flag}"),
            ConceptTags::Raw(s) => write!(f, "{s}"),
        }
    }
}
