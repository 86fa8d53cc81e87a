use serde::Deserialize;
use serde_json::Value;

use crate::records::RecordCategory;

/// Phone-entry form body.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneLookupQuery {
    pub mobile: String,
}

/// The external person identifier every record lookup is keyed by.
/// Only ever built from a non-empty phone lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonIdentity {
    pub person_id_external: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub person_id_external: String,
    pub category: RecordCategory,
}

/// A fetched record payload, or the marker that the fetch failed.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordResult {
    Fetched { title: &'static str, payload: Value },
    Failed { title: &'static str },
}

impl RecordResult {
    pub fn title(&self) -> &'static str {
        match self {
            RecordResult::Fetched { title, .. } | RecordResult::Failed { title } => *title,
        }
    }

    /// `None` when the record was fetched.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            RecordResult::Fetched { .. } => None,
            RecordResult::Failed { title } => {
                Some(format!("Failed to fetch {}.", title.to_lowercase()))
            }
        }
    }
}
