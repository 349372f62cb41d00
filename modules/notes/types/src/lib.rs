//! Shared types for the notes module service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes` and `PUT /notes/{id}`.
///
/// Missing fields decode as empty strings and unknown fields (including a
/// client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Query string of `GET /notes`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListNotesQuery {
    /// Case-insensitive substring matched against note titles
    pub title: Option<String>,
}

impl ListNotesQuery {
    /// Build from decoded query pairs. When a key repeats, the first value
    /// wins and the rest are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let title = pairs
            .into_iter()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value);
        Self { title }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A stored note. The id is assigned by the service and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub total_notes: usize,
}
