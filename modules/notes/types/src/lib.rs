//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =====================================================
// Domain Types
// =====================================================

/// Identifier assigned to a note by the store. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text that does not name a note id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNoteId(pub String);

impl fmt::Display for InvalidNoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id {:?}", self.0)
    }
}

impl std::error::Error for InvalidNoteId {}

/// Digits only: `"12"` is accepted; `"+12"`, `"12abc"`, `"-1"` and `""` are not.
impl FromStr for NoteId {
    type Err = InvalidNoteId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidNoteId(s.to_string()));
        }
        s.parse::<u64>()
            .map(NoteId)
            .map_err(|_| InvalidNoteId(s.to_string()))
    }
}

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes` and `PUT /notes/{id}`. Any other fields are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteRequest {
    pub title: String,
}

// =====================================================
// Response Types
// =====================================================

/// Error payload returned with every 4xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> RpcResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub total_notes: usize,
    pub next_id: NoteId,
    /// Successful create/replace/delete calls since startup
    pub total_mutations: u64,
}
