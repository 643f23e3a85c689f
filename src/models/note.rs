use serde::{Deserialize, Serialize};

/// Category assigned when a note is created without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// `created_at` layout: day.month hour:minute, zero-padded. No year,
/// no seconds, no timezone marker.
pub const CREATED_AT_FORMAT: &str = "%d.%m %H:%M";

/// A single user-authored note. The store assigns `id` and `created_at`
/// at insert time; neither is ever updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
}

/// Request to create a note
///
/// `title` and `content` are required; a request missing either is
/// rejected at deserialization. `category` may be omitted or empty and
/// falls back to [`DEFAULT_CATEGORY`] when the note is constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
}
