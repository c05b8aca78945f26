use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Reading status of a book, serialized as the uppercase strings the JSON
/// documents use on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookStatus {
    Current,
    Completed,
    Upcoming,
}

impl Default for BookStatus {
    // Suggestion entries written by the original app carry no status field;
    // a book pending selection is upcoming.
    fn default() -> Self {
        BookStatus::Upcoming
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Current => write!(f, "CURRENT"),
            BookStatus::Completed => write!(f, "COMPLETED"),
            BookStatus::Upcoming => write!(f, "UPCOMING"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub cover_image_url: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

/// A book pending selection, with its accumulated vote count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSuggestion {
    #[serde(flatten)]
    pub book: Book,
    pub votes: u32,
}

/// A search hit from the external lookup, before it becomes a full `Book`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCandidate {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub docs: Vec<SearchDoc>,
    #[serde(default, alias = "numFound")]
    pub num_found: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDoc {
    pub key: String,
    pub title: String,
    pub author_name: Option<Vec<String>>,
    pub cover_i: Option<u64>,
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub title: String,
    pub author: String,
    pub started: String,
    pub status: String,
}

#[derive(Tabled)]
pub struct SuggestionTableRow {
    pub votes: u32,
    pub title: String,
    pub author: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct CandidateTableRow {
    #[tabled(rename = "#")]
    pub pick: usize,
    pub title: String,
    pub author: String,
    pub id: String,
}
