use std::{
    io::{Error, ErrorKind},
    path::PathBuf,
};

use crate::types::BookSuggestion;

use super::VOTING_FILE;

#[derive(Debug)]
pub enum SuggestionStoreError {
    IoError(Error),
    ParseError(serde_json::Error),
    WriteError(Error),
}

impl From<Error> for SuggestionStoreError {
    fn from(err: Error) -> Self {
        SuggestionStoreError::IoError(err)
    }
}

impl std::fmt::Display for SuggestionStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionStoreError::IoError(e) => write!(f, "io error: {}", e),
            SuggestionStoreError::ParseError(e) => write!(f, "malformed json: {}", e),
            SuggestionStoreError::WriteError(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for SuggestionStoreError {}

pub struct SuggestionStore {
    data_dir: PathBuf,
}

impl SuggestionStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Reads the voting collection. A file that does not exist yet is an
    /// empty collection, not an error.
    pub async fn suggestions(&self) -> Result<Vec<BookSuggestion>, SuggestionStoreError> {
        let content = match async_fs::read_to_string(self.voting_path()).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SuggestionStoreError::IoError(e)),
        };
        serde_json::from_str(&content).map_err(|e| SuggestionStoreError::ParseError(e))
    }

    /// Replaces the voting file wholesale with the given collection. The
    /// caller supplies the complete, already-mutated collection; add,
    /// dedupe and upvote policy live in `utils`.
    pub async fn save(&self, suggestions: &[BookSuggestion]) -> Result<(), SuggestionStoreError> {
        let path = self.voting_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| SuggestionStoreError::WriteError(e))?;
        }

        let json = serde_json::to_string_pretty(suggestions)
            .map_err(|e| SuggestionStoreError::ParseError(e))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| SuggestionStoreError::WriteError(e))
    }

    fn voting_path(&self) -> PathBuf {
        self.data_dir.join(VOTING_FILE)
    }
}
