use std::{
    io::{Error, ErrorKind},
    path::PathBuf,
};

use crate::types::Book;

use super::{CURRENT_BOOK_FILE, HISTORY_FILE};

#[derive(Debug)]
pub enum BookStoreError {
    NotFound(PathBuf),
    IoError(Error),
    ParseError(serde_json::Error),
    WriteError(Error),
}

impl From<Error> for BookStoreError {
    fn from(err: Error) -> Self {
        BookStoreError::IoError(err)
    }
}

impl std::fmt::Display for BookStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStoreError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            BookStoreError::IoError(e) => write!(f, "io error: {}", e),
            BookStoreError::ParseError(e) => write!(f, "malformed json: {}", e),
            BookStoreError::WriteError(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for BookStoreError {}

pub struct BookStore {
    data_dir: PathBuf,
}

impl BookStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub async fn current(&self) -> Result<Book, BookStoreError> {
        let path = self.current_path();
        let content = read_required(&path).await?;
        serde_json::from_str(&content).map_err(|e| BookStoreError::ParseError(e))
    }

    pub async fn history(&self) -> Result<Vec<Book>, BookStoreError> {
        let path = self.history_path();
        let content = read_required(&path).await?;
        serde_json::from_str(&content).map_err(|e| BookStoreError::ParseError(e))
    }

    pub async fn set_current(&self, book: &Book) -> Result<(), BookStoreError> {
        let json = serde_json::to_string_pretty(book).map_err(|e| BookStoreError::ParseError(e))?;
        self.write(self.current_path(), json).await
    }

    pub async fn append_to_history(&self, book: Book) -> Result<(), BookStoreError> {
        // Missing file starts a fresh collection so the first append can
        // create it; a present-but-malformed file still fails.
        let mut books = match self.history().await {
            Ok(books) => books,
            Err(BookStoreError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        books.push(book);

        let json =
            serde_json::to_string_pretty(&books).map_err(|e| BookStoreError::ParseError(e))?;
        self.write(self.history_path(), json).await
    }

    async fn write(&self, path: PathBuf, json: String) -> Result<(), BookStoreError> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| BookStoreError::WriteError(e))?;
        }
        async_fs::write(path, json)
            .await
            .map_err(|e| BookStoreError::WriteError(e))
    }

    fn current_path(&self) -> PathBuf {
        self.data_dir.join(CURRENT_BOOK_FILE)
    }

    fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }
}

async fn read_required(path: &PathBuf) -> Result<String, BookStoreError> {
    async_fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BookStoreError::NotFound(path.clone())
        } else {
            BookStoreError::IoError(e)
        }
    })
}
