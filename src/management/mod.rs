//! # Management Module
//!
//! File-backed stores for the book-club data. Each store owns a data
//! directory and performs a full read-parse or serialize-write cycle per
//! operation; the JSON files on disk are the sole source of truth and no
//! state is cached between calls.
//!
//! ## Stores
//!
//! - [`BookStore`] - the single current-book document plus the append-only
//!   reading history array
//! - [`SuggestionStore`] - the voting collection; a missing file reads as an
//!   empty collection, every write replaces the file wholesale
//!
//! ## Concurrency
//!
//! There is no locking. Two overlapping read-modify-write cycles race and
//! the later write wins in full. Callers must not assume isolation between
//! concurrent mutations.

mod book;
mod suggestion;

pub use book::BookStore;
pub use book::BookStoreError;
pub use suggestion::SuggestionStore;
pub use suggestion::SuggestionStoreError;

pub const CURRENT_BOOK_FILE: &str = "currentBook.json";
pub const HISTORY_FILE: &str = "books.json";
pub const VOTING_FILE: &str = "voting.json";
