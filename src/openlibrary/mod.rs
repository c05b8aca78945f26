//! # Open Library Module
//!
//! Client for the Open Library search API, the external collaborator that
//! turns a free-text title/author query into book candidates members can
//! suggest for voting.
//!
//! ## Overview
//!
//! A single operation is exposed:
//!
//! - [`search_books`] - queries the configured search endpoint and maps the
//!   first few result docs into [`crate::types::BookCandidate`] values with
//!   an Open Library work id, a title and a best-guess author.
//!
//! ## Error Handling
//!
//! Network failures and non-success statuses propagate as `reqwest::Error`.
//! No retries are performed; consumers are expected to degrade gracefully by
//! showing an empty candidate list instead of failing the surrounding page
//! or command.
//!
//! ## Related Modules
//!
//! - [`crate::config`] - endpoint URL and result limit
//! - [`crate::types`] - response document shapes

mod search;

pub use search::candidate_from_doc;
pub use search::search_books;
