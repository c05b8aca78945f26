//! # CLI Module
//!
//! This module provides the command-line interface layer for the book-club
//! tracker. It implements all user-facing commands and coordinates between
//! the file-backed stores, the Open Library client and terminal output.
//!
//! ## Command Categories
//!
//! ### Server
//!
//! - [`serve`] - runs the HTTP API server that the presentation layer reads
//!   from and saves voting results to
//!
//! ### Current Book
//!
//! - [`show_current`] - displays the book the group is currently reading
//! - [`set_current`] - overwrites the current-book document in full
//!
//! ### History
//!
//! - [`list_history`] - tabled listing of past reads, oldest first
//! - [`add_to_history`] - appends one record to the history array
//!
//! ### Voting
//!
//! - [`list_suggestions`] - tabled listing of suggestions ranked by votes
//! - [`search`] - queries Open Library and shows pickable candidates
//! - [`suggest`] - searches and adds one candidate as a zero-vote suggestion
//! - [`upvote`] - increments a suggestion's votes and re-ranks the list
//!
//! ## Architecture Design
//!
//! Each command follows the same load-mutate-persist-render shape:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (File-backed Stores)
//!     ↓
//! Open Library Client (remote search, voting commands only)
//! ```
//!
//! Commands construct their stores from the configured data directory, do a
//! full read or write per invocation and present errors with the colored
//! output macros. A failed Open Library lookup degrades to an empty
//! candidate list instead of aborting.

mod current;
mod history;
mod serve;
mod voting;

pub use current::set_current;
pub use current::show_current;
pub use history::add_to_history;
pub use history::list_history;
pub use serve::serve;
pub use voting::list_suggestions;
pub use voting::search;
pub use voting::suggest;
pub use voting::upvote;
