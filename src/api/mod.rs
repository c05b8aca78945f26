//! # API Module
//!
//! This module provides the HTTP endpoints for the book-club tracker's web
//! server. It is the surface the presentation layer consumes: JSON reads of
//! the current book, the reading history and the voting collection, plus the
//! single mutation endpoint that replaces the voting collection wholesale.
//!
//! ## Endpoints
//!
//! ### Reads
//!
//! - [`current`] - the single current-book document; 404 when the file does
//!   not exist, 500 on malformed storage
//! - [`history`] - the history array; a missing file is a failure here, not
//!   an empty default
//! - [`voting`] - the suggestion collection; a missing file IS an empty
//!   collection
//!
//! ### Mutation
//!
//! - [`save_voting`] - accepts a complete replacement suggestion collection
//!   as a JSON array and overwrites the voting file. There is no
//!   partial-update verb; add, dedupe and upvote policy run on the caller's
//!   side before the save. Non-POST methods receive 405 from the router.
//!
//! ### Monitoring
//!
//! - [`health`] - status and version information for monitoring
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Handlers receive the shared [`crate::server::AppState`] (both stores) via
//! an `Extension` layer and perform one full read or write cycle per request;
//! nothing is cached between requests. Two concurrent saves race and the
//! later write wins in full — an accepted limitation, see the management
//! module.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use clurb::api;
//!
//! let app = Router::new()
//!     .route("/voting", get(api::voting))
//!     .route("/save-voting", post(api::save_voting));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::management`] - the file-backed stores behind every handler
//! - [`crate::types`] - payload definitions

mod books;
mod health;
mod voting;

pub use books::current;
pub use books::history;
pub use health::health;
pub use voting::save_voting;
pub use voting::voting;
