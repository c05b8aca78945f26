//! Configuration management for the book-club tracker.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! access the server bind address, the data directory holding the JSON
//! documents, and the Open Library search settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `clurb/.env`. A missing `.env` file is not an
/// error; every setting has a default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/clurb/.env`
/// - macOS: `~/Library/Application Support/clurb/.env`
/// - Windows: `%LOCALAPPDATA%/clurb/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created.
///
/// # Example
///
/// ```
/// use clurb::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("clurb/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Absent file is fine; defaults cover everything.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:8080` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the directory holding the JSON documents.
///
/// Retrieves the `CLURB_DATA_DIR` environment variable when set; otherwise
/// uses `clurb/data` under the platform-specific local data directory. The
/// stores create the directory on first write.
///
/// # Example
///
/// ```
/// let dir = data_dir(); // e.g., ~/.local/share/clurb/data
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("CLURB_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("clurb/data");
    path
}

/// Returns the Open Library search endpoint.
///
/// Retrieves the `OPENLIBRARY_SEARCH_URL` environment variable, falling back
/// to the public `https://openlibrary.org/search.json` endpoint. Overriding
/// this is mainly useful for pointing tests at a local stub.
///
/// # Example
///
/// ```
/// let url = openlibrary_search_url();
/// ```
pub fn openlibrary_search_url() -> String {
    env::var("OPENLIBRARY_SEARCH_URL")
        .unwrap_or_else(|_| "https://openlibrary.org/search.json".to_string())
}

/// Returns the maximum number of search candidates to surface.
///
/// Retrieves the `SEARCH_LIMIT` environment variable, falling back to 5.
/// Values that do not parse as a number also fall back to 5.
///
/// # Example
///
/// ```
/// let limit = search_limit(); // e.g., 5
/// ```
pub fn search_limit() -> usize {
    env::var("SEARCH_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}
