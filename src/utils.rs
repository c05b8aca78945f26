use chrono::Utc;

use crate::types::{Book, BookSuggestion, BookStatus};

/// Adds a candidate book to the suggestion collection with zero votes.
///
/// A candidate whose id is already present leaves the collection unchanged,
/// so calling this twice with the same book is a no-op the second time.
pub fn add_suggestion(mut suggestions: Vec<BookSuggestion>, book: Book) -> Vec<BookSuggestion> {
    if suggestions.iter().any(|s| s.book.id == book.id) {
        return suggestions;
    }
    suggestions.push(BookSuggestion { book, votes: 0 });
    suggestions
}

/// Increments the vote count of the matching suggestion by one and re-ranks
/// the collection by descending votes. An id with no matching suggestion
/// leaves the counts unchanged.
pub fn upvote_suggestion(mut suggestions: Vec<BookSuggestion>, id: &str) -> Vec<BookSuggestion> {
    if let Some(s) = suggestions.iter_mut().find(|s| s.book.id == id) {
        s.votes += 1;
    }
    sort_suggestions_by_votes(&mut suggestions);
    suggestions
}

/// Sorts descending by vote count. The sort is stable, so suggestions with
/// equal counts keep their prior relative order.
pub fn sort_suggestions_by_votes(suggestions: &mut Vec<BookSuggestion>) {
    suggestions.sort_by(|a, b| b.votes.cmp(&a.votes));
}

/// Today's date as YYYY-MM-DD, the format the JSON documents use.
pub fn today_string() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Clap value parser for book statuses.
pub fn parse_book_status(s: &str) -> Result<BookStatus, String> {
    match s.to_lowercase().as_str() {
        "current" => Ok(BookStatus::Current),
        "completed" => Ok(BookStatus::Completed),
        "upcoming" => Ok(BookStatus::Upcoming),
        other => Err(format!(
            "unknown status '{}', expected one of: current, completed, upcoming",
            other
        )),
    }
}
