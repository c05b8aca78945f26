use clurb::types::{Book, BookStatus, BookSuggestion};
use clurb::utils::*;

// Helper function to create a test book
fn create_test_book(id: &str, title: &str, author: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover_image_url: String::new(),
        start_date: "2024-01-06".to_string(),
        end_date: None,
        status: BookStatus::Upcoming,
        synopsis: None,
        notes: None,
        total_pages: None,
    }
}

// Helper function to create a test suggestion
fn create_test_suggestion(id: &str, votes: u32) -> BookSuggestion {
    BookSuggestion {
        book: create_test_book(id, &format!("{}_title", id), &format!("{}_author", id)),
        votes,
    }
}

#[test]
fn test_add_suggestion_appends_with_zero_votes() {
    let suggestions = vec![create_test_suggestion("a", 3)];
    let result = add_suggestion(suggestions, create_test_book("b", "Dune", "Frank Herbert"));

    assert_eq!(result.len(), 2);

    let added = result.iter().find(|s| s.book.id == "b").unwrap();
    assert_eq!(added.votes, 0);
    assert_eq!(added.book.title, "Dune");
}

#[test]
fn test_add_suggestion_is_idempotent_for_duplicate_id() {
    let suggestions = vec![create_test_suggestion("a", 3)];
    let once = add_suggestion(suggestions, create_test_book("b", "Dune", "Frank Herbert"));
    let twice = add_suggestion(
        once.clone(),
        create_test_book("b", "Dune (again)", "Frank Herbert"),
    );

    // Size stays the same and the existing entry is untouched
    assert_eq!(twice.len(), 2);
    assert_eq!(once, twice);
    assert_eq!(
        twice.iter().find(|s| s.book.id == "b").unwrap().book.title,
        "Dune"
    );
}

#[test]
fn test_add_suggestion_into_empty_collection() {
    let result = add_suggestion(Vec::new(), create_test_book("a", "Emma", "Jane Austen"));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].votes, 0);
}

#[test]
fn test_upvote_increments_by_exactly_one() {
    let suggestions = vec![create_test_suggestion("a", 7)];
    let result = upvote_suggestion(suggestions, "a");

    assert_eq!(result[0].votes, 8);
}

#[test]
fn test_upvote_resorts_descending_by_votes() {
    // Scenario from the store contract: [a:3, b:5], upvote a -> [b:5, a:4]
    let suggestions = vec![create_test_suggestion("a", 3), create_test_suggestion("b", 5)];
    let result = upvote_suggestion(suggestions, "a");

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].book.id, "b");
    assert_eq!(result[0].votes, 5);
    assert_eq!(result[1].book.id, "a");
    assert_eq!(result[1].votes, 4);
}

#[test]
fn test_upvote_unknown_id_leaves_counts_unchanged() {
    let suggestions = vec![create_test_suggestion("b", 5), create_test_suggestion("a", 3)];
    let result = upvote_suggestion(suggestions.clone(), "missing");

    // Already sorted, so the re-sort is a no-op as well
    assert_eq!(result, suggestions);
}

#[test]
fn test_upvote_overtakes_on_higher_count() {
    let suggestions = vec![create_test_suggestion("b", 5), create_test_suggestion("a", 5)];
    let result = upvote_suggestion(suggestions, "a");

    assert_eq!(result[0].book.id, "a");
    assert_eq!(result[0].votes, 6);
    assert_eq!(result[1].book.id, "b");
}

#[test]
fn test_sort_is_stable_for_equal_counts() {
    let mut suggestions = vec![
        create_test_suggestion("x", 2),
        create_test_suggestion("y", 2),
        create_test_suggestion("z", 4),
    ];
    sort_suggestions_by_votes(&mut suggestions);

    // z first, then x and y keep their prior relative order
    assert_eq!(suggestions[0].book.id, "z");
    assert_eq!(suggestions[1].book.id, "x");
    assert_eq!(suggestions[2].book.id, "y");
}

#[test]
fn test_today_string_format() {
    let today = today_string();

    // YYYY-MM-DD
    assert_eq!(today.len(), 10);
    assert_eq!(today.as_bytes()[4], b'-');
    assert_eq!(today.as_bytes()[7], b'-');
}

#[test]
fn test_parse_book_status() {
    assert_eq!(parse_book_status("current"), Ok(BookStatus::Current));
    assert_eq!(parse_book_status("COMPLETED"), Ok(BookStatus::Completed));
    assert_eq!(parse_book_status("Upcoming"), Ok(BookStatus::Upcoming));
    assert!(parse_book_status("paused").is_err());
}
