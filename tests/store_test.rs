use clurb::management::{BookStore, BookStoreError, SuggestionStore};
use clurb::types::{Book, BookStatus, BookSuggestion};
use tempfile::TempDir;

// Helper function to create a test book
fn create_test_book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Test Author".to_string(),
        cover_image_url: "https://covers.openlibrary.org/b/id/1-M.jpg".to_string(),
        start_date: "2024-01-06".to_string(),
        end_date: Some("2024-02-10".to_string()),
        status: BookStatus::Completed,
        synopsis: Some("A test synopsis".to_string()),
        notes: None,
        total_pages: Some(412),
    }
}

fn create_test_suggestion(id: &str, votes: u32) -> BookSuggestion {
    BookSuggestion {
        book: create_test_book(id, &format!("{}_title", id)),
        votes,
    }
}

#[tokio::test]
async fn test_fresh_suggestion_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = SuggestionStore::new(dir.path().to_path_buf());

    // Missing file is an empty collection, not an error
    let suggestions = store.suggestions().await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_suggestions_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SuggestionStore::new(dir.path().to_path_buf());

    let saved = vec![create_test_suggestion("b", 5), create_test_suggestion("a", 3)];
    store.save(&saved).await.unwrap();

    let loaded = store.suggestions().await.unwrap();
    assert_eq!(loaded, saved);
}

#[tokio::test]
async fn test_save_replaces_collection_wholesale() {
    let dir = TempDir::new().unwrap();
    let store = SuggestionStore::new(dir.path().to_path_buf());

    store
        .save(&[create_test_suggestion("a", 1), create_test_suggestion("b", 2)])
        .await
        .unwrap();
    store.save(&[create_test_suggestion("c", 0)]).await.unwrap();

    let loaded = store.suggestions().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].book.id, "c");
}

#[tokio::test]
async fn test_malformed_voting_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("voting.json"), "{not json").unwrap();

    let store = SuggestionStore::new(dir.path().to_path_buf());
    let err = store.suggestions().await.unwrap_err();
    assert!(matches!(
        err,
        clurb::management::SuggestionStoreError::ParseError(_)
    ));
}

#[tokio::test]
async fn test_missing_current_book_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    // No empty-default Book here
    let err = store.current().await.unwrap_err();
    assert!(matches!(err, BookStoreError::NotFound(_)));
}

#[tokio::test]
async fn test_set_current_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    let book = create_test_book("OL893415W", "Dune");
    store.set_current(&book).await.unwrap();

    let loaded = store.current().await.unwrap();
    assert_eq!(loaded, book);
}

#[tokio::test]
async fn test_set_current_overwrites_in_full() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    store.set_current(&create_test_book("a", "First")).await.unwrap();
    store.set_current(&create_test_book("b", "Second")).await.unwrap();

    let loaded = store.current().await.unwrap();
    assert_eq!(loaded.id, "b");
    assert_eq!(loaded.title, "Second");
}

#[tokio::test]
async fn test_malformed_current_book_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("currentBook.json"), "[]").unwrap();

    let store = BookStore::new(dir.path().to_path_buf());
    let err = store.current().await.unwrap_err();
    assert!(matches!(err, BookStoreError::ParseError(_)));
}

#[tokio::test]
async fn test_missing_history_file_fails() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    // Asymmetric with the suggestion store: no empty default here
    let err = store.history().await.unwrap_err();
    assert!(matches!(err, BookStoreError::NotFound(_)));
}

#[tokio::test]
async fn test_append_to_history_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    store.append_to_history(create_test_book("a", "Emma")).await.unwrap();
    store.append_to_history(create_test_book("b", "Dune")).await.unwrap();

    let history = store.history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, "a");
    assert_eq!(history[1].id, "b");
}

#[tokio::test]
async fn test_append_to_history_allows_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    store.append_to_history(create_test_book("a", "Emma")).await.unwrap();
    store.append_to_history(create_test_book("a", "Emma")).await.unwrap();

    let history = store.history().await.unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_stored_json_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let store = BookStore::new(dir.path().to_path_buf());

    store
        .set_current(&create_test_book("OL893415W", "Dune"))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("currentBook.json")).unwrap();
    assert!(raw.contains("\"coverImageUrl\""));
    assert!(raw.contains("\"startDate\""));
    assert!(raw.contains("\"totalPages\""));
    assert!(raw.contains("\"status\": \"COMPLETED\""));
}
