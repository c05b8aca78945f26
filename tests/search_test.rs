use clurb::openlibrary::candidate_from_doc;
use clurb::types::SearchDoc;

fn create_test_doc(key: &str, title: &str, authors: Option<Vec<&str>>) -> SearchDoc {
    SearchDoc {
        key: key.to_string(),
        title: title.to_string(),
        author_name: authors.map(|a| a.into_iter().map(String::from).collect()),
        cover_i: None,
    }
}

#[test]
fn test_candidate_id_is_last_key_segment() {
    let doc = create_test_doc("/works/OL893415W", "Dune", Some(vec!["Frank Herbert"]));
    let candidate = candidate_from_doc(doc);

    assert_eq!(candidate.id, "OL893415W");
    assert_eq!(candidate.title, "Dune");
}

#[test]
fn test_candidate_author_is_first_listed() {
    let doc = create_test_doc(
        "/works/OL1W",
        "Good Omens",
        Some(vec!["Terry Pratchett", "Neil Gaiman"]),
    );
    let candidate = candidate_from_doc(doc);

    assert_eq!(candidate.author, "Terry Pratchett");
}

#[test]
fn test_candidate_author_falls_back_to_unknown() {
    let missing = create_test_doc("/works/OL2W", "Beowulf", None);
    assert_eq!(candidate_from_doc(missing).author, "Unknown");

    let empty = create_test_doc("/works/OL3W", "Anon", Some(vec![]));
    assert_eq!(candidate_from_doc(empty).author, "Unknown");
}

#[test]
fn test_candidate_cover_url_from_cover_id() {
    let mut doc = create_test_doc("/works/OL4W", "Emma", Some(vec!["Jane Austen"]));
    doc.cover_i = Some(12345);
    let candidate = candidate_from_doc(doc);

    assert_eq!(
        candidate.cover_image_url.as_deref(),
        Some("https://covers.openlibrary.org/b/id/12345-M.jpg")
    );

    let plain = create_test_doc("/works/OL5W", "Emma", Some(vec!["Jane Austen"]));
    assert!(candidate_from_doc(plain).cover_image_url.is_none());
}
