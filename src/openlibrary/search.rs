use reqwest::Client;

use crate::{
    config,
    types::{BookCandidate, SearchDoc, SearchResponse},
};

/// Searches Open Library for books matching a free-text query.
///
/// Sends the query to the configured search endpoint and maps up to
/// `config::search_limit()` result docs into candidates. The work id is the
/// last path segment of the doc key (e.g. `/works/OL893415W` becomes
/// `OL893415W`), the author is the first listed name or `"Unknown"`, and a
/// cover URL is derived from the cover id when one is present.
///
/// # Errors
///
/// Returns `reqwest::Error` when the endpoint is unreachable, answers with a
/// non-success status, or the response body is not the expected JSON. The
/// error is propagated as-is; no retry is attempted.
///
/// # Example
///
/// ```
/// let candidates = search_books("dune frank herbert").await?;
/// for c in &candidates {
///     println!("{} by {}", c.title, c.author);
/// }
/// ```
pub async fn search_books(query: &str) -> Result<Vec<BookCandidate>, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(&config::openlibrary_search_url())
        .query(&[("q", query)])
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchResponse>().await?;

    let candidates = res
        .docs
        .into_iter()
        .take(config::search_limit())
        .map(candidate_from_doc)
        .collect();

    Ok(candidates)
}

/// Maps one search doc to a candidate. Split out so the mapping rules can be
/// exercised without the network.
pub fn candidate_from_doc(doc: SearchDoc) -> BookCandidate {
    let id = doc
        .key
        .rsplit('/')
        .next()
        .unwrap_or(doc.key.as_str())
        .to_string();

    let author = doc
        .author_name
        .as_ref()
        .and_then(|names| names.first())
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());

    let cover_image_url = doc
        .cover_i
        .map(|cover| format!("https://covers.openlibrary.org/b/id/{}-M.jpg", cover));

    BookCandidate {
        id,
        title: doc.title,
        author,
        cover_image_url,
    }
}
