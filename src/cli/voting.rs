use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, info,
    management::SuggestionStore,
    openlibrary, success,
    types::{Book, BookCandidate, BookStatus, CandidateTableRow, SuggestionTableRow},
    utils, warning,
};

pub async fn list_suggestions() {
    let store = SuggestionStore::new(config::data_dir());

    match store.suggestions().await {
        Ok(suggestions) => {
            if suggestions.is_empty() {
                info!("No suggestions yet. Add one with clurb voting suggest <query>");
                return;
            }

            let mut ranked = suggestions;
            utils::sort_suggestions_by_votes(&mut ranked);

            let table_rows: Vec<SuggestionTableRow> = ranked
                .into_iter()
                .map(|s| SuggestionTableRow {
                    votes: s.votes,
                    title: s.book.title,
                    author: s.book.author,
                    id: s.book.id,
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load suggestions. Err: {}", e),
    }
}

pub async fn search(query: String) {
    let candidates = search_remote(&query).await;
    if candidates.is_empty() {
        warning!("No results for '{}'", query);
        return;
    }

    let table_rows: Vec<CandidateTableRow> = candidates
        .into_iter()
        .enumerate()
        .map(|(i, c)| CandidateTableRow {
            pick: i + 1,
            title: c.title,
            author: c.author,
            id: c.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
    info!("Suggest one with clurb voting suggest '{}' --pick <#>", query);
}

pub async fn suggest(query: String, pick: Option<usize>) {
    let candidates = search_remote(&query).await;
    if candidates.is_empty() {
        warning!("No results for '{}'", query);
        return;
    }

    let index = pick.unwrap_or(1);
    let Some(candidate) = candidates.into_iter().nth(index.saturating_sub(1)) else {
        warning!("Pick {} is out of range", index);
        return;
    };

    let store = SuggestionStore::new(config::data_dir());
    let suggestions = match store.suggestions().await {
        Ok(s) => s,
        Err(e) => {
            warning!("Failed to load suggestions. Err: {}", e);
            return;
        }
    };

    if suggestions.iter().any(|s| s.book.id == candidate.id) {
        warning!("'{}' is already suggested", candidate.title);
        return;
    }

    let title = candidate.title.clone();
    let updated = utils::add_suggestion(suggestions, book_from_candidate(candidate));
    match store.save(&updated).await {
        Ok(()) => success!("Suggested '{}'", title),
        Err(e) => warning!("Failed to save suggestions. Err: {}", e),
    }
}

pub async fn upvote(id: String) {
    let store = SuggestionStore::new(config::data_dir());

    let suggestions = match store.suggestions().await {
        Ok(s) => s,
        Err(e) => {
            warning!("Failed to load suggestions. Err: {}", e);
            return;
        }
    };

    let Some(target) = suggestions.iter().find(|s| s.book.id == id) else {
        warning!("No suggestion with id '{}'", id);
        return;
    };
    let title = target.book.title.clone();

    let updated = utils::upvote_suggestion(suggestions, &id);
    match store.save(&updated).await {
        Ok(()) => {
            let votes = updated
                .iter()
                .find(|s| s.book.id == id)
                .map(|s| s.votes)
                .unwrap_or(0);
            success!("Upvoted '{}', now at {} votes", title, votes);
        }
        Err(e) => warning!("Failed to save suggestions. Err: {}", e),
    }
}

async fn search_remote(query: &str) -> Vec<BookCandidate> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching Open Library...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = openlibrary::search_books(query).await;
    pb.finish_and_clear();

    match result {
        Ok(candidates) => candidates,
        Err(e) => {
            // degrade to an empty candidate list
            warning!("Search failed. Err: {}", e);
            Vec::new()
        }
    }
}

fn book_from_candidate(candidate: BookCandidate) -> Book {
    Book {
        id: candidate.id,
        title: candidate.title,
        author: candidate.author,
        cover_image_url: candidate.cover_image_url.unwrap_or_default(),
        start_date: utils::today_string(),
        end_date: None,
        status: BookStatus::Upcoming,
        synopsis: None,
        notes: None,
        total_pages: None,
    }
}
