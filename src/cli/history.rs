use tabled::Table;

use crate::{
    config,
    management::{BookStore, BookStoreError},
    success,
    types::{Book, BookTableRow},
    warning,
};

pub async fn list_history() {
    let store = BookStore::new(config::data_dir());

    match store.history().await {
        Ok(books) => {
            // insertion order on disk is reading order; keep it
            let table_rows: Vec<BookTableRow> = books
                .into_iter()
                .map(|b| BookTableRow {
                    title: b.title,
                    author: b.author,
                    started: b.start_date,
                    status: b.status.to_string(),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(BookStoreError::NotFound(_)) => {
            warning!("No history yet. Run clurb history add --id ... --title ... --author ...")
        }
        Err(e) => warning!("Failed to load history. Err: {}", e),
    }
}

pub async fn add_to_history(book: Book) {
    let store = BookStore::new(config::data_dir());
    let title = book.title.clone();

    match store.append_to_history(book).await {
        Ok(()) => success!("Added '{}' to the reading history", title),
        Err(e) => warning!("Failed to add to history. Err: {}", e),
    }
}
