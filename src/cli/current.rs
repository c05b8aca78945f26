use tabled::Table;

use crate::{
    config, info,
    management::{BookStore, BookStoreError},
    success,
    types::{Book, BookTableRow},
    warning,
};

pub async fn show_current() {
    let store = BookStore::new(config::data_dir());

    match store.current().await {
        Ok(book) => {
            let row = BookTableRow {
                title: book.title.clone(),
                author: book.author.clone(),
                started: book.start_date.clone(),
                status: book.status.to_string(),
            };
            println!("{}", Table::new(vec![row]));

            if let Some(synopsis) = &book.synopsis {
                info!("{}", synopsis);
            }
            if let Some(notes) = &book.notes {
                info!("Notes: {}", notes);
            }
        }
        Err(BookStoreError::NotFound(_)) => {
            warning!("No current book set. Run clurb current set --id ... --title ... --author ...")
        }
        Err(e) => warning!("Failed to load current book. Err: {}", e),
    }
}

pub async fn set_current(book: Book) {
    let store = BookStore::new(config::data_dir());

    match store.set_current(&book).await {
        Ok(()) => success!("Current book is now '{}' by {}", book.title, book.author),
        Err(e) => warning!("Failed to set current book. Err: {}", e),
    }
}
