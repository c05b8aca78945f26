use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use clurb::{
    cli, config, error,
    types::{Book, BookStatus},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Show or set the book the club is currently reading
    Current(CurrentOptions),

    /// Show or extend the reading history
    History(HistoryOptions),

    /// List, search, suggest and upvote future books
    Voting(VotingOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Show or set the current book")]
pub struct CurrentOptions {
    /// Subcommands under `current` (e.g., `set`)
    #[command(subcommand)]
    pub command: Option<CurrentSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CurrentSubcommand {
    /// Overwrite the current-book record
    Set(BookOpts),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Show or extend the reading history")]
pub struct HistoryOptions {
    /// Subcommands under `history` (e.g., `add`)
    #[command(subcommand)]
    pub command: Option<HistorySubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum HistorySubcommand {
    /// Append one book to the history
    Add(BookOpts),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "List, search, suggest and upvote future books")]
pub struct VotingOptions {
    /// Subcommands under `voting` (e.g., `suggest`)
    #[command(subcommand)]
    pub command: Option<VotingSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VotingSubcommand {
    /// Search Open Library for candidate books
    Search(SearchOpts),

    /// Search and add one candidate as a zero-vote suggestion
    Suggest(SuggestOpts),

    /// Upvote a suggestion by its id
    Upvote(UpvoteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOpts {
    /// Free-text title/author query
    query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SuggestOpts {
    /// Free-text title/author query
    query: String,

    /// 1-based index into the search results (defaults to the first hit)
    #[clap(long)]
    pick: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct UpvoteOpts {
    /// Suggestion id, as shown by `clurb voting`
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct BookOpts {
    /// Unique book identifier (e.g., an Open Library work id)
    #[clap(long)]
    id: String,

    #[clap(long)]
    title: String,

    #[clap(long)]
    author: String,

    /// Cover image URL
    #[clap(long)]
    cover_url: Option<String>,

    /// Start date as YYYY-MM-DD (defaults to today)
    #[clap(long)]
    start_date: Option<String>,

    /// End date as YYYY-MM-DD
    #[clap(long)]
    end_date: Option<String>,

    /// One of: current, completed, upcoming
    #[clap(long, value_parser = utils::parse_book_status)]
    status: Option<BookStatus>,

    #[clap(long)]
    synopsis: Option<String>,

    #[clap(long)]
    notes: Option<String>,

    #[clap(long)]
    total_pages: Option<u32>,
}

impl BookOpts {
    fn into_book(self, default_status: BookStatus) -> Book {
        Book {
            id: self.id,
            title: self.title,
            author: self.author,
            cover_image_url: self.cover_url.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_else(utils::today_string),
            end_date: self.end_date,
            status: self.status.unwrap_or(default_status),
            synopsis: self.synopsis,
            notes: self.notes,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,

        Command::Current(opt) => match opt.command {
            Some(CurrentSubcommand::Set(b)) => {
                cli::set_current(b.into_book(BookStatus::Current)).await
            }
            None => cli::show_current().await,
        },

        Command::History(opt) => match opt.command {
            Some(HistorySubcommand::Add(b)) => {
                cli::add_to_history(b.into_book(BookStatus::Completed)).await
            }
            None => cli::list_history().await,
        },

        Command::Voting(opt) => match opt.command {
            Some(VotingSubcommand::Search(s)) => cli::search(s.query).await,
            Some(VotingSubcommand::Suggest(s)) => cli::suggest(s.query, s.pick).await,
            Some(VotingSubcommand::Upvote(u)) => cli::upvote(u.id).await,
            None => cli::list_suggestions().await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
