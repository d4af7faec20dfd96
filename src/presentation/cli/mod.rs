pub mod details;
pub mod isbn;
pub mod search;

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use reqwest::Url;

use crate::application::ServerConfig;
use crate::application::services::{DEFAULT_LIBRARY_LANGUAGE, DEFAULT_VOLUME_LANGUAGE, LanguageHints};
use crate::application::state::AppStateConfig;
use crate::domain::covers::CoverSize;
use crate::infrastructure::catalogs::{GOOGLE_BOOKS_URL, OPEN_LIBRARY_URL};
use details::DetailsCommand;
use isbn::IsbnCommand;
use search::SearchCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Book metadata autofill across library catalogs", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "BOOKSHELF_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Search both catalogs for autofill suggestions
    Search(SearchCommand),

    /// Resolve a scanned ISBN or EAN barcode
    Isbn(IsbnCommand),

    /// Fetch synopsis, genre and year for a title
    Details(DetailsCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "BOOKSHELF_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "BOOKSHELF_OPEN_LIBRARY_URL", default_value = OPEN_LIBRARY_URL)]
    pub open_library_url: Url,

    #[arg(long, env = "BOOKSHELF_GOOGLE_BOOKS_URL", default_value = GOOGLE_BOOKS_URL)]
    pub google_books_url: Url,

    /// Per-request timeout for catalog calls, in milliseconds
    #[arg(long, env = "BOOKSHELF_CATALOG_TIMEOUT_MS", default_value_t = 5000)]
    pub catalog_timeout_ms: u64,

    /// Secondary language for library searches (empty disables)
    #[arg(long, env = "BOOKSHELF_LIBRARY_LANGUAGE", default_value = DEFAULT_LIBRARY_LANGUAGE)]
    pub library_language: String,

    /// Secondary language for volume searches (empty disables)
    #[arg(long, env = "BOOKSHELF_VOLUME_LANGUAGE", default_value = DEFAULT_VOLUME_LANGUAGE)]
    pub volume_language: String,

    #[arg(long, env = "BOOKSHELF_SUGGESTION_LIMIT", default_value_t = 8)]
    pub suggestion_limit: usize,

    /// Cover width hint for suggestions: card or hero
    #[arg(long, env = "BOOKSHELF_COVER_SIZE", default_value = "card")]
    pub cover_size: CoverSize,
}

impl ServeCommand {
    pub fn server_config(self) -> ServerConfig {
        let state = AppStateConfig {
            catalog_timeout: Duration::from_millis(self.catalog_timeout_ms),
            languages: LanguageHints {
                library: language_hint(self.library_language),
                volumes: language_hint(self.volume_language),
            },
            suggestion_limit: self.suggestion_limit,
            cover_size: self.cover_size,
            ..AppStateConfig::new(self.open_library_url, self.google_books_url)
        };
        ServerConfig {
            bind_address: self.bind_address,
            state,
        }
    }
}

fn language_hint(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
