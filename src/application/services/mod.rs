mod details;
mod isbn;
mod search;
pub mod settle;

pub use details::DetailsService;
pub use isbn::IsbnResolver;
pub use search::{
    DEFAULT_LIBRARY_LANGUAGE, DEFAULT_VOLUME_LANGUAGE, LanguageHints, SuggestionService,
};
