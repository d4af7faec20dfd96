pub mod books;
pub mod catalogs;
pub mod covers;
pub mod details;
pub mod errors;
pub mod isbn;
pub mod ranking;
pub mod suggestions;

// Re-exports
pub use catalogs::{CatalogQuery, LibraryCatalog, VolumeCatalog};
pub use covers::CoverSize;
pub use details::BookDetails;
pub use errors::{CatalogError, ValidationError};
pub use suggestions::{BookSuggestion, CatalogRecord, RichCandidate};
