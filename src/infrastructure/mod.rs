pub mod catalogs;
pub mod client;
pub mod http;
