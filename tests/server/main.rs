#![allow(clippy::unwrap_used, clippy::expect_used)]

mod client;
mod details_api;
mod health;
mod helpers;
mod isbn_api;
mod suggestions_api;
