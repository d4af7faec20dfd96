use anyhow::{Result, bail};
use clap::Args;

use super::print_json;
use crate::domain::isbn::is_scannable_barcode;
use crate::infrastructure::client::BookshelfClient;

#[derive(Debug, Args)]
pub struct IsbnCommand {
    /// ISBN-10/13, EAN-13, EAN-8 or UPC-A digits
    pub isbn: String,
}

pub async fn run(client: &BookshelfClient, command: IsbnCommand) -> Result<()> {
    let isbn: String = command.isbn.chars().filter(|c| *c != '-').collect();
    if !is_scannable_barcode(&isbn) {
        bail!("barcode must be 8 to 13 digits: {}", command.isbn);
    }

    match client.catalog().isbn(&isbn).await? {
        Some(book) => print_json(&book),
        None => bail!("no book found for {isbn}"),
    }
}
