use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::infrastructure::client::BookshelfClient;

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Partial title, e.g. `the lord`
    #[arg(required = true)]
    pub query: Vec<String>,
}

impl SearchCommand {
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

pub async fn run(client: &BookshelfClient, command: SearchCommand) -> Result<()> {
    let suggestions = client.catalog().suggestions(&command.text()).await?;
    if suggestions.is_empty() {
        eprintln!("No suggestions.");
    }
    print_json(&suggestions)
}
