use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::infrastructure::client::BookshelfClient;

#[derive(Debug, Args)]
pub struct DetailsCommand {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: Option<String>,
}

pub async fn run(client: &BookshelfClient, command: DetailsCommand) -> Result<()> {
    let details = client
        .catalog()
        .details(&command.title, command.author.as_deref())
        .await?;
    print_json(&details)
}
