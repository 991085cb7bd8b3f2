use std::path::PathBuf;
use std::time::Duration;

use telstra_messaging::{
    FileCredentials, Limit, MessagingClient, Offset, PageQuery, VirtualNumberId,
};
use tracing_subscriber::EnvFilter;

/// Lists virtual numbers and their opt-outs. Credentials come from the JSON
/// file named by `TELSTRA_CREDENTIALS_FILE` (default `telstra-credentials.json`).
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::var("TELSTRA_CREDENTIALS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("telstra-credentials.json"));

    let client = MessagingClient::builder(FileCredentials::new(path))
        .timeout(Duration::from_secs(30))
        .user_agent("telstra-messaging-demos/0.1")
        .build()?;

    let query = PageQuery::new(Limit::new(10)?, Offset::new(0)?);
    let numbers = client.list_virtual_numbers(query).await?;
    println!("total: {}", numbers.paging.total_count);

    for number in numbers.virtual_numbers {
        let id = VirtualNumberId::new(number.virtual_number.as_str())?;
        let optouts = client
            .list_recipient_optouts(&id, PageQuery::default())
            .await?;
        println!(
            "{} (tags: {:?}, last use: {:?}) opt-outs: {}",
            number.virtual_number,
            number.tags,
            number.last_use,
            optouts.recipient_optouts.len()
        );
    }

    Ok(())
}
