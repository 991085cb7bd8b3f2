use std::io;

use telstra_messaging::{MessageContent, MessagingClient, PhoneNumber, SendMessage, SenderId};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let to = std::env::var("TELSTRA_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELSTRA_TO environment variable is required",
        )
    })?;
    let from = std::env::var("TELSTRA_FROM").unwrap_or_else(|_| "privateNumber".to_owned());
    let text = std::env::var("TELSTRA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the telstra-messaging demo.".to_owned());

    let client = MessagingClient::from_env();
    let request = SendMessage::sms(
        PhoneNumber::new(to)?,
        SenderId::new(from)?,
        MessageContent::new(text)?,
    );

    let message = client.send_message(request).await?;
    println!(
        "message_id: {:?}, status: {:?}, to: {:?}",
        message.message_id(),
        message.status,
        message.to
    );

    Ok(())
}
