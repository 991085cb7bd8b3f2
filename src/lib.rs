//! Typed Rust client for the Telstra Messaging v3 HTTP API.
//!
//! The design follows the usual layering: an auth layer that obtains and
//! caches OAuth2 client-credentials tokens, a domain layer of strong types, a
//! transport layer for wire-format quirks, and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use telstra_messaging::{MessageContent, MessagingClient, PhoneNumber, SendMessage, SenderId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telstra_messaging::MessagingError> {
//!     // Reads TELSTRA_CLIENT_ID / TELSTRA_CLIENT_SECRET on first use.
//!     let client = MessagingClient::from_env();
//!     let request = SendMessage::sms(
//!         PhoneNumber::new("0412345678")?,
//!         SenderId::new("privateNumber")?,
//!         MessageContent::new("hello")?,
//!     );
//!     let message = client.send_message(request).await?;
//!     println!("{:?}", message.message_id());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod domain;
mod http;
mod transport;

pub use auth::{
    Clock, CredentialError, CredentialSource, Credentials, EnvCredentials, FileCredentials,
    OAuthTokenProvider, SystemClock, Token, TokenCache, TokenProvider,
};
pub use client::{DEFAULT_BASE_URL, MessagingClient, MessagingClientBuilder, MessagingError};
pub use domain::{
    CallbackUrl, CreateReport, Limit, Message, MessageContent, MessageId, MessageOptions,
    Messages, Multimedia, MultimediaType, Offset, PageQuery, PhoneNumber,
    RegisterFreeTrialNumbers, Report, ReportId, ReportPeriod, ScheduleSend, SendMessage,
    SenderId, Tags, ValidationError, VirtualNumber, VirtualNumberId, VirtualNumberOptions,
};
pub use transport::TransportError;
