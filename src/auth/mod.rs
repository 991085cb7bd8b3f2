//! Auth layer: OAuth2 client-credentials tokens and their per-client cache.
//!
//! The flow is `TokenCache::get` → (slot empty or expired) →
//! `CredentialSource::load` (first time only) → `TokenProvider::fetch` →
//! store → return. Callers attach [`Token::authorization_header`] to their own
//! requests.

mod cache;
mod credentials;
mod error;
mod provider;
mod token;

pub use cache::TokenCache;
pub use credentials::{
    CLIENT_ID_ENV, CLIENT_SECRET_ENV, CredentialSource, Credentials, EnvCredentials,
    FileCredentials,
};
pub use error::{CREDENTIALS_PORTAL_URL, CredentialError};
pub use provider::{
    BoxFuture, DEFAULT_SCOPE, DEFAULT_TOKEN_ENDPOINT, OAuthTokenProvider, TokenProvider,
};
pub use token::{Clock, SystemClock, Token};
