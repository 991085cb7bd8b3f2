use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::auth::{Clock, CredentialError, CredentialSource, Credentials, Token, TokenProvider};

/// Single-slot token cache owned by a client instance.
///
/// [`TokenCache::get`] returns the held token while it is valid and otherwise
/// fetches a new one through the [`TokenProvider`]. The slot is replaced under
/// an async mutex, so concurrent callers that find it empty or expired wait
/// for one refresh instead of each issuing their own.
pub struct TokenCache {
    source: Arc<dyn CredentialSource>,
    provider: Arc<dyn TokenProvider>,
    clock: Arc<dyn Clock>,
    state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    credentials: Option<Credentials>,
    current: Option<Token>,
}

impl TokenCache {
    /// Create an empty cache. Nothing is loaded or fetched until the first [`TokenCache::get`].
    pub fn new(
        source: Arc<dyn CredentialSource>,
        provider: Arc<dyn TokenProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            provider,
            clock,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Return a token that is not expired at the moment of return.
    ///
    /// The one exception is a freshly fetched token with `expires_in = 0`: it
    /// is handed to the caller that fetched it once, already expired, and the
    /// next call fetches again.
    ///
    /// Credentials are loaded from the [`CredentialSource`] on first use and
    /// kept afterwards. Any [`CredentialError`] is returned unchanged and leaves
    /// the held token as it was.
    pub async fn get(&self) -> Result<Token, CredentialError> {
        let mut state = self.state.lock().await;

        if let Some(token) = state.current.as_ref() {
            if !token.is_expired_at(self.clock.now()) {
                debug!(expires_at = token.expires_at(), "reusing cached token");
                return Ok(token.clone());
            }
            debug!(expires_at = token.expires_at(), "cached token expired");
        }

        let credentials = match state.credentials.clone() {
            Some(credentials) => credentials,
            None => {
                let loaded = self.source.load().inspect_err(|err| {
                    warn!(error = %err, "could not load client credentials");
                })?;
                state.credentials = Some(loaded.clone());
                loaded
            }
        };

        let token = self
            .provider
            .fetch(&credentials)
            .await
            .inspect_err(|err| warn!(error = %err, "token refresh failed"))?;
        info!(
            expires_in = token.expires_in(),
            token_type = token.token_type(),
            "fetched new access token"
        );
        state.current = Some(token.clone());
        Ok(token)
    }

    /// The held token, expired or not, without refreshing.
    pub async fn current(&self) -> Option<Token> {
        self.state.lock().await.current.clone()
    }
}
