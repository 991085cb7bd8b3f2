use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::{Clock, CredentialError, Credentials, SystemClock, Token};
use crate::http::{Body, HttpRequest, HttpTransport, Method, ReqwestTransport, reason_phrase};

/// Boxed, sendable future used at the crate's async trait seams.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://products.api.telstra.com/v2/oauth/token";

/// Scope requested by default: everything the v3 messaging surface needs.
pub const DEFAULT_SCOPE: &str = "free-trial-numbers:read free-trial-numbers:write \
virtual-numbers:read virtual-numbers:write messages:read messaging:write \
reports:read reports:write";

/// Exchanges client credentials for an access token.
pub trait TokenProvider: Send + Sync {
    fn fetch<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<Token, CredentialError>>;
}

#[derive(Clone)]
/// [`TokenProvider`] for the OAuth2 client-credentials grant.
///
/// Sends one form-encoded `POST` per call and never retries.
pub struct OAuthTokenProvider {
    endpoint: String,
    scope: String,
    http: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
}

impl OAuthTokenProvider {
    /// Provider for the default endpoint and scope.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::with_default_client()))
    }

    pub(crate) fn with_transport(http: Arc<dyn HttpTransport>) -> Self {
        Self {
            endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            scope: DEFAULT_SCOPE.to_owned(),
            http,
            clock: Arc::new(SystemClock),
        }
    }

    /// Override the token endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the requested scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Override the clock used to stamp `issued_at`.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<Token, CredentialError> {
        let request = HttpRequest {
            method: Method::Post,
            url: self.endpoint.clone(),
            headers: vec![
                (
                    "Content-Type",
                    "application/x-www-form-urlencoded".to_owned(),
                ),
                ("Accept", "*/*".to_owned()),
            ],
            body: Body::Form(crate::transport::encode_token_form(credentials, &self.scope)),
        };

        debug!(endpoint = %self.endpoint, "requesting OAuth token");
        let response = self
            .http
            .send(request)
            .await
            .map_err(CredentialError::Unreachable)?;

        if !response.is_success() {
            let message = crate::transport::decode_token_error_message(&response.body);
            warn!(status = response.status, "token endpoint rejected the request");
            return Err(CredentialError::Rejected {
                status: response.status,
                reason: reason_phrase(response.status),
                message,
            });
        }

        crate::transport::decode_token_json_response(&response.body, self.clock.now())
            .map_err(CredentialError::MalformedResponse)
    }
}

impl Default for OAuthTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider for OAuthTokenProvider {
    fn fetch<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<Token, CredentialError>> {
        Box::pin(self.request_token(credentials))
    }
}
