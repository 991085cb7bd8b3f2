//! Client layer: orchestrates auth, transport calls and maps transport ↔ domain.

mod free_trial_numbers;
mod messages;
mod reports;
mod virtual_numbers;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::auth::{
    Clock, CredentialError, CredentialSource, EnvCredentials, OAuthTokenProvider, SystemClock,
    Token, TokenCache, DEFAULT_SCOPE, DEFAULT_TOKEN_ENDPOINT,
};
use crate::domain::{ApiErrorDetail, ValidationError};
use crate::http::{Body, HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
use crate::transport::TransportError;

/// Base URL of the Messaging API v3.
pub const DEFAULT_BASE_URL: &str = "https://products.api.telstra.com/messaging/v3";

const API_VERSION: &str = "3.x";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessagingClient`].
///
/// This error preserves:
/// - token failures ([`CredentialError`]),
/// - HTTP-level failures (non-2xx status or transport failures),
/// - validation/parse failures.
pub enum MessagingError {
    /// No usable OAuth token could be obtained.
    #[error("could not retrieve an OAuth token: {0}")]
    Credential(#[from] CredentialError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    ///
    /// `errors` holds the decoded `{"errors": [...]}` payload when present.
    #[error("unexpected HTTP status: {}{}", status_line(.status), actions_suffix(.errors))]
    HttpStatus {
        status: u16,
        body: Option<String>,
        errors: Vec<ApiErrorDetail>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[from] TransportError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl MessagingError {
    /// HTTP status of the failed call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Credential(err) => err.status(),
            _ => None,
        }
    }

    /// Suggested actions from the error payload, one per line.
    pub fn suggested_actions(&self) -> Option<String> {
        match self {
            Self::HttpStatus { errors, .. } => join_suggested_actions(errors),
            _ => None,
        }
    }
}

fn status_line(status: &u16) -> String {
    match crate::http::reason_phrase(*status) {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

fn actions_suffix(errors: &[ApiErrorDetail]) -> String {
    join_suggested_actions(errors)
        .map(|actions| format!(". {actions}"))
        .unwrap_or_default()
}

fn join_suggested_actions(errors: &[ApiErrorDetail]) -> Option<String> {
    let actions = errors
        .iter()
        .filter_map(|error| error.suggested_action.as_deref())
        .filter(|action| !action.trim().is_empty())
        .collect::<Vec<_>>();
    if actions.is_empty() {
        None
    } else {
        Some(actions.join("\n"))
    }
}

#[derive(Clone)]
/// Builder for [`MessagingClient`].
///
/// Use this when you need to customize endpoints, scope, timeout, user-agent,
/// or the clock used for token expiry.
pub struct MessagingClientBuilder {
    source: Arc<dyn CredentialSource>,
    base_url: String,
    token_endpoint: String,
    scope: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    clock: Arc<dyn Clock>,
}

impl MessagingClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent override.
    pub fn new(source: impl CredentialSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            scope: DEFAULT_SCOPE.to_owned(),
            timeout: None,
            user_agent: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Override the Messaging API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the OAuth token endpoint URL.
    pub fn token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    /// Override the requested OAuth scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set an HTTP client timeout applied to every request, token calls included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the clock used to decide token expiry.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build a [`MessagingClient`].
    pub fn build(self) -> Result<MessagingClient, MessagingError> {
        let transport = ReqwestTransport::new(self.timeout, self.user_agent.clone())
            .map_err(|err| MessagingError::Transport(Box::new(err)))?;
        self.build_with_transport(Arc::new(transport))
    }

    pub(crate) fn build_with_transport(
        self,
        http: Arc<dyn HttpTransport>,
    ) -> Result<MessagingClient, MessagingError> {
        url::Url::parse(&self.base_url)?;

        let provider = OAuthTokenProvider::with_transport(http.clone())
            .endpoint(self.token_endpoint)
            .scope(self.scope)
            .clock(self.clock.clone());
        let tokens = TokenCache::new(self.source, Arc::new(provider), self.clock);

        Ok(MessagingClient {
            base_url: self.base_url,
            tokens: Arc::new(tokens),
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Messaging API client.
///
/// Every call obtains a bearer token from the client's own [`TokenCache`],
/// sends JSON to `https://products.api.telstra.com/messaging/v3`, and maps
/// the response to a domain record. Clones share the token cache.
pub struct MessagingClient {
    base_url: String,
    tokens: Arc<TokenCache>,
    http: Arc<dyn HttpTransport>,
}

impl MessagingClient {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`MessagingClient::builder`].
    pub fn new(source: impl CredentialSource + 'static) -> Self {
        let http: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::with_default_client());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let provider = OAuthTokenProvider::with_transport(http.clone()).clock(clock.clone());
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            tokens: Arc::new(TokenCache::new(Arc::new(source), Arc::new(provider), clock)),
            http,
        }
    }

    /// Create a client reading `TELSTRA_CLIENT_ID` / `TELSTRA_CLIENT_SECRET`
    /// on the first call.
    pub fn from_env() -> Self {
        Self::new(EnvCredentials::new())
    }

    /// Start building a client with custom settings.
    pub fn builder(source: impl CredentialSource + 'static) -> MessagingClientBuilder {
        MessagingClientBuilder::new(source)
    }

    /// The token cache backing this client.
    pub fn token_cache(&self) -> &TokenCache {
        &self.tokens
    }

    /// Fetch (or reuse) a bearer token without calling the Messaging API.
    pub async fn token(&self) -> Result<Token, MessagingError> {
        Ok(self.tokens.get().await?)
    }

    fn url(&self, segments: &[&str], query: &[(String, String)]) -> Result<String, MessagingError> {
        let mut url = url::Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url.into())
    }

    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Body,
    ) -> Result<HttpResponse, MessagingError> {
        let token = self.tokens.get().await?;
        let request = HttpRequest {
            method,
            url,
            headers: api_headers(&token),
            body,
        };

        debug!(method = method.as_str(), url = %request.url, "sending Messaging API request");
        let response = self
            .http
            .send(request)
            .await
            .map_err(MessagingError::Transport)?;

        if !response.is_success() {
            let errors = crate::transport::decode_api_errors(&response.body);
            warn!(
                method = method.as_str(),
                status = response.status,
                errors = errors.len(),
                "Messaging API returned an error status"
            );
            return Err(MessagingError::HttpStatus {
                status: response.status,
                body: response.non_empty_body(),
                errors,
            });
        }

        Ok(response)
    }
}

fn api_headers(token: &Token) -> Vec<(&'static str, String)> {
    vec![
        ("Authorization", token.authorization_header()),
        ("Telstra-api-version", API_VERSION.to_owned()),
        ("Content-Language", "en-au".to_owned()),
        ("Accept-Charset", "utf-8".to_owned()),
        ("Accept", "application/json".to_owned()),
        ("Content-Type", "application/json".to_owned()),
        ("Cache-Control", "no-cache".to_owned()),
    ]
}
