use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time in whole seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
/// [`Clock`] backed by the system time.
///
/// Partial seconds are rounded up, so a token issued during second `T` is
/// stamped `T + 1` and never outlives its advertised lifetime.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        if elapsed.subsec_nanos() > 0 {
            elapsed.as_secs() + 1
        } else {
            elapsed.as_secs()
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
/// OAuth2 bearer token issued by the token endpoint.
///
/// Immutable once constructed; expiry is derived from `issued_at + expires_in`.
pub struct Token {
    access_token: String,
    token_type: String,
    expires_in: u64,
    issued_at: u64,
}

impl Token {
    /// Build a token that was received at `issued_at` (epoch seconds).
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: u64,
        issued_at: u64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_in,
            issued_at,
        }
    }

    /// Opaque bearer value.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token type as reported by the server, usually `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Lifetime in seconds from issuance.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Epoch seconds at which the token was received.
    pub fn issued_at(&self) -> u64 {
        self.issued_at
    }

    /// First epoch second at which the token is no longer valid.
    pub fn expires_at(&self) -> u64 {
        self.issued_at.saturating_add(self.expires_in)
    }

    /// Whether the token is expired at `now`. The expiry second itself counts as expired.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at()
    }

    /// Whether the token is expired according to [`SystemClock`].
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(SystemClock.now())
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}
