use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::auth::CredentialError;
use crate::domain::{ClientId, ClientSecret};

/// Environment variable holding the OAuth client id.
pub const CLIENT_ID_ENV: &str = "TELSTRA_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const CLIENT_SECRET_ENV: &str = "TELSTRA_CLIENT_SECRET";

#[derive(Debug, Clone, PartialEq, Eq)]
/// OAuth2 client credentials.
///
/// Both parts are validated on construction and read-only afterwards.
pub struct Credentials {
    client_id: ClientId,
    client_secret: ClientSecret,
}

impl Credentials {
    pub fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    /// Validate raw strings and build credentials from them.
    pub fn from_strings(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        Ok(Self {
            client_id: ClientId::new(client_id)?,
            client_secret: ClientSecret::new(client_secret)?,
        })
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }
}

/// Supplier of client credentials.
///
/// A [`TokenCache`](crate::auth::TokenCache) calls [`CredentialSource::load`]
/// until it succeeds once and keeps the result for its lifetime.
pub trait CredentialSource: Send + Sync {
    fn load(&self) -> Result<Credentials, CredentialError>;
}

impl CredentialSource for Credentials {
    fn load(&self) -> Result<Credentials, CredentialError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reads credentials from environment variables.
///
/// Defaults to `TELSTRA_CLIENT_ID` and `TELSTRA_CLIENT_SECRET`.
pub struct EnvCredentials {
    client_id_var: String,
    client_secret_var: String,
}

impl EnvCredentials {
    pub fn new() -> Self {
        Self::with_vars(CLIENT_ID_ENV, CLIENT_SECRET_ENV)
    }

    /// Read from custom variable names.
    pub fn with_vars(
        client_id_var: impl Into<String>,
        client_secret_var: impl Into<String>,
    ) -> Self {
        Self {
            client_id_var: client_id_var.into(),
            client_secret_var: client_secret_var.into(),
        }
    }

    /// Same as [`CredentialSource::load`] with `lookup` in place of the process
    /// environment.
    pub(crate) fn load_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Credentials, CredentialError> {
        let client_id = lookup(&self.client_id_var).ok_or_else(|| CredentialError::Missing {
            field: "client id",
            hint: env_hint(&self.client_id_var),
        })?;
        let client_secret =
            lookup(&self.client_secret_var).ok_or_else(|| CredentialError::Missing {
                field: "client secret",
                hint: env_hint(&self.client_secret_var),
            })?;
        debug!(
            client_id_var = %self.client_id_var,
            "loaded credentials from environment"
        );
        Credentials::from_strings(client_id, client_secret)
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentials {
    fn load(&self) -> Result<Credentials, CredentialError> {
        self.load_with(|name| std::env::var(name).ok())
    }
}

fn env_hint(var: &str) -> String {
    format!("the `{var}` environment variable")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reads credentials from a JSON file.
///
/// ```json
/// { "client_id": "...", "client_secret": "..." }
/// ```
pub struct FileCredentials {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, contents: &str) -> Result<Credentials, CredentialError> {
        let file: CredentialsFile =
            serde_json::from_str(contents).map_err(|source| CredentialError::FileFormat {
                path: self.path.clone(),
                source,
            })?;
        let client_id = file.client_id.ok_or_else(|| CredentialError::Missing {
            field: "client id",
            hint: self.key_hint("client_id"),
        })?;
        let client_secret = file.client_secret.ok_or_else(|| CredentialError::Missing {
            field: "client secret",
            hint: self.key_hint("client_secret"),
        })?;
        Credentials::from_strings(client_id, client_secret)
    }

    fn key_hint(&self, key: &str) -> String {
        format!("the `{key}` key of {}", self.path.display())
    }
}

impl CredentialSource for FileCredentials {
    fn load(&self) -> Result<Credentials, CredentialError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| CredentialError::File {
                path: self.path.clone(),
                source,
            })?;
        let credentials = self.parse(&contents)?;
        debug!(path = %self.path.display(), "loaded credentials from file");
        Ok(credentials)
    }
}
