use std::error::Error as StdError;
use std::path::PathBuf;

use crate::domain::ValidationError;

/// Where client credentials are issued.
pub const CREDENTIALS_PORTAL_URL: &str = "https://dev.telstra.com/user/me/apps";

#[derive(Debug, thiserror::Error)]
/// Failure to obtain client credentials or an access token.
///
/// HTTP failures keep the status code, its reason phrase and the message the
/// token endpoint returned, so callers can tell bad credentials from an
/// unreachable endpoint or a malformed response.
pub enum CredentialError {
    /// A credential value was not configured anywhere.
    #[error(
        "the {field} was not configured; it can be retrieved from {portal} and provided as {hint}",
        portal = CREDENTIALS_PORTAL_URL
    )]
    Missing { field: &'static str, hint: String },

    /// A configured credential value is not usable (for example empty).
    #[error("invalid credentials: {0}")]
    Invalid(#[from] ValidationError),

    /// The credentials file could not be read.
    #[error("could not read credentials file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not the expected JSON document.
    #[error("could not parse credentials file {}: {source}", .path.display())]
    FileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The token endpoint answered with a non-2xx status.
    #[error(
        "could not retrieve token: HTTP {status}{}{}",
        reason_suffix(.reason),
        message_suffix(.message)
    )]
    Rejected {
        status: u16,
        reason: Option<&'static str>,
        message: Option<String>,
    },

    /// The token endpoint could not be reached.
    #[error("could not reach token endpoint: {0}")]
    Unreachable(#[source] Box<dyn StdError + Send + Sync>),

    /// The token endpoint answered 2xx with a body that is not a token.
    #[error("token endpoint returned a malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl CredentialError {
    /// HTTP status code, when the token endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn reason_suffix(reason: &Option<&'static str>) -> String {
    reason.map(|text| format!(" {text}")).unwrap_or_default()
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|text| format!(": {text}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_contains_status_reason_and_server_text() {
        let err = CredentialError::Rejected {
            status: 401,
            reason: Some("Unauthorized"),
            message: Some("invalid_client".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "could not retrieve token: HTTP 401 Unauthorized: invalid_client"
        );
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn rejected_message_without_details() {
        let err = CredentialError::Rejected {
            status: 599,
            reason: None,
            message: None,
        };
        assert_eq!(err.to_string(), "could not retrieve token: HTTP 599");
    }

    #[test]
    fn missing_message_points_to_the_portal() {
        let err = CredentialError::Missing {
            field: "client id",
            hint: "the `TELSTRA_CLIENT_ID` environment variable".to_owned(),
        };
        let text = err.to_string();
        assert!(text.contains(CREDENTIALS_PORTAL_URL));
        assert!(text.contains("TELSTRA_CLIENT_ID"));
        assert_eq!(err.status(), None);
    }
}
