use serde::Deserialize;

use super::flex::FlexibleU64;
use crate::auth::{Credentials, Token};
use crate::domain::{ClientId, ClientSecret};

const GRANT_TYPE: &str = "client_credentials";

#[derive(Debug, Clone, Deserialize)]
struct TokenJsonResponse {
    access_token: String,
    token_type: String,
    expires_in: FlexibleU64,
}

#[derive(Debug, Clone, Deserialize)]
struct TokenErrorJsonResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub fn encode_token_form(credentials: &Credentials, scope: &str) -> Vec<(String, String)> {
    vec![
        ("grant_type".to_owned(), GRANT_TYPE.to_owned()),
        (
            ClientId::FIELD.to_owned(),
            credentials.client_id().as_str().to_owned(),
        ),
        (
            ClientSecret::FIELD.to_owned(),
            credentials.client_secret().expose().to_owned(),
        ),
        ("scope".to_owned(), scope.to_owned()),
    ]
}

pub fn decode_token_json_response(json: &str, issued_at: u64) -> Result<Token, serde_json::Error> {
    let parsed: TokenJsonResponse = serde_json::from_str(json)?;
    Ok(Token::new(
        parsed.access_token,
        parsed.token_type,
        parsed.expires_in.value(),
        issued_at,
    ))
}

/// Best human-readable message from a failed token response.
///
/// Prefers `error_description`, then `message`, then `error`; falls back to
/// the raw body when it is not JSON.
pub fn decode_token_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<TokenErrorJsonResponse>(trimmed) {
        Ok(parsed) => parsed
            .error_description
            .or(parsed.message)
            .or(parsed.error),
        Err(_) => Some(trimmed.to_owned()),
    }
}
