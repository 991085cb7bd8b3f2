use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::TransportError;
use crate::domain::{PhoneNumber, RegisterFreeTrialNumbers};

const FIELD: &str = "freeTrialNumbers";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FreeTrialNumbersJsonResponse {
    free_trial_numbers: Option<Vec<String>>,
}

pub fn encode_free_trial_numbers_json(request: &RegisterFreeTrialNumbers) -> Value {
    let numbers = request
        .numbers()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>();
    let mut body = Map::new();
    body.insert(FIELD.to_owned(), Value::from(numbers));
    Value::Object(body)
}

/// Registered numbers. An empty body means none are registered.
pub fn decode_free_trial_numbers_json_response(json: &str) -> Result<Vec<String>, TransportError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: FreeTrialNumbersJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.free_trial_numbers.unwrap_or_default())
}
