use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{PagingJson, TransportError, non_empty, tags_json};
use crate::domain::{
    RecipientOptout, RecipientOptouts, Tags, VirtualNumber, VirtualNumberId, VirtualNumberOptions,
    VirtualNumbers,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VirtualNumberJson {
    virtual_number: Option<String>,
    last_use: Option<String>,
    reply_callback_url: Option<String>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VirtualNumbersJsonResponse {
    virtual_numbers: Option<Vec<VirtualNumberJson>>,
    paging: Option<PagingJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientOptoutJson {
    message_id: Option<String>,
    virtual_number: Option<String>,
    optout_number: Option<String>,
    create_timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipientOptoutsJsonResponse {
    recipient_optouts: Option<Vec<RecipientOptoutJson>>,
    paging: Option<PagingJson>,
}

impl TryFrom<VirtualNumberJson> for VirtualNumber {
    type Error = TransportError;

    fn try_from(value: VirtualNumberJson) -> Result<Self, Self::Error> {
        let virtual_number =
            non_empty(value.virtual_number).ok_or(TransportError::MissingField {
                field: VirtualNumberId::FIELD,
            })?;
        Ok(VirtualNumber {
            virtual_number,
            last_use: value.last_use,
            reply_callback_url: value.reply_callback_url,
            tags: value.tags.unwrap_or_default(),
        })
    }
}

/// JSON body for `POST /virtual-numbers` and `PUT /virtual-numbers/{n}`.
pub fn encode_virtual_number_options_json(options: &VirtualNumberOptions) -> Value {
    let mut body = Map::new();
    if let Some(url) = options.reply_callback_url.as_ref() {
        body.insert("replyCallbackUrl".to_owned(), Value::from(url.as_str()));
    }
    if let Some(tags) = options.tags.as_ref() {
        body.insert(Tags::FIELD.to_owned(), tags_json(tags));
    }
    Value::Object(body)
}

pub fn decode_virtual_number_json_response(json: &str) -> Result<VirtualNumber, TransportError> {
    let parsed: VirtualNumberJson = serde_json::from_str(json)?;
    parsed.try_into()
}

pub fn decode_virtual_numbers_json_response(
    json: &str,
) -> Result<VirtualNumbers, TransportError> {
    let parsed: VirtualNumbersJsonResponse = serde_json::from_str(json)?;
    let virtual_numbers = parsed
        .virtual_numbers
        .unwrap_or_default()
        .into_iter()
        .map(VirtualNumber::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VirtualNumbers {
        virtual_numbers,
        paging: parsed.paging.unwrap_or_default().into(),
    })
}

pub fn decode_recipient_optouts_json_response(
    json: &str,
) -> Result<RecipientOptouts, TransportError> {
    let parsed: RecipientOptoutsJsonResponse = serde_json::from_str(json)?;
    Ok(RecipientOptouts {
        recipient_optouts: parsed
            .recipient_optouts
            .unwrap_or_default()
            .into_iter()
            .map(|optout| RecipientOptout {
                message_id: optout.message_id,
                virtual_number: optout.virtual_number,
                optout_number: optout.optout_number,
                create_timestamp: optout.create_timestamp,
            })
            .collect(),
        paging: parsed.paging.unwrap_or_default().into(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::CallbackUrl;

    #[test]
    fn encode_options_omits_unset_fields() {
        assert_eq!(
            encode_virtual_number_options_json(&VirtualNumberOptions::default()),
            json!({})
        );

        let options = VirtualNumberOptions {
            reply_callback_url: Some(CallbackUrl::new("https://example.com/reply").unwrap()),
            tags: Some(Tags::new(["support"]).unwrap()),
        };
        assert_eq!(
            encode_virtual_number_options_json(&options),
            json!({"replyCallbackUrl": "https://example.com/reply", "tags": ["support"]})
        );
    }

    #[test]
    fn decode_virtual_number_record() {
        let json = r#"{"virtualNumber":"0400000001","lastUse":"2024-01-01","tags":["a"]}"#;
        let number = decode_virtual_number_json_response(json).unwrap();
        assert_eq!(number.virtual_number, "0400000001");
        assert_eq!(number.last_use.as_deref(), Some("2024-01-01"));
        assert_eq!(number.reply_callback_url, None);
        assert_eq!(number.tags, vec!["a".to_owned()]);
    }

    #[test]
    fn decode_virtual_number_requires_number() {
        let err = decode_virtual_number_json_response(r#"{"tags":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            TransportError::MissingField {
                field: "virtualNumber"
            }
        ));
    }

    #[test]
    fn decode_virtual_numbers_list() {
        let json = r#"
        {
          "virtualNumbers": [{"virtualNumber": "0400000001"}, {"virtualNumber": "0400000002"}],
          "paging": {"totalCount": 2}
        }
        "#;
        let numbers = decode_virtual_numbers_json_response(json).unwrap();
        assert_eq!(numbers.virtual_numbers.len(), 2);
        assert_eq!(numbers.paging.total_count, 2);
    }

    #[test]
    fn decode_optouts_list() {
        let json = r#"
        {
          "recipientOptouts": [
            {
              "messageId": "m1",
              "virtualNumber": "0400000001",
              "optoutNumber": "0412345678",
              "createTimestamp": "2024-01-01T00:00:00Z"
            }
          ],
          "paging": {"nextPage": ""}
        }
        "#;
        let optouts = decode_recipient_optouts_json_response(json).unwrap();
        assert_eq!(optouts.recipient_optouts.len(), 1);
        assert_eq!(
            optouts.recipient_optouts[0].optout_number.as_deref(),
            Some("0412345678")
        );
        assert_eq!(optouts.paging.next_page, None);
    }
}
