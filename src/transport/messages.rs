use serde::Deserialize;
use serde_json::{Map, Value};

use super::common::{PagingJson, TransportError, tags_json};
use super::flex::{FlexibleU64, OneOrMany};
use crate::domain::{
    Message, MessageContent, MessageOptions, Messages, MultimediaRecord, MultimediaType,
    PhoneNumber, ScheduleSend, SendMessage, SenderId, Tags,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJson {
    message_id: Option<OneOrMany>,
    to: Option<OneOrMany>,
    from: Option<String>,
    status: Option<String>,
    message_content: Option<String>,
    multimedia: Option<Vec<MultimediaJson>>,
    retry_timeout: Option<FlexibleU64>,
    schedule_send: Option<String>,
    delivery_notification: Option<bool>,
    status_callback_url: Option<String>,
    tags: Option<Vec<String>>,
    direction: Option<String>,
    queue_priority: Option<FlexibleU64>,
    create_timestamp: Option<String>,
    sent_timestamp: Option<String>,
    received_timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MultimediaJson {
    #[serde(rename = "type")]
    content_type: String,
    file_name: Option<String>,
    payload: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessagesJsonResponse {
    messages: Option<Vec<MessageJson>>,
    paging: Option<PagingJson>,
}

impl From<MessageJson> for Message {
    fn from(value: MessageJson) -> Self {
        Message {
            message_ids: value.message_id.map(OneOrMany::into_vec).unwrap_or_default(),
            to: value.to.map(OneOrMany::into_vec).unwrap_or_default(),
            from: value.from,
            status: value.status,
            message_content: value.message_content,
            multimedia: value
                .multimedia
                .unwrap_or_default()
                .into_iter()
                .map(|item| MultimediaRecord {
                    content_type: MultimediaType::from(item.content_type.as_str()),
                    file_name: item.file_name,
                    payload: item.payload,
                })
                .collect(),
            retry_timeout: value.retry_timeout.map(FlexibleU64::value),
            schedule_send: value.schedule_send,
            delivery_notification: value.delivery_notification,
            status_callback_url: value.status_callback_url,
            tags: value.tags.unwrap_or_default(),
            direction: value.direction,
            queue_priority: value.queue_priority.map(FlexibleU64::value),
            create_timestamp: value.create_timestamp,
            sent_timestamp: value.sent_timestamp,
            received_timestamp: value.received_timestamp,
        }
    }
}

/// JSON body for `POST /messages` and `PUT /messages/{id}`.
///
/// A single recipient is sent as a string, several as an array.
pub fn encode_send_message_json(request: &SendMessage) -> Value {
    let mut body = Map::new();

    let to = match request.to() {
        [one] => Value::from(one.as_str()),
        many => Value::from(many.iter().map(PhoneNumber::as_str).collect::<Vec<_>>()),
    };
    body.insert(PhoneNumber::FIELD.to_owned(), to);
    body.insert(
        SenderId::FIELD.to_owned(),
        Value::from(request.from().as_str()),
    );
    if let Some(content) = request.content() {
        body.insert(
            MessageContent::FIELD.to_owned(),
            Value::from(content.as_str()),
        );
    }
    if !request.multimedia().is_empty() {
        let items = request
            .multimedia()
            .iter()
            .map(|item| {
                let mut entry = Map::new();
                entry.insert("type".to_owned(), Value::from(item.content_type().as_str()));
                entry.insert("fileName".to_owned(), Value::from(item.file_name()));
                entry.insert("payload".to_owned(), Value::from(item.payload()));
                Value::Object(entry)
            })
            .collect::<Vec<_>>();
        body.insert("multimedia".to_owned(), Value::Array(items));
    }
    push_options(&mut body, request.options());

    Value::Object(body)
}

fn push_options(body: &mut Map<String, Value>, options: &MessageOptions) {
    if let Some(retry_timeout) = options.retry_timeout {
        body.insert("retryTimeout".to_owned(), Value::from(retry_timeout));
    }
    if let Some(schedule_send) = options.schedule_send.as_ref() {
        body.insert(
            ScheduleSend::FIELD.to_owned(),
            Value::from(schedule_send.as_str()),
        );
    }
    if let Some(delivery_notification) = options.delivery_notification {
        body.insert(
            "deliveryNotification".to_owned(),
            Value::from(delivery_notification),
        );
    }
    if let Some(url) = options.status_callback_url.as_ref() {
        body.insert("statusCallbackUrl".to_owned(), Value::from(url.as_str()));
    }
    if let Some(tags) = options.tags.as_ref() {
        body.insert(Tags::FIELD.to_owned(), tags_json(tags));
    }
}

/// JSON body for `PATCH /messages/{id}`.
pub fn encode_update_tags_json(tags: &Tags) -> Value {
    let mut body = Map::new();
    body.insert(Tags::FIELD.to_owned(), tags_json(tags));
    Value::Object(body)
}

pub fn decode_message_json_response(json: &str) -> Result<Message, TransportError> {
    let parsed: MessageJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}

pub fn decode_messages_json_response(json: &str) -> Result<Messages, TransportError> {
    let parsed: MessagesJsonResponse = serde_json::from_str(json)?;
    Ok(Messages {
        messages: parsed
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(Message::from)
            .collect(),
        paging: parsed.paging.unwrap_or_default().into(),
    })
}
