use crate::client::{MessagingClient, MessagingError};
use crate::domain::{Message, MessageId, Messages, PageQuery, SendMessage, Tags};
use crate::http::{Body, Method};

const MESSAGES: &str = "messages";

impl MessagingClient {
    /// Send an SMS or MMS (`POST /messages`).
    ///
    /// Errors:
    /// - [`MessagingError::Credential`] when no token could be obtained,
    /// - [`MessagingError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`MessagingError::Parse`] when the response is not a message record.
    pub async fn send_message(&self, request: SendMessage) -> Result<Message, MessagingError> {
        let url = self.url(&[MESSAGES], &[])?;
        let body = crate::transport::encode_send_message_json(&request);
        let response = self.execute(Method::Post, url, Body::Json(body)).await?;
        Ok(crate::transport::decode_message_json_response(&response.body)?)
    }

    /// Fetch one message and its delivery status (`GET /messages/{id}`).
    pub async fn get_message(&self, message_id: &MessageId) -> Result<Message, MessagingError> {
        let url = self.url(&[MESSAGES, message_id.as_str()], &[])?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_message_json_response(&response.body)?)
    }

    /// List messages, newest first (`GET /messages`).
    pub async fn list_messages(&self, query: PageQuery) -> Result<Messages, MessagingError> {
        let url = self.url(&[MESSAGES], &crate::transport::encode_page_query(&query))?;
        let response = self.execute(Method::Get, url, Body::Empty).await?;
        Ok(crate::transport::decode_messages_json_response(&response.body)?)
    }

    /// Replace a scheduled message (`PUT /messages/{id}`).
    pub async fn update_message(
        &self,
        message_id: &MessageId,
        request: SendMessage,
    ) -> Result<Message, MessagingError> {
        let url = self.url(&[MESSAGES, message_id.as_str()], &[])?;
        let body = crate::transport::encode_send_message_json(&request);
        let response = self.execute(Method::Put, url, Body::Json(body)).await?;
        Ok(crate::transport::decode_message_json_response(&response.body)?)
    }

    /// Replace the tags of a message (`PATCH /messages/{id}`).
    pub async fn update_message_tags(
        &self,
        message_id: &MessageId,
        tags: Tags,
    ) -> Result<(), MessagingError> {
        let url = self.url(&[MESSAGES, message_id.as_str()], &[])?;
        let body = crate::transport::encode_update_tags_json(&tags);
        self.execute(Method::Patch, url, Body::Json(body)).await?;
        Ok(())
    }

    /// Delete a message (`DELETE /messages/{id}`).
    pub async fn delete_message(&self, message_id: &MessageId) -> Result<(), MessagingError> {
        let url = self.url(&[MESSAGES, message_id.as_str()], &[])?;
        self.execute(Method::Delete, url, Body::Empty).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::MessagingError;
    use crate::client::testing::client_with;
    use crate::domain::{
        Limit, MessageContent, MessageId, Offset, PageQuery, PhoneNumber, SendMessage, SenderId,
        Tags,
    };
    use crate::http::{Body, Method};

    const ID: &str = "9b3e1cb0-7a7d-11ee-b962-0242ac120002";

    fn sms() -> SendMessage {
        SendMessage::sms(
            PhoneNumber::new("0412345678").unwrap(),
            SenderId::new("0400000001").unwrap(),
            MessageContent::new("Hello").unwrap(),
        )
    }

    #[tokio::test]
    async fn send_message_posts_json_and_parses_record() {
        let response = r#"{
            "messageId": "9b3e1cb0-7a7d-11ee-b962-0242ac120002",
            "to": "0412345678",
            "from": "0400000001",
            "status": "queued",
            "messageContent": "Hello"
        }"#;
        let (client, transport) = client_with(vec![(201, response)]);

        let message = client.send_message(sms()).await.unwrap();
        assert_eq!(message.message_id(), Some(ID));
        assert_eq!(message.status.as_deref(), Some("queued"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://api.example.test/messaging/v3/messages");
        assert_eq!(
            request.body,
            Body::Json(json!({"to":"0412345678","from":"0400000001","messageContent":"Hello"}))
        );
    }

    #[tokio::test]
    async fn send_message_reports_unparsable_body() {
        let (client, _) = client_with(vec![(201, "accepted")]);
        let err = client.send_message(sms()).await.unwrap_err();
        assert!(matches!(err, MessagingError::Parse(_)));
    }

    #[tokio::test]
    async fn get_message_uses_id_in_path() {
        let (client, transport) =
            client_with(vec![(200, r#"{"messageId":"x","status":"delivered"}"#)]);
        let id = MessageId::new(ID).unwrap();

        let message = client.get_message(&id).await.unwrap();
        assert_eq!(message.status.as_deref(), Some("delivered"));
        assert_eq!(
            transport.last_request().url,
            format!("https://api.example.test/messaging/v3/messages/{ID}")
        );
    }

    #[tokio::test]
    async fn list_messages_sends_paging_query() {
        let (client, transport) =
            client_with(vec![(200, r#"{"messages":[],"paging":{"totalCount":0}}"#)]);
        let query = PageQuery::new(Limit::new(10).unwrap(), Offset::new(20).unwrap());

        let messages = client.list_messages(query).await.unwrap();
        assert!(messages.messages.is_empty());
        assert_eq!(
            transport.last_request().url,
            "https://api.example.test/messaging/v3/messages?limit=10&offset=20"
        );
    }

    #[tokio::test]
    async fn update_message_puts_full_body() {
        let (client, transport) = client_with(vec![(200, r#"{"messageId":"x"}"#)]);
        let id = MessageId::new(ID).unwrap();

        client.update_message(&id, sms()).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert!(request.url.ends_with(ID));
    }

    #[tokio::test]
    async fn update_tags_patches_and_ignores_body() {
        let (client, transport) = client_with(vec![(204, "")]);
        let id = MessageId::new(ID).unwrap();

        client
            .update_message_tags(&id, Tags::new(["a"]).unwrap())
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.body, Body::Json(json!({"tags": ["a"]})));
    }

    #[tokio::test]
    async fn delete_message_maps_not_found() {
        let body = r#"{"errors":[{"code":"NOT_FOUND","suggested_action":"Check the message id"}]}"#;
        let (client, transport) = client_with(vec![(404, body)]);
        let id = MessageId::new(ID).unwrap();

        let err = client.delete_message(&id).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.suggested_actions().as_deref(), Some("Check the message id"));
        assert_eq!(transport.last_request().method, Method::Delete);
        assert_eq!(transport.last_request().body, Body::Empty);
    }
}
